//! HTTP/1.0 protocol implementation for embedded systems.
//!
//! This module provides a small HTTP client for devices that cannot carry a
//! full HTTP stack. Each call opens one connection, sends one request, reads
//! the response until the server closes the stream and parses it in memory.
//!
//! # Features
//!
//! - HTTP/1.0 request encoding with `Host`, custom headers and cookies
//! - Query parameters and form bodies (`application/x-www-form-urlencoded`)
//! - Raw bodies with `Content-Length`
//! - HTTP Basic authentication
//! - Following up to four `301`/`302` redirects by default
//! - JSON bodies through `serde-json-core`
//!
//! There is no connection reuse, chunked transfer decoding or compression.
//!
//! # Usage
//!
//! The main entry point is the [`Client`], which works with any connector
//! implementing [`crate::network::Connect`].
//!
//! ```rust,no_run
//! use microreq::network::application::http::{Client, Query, RequestOptions};
//! # use microreq::network::{Close, Connect, Connection, Read, Remote, Write};
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Read for MockConnection {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockNetwork;
//! # impl Connect for MockNetwork {
//! #     type Connection = MockConnection;
//! #     type Error = ();
//! #     fn connect(&mut self, _remote: &Remote<'_>) -> Result<MockConnection, ()> { Ok(MockConnection) }
//! # }
//!
//! let mut client = Client::new(MockNetwork);
//!
//! let form = Query::new().with("temperature", "23.5").with("unit", "C");
//! let options = RequestOptions::new()
//!     .basic_auth("device", "secret")
//!     .cookie("session", "abc123")
//!     .form(form);
//!
//! let response = client.post("http://example.com/api/readings", options)?;
//! println!("{} {}", response.status_code(), response.text());
//! # Ok::<(), microreq::network::application::http::Error<()>>(())
//! ```

/// Redirect-following client and its configuration.
pub mod client;

/// Error types.
pub mod error;

mod map;

/// Percent-encoding and decoding.
pub mod percent;

/// Form-urlencoded query strings and bodies.
pub mod query;

/// Request description and encoding.
pub mod request;

/// Response parsing.
pub mod response;

/// URL parsing.
pub mod url;

pub use client::{Client, Config};
pub use error::{Error, UrlError};
pub use map::{Cookies, Headers, OrderedMap};
pub use query::{Query, Value};
pub use request::{Auth, Body, Method, Request, RequestOptions};
pub use response::Response;
pub use url::{ParsedUrl, Scheme};
