//! # microreq - minimal HTTP/1.0 client
//!
//! A small HTTP/1.0 client for devices that cannot afford a full HTTP stack.
//! Given a URL and request parameters it opens a plain or encrypted connection
//! through a caller-supplied transport, sends one well-formed request, reads
//! the whole response into memory and parses it, following a bounded number
//! of `301`/`302` redirects.
//!
//! The crate is `no_std` (it needs `alloc`) and transport agnostic: anything
//! that implements [`network::Connect`] can carry requests, whether that is a
//! `smoltcp` socket on a microcontroller, a TLS session from a vendor SDK or
//! `std::net::TcpStream` on Linux.
//!
//! ## Features
//!
//! - **Percent codec**: RFC 3986 unreserved-set encoding with a form-style
//!   `+`-for-space variant and a forgiving decoder
//! - **Query codec**: `application/x-www-form-urlencoded` building and parsing
//! - **URL parsing**: scheme, host, port, path and query decomposition
//! - **Request building**: request line, `Host`, user headers, cookies,
//!   Basic auth and form or raw bodies
//! - **Response parsing**: status line, headers and body from raw bytes
//! - **Redirects**: bounded following of `301`/`302` with relative `Location`
//!   resolution
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! microreq = "0.1.0"
//! ```
//!
//! ### Basic request example
//!
//! ```rust,no_run
//! use microreq::network::application::http::{Client, RequestOptions};
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
//! let options = RequestOptions::new()
//!     .query("device", "sensor-01")
//!     .header("Accept", "application/json");
//!
//! let response = client.get("http://example.com/api/status", options)?;
//! if response.status_code() == 200 {
//!     let _text = response.text();
//! }
//! # Ok::<(), microreq::network::application::http::Error<()>>(())
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable the `std::net` TCP transport and `std::error::Error` impls
//! - `defmt`: Enable defmt formatting of error types for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

/// Network abstraction layer: transport traits and the HTTP protocol engine.
///
/// The transport traits describe what the client needs from a connection;
/// the [`network::application::http`] module builds requests, parses responses
/// and drives redirects on top of them.
pub mod network;
