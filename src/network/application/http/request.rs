//! Request description and HTTP/1.0 wire encoding.

use super::error::UrlError;
use super::map::{Cookies, Headers};
use super::percent;
use super::query::{Query, Value};
use super::url::ParsedUrl;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use base64ct::{Base64, Encoding};
use core::fmt::Write;

const CRLF: &[u8] = b"\r\n";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

impl Method {
    /// The method token as sent on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

/// Request authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Auth {
    /// No `Authorization` header.
    #[default]
    None,
    /// `Authorization: Basic base64(username:password)`.
    Basic {
        /// User name.
        username: String,
        /// Password.
        password: String,
    },
}

/// Request payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Body {
    /// No body.
    #[default]
    Empty,
    /// Sent as-is.
    Raw(Vec<u8>),
    /// Form-urlencoded before sending.
    Form(Query),
}

impl Body {
    /// `false` for [`Body::Empty`] and for empty raw or form payloads, which
    /// are not written at all.
    pub fn is_present(&self) -> bool {
        match self {
            Body::Empty => false,
            Body::Raw(bytes) => !bytes.is_empty(),
            Body::Form(query) => !query.is_empty(),
        }
    }
}

/// Optional request parameters.
///
/// [`RequestOptions::default`] is a fresh set of empty containers, so nothing
/// carries over from one request to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Appended to the request target as `?` plus the encoded query.
    pub query: Query,
    /// Sent after `Host`, in insertion order.
    pub headers: Headers,
    /// Sent as one `Cookie: name=value` header each, values plus-encoded.
    pub cookies: Cookies,
    /// Authentication.
    pub auth: Auth,
    /// Payload.
    pub body: Body,
    /// Overrides the client's configured timeout.
    pub timeout_seconds: Option<u32>,
}

impl RequestOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.push(key, value);
        self
    }

    /// Sets a header, replacing an earlier value for the same key.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Sets a cookie.
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name, value);
        self
    }

    /// Uses HTTP Basic authentication.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Auth::Basic {
            username: username.into(),
            password: password.into(),
        };
        self
    }

    /// Sends `form` as an `application/x-www-form-urlencoded` body.
    pub fn form(mut self, form: Query) -> Self {
        self.body = Body::Form(form);
        self
    }

    /// Sends `body` unmodified.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Body::Raw(body.into());
        self
    }

    /// Sets the timeout for this request.
    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

/// A fully specified request, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    url: ParsedUrl,
    options: RequestOptions,
}

impl Request {
    /// Parses `url` and binds it to `method` and `options`.
    pub fn new(method: Method, url: &str, options: RequestOptions) -> Result<Self, UrlError> {
        Ok(Self::from_parts(method, ParsedUrl::parse(url)?, options))
    }

    /// Builds a request from an already parsed URL.
    pub fn from_parts(method: Method, url: ParsedUrl, options: RequestOptions) -> Self {
        Self {
            method,
            url,
            options,
        }
    }

    /// The request method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The target URL.
    pub fn url(&self) -> &ParsedUrl {
        &self.url
    }

    /// The optional parameters.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Request target: URL path and query, then `?` and the encoded query
    /// parameters when there are any.
    pub fn target(&self) -> String {
        let mut target = self.url.target();
        if !self.options.query.is_empty() {
            target.push('?');
            target.push_str(&self.options.query.encode());
        }
        target
    }

    /// Encodes the request for a single send.
    ///
    /// The layout is the request line, `Host`, user headers (with
    /// `Authorization` set in place when Basic auth is used), one `Cookie`
    /// header per cookie, then for a body `Content-Type` (forms only, unless
    /// already set), `Content-Length`, a blank line, the body and a CRLF.
    /// A final CRLF always closes the message, so a request with a body ends
    /// in `body\r\n\r\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf: Vec<u8> = Vec::with_capacity(256);

        // Request line
        buf.extend_from_slice(self.method.as_str().as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(self.target().as_bytes());
        buf.extend_from_slice(b" HTTP/1.0\r\n");

        // Headers
        put_header(&mut buf, "Host", &self.url.host);

        let mut headers = self.options.headers.clone();
        if let Auth::Basic { username, password } = &self.options.auth {
            let credentials = format!("{}:{}", username, password);
            headers.insert(
                "Authorization",
                format!("Basic {}", Base64::encode_string(credentials.as_bytes())),
            );
        }
        for (name, value) in headers.iter() {
            put_header(&mut buf, name, value);
        }

        for (name, value) in self.options.cookies.iter() {
            buf.extend_from_slice(b"Cookie: ");
            buf.extend_from_slice(name.as_bytes());
            buf.push(b'=');
            buf.extend_from_slice(percent::encode_plus(value).as_bytes());
            buf.extend_from_slice(CRLF);
        }

        // Body
        if self.options.body.is_present() {
            match &self.options.body {
                Body::Form(form) => {
                    let has_content_type = headers
                        .get_ignore_case("Content-Type")
                        .is_some_and(|v| !v.is_empty());
                    if !has_content_type {
                        put_header(&mut buf, "Content-Type", FORM_CONTENT_TYPE);
                    }
                    put_body(&mut buf, form.encode().as_bytes());
                }
                Body::Raw(bytes) => put_body(&mut buf, bytes),
                Body::Empty => {}
            }
        }

        buf.extend_from_slice(CRLF);
        buf
    }
}

fn put_header(buf: &mut Vec<u8>, name: &str, value: &str) {
    buf.extend_from_slice(name.as_bytes());
    buf.extend_from_slice(b": ");
    buf.extend_from_slice(value.as_bytes());
    buf.extend_from_slice(CRLF);
}

fn put_body(buf: &mut Vec<u8>, body: &[u8]) {
    let mut len_str: heapless::String<20> = heapless::String::new();
    // usize::MAX has 20 digits.
    let _ = write!(len_str, "{}", body.len());
    put_header(buf, "Content-Length", &len_str);
    buf.extend_from_slice(CRLF);
    buf.extend_from_slice(body);
    buf.extend_from_slice(CRLF);
}
