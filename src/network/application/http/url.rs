//! Absolute URL decomposition.
//!
//! Only what an HTTP/1.0 request needs is extracted: scheme, host, port,
//! path and query. User info and IPv6 literals are not supported.

use super::error::UrlError;
use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

/// Supported URL schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plain `http`, default port 80.
    Http,
    /// TLS-wrapped `https`, default port 443.
    Https,
}

impl Scheme {
    /// Lowercase scheme name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Port used when the URL does not name one.
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    /// Whether connections for this scheme are wrapped in TLS.
    pub fn is_tls(&self) -> bool {
        matches!(self, Scheme::Https)
    }

    fn from_name(name: &str) -> Result<Self, UrlError> {
        if name.eq_ignore_ascii_case("http") {
            Ok(Scheme::Http)
        } else if name.eq_ignore_ascii_case("https") {
            Ok(Scheme::Https)
        } else {
            Err(UrlError::UnsupportedScheme)
        }
    }
}

/// The parts of an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Scheme, matched case-insensitively.
    pub scheme: Scheme,
    /// Host name without the port.
    pub host: String,
    /// Explicit port, or the scheme default.
    pub port: u16,
    /// Path, always starting with `/`.
    pub path: String,
    /// Query string without the leading `?`; empty when absent.
    pub query: String,
}

impl ParsedUrl {
    /// Parses an absolute `http` or `https` URL.
    ///
    /// ```rust
    /// use microreq::network::application::http::{ParsedUrl, Scheme};
    ///
    /// let url = ParsedUrl::parse("http://example.com/a/b?x=1")?;
    /// assert_eq!(url.scheme, Scheme::Http);
    /// assert_eq!(url.host, "example.com");
    /// assert_eq!(url.port, 80);
    /// assert_eq!(url.path, "/a/b");
    /// assert_eq!(url.query, "x=1");
    /// # Ok::<(), microreq::network::application::http::UrlError>(())
    /// ```
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let (scheme, rest) = url.split_once("://").ok_or(UrlError::MissingScheme)?;
        let scheme = Scheme::from_name(scheme)?;

        // The authority ends at the first `/`, or at a `?` that comes before
        // any `/`.
        let (authority, tail) = match rest.find(['/', '?']) {
            Some(i) if rest.as_bytes()[i] == b'/' => (&rest[..i], Some(&rest[i + 1..])),
            Some(i) => (&rest[..i], Some(&rest[i..])),
            None => (rest, None),
        };

        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => (
                host,
                port.parse::<u16>().map_err(|_| UrlError::InvalidPort)?,
            ),
            None => (authority, scheme.default_port()),
        };
        if host.is_empty() {
            return Err(UrlError::EmptyHost);
        }

        let (path, query) = match tail {
            None => ("/".to_string(), String::new()),
            Some(tail) => {
                let path = format!("/{}", tail);
                if path.matches('?').count() > 1 {
                    return Err(UrlError::TooManyQueryMarks);
                }
                match path.split_once('?') {
                    Some((p, q)) => (p.to_string(), q.to_string()),
                    None => (path, String::new()),
                }
            }
        };

        Ok(Self {
            scheme,
            host: host.to_string(),
            port,
            path,
            query,
        })
    }

    /// `host`, or `host:port` when the port is not the scheme default.
    pub fn authority(&self) -> String {
        if self.port == self.scheme.default_port() {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Path plus `?query` when a query is present.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    /// Resolves a redirect `Location` against this URL.
    ///
    /// Absolute locations (containing `://`) are returned unchanged. Anything
    /// else keeps this URL's scheme and authority and replaces the path and
    /// query.
    pub fn join(&self, location: &str) -> String {
        if location.contains("://") {
            location.to_string()
        } else if location.starts_with('/') {
            format!("{}://{}{}", self.scheme.as_str(), self.authority(), location)
        } else {
            format!("{}://{}/{}", self.scheme.as_str(), self.authority(), location)
        }
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}{}",
            self.scheme.as_str(),
            self.authority(),
            self.target()
        )
    }
}

impl core::str::FromStr for ParsedUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
