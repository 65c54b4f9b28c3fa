//! HTTP client error types

use core::fmt;

/// Why a URL could not be parsed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UrlError {
    /// No `scheme://` separator.
    MissingScheme,
    /// Scheme other than `http` or `https`.
    UnsupportedScheme,
    /// Nothing between `://` and the path.
    EmptyHost,
    /// Port is not a number in `0..=65535`.
    InvalidPort,
    /// More than one `?` after the host.
    TooManyQueryMarks,
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UrlError::MissingScheme => "missing scheme separator",
            UrlError::UnsupportedScheme => "unsupported scheme",
            UrlError::EmptyHost => "empty host",
            UrlError::InvalidPort => "invalid port",
            UrlError::TooManyQueryMarks => "too many '?' in path",
        };
        write!(f, "malformed URL: {}", text)
    }
}

/// Errors returned by [`Client`](super::Client).
///
/// `E` is the error type of the [`Connect`](crate::network::Connect)
/// implementation in use; transport failures (resolution, connect, TLS,
/// timeouts, reads and writes) are passed through unchanged.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error<E> {
    /// The request or redirect URL could not be parsed.
    MalformedUrl(UrlError),
    /// A `301`/`302` response had no usable `Location` header.
    RedirectWithoutLocation,
    /// The connection stopped accepting bytes before the whole request was
    /// written.
    RequestTruncated,
    /// The transport failed.
    Connection(E),
}

impl<E> From<UrlError> for Error<E> {
    fn from(e: UrlError) -> Self {
        Error::MalformedUrl(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedUrl(e) => fmt::Display::fmt(e, f),
            Error::RedirectWithoutLocation => {
                f.write_str("redirect response without a Location header")
            }
            Error::RequestTruncated => f.write_str("connection accepted only part of the request"),
            Error::Connection(e) => write!(f, "connection error: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UrlError {}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl defmt::Format for UrlError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            UrlError::MissingScheme => defmt::write!(f, "MissingScheme"),
            UrlError::UnsupportedScheme => defmt::write!(f, "UnsupportedScheme"),
            UrlError::EmptyHost => defmt::write!(f, "EmptyHost"),
            UrlError::InvalidPort => defmt::write!(f, "InvalidPort"),
            UrlError::TooManyQueryMarks => defmt::write!(f, "TooManyQueryMarks"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::MalformedUrl(e) => defmt::write!(f, "MalformedUrl({})", e),
            Error::RedirectWithoutLocation => defmt::write!(f, "RedirectWithoutLocation"),
            Error::RequestTruncated => defmt::write!(f, "RequestTruncated"),
            Error::Connection(e) => defmt::write!(f, "Connection({})", e),
        }
    }
}
