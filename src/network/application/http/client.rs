//! Redirect-following HTTP/1.0 client.
//!
//! Every request/response cycle opens one connection through the client's
//! [`Connect`] implementation, writes the encoded request, reads until the
//! peer closes the stream, closes the connection and parses what was read.
//! `301` and `302` responses are followed up to [`Config::max_attempts`]
//! cycles in total; when the budget runs out the last response is returned
//! as-is, even if it is itself a redirect.

use super::error::Error;
use super::request::{Method, Request, RequestOptions};
use super::response::Response;
use super::url::ParsedUrl;
use crate::network::{Close, Connect, Read, Remote, Write};
use alloc::vec::Vec;

const RECV_CHUNK: usize = 1024;

/// Client configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Timeout passed to the connector when a request does not set one.
    pub timeout_seconds: u32,
    /// Request/response cycles allowed per call, redirects included. Values
    /// below 1 are treated as 1.
    pub max_attempts: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: 5,
            max_attempts: 4,
        }
    }
}

/// An HTTP/1.0 client over any [`Connect`] implementation.
#[derive(Debug)]
pub struct Client<N: Connect> {
    network: N,
    config: Config,
}

impl<N> Client<N>
where
    N: Connect,
    N::Connection: Read<Error = N::Error> + Write<Error = N::Error> + Close<Error = N::Error>,
{
    /// Creates a client with the default [`Config`].
    pub fn new(network: N) -> Self {
        Self::with_config(network, Config::default())
    }

    /// Creates a client with an explicit configuration.
    pub fn with_config(network: N, config: Config) -> Self {
        Self { network, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives back the connector.
    pub fn into_inner(self) -> N {
        self.network
    }

    /// Sends `method` to `url` and follows redirects.
    pub fn request(
        &mut self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, Error<N::Error>> {
        let request = Request::new(method, url, options)?;
        self.send(&request)
    }

    /// `GET` request.
    pub fn get(&mut self, url: &str, options: RequestOptions) -> Result<Response, Error<N::Error>> {
        self.request(Method::Get, url, options)
    }

    /// `POST` request.
    pub fn post(
        &mut self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, Error<N::Error>> {
        self.request(Method::Post, url, options)
    }

    /// `PUT` request.
    pub fn put(&mut self, url: &str, options: RequestOptions) -> Result<Response, Error<N::Error>> {
        self.request(Method::Put, url, options)
    }

    /// `DELETE` request.
    pub fn delete(
        &mut self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, Error<N::Error>> {
        self.request(Method::Delete, url, options)
    }

    /// `HEAD` request.
    pub fn head(
        &mut self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, Error<N::Error>> {
        self.request(Method::Head, url, options)
    }

    /// `OPTIONS` request.
    pub fn options(
        &mut self,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, Error<N::Error>> {
        self.request(Method::Options, url, options)
    }

    /// Sends a prepared request and follows redirects.
    ///
    /// Relative `Location` values are resolved against the scheme and
    /// authority of the *first* URL, not the latest hop. Follow-up requests
    /// are plain `GET`s that carry only the timeout of the original request.
    pub fn send(&mut self, request: &Request) -> Result<Response, Error<N::Error>> {
        let timeout = request
            .options()
            .timeout_seconds
            .unwrap_or(self.config.timeout_seconds);
        let origin = request.url();
        let max_attempts = self.config.max_attempts.max(1);

        let mut attempts = 0;
        let mut next: Option<Request> = None;
        let mut response = Response::default();

        while attempts < max_attempts {
            attempts += 1;
            response = self.exchange(next.as_ref().unwrap_or(request), timeout)?;

            if !response.is_redirect() {
                return Ok(response);
            }

            let location = match redirect_location(&response) {
                Some(location) => location,
                None => return Err(Error::RedirectWithoutLocation),
            };
            // No next hop to issue, so the location is not resolved.
            if attempts == max_attempts {
                break;
            }
            let target = origin.join(location);
            log::debug!(
                "{} redirect {}/{} to {}",
                response.status_code(),
                attempts,
                max_attempts,
                target
            );

            let url = ParsedUrl::parse(&target)?;
            let options = RequestOptions {
                timeout_seconds: Some(timeout),
                ..RequestOptions::default()
            };
            next = Some(Request::from_parts(Method::Get, url, options));
        }

        log::debug!("redirect limit reached after {} attempts", attempts);
        Ok(response)
    }

    /// One full cycle: connect, send, read to end of stream, close, parse.
    fn exchange(&mut self, request: &Request, timeout: u32) -> Result<Response, Error<N::Error>> {
        let url = request.url();
        let remote = Remote {
            host: &url.host,
            port: url.port,
            tls: url.scheme.is_tls(),
            timeout_seconds: timeout,
        };
        log::debug!("{} {}", request.method().as_str(), url);

        let mut connection = self.network.connect(&remote).map_err(Error::Connection)?;
        let outcome = transfer(&mut connection, &request.to_bytes());

        // Closed on every path, including a failed transfer.
        let closed = connection.close();
        let raw = outcome?;
        if let Err(e) = closed {
            log::warn!("closing connection to {} failed: {:?}", url.host, e);
        }

        log::trace!("received {} bytes from {}", raw.len(), url.host);
        Ok(Response::from_bytes(&raw))
    }
}

/// Writes all of `bytes`, then reads until the peer closes the stream.
///
/// A write that accepts nothing before the request is complete fails with
/// [`Error::RequestTruncated`].
fn transfer<C, E>(connection: &mut C, bytes: &[u8]) -> Result<Vec<u8>, Error<E>>
where
    C: Read<Error = E> + Write<Error = E>,
{
    let mut written = 0;
    while written < bytes.len() {
        match connection.write(&bytes[written..]).map_err(Error::Connection)? {
            0 => {
                log::warn!("write stalled after {} of {} bytes", written, bytes.len());
                return Err(Error::RequestTruncated);
            }
            n => written += n,
        }
    }
    connection.flush().map_err(Error::Connection)?;
    log::trace!("sent {} bytes", written);

    let mut raw = Vec::new();
    let mut chunk = [0u8; RECV_CHUNK];
    loop {
        match connection.read(&mut chunk).map_err(Error::Connection)? {
            0 => break,
            n => raw.extend_from_slice(&chunk[..n]),
        }
    }
    Ok(raw)
}

/// The `Location` of a redirect, matched case-sensitively first. Empty values
/// count as missing.
fn redirect_location(response: &Response) -> Option<&str> {
    response
        .header("Location")
        .or_else(|| response.headers().get_ignore_case("Location"))
        .filter(|location| !location.is_empty())
}

#[cfg(feature = "std")]
impl Client<crate::network::tcp::TcpConnector> {
    /// A client over plain `std::net` TCP.
    pub fn tcp() -> Self {
        Self::new(crate::network::tcp::TcpConnector::new())
    }
}
