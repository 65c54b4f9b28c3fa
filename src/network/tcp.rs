//! Plain TCP transport over `std::net`.
//!
//! Useful on Linux-class devices and in tests. TLS is not provided here; a
//! [`Remote`] asking for TLS is rejected with [`Error::TlsUnsupported`] and
//! callers that need `https` supply their own [`Connect`] implementation.

use super::error::Error;
use super::{Close, Connect, Connection, Read, Remote, Write};
use std::io::{self, ErrorKind, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Opens [`TcpConnection`]s with `std::net::TcpStream`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl TcpConnector {
    /// Creates a new connector.
    pub fn new() -> Self {
        Self
    }
}

/// A connected TCP stream.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// Wraps an already connected stream.
    pub fn from_stream(stream: TcpStream) -> Self {
        Self { stream }
    }
}

fn map_io(e: io::Error, fallback: Error) -> Error {
    match e.kind() {
        ErrorKind::WouldBlock | ErrorKind::TimedOut => Error::Timeout,
        ErrorKind::ConnectionRefused => Error::ConnectionRefused,
        ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::BrokenPipe => {
            Error::ConnectionClosed
        }
        ErrorKind::NotConnected => Error::NotOpen,
        _ => fallback,
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, remote: &Remote<'_>) -> Result<Self::Connection, Self::Error> {
        if remote.tls {
            return Err(Error::TlsUnsupported);
        }

        let timeout = match remote.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(u64::from(secs))),
        };

        let addrs = (remote.host, remote.port)
            .to_socket_addrs()
            .map_err(|_| Error::InvalidAddress)?;

        let mut last_error = Error::InvalidAddress;
        for addr in addrs {
            let attempt = match timeout {
                Some(t) => TcpStream::connect_timeout(&addr, t),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => {
                    stream
                        .set_read_timeout(timeout)
                        .map_err(|e| map_io(e, Error::ProtocolError))?;
                    stream
                        .set_write_timeout(timeout)
                        .map_err(|e| map_io(e, Error::ProtocolError))?;
                    log::debug!("connected to {}", addr);
                    return Ok(TcpConnection { stream });
                }
                Err(e) => last_error = map_io(e, Error::ConnectionRefused),
            }
        }
        Err(last_error)
    }
}

impl Read for TcpConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.stream
            .read(buf)
            .map_err(|e| map_io(e, Error::ReadError))
    }
}

impl Write for TcpConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream
            .write(buf)
            .map_err(|e| map_io(e, Error::WriteError))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream
            .flush()
            .map_err(|e| map_io(e, Error::WriteError))
    }
}

impl Close for TcpConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        match self.stream.shutdown(Shutdown::Both) {
            // The peer already closed its side, which is the normal end of an
            // HTTP/1.0 response.
            Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
            other => other.map_err(|e| map_io(e, Error::ProtocolError)),
        }
    }
}

impl Connection for TcpConnection {}
