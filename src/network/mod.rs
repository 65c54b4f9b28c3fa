//! A network abstraction layer for embedded systems
//!
//! This module defines the transport traits the HTTP client is written
//! against. Platforms provide a [`Connect`] implementation that opens a
//! [`Connection`] (plain TCP or TLS-wrapped) to a [`Remote`]; the client owns
//! the connection for exactly one request/response cycle and closes it.
//!

#![allow(missing_docs)]
#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// `std::net` transport
#[cfg(feature = "std")]
pub mod tcp;

/// Protocol-specific client implementations
pub mod application;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Remote, Write};
}

pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection.
    ///
    /// Returning `Ok(0)` signals that the peer closed the stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// Where and how to open a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remote<'a> {
    /// Host name or address literal.
    pub host: &'a str,
    /// TCP port.
    pub port: u16,
    /// Whether the connection must be wrapped in TLS.
    pub tls: bool,
    /// Bounds the connect and every blocking read. `0` means no timeout.
    pub timeout_seconds: u32,
}

/// A synchronous connector (client)
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection
    fn connect(&mut self, remote: &Remote<'_>) -> Result<Self::Connection, Self::Error>;
}
