//! # Application Layer Network Protocols
//!
//! Application layer (OSI Layer 7) protocols built on the core network
//! traits. Every client here is connection agnostic: it works with any type
//! implementing [`Connect`](crate::network::Connect).
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.0 client with form encoding, cookies, Basic auth
//!   and bounded redirect following
//!
//! ## Usage Pattern
//!
//! 1. Implement [`Connect`](crate::network::Connect) for your transport
//! 2. Wrap it with the protocol client
//! 3. Use protocol-specific methods for communication

/// HTTP/1.0 client implementation.
///
/// Provides URL parsing, percent and form encoding, request building,
/// response parsing and a redirect-following client.
pub mod http;
