//! Percent-encoding over the RFC 3986 unreserved set.
//!
//! Every byte outside `A-Z a-z 0-9 _ . -` is written as `%` followed by its
//! lowercase hex value *without* zero padding, so `0x0a` becomes `%a` rather
//! than `%0A`. This keeps the wire format of the devices this client talks
//! to. [`decode`] reads one or two hex digits after each `%`, which means a
//! single-digit escape directly followed by a hex-digit character does not
//! round-trip.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

/// Returns `true` for bytes that are emitted literally by [`encode`].
pub fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'-')
}

fn encode_into(out: &mut String, s: &str, plus_for_space: bool) {
    for &byte in s.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else if plus_for_space && byte == b' ' {
            out.push('+');
        } else {
            let mut escape: heapless::String<3> = heapless::String::new();
            // Three bytes always fit "%ff".
            let _ = write!(escape, "%{:x}", byte);
            out.push_str(&escape);
        }
    }
}

/// Percent-encodes every byte of `s` outside the unreserved set.
///
/// ```rust
/// use microreq::network::application::http::percent;
///
/// assert_eq!(percent::encode("a b/c"), "a%20b%2fc");
/// assert_eq!(percent::encode("\n"), "%a");
/// ```
pub fn encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    encode_into(&mut out, s, false);
    out
}

/// Like [`encode`], but spaces become `+` instead of `%20`.
///
/// A literal `+` in the input is escaped as `%2b`, so [`decode_plus`] can
/// tell the two apart.
pub fn encode_plus(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    encode_into(&mut out, s, true);
    out
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Reads the escape at the start of `segment`: two hex digits, or one when
/// the segment is a single character long.
fn leading_escape(segment: &[u8]) -> Option<(u8, usize)> {
    match segment {
        [hi, lo, ..] => Some((hex_value(*hi)? << 4 | hex_value(*lo)?, 2)),
        [single] => Some((hex_value(*single)?, 1)),
        [] => None,
    }
}

/// Decodes percent escapes in `s`.
///
/// Never fails: a `%` that is not followed by valid hex is kept as literal
/// text together with whatever follows it. Decoded bytes that do not form
/// valid UTF-8 are replaced with `U+FFFD`.
///
/// ```rust
/// use microreq::network::application::http::percent;
///
/// assert_eq!(percent::decode("a%20b"), "a b");
/// assert_eq!(percent::decode("100%sure"), "100%sure");
/// ```
pub fn decode(s: &str) -> String {
    let mut bytes: Vec<u8> = Vec::with_capacity(s.len());
    let mut segments = s.split('%');
    if let Some(first) = segments.next() {
        bytes.extend_from_slice(first.as_bytes());
    }
    for segment in segments {
        let raw = segment.as_bytes();
        match leading_escape(raw) {
            Some((byte, used)) => {
                bytes.push(byte);
                bytes.extend_from_slice(&raw[used..]);
            }
            None => {
                bytes.push(b'%');
                bytes.extend_from_slice(raw);
            }
        }
    }
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Replaces `+` with a space, then [`decode`]s.
pub fn decode_plus(s: &str) -> String {
    decode(&s.replace('+', " "))
}
