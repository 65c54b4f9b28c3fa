use super::map::Headers;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// A parsed HTTP response.
///
/// Built once from everything read off a single connection and never
/// modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    status_code: u16,
    headers: Headers,
    body: String,
}

impl Response {
    /// Parses the complete text of a response.
    ///
    /// Lines are split on CRLF and trimmed. A line starting with `HTTP` is the
    /// status line and its second space-separated token the status code; a
    /// line containing `:` is a header split on the first `:` with the value
    /// trimmed, a repeated key overwriting the earlier value. The first empty
    /// line ends the headers and everything after it, re-joined with CRLF, is
    /// the body. Other lines in the head are ignored.
    ///
    /// This never fails. Without a usable status line the status code stays
    /// `0`, which callers should treat as a failed fetch.
    ///
    /// ```rust
    /// use microreq::network::application::http::Response;
    ///
    /// let response = Response::parse("HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
    /// assert_eq!(response.status_code(), 200);
    /// assert_eq!(response.header("Content-Type"), Some("text/plain"));
    /// assert_eq!(response.text(), "hello");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut status_code = 0;
        let mut headers = Headers::new();
        let mut body = String::new();

        let mut lines = raw.split("\r\n");
        while let Some(line) = lines.next() {
            let line = line.trim();
            if line.is_empty() {
                body = lines.collect::<Vec<_>>().join("\r\n");
                break;
            }
            if line.starts_with("HTTP") {
                if let Some(code) = line.split(' ').nth(1).and_then(|c| c.parse().ok()) {
                    status_code = code;
                }
                continue;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name, value.trim());
            }
        }

        Self {
            status_code,
            headers,
            body,
        }
    }

    /// Decodes raw bytes as UTF-8 (invalid sequences replaced) and parses
    /// them with [`Response::parse`].
    pub fn from_bytes(raw: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(raw))
    }

    /// Status code, `0` when no status line was seen.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// `true` for `301` and `302`.
    pub fn is_redirect(&self) -> bool {
        matches!(self.status_code, 301 | 302)
    }

    /// Header value by exact, case-sensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// All headers, keys as received.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consumes the response, returning the body.
    pub fn into_text(self) -> String {
        self.body
    }

    /// Deserializes the body as JSON.
    ///
    /// Uses `serde-json-core`, so borrowed `&str` fields must not contain
    /// escape sequences.
    pub fn json<'a, T: Deserialize<'a>>(&'a self) -> Result<T, serde_json_core::de::Error> {
        serde_json_core::from_str(&self.body).map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_response() {
        let response =
            Response::parse("HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.text(), "hello");
    }

    #[test]
    fn test_header_value_keeps_extra_colons() {
        let response = Response::parse(
            "HTTP/1.0 302 Found\r\nLocation:  http://example.com:8080/x \r\n\r\n",
        );
        assert_eq!(response.header("Location"), Some("http://example.com:8080/x"));
        assert!(response.is_redirect());
    }

    #[test]
    fn test_duplicate_headers_last_wins() {
        let response =
            Response::parse("HTTP/1.0 200 OK\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\n\r\n");
        assert_eq!(response.header("Set-Cookie"), Some("b=2"));
        assert_eq!(response.headers().len(), 1);
    }

    #[test]
    fn test_header_names_keep_case() {
        let response = Response::parse("HTTP/1.0 200 OK\r\ncontent-length: 0\r\n\r\n");
        assert_eq!(response.header("content-length"), Some("0"));
        assert_eq!(response.header("Content-Length"), None);
        assert_eq!(response.headers().get_ignore_case("Content-Length"), Some("0"));
    }

    #[test]
    fn test_body_keeps_crlf_and_blank_lines() {
        let response = Response::parse("HTTP/1.0 200 OK\r\n\r\nline 1\r\n\r\nline 3\r\n");
        assert_eq!(response.text(), "line 1\r\n\r\nline 3\r\n");
    }

    #[test]
    fn test_missing_status_line_leaves_zero() {
        let response = Response::parse("Server: x\r\n\r\nbody");
        assert_eq!(response.status_code(), 0);
        assert_eq!(response.header("Server"), Some("x"));
        assert_eq!(response.text(), "body");

        assert_eq!(Response::parse("").status_code(), 0);
        assert_eq!(Response::parse("HTTP/1.0\r\n\r\n").status_code(), 0);
        assert_eq!(Response::parse("HTTP/1.0 abc\r\n\r\n").status_code(), 0);
    }

    #[test]
    fn test_no_blank_line_means_empty_body() {
        let response = Response::parse("HTTP/1.0 204 No Content\r\nServer: x");
        assert_eq!(response.status_code(), 204);
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_from_bytes_replaces_invalid_utf8() {
        let response = Response::from_bytes(b"HTTP/1.0 200 OK\r\n\r\n\xffok");
        assert_eq!(response.text(), "\u{fffd}ok");
    }

    #[test]
    fn test_json_body() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Reading<'a> {
            sensor: &'a str,
            value: i32,
        }

        let response =
            Response::parse("HTTP/1.0 200 OK\r\n\r\n{\"sensor\":\"t1\",\"value\":23}");
        let reading: Reading = response.json().unwrap();
        assert_eq!(
            reading,
            Reading {
                sensor: "t1",
                value: 23
            }
        );
        assert!(Response::parse("HTTP/1.0 200 OK\r\n\r\nnot json")
            .json::<Reading>()
            .is_err());
    }
}
