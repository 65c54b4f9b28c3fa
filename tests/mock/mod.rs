//! Scripted in-memory transport shared by the integration tests.

#![allow(dead_code)]

use microreq::network::error::Error;
use microreq::network::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// What the next connection attempt does.
#[derive(Debug, Clone)]
pub enum Script {
    /// Connect succeeds and the peer answers with these bytes, then closes.
    Respond(Vec<u8>),
    /// Connect succeeds, but reading fails with this error.
    FailRead(Error),
    /// Connect fails with this error.
    FailConnect(Error),
    /// Connect succeeds, but writes accept nothing after this many bytes.
    StallWrite(usize),
}

/// One observed connection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub host: String,
    pub port: u16,
    pub tls: bool,
    pub timeout_seconds: u32,
    pub sent: Vec<u8>,
}

impl Attempt {
    pub fn sent_text(&self) -> String {
        String::from_utf8(self.sent.clone()).unwrap()
    }
}

#[derive(Debug, Default)]
pub struct Log {
    pub attempts: Vec<Attempt>,
    pub opened: usize,
    pub closed: usize,
}

#[derive(Debug)]
pub struct MockConnection {
    response: Vec<u8>,
    read_pos: usize,
    read_chunk: usize,
    fail_read: Option<Error>,
    write_limit: usize,
    is_open: bool,
    log: Rc<RefCell<Log>>,
}

impl Read for MockConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        if let Some(e) = self.fail_read {
            return Err(e);
        }
        let remaining = &self.response[self.read_pos..];
        let len = buf.len().min(remaining.len()).min(self.read_chunk);
        buf[..len].copy_from_slice(&remaining[..len]);
        self.read_pos += len;
        Ok(len)
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        let mut log = self.log.borrow_mut();
        let attempt = log.attempts.last_mut().expect("write before connect");
        // Accept at most 64 bytes per call so callers must loop.
        let room = self.write_limit.saturating_sub(attempt.sent.len());
        let len = buf.len().min(64).min(room);
        attempt.sent.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(mut self) -> Result<(), Self::Error> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        self.is_open = false;
        self.log.borrow_mut().closed += 1;
        Ok(())
    }
}

impl Connection for MockConnection {}

#[derive(Debug)]
pub struct MockNetwork {
    scripts: VecDeque<Script>,
    repeat_last: bool,
    read_chunk: usize,
    pub log: Rc<RefCell<Log>>,
}

impl MockNetwork {
    /// Plays `scripts` in order, one per connection.
    pub fn new(scripts: Vec<Script>) -> Self {
        Self {
            scripts: scripts.into(),
            repeat_last: false,
            read_chunk: usize::MAX,
            log: Rc::new(RefCell::new(Log::default())),
        }
    }

    /// Answers every connection with the same script.
    pub fn always(script: Script) -> Self {
        let mut network = Self::new(vec![script]);
        network.repeat_last = true;
        network
    }

    /// Limits how many bytes a single read returns.
    pub fn with_read_chunk(mut self, read_chunk: usize) -> Self {
        self.read_chunk = read_chunk;
        self
    }

    pub fn handle(&self) -> Rc<RefCell<Log>> {
        Rc::clone(&self.log)
    }

    fn next_script(&mut self) -> Script {
        if self.repeat_last && self.scripts.len() == 1 {
            return self.scripts[0].clone();
        }
        self.scripts.pop_front().expect("no scripted response left")
    }
}

impl Connect for MockNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, remote: &Remote<'_>) -> Result<Self::Connection, Self::Error> {
        let script = self.next_script();
        self.log.borrow_mut().attempts.push(Attempt {
            host: remote.host.to_string(),
            port: remote.port,
            tls: remote.tls,
            timeout_seconds: remote.timeout_seconds,
            sent: Vec::new(),
        });

        let mut write_limit = usize::MAX;
        let (response, fail_read) = match script {
            Script::Respond(bytes) => (bytes, None),
            Script::FailRead(e) => (Vec::new(), Some(e)),
            Script::FailConnect(e) => return Err(e),
            Script::StallWrite(limit) => {
                write_limit = limit;
                (b"HTTP/1.0 200 OK\r\n\r\n".to_vec(), None)
            }
        };
        self.log.borrow_mut().opened += 1;
        Ok(MockConnection {
            response,
            read_pos: 0,
            read_chunk: self.read_chunk,
            fail_read,
            write_limit,
            is_open: true,
            log: Rc::clone(&self.log),
        })
    }
}

/// A complete response with the given status, headers and body.
pub fn reply(status: &str, headers: &[(&str, &str)], body: &str) -> Script {
    let mut text = format!("HTTP/1.0 {}\r\n", status);
    for (name, value) in headers {
        text.push_str(&format!("{}: {}\r\n", name, value));
    }
    text.push_str("\r\n");
    text.push_str(body);
    Script::Respond(text.into_bytes())
}

pub fn redirect(status: &str, location: &str) -> Script {
    reply(status, &[("Location", location)], "")
}

pub fn ok(body: &str) -> Script {
    reply("200 OK", &[("Content-Type", "text/plain")], body)
}
