use criterion::{Criterion, Throughput};
use microreq::network::application::http::{
    Client, Method, Query, Request, RequestOptions, Response, percent,
};
use microreq::network::error::Error;
use microreq::network::{Close, Connect, Connection, Read, Remote, Write};
use std::hint::black_box;

const TEXT: &str = "temperature=23.5 C & humidity=40% / room: kitchen (north) é";

pub fn bench_percent_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("percent_encode");
    group.throughput(Throughput::Bytes(TEXT.len() as u64));
    group.bench_function("encode", |b| b.iter(|| percent::encode(black_box(TEXT))));
    group.bench_function("encode_plus", |b| {
        b.iter(|| percent::encode_plus(black_box(TEXT)))
    });
    group.finish();
}

pub fn bench_percent_decode(c: &mut Criterion) {
    let encoded = percent::encode_plus(TEXT);
    let mut group = c.benchmark_group("percent_decode");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("decode_plus", |b| {
        b.iter(|| percent::decode_plus(black_box(&encoded)))
    });
    group.finish();
}

pub fn bench_build_request(c: &mut Criterion) {
    let options = RequestOptions::new()
        .query("device", "sensor-01")
        .query("fields", ["t", "h", "p"])
        .header("Accept", "application/json")
        .cookie("session", "abc 123")
        .basic_auth("device", "secret")
        .form(Query::new().with("temperature", 23.5f32).with("unit", "C"));
    let request = Request::new(Method::Post, "http://example.com/api/readings", options).unwrap();

    c.bench_function("build_request", |b| b.iter(|| black_box(&request).to_bytes()));
}

pub fn bench_parse_response(c: &mut Criterion) {
    let mut raw = String::from("HTTP/1.0 200 OK\r\n");
    for i in 0..16 {
        raw.push_str(&format!("X-Header-{}: value {}\r\n", i, i));
    }
    raw.push_str("\r\n");
    raw.push_str(&"{\"t\":23.5}\r\n".repeat(64));

    let mut group = c.benchmark_group("parse_response");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("parse", |b| b.iter(|| Response::parse(black_box(&raw))));
    group.finish();
}

struct Canned {
    response: &'static [u8],
    pos: usize,
}

impl Read for Canned {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let len = buf.len().min(self.response.len() - self.pos);
        buf[..len].copy_from_slice(&self.response[self.pos..self.pos + len]);
        self.pos += len;
        Ok(len)
    }
}

impl Write for Canned {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for Canned {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for Canned {}

struct CannedNetwork {
    calls: usize,
}

impl Connect for CannedNetwork {
    type Connection = Canned;
    type Error = Error;

    fn connect(&mut self, _remote: &Remote<'_>) -> Result<Self::Connection, Self::Error> {
        self.calls += 1;
        let response: &'static [u8] = if self.calls % 4 == 0 {
            b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n\r\nok"
        } else {
            b"HTTP/1.0 302 Found\r\nLocation: /next\r\n\r\n"
        };
        Ok(Canned { response, pos: 0 })
    }
}

pub fn bench_redirect_chain(c: &mut Criterion) {
    let mut client = Client::new(CannedNetwork { calls: 0 });
    c.bench_function("redirect_chain_4", |b| {
        b.iter(|| {
            client
                .get(black_box("http://example.com/start"), RequestOptions::new())
                .unwrap()
        })
    });
}
