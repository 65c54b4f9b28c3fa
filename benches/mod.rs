use criterion::{criterion_group, criterion_main};

mod http;

criterion_group!(
    benches,
    http::bench_percent_encode,
    http::bench_percent_decode,
    http::bench_build_request,
    http::bench_parse_response,
    http::bench_redirect_chain
);
criterion_main!(benches);
