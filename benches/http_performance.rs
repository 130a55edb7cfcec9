//! HTTP/1.1 Performance Benchmarks
//!
//! This benchmark suite measures the per-request hot path:
//! - Request line and full request parsing
//! - Content negotiation and gzip encoding
//! - Route dispatch and response serialization
//!
//! Run with: cargo bench --bench http_performance

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use minihttpd::config::ServerConfig;
use minihttpd::http::{parser, Encoding, MessageReader, Method, Request, RequestHeaders, Status};
use minihttpd::routes;
use std::time::Duration;

// ========== Parsing Benchmarks ==========

fn bench_request_line_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_line_parse");

    group.bench_function("simple_get", |b| {
        b.iter(|| {
            let parsed = parser::parse_request_line(black_box("GET /index.html HTTP/1.1"));
            black_box(parsed)
        });
    });

    group.bench_function("long_target", |b| {
        let line = format!("GET /echo/{} HTTP/1.1", "x".repeat(512));
        b.iter(|| {
            let parsed = parser::parse_request_line(black_box(&line));
            black_box(parsed)
        });
    });

    group.finish();
}

fn bench_request_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_parse");

    let headers_only =
        b"GET /user-agent HTTP/1.1\r\nHost: localhost\r\nUser-Agent: bench/1.0\r\nAccept: */*\r\n\r\n"
            .to_vec();

    group.bench_function("headers_only", |b| {
        b.iter(|| {
            let mut reader = MessageReader::new(black_box(&headers_only[..]));
            let request = parser::parse_next(&mut reader);
            black_box(request)
        });
    });

    let mut with_body = b"POST /files/data HTTP/1.1\r\nContent-Length: 1024\r\n\r\n".to_vec();
    with_body.extend_from_slice(&[0x42u8; 1024]);
    group.throughput(Throughput::Bytes(with_body.len() as u64));

    group.bench_function("with_1kb_body", |b| {
        b.iter(|| {
            let mut reader = MessageReader::new(black_box(&with_body[..]));
            let request = parser::parse_next(&mut reader);
            black_box(request)
        });
    });

    group.finish();
}

// ========== Encoding Benchmarks ==========

fn bench_negotiate(c: &mut Criterion) {
    let mut group = c.benchmark_group("negotiate");

    group.bench_function("gzip_in_list", |b| {
        b.iter(|| {
            let encoding =
                Encoding::negotiate(black_box(Some("identity, deflate, gzip;q=0.8, br")));
            black_box(encoding)
        });
    });

    group.bench_function("no_match", |b| {
        b.iter(|| {
            let encoding = Encoding::negotiate(black_box(Some("deflate, br, zstd")));
            black_box(encoding)
        });
    });

    group.finish();
}

fn bench_gzip_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("gzip_encode");

    for size in [256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 251) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let encoded = Encoding::Gzip.encode(black_box(&data));
                black_box(encoded)
            });
        });
    }

    group.finish();
}

// ========== Dispatch Benchmarks ==========

fn request(method: Method, path: &str, headers: &[(&str, &str)]) -> Request {
    let mut recorded = RequestHeaders::new();
    for (name, value) in headers {
        recorded.record(name, value);
    }
    Request::new(method, path, recorded, Bytes::new())
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let config = ServerConfig::new(None);

    let echo = request(Method::Get, "/echo/benchmark-message", &[]);
    group.bench_function("echo_plain", |b| {
        b.iter(|| {
            let response = routes::dispatch(black_box(&echo), black_box(&config));
            black_box(response)
        });
    });

    let echo_gzip = request(
        Method::Get,
        "/echo/benchmark-message",
        &[("Accept-Encoding", "gzip")],
    );
    group.bench_function("echo_gzip", |b| {
        b.iter(|| {
            let response = routes::dispatch(black_box(&echo_gzip), black_box(&config));
            black_box(response)
        });
    });

    let not_found = request(Method::Get, "/missing", &[]);
    group.bench_function("not_found", |b| {
        b.iter(|| {
            let response = routes::dispatch(black_box(&not_found), black_box(&config));
            black_box(response)
        });
    });

    group.finish();
}

fn bench_response_to_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_to_wire");

    let body = vec![0x42u8; 1024];
    group.throughput(Throughput::Bytes(body.len() as u64));

    group.bench_function("1kb_body", |b| {
        let response = minihttpd::http::Response::builder()
            .status(Status::Ok)
            .header("Content-Type", "application/octet-stream")
            .header("Content-Length", body.len().to_string())
            .body(body.clone())
            .build();

        b.iter(|| {
            let wire = black_box(&response).to_wire();
            black_box(wire)
        });
    });

    group.finish();
}

// ========== Benchmark Groups ==========

criterion_group! {
    name = parsing;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(1000);
    targets =
        bench_request_line_parse,
        bench_request_parse
}

criterion_group! {
    name = encoding;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(500);
    targets =
        bench_negotiate,
        bench_gzip_sizes
}

criterion_group! {
    name = handling;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(1000);
    targets =
        bench_dispatch,
        bench_response_to_wire
}

criterion_main!(parsing, encoding, handling);
