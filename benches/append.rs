//! Append throughput: cursor writes on `GrowBuf` vs copy-producing
//! appends on `Bytes`.
//!
//! The growable buffer amortizes reallocation; the value buffer copies
//! the whole content on every append, so it is kept to fewer iterations.

use bytebuf::{Bytes, GrowBuf};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn append_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    let chunk = [0xABu8; 64];

    let iterations = 1_000u64;
    group.throughput(Throughput::Bytes(iterations * chunk.len() as u64));
    group.bench_function("growbuf_write_bytes", |b| {
        b.iter(|| {
            let mut buf = GrowBuf::new();
            for _ in 0..iterations {
                buf.write_bytes(black_box(&chunk));
            }
            black_box(buf.len())
        })
    });

    group.bench_function("bytes_append_100", |b| {
        b.iter(|| {
            let mut buf = Bytes::new();
            for _ in 0..100 {
                buf = buf.append(black_box(&chunk));
            }
            black_box(buf.len())
        })
    });

    group.finish();
}

criterion_group!(benches, append_throughput);
criterion_main!(benches);
