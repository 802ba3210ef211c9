//! Benchmarks for buffer access and Shift-JIS transcoding.
//!
//! Covers the hot paths downstream format parsers hit:
//! - Sequential fixed-width reads through a `Reader`
//! - Growable writes through a `Writer`
//! - String transcoding in both directions (the SJIS→UTF-8 direction is
//!   table-indexed; the reverse direction pays the linear table scan)

extern crate nubuf;

use criterion::{criterion_group, criterion_main, Criterion};
use nubuf::buffer::{BitReader, Reader, Writer};
use nubuf::sjis;
use std::hint::black_box;

/// Benchmark sequential u32 reads over a 64 KiB buffer.
fn bench_reader_u32_stream(c: &mut Criterion) {
    let data = vec![0xA5u8; 65536];

    c.bench_function("reader_u32_stream", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&data));
            let mut acc = 0u32;
            while reader.remaining() >= 4 {
                acc = acc.wrapping_add(reader.read_u32().unwrap());
            }
            black_box(acc)
        });
    });
}

/// Benchmark growable writes, including the reallocation cascade.
fn bench_writer_growth(c: &mut Criterion) {
    c.bench_function("writer_growth", |b| {
        b.iter(|| {
            let mut writer = Writer::new();
            for i in 0..4096u32 {
                writer.write_u32(i);
            }
            black_box(writer.into_bytes())
        });
    });
}

/// Benchmark bit-level reads of unary-prefixed values.
fn bench_bit_reader(c: &mut Criterion) {
    let data = vec![0b0001_0010u8; 8192];

    c.bench_function("bit_reader_unary", |b| {
        b.iter(|| {
            let mut bits = BitReader::new(black_box(&data));
            let mut acc = 0u32;
            for _ in 0..8192 {
                acc += bits.read_zeros(8).unwrap();
                acc = acc.wrapping_add(bits.read_number(4).unwrap());
            }
            black_box(acc)
        });
    });
}

/// Benchmark SJIS→UTF-8 over a mixed-class string.
fn bench_sjis_to_utf8(c: &mut Criterion) {
    // こんにちはAｶﾅ亜 repeated
    let unit = [
        0x82u8, 0xb1, 0x82, 0xf1, 0x82, 0xc9, 0x82, 0xbf, 0x82, 0xcd, b'A', 0xb6, 0xc5, 0x88,
        0x9f,
    ];
    let data: Vec<u8> = unit.iter().copied().cycle().take(15 * 256).collect();

    c.bench_function("sjis_to_utf8", |b| {
        b.iter(|| black_box(sjis::to_utf8(black_box(&data))));
    });
}

/// Benchmark UTF-8→SJIS, which pays the linear reverse table scan per
/// full-width character.
fn bench_utf8_to_sjis(c: &mut Criterion) {
    let data = "こんにちはAｶﾅ亜".repeat(256);

    c.bench_function("utf8_to_sjis", |b| {
        b.iter(|| black_box(sjis::from_utf8(black_box(&data))));
    });
}

criterion_group!(
    benches,
    bench_reader_u32_stream,
    bench_writer_growth,
    bench_bit_reader,
    bench_sjis_to_utf8,
    bench_utf8_to_sjis
);
criterion_main!(benches);
