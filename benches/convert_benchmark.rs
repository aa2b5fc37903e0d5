//! Benchmark for line conversion on synthetic CSV rows
//!
//! Run with: cargo bench --bench convert_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand::SeedableRng;

use mysqlcsv::pipeline::{convert_line, escape_for_mysql};

/// Generate CSV lines mixing plain, padded and quoted fields
fn generate_lines(n_lines: usize, n_fields: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    (0..n_lines)
        .map(|_| {
            let fields: Vec<String> = (0..n_fields)
                .map(|i| match i % 4 {
                    0 => rng.gen_range(0..1_000_000).to_string(),
                    1 => format!("  value {}  ", rng.gen::<u16>()),
                    2 => format!("\"quoted, with \"\"escapes\"\" {}\"", rng.gen::<u16>()),
                    _ => format!("C:\\path\\{}", rng.gen::<u32>()),
                })
                .collect();
            fields.join(",").into_bytes()
        })
        .collect()
}

fn bench_convert_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_line");

    for n_fields in [4, 16, 64] {
        let lines = generate_lines(1_000, n_fields, 42);
        let total_bytes: usize = lines.iter().map(|l| l.len()).sum();
        group.throughput(Throughput::Bytes(total_bytes as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n_fields), &lines, |b, lines| {
            b.iter(|| {
                for line in lines {
                    black_box(convert_line(black_box(line)).ok());
                }
            })
        });
    }

    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let plain = "x".repeat(256);
    let heavy = "\\\"".repeat(128);

    let mut group = c.benchmark_group("escape_for_mysql");
    group.bench_function("plain", |b| b.iter(|| escape_for_mysql(black_box(plain.as_bytes()))));
    group.bench_function("all_escaped", |b| {
        b.iter(|| escape_for_mysql(black_box(heavy.as_bytes())))
    });
    group.finish();
}

criterion_group!(benches, bench_convert_line, bench_escape);
criterion_main!(benches);
