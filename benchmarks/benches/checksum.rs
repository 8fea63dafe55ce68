// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rampart_util::{constant_time_eq, weighted_checksum};

fn bench_weighted_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_checksum");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let data = vec![0xA5u8; size];
            b.iter(|| weighted_checksum(black_box(&data)));
        });
    }
    group.finish();
}

fn bench_constant_time_eq(c: &mut Criterion) {
    let mut group = c.benchmark_group("constant_time_eq");

    for size in [8, 16, 64].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let lhs = vec![0x11u8; size];
            let rhs = vec![0x11u8; size];
            b.iter(|| constant_time_eq(black_box(&lhs), black_box(&rhs)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_weighted_checksum, bench_constant_time_eq);
criterion_main!(benches);
