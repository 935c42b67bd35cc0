// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use redoubt_blake2b::{Blake2b, hash, keyed_hash};

fn benchmark_blake2b_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("blake2b");

    for msg_len in [64, 128, 129, 1024, 16 * 1024, 1024 * 1024].iter() {
        let msg = vec![0xA5u8; *msg_len];
        group.throughput(Throughput::Bytes(*msg_len as u64));
        group.bench_with_input(format!("{} bytes", msg_len), &msg, |b, msg| {
            b.iter(|| hash(black_box(msg), black_box(64)).expect("hash failed"));
        });
    }
    group.finish();
}

fn benchmark_blake2b_keyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("blake2b_keyed");
    let key = [0x0Fu8; 32];

    // Short messages are dominated by the extra key block
    for msg_len in [0, 32, 256, 4096].iter() {
        let msg = vec![0x5Au8; *msg_len];
        group.throughput(Throughput::Bytes(*msg_len as u64));
        group.bench_with_input(format!("{} bytes", msg_len), &msg, |b, msg| {
            b.iter(|| {
                keyed_hash(black_box(msg), black_box(&key), black_box(32))
                    .expect("keyed_hash failed")
            });
        });
    }
    group.finish();
}

fn benchmark_blake2b_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("blake2b_streaming");
    let msg = vec![0x3Cu8; 64 * 1024];
    group.throughput(Throughput::Bytes(msg.len() as u64));

    for chunk_len in [1, 64, 1000, 8192].iter() {
        group.bench_with_input(format!("{} byte chunks", chunk_len), chunk_len, |b, &chunk_len| {
            b.iter(|| {
                let mut state = Blake2b::new(64).expect("new failed");
                for chunk in msg.chunks(chunk_len) {
                    state.update(black_box(chunk)).expect("update failed");
                }
                state.finalize().expect("finalize failed")
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_blake2b_one_shot,
    benchmark_blake2b_keyed,
    benchmark_blake2b_streaming
);
criterion_main!(benches);
