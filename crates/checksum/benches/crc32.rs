//! CRC-32 throughput benchmarks.
//!
//! Run: `cargo bench -p checksum -- crc32`

use core::hint::black_box;

use checksum::{Checksum, Crc32, Crc32C};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const CASES: &[(&str, usize)] = &[
  ("xs", 64),
  ("s", 256),
  ("m", 4 * 1024),
  ("l", 64 * 1024),
  ("xl", 1024 * 1024),
];

fn make_data(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8))
    .collect()
}

fn bench_crc32(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/iso");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("oneshot", label), &data, |b, data| {
      b.iter(|| black_box(Crc32::checksum(black_box(data))));
    });

    group.bench_with_input(BenchmarkId::new("streaming", label), &data, |b, data| {
      b.iter(|| {
        let mut hasher = Crc32::new();
        for chunk in data.chunks(4096) {
          hasher.update(black_box(chunk));
        }
        black_box(hasher.finalize());
      });
    });
  }
  group.finish();
}

fn bench_crc32c(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32/castagnoli");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("oneshot", label), &data, |b, data| {
      b.iter(|| black_box(Crc32C::checksum(black_box(data))));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_crc32, bench_crc32c);
criterion_main!(benches);
