//! Parallel checksum computation using combine().
//!
//! CRC checksums are mathematically combinable: given crc(A) and crc(B),
//! we can compute crc(A || B) without having both chunks in memory.
//! This enables efficient parallel processing of large data.
//!
//! Run with: `cargo run --example parallel -p checksum`

use std::thread;

use checksum::{Checksum, ChecksumCombine, Crc32, Crc32Engine, Crc32Table, Crc64Nvme, CrcParams};

fn main() {
  println!("=== Parallel Checksum Examples ===\n");

  combine_basics();
  engine_basics();
  threaded_example();
}

/// Basic combine() demonstration.
fn combine_basics() {
  println!("--- Combine Basics ---\n");

  let data = b"hello world";
  let (part_a, part_b) = data.split_at(6); // "hello " and "world"

  // Compute checksums of each part independently
  let crc_a = Crc32::checksum(part_a);
  let crc_b = Crc32::checksum(part_b);

  println!("Part A (\"hello \"): 0x{crc_a:08X}");
  println!("Part B (\"world\"):  0x{crc_b:08X}");

  // Combine to get checksum of full data
  // combine(crc_a, crc_b, len_b) = crc(part_a || part_b)
  let combined = Crc32::combine(crc_a, crc_b, part_b.len());
  let expected = Crc32::checksum(data);

  println!("Combined:           0x{combined:08X}");
  println!("Full data checksum: 0x{expected:08X}");
  assert_eq!(combined, expected);
  println!("Match!\n");

  // Works with any number of parts - combine sequentially
  let parts: &[&[u8]] = &[b"one", b"two", b"three"];
  let full: Vec<u8> = parts.iter().flat_map(|p| p.iter().copied()).collect();

  let mut result = Crc64Nvme::checksum(parts[0]);
  for part in &parts[1..] {
    let part_crc = Crc64Nvme::checksum(part);
    result = Crc64Nvme::combine(result, part_crc, part.len());
  }

  println!("Multi-part combine: 0x{result:016X}");
  println!("Full data verify:   0x{:016X}", Crc64Nvme::checksum(&full));
  assert_eq!(result, Crc64Nvme::checksum(&full));
  println!();
}

/// Runtime spec-driven engines: build a table once, stream over it.
fn engine_basics() {
  println!("--- Spec-Driven Engine ---\n");

  let table = Crc32Table::build(CrcParams::CRC32_ISO).expect("width 32 is supported");
  // Construction self-tests against the spec's "123456789" check value.
  let mut engine = Crc32Engine::new(&table).expect("check value verified");

  engine.update(b"stream me ");
  engine.update(b"in pieces");
  println!("Streamed digest:    0x{:08X}", engine.digest());
  println!("Bytes processed:    {}", engine.bytes_processed());

  assert_eq!(engine.digest(), Crc32::checksum(b"stream me in pieces"));
  println!("Matches the pre-wired variant!\n");
}

/// Multi-threaded checksum using std::thread.
fn threaded_example() {
  println!("--- Multi-Threaded Example ---\n");

  // Generate test data
  let data: Vec<u8> = (0..4_000_000).map(|i| ((i * 17) % 256) as u8).collect();

  let num_threads = 4;
  let chunk_size = data.len().div_ceil(num_threads);

  // Sequential reference
  let sequential = Crc64Nvme::checksum(&data);
  println!("Sequential CRC-64/NVME: 0x{sequential:016X}");

  // One checksum per worker over its own segment, merged in order.
  let results: Vec<(u64, usize)> = thread::scope(|scope| {
    let handles: Vec<_> = data
      .chunks(chunk_size)
      .map(|chunk| scope.spawn(move || (Crc64Nvme::checksum(chunk), chunk.len())))
      .collect();
    handles.into_iter().map(|h| h.join().expect("worker panicked")).collect()
  });

  let mut parallel = results[0].0;
  for &(crc, len) in &results[1..] {
    parallel = Crc64Nvme::combine(parallel, crc, len);
  }

  println!("Parallel CRC-64/NVME:   0x{parallel:016X}");
  assert_eq!(sequential, parallel);
  println!("Match! (merged {} segments)", results.len());
}
