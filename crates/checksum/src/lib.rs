//! Streaming CRC checksums with O(log n) combine.
//!
//! This crate provides table-driven CRC-32 and CRC-64 engines with
//! incremental (streaming) update and a combine operation that merges two
//! checksums of adjacent byte ranges into the checksum of their
//! concatenation without reprocessing the bytes.
//!
//! # Supported Algorithms
//!
//! | Type | Polynomial | Output | Use Cases |
//! |------|------------|--------|-----------|
//! | [`Crc32`] | 0x04C11DB7 | `u32` | Ethernet, gzip, zip, PNG |
//! | [`Crc32C`] | 0x1EDC6F41 | `u32` | iSCSI, SCTP, ext4, Btrfs |
//! | [`Crc64Xz`] | 0x42F0E1EBA9EA3693 | `u64` | XZ Utils, 7-Zip |
//! | [`Crc64Nvme`] | 0xAD93D23594C93659 | `u64` | NVMe specification, AWS S3 |
//!
//! Arbitrary 32- and 64-bit specs (a [`CrcParams`] value) are driven through
//! the runtime engines: [`Crc32Table`] / [`Crc64Table`] derive the lookup
//! tables once, and [`Crc32Engine`] / [`Crc64Engine`] stream over a shared
//! table borrow. Engine construction self-tests against the spec's check
//! value and fails rather than return an unverified pairing.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, ChecksumCombine, Crc32};
//!
//! // One-shot computation (fastest for complete data)
//! let data = b"123456789";
//! let crc = Crc32::checksum(data);
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Parallel combine (useful for multi-threaded processing)
//! let (a, b) = data.split_at(4);
//! let crc_a = Crc32::checksum(a);
//! let crc_b = Crc32::checksum(b);
//! let combined = Crc32::combine(crc_a, crc_b, b.len());
//! assert_eq!(combined, crc);
//! ```
//!
//! # Guarantees
//!
//! - Streaming is chunking-invariant: any split of the input across `update`
//!   calls yields the checksum of the concatenation.
//! - `finalize`/`digest` are idempotent reads; `reset` restores a fresh state.
//! - Tables are immutable after construction and safely shared across
//!   engines; an engine's mutable state is exclusively owned.
//! - All table-driven paths are verified against bitwise reference
//!   implementations, at compile time for the shipped specs.
//!
//! CRC is not collision-resistant against adversarial input; it detects
//! accidental corruption, nothing more.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod combine;
mod crc32;
mod crc64;
mod engine;
pub mod parallel;
mod params;
mod portable;
mod reference;
mod tables;

pub use crc32::{Crc32, Crc32C};
pub use crc64::{Crc64Nvme, Crc64Xz};
pub use engine::{Crc32Engine, Crc64Engine};
pub use params::{CHECK_INPUT, CrcParams};
pub use tables::{Crc32Table, Crc64Table};
// Re-export traits and errors for convenience
pub use traits::{Checksum, ChecksumCombine, ConfigError, SpecMismatchError};
