//! Core traits for the crckit checksum engines.
//!
//! This crate provides the capability interface that every checksum
//! implementation in the workspace conforms to, plus the shared error
//! taxonomy. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming checksum computation | CRC32, CRC64 |
//! | [`ChecksumCombine`] | Parallel checksum combination | CRC with O(log n) combine |
//!
//! # Error Types
//!
//! - [`ConfigError`] - Unsupported width or self-test mismatch at construction
//! - [`SpecMismatchError`] - Combine invoked across different polynomial specs
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;
pub mod error;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::{ConfigError, SpecMismatchError};
