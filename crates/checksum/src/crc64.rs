//! Pre-wired CRC-64 variants.
//!
//! This module provides:
//! - [`Crc64Xz`] - CRC-64 ECMA-182 (XZ Utils, 7-Zip)
//! - [`Crc64Nvme`] - CRC-64/NVME (NVMe specification, AWS S3)
//!
//! Both run the portable slice-by-16 kernel over tables embedded in the
//! binary. Their check values are verified at compile time in
//! `reference.rs`; for runtime-configured specs use
//! [`Crc64Engine`](crate::Crc64Engine).

use crate::{
  params::CrcParams,
  tables::{Aligned64, generate_crc64_tables_16},
};

/// Slice-by-16 tables, pre-computed at compile time.
///
/// Total size: 16 * 256 * 8 = 32KB per variant, 64-byte aligned.
mod kernel_tables {
  use super::*;

  pub static XZ_TABLES: Aligned64<[[u64; 256]; 16]> =
    Aligned64(generate_crc64_tables_16(CrcParams::CRC64_XZ.polynomial_reflected()));
  pub static NVME_TABLES: Aligned64<[[u64; 256]; 16]> =
    Aligned64(generate_crc64_tables_16(CrcParams::CRC64_NVME.polynomial_reflected()));
}

define_crc64_variant! {
  /// CRC-64 checksum (ECMA-182).
  ///
  /// Used by XZ Utils, 7-Zip, and LZMA containers.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x42F0E1EBA9EA3693 (normal), 0xC96C5795D7870F42 (reflected)
  /// - **Initial value**: all ones
  /// - **Final XOR**: all ones
  /// - **Reflect input/output**: Yes
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::{Checksum, Crc64Xz};
  ///
  /// let crc = Crc64Xz::checksum(b"123456789");
  /// assert_eq!(crc, 0x995DC9BBDF1939FA); // "123456789" test vector
  /// ```
  pub struct Crc64Xz {
    params: crate::params::CrcParams::CRC64_XZ,
    tables: kernel_tables::XZ_TABLES,
  }
}

define_crc64_variant! {
  /// CRC-64/NVME checksum.
  ///
  /// Used by the NVMe storage specification and AWS S3 object integrity.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0xAD93D23594C93659 (normal), 0x9A6C9329AC4BC9B5 (reflected)
  /// - **Initial value**: all ones
  /// - **Final XOR**: all ones
  /// - **Reflect input/output**: Yes
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::{Checksum, Crc64Nvme};
  ///
  /// let crc = Crc64Nvme::checksum(b"123456789");
  /// assert_eq!(crc, 0xAE8B14860A799888); // "123456789" test vector
  /// ```
  pub struct Crc64Nvme {
    params: crate::params::CrcParams::CRC64_NVME,
    tables: kernel_tables::NVME_TABLES,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use traits::{Checksum, ChecksumCombine};

  use super::*;

  const TEST_DATA: &[u8] = b"123456789";

  #[test]
  fn crc64_xz_check_value() {
    assert_eq!(Crc64Xz::checksum(TEST_DATA), 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn crc64_nvme_check_value() {
    assert_eq!(Crc64Nvme::checksum(TEST_DATA), 0xAE8B_1486_0A79_9888);
  }

  #[test]
  fn crc64_empty() {
    assert_eq!(Crc64Xz::checksum(&[]), 0);
    assert_eq!(Crc64Nvme::checksum(&[]), 0);
  }

  #[test]
  fn crc64_streaming() {
    let data: Vec<u8> = (0..300u32).map(|i| (i.wrapping_mul(7) % 256) as u8).collect();
    let oneshot = Crc64Nvme::checksum(&data);

    for chunk_len in [1, 5, 8, 16, 17, 100] {
      let mut hasher = Crc64Nvme::new();
      for chunk in data.chunks(chunk_len) {
        hasher.update(chunk);
      }
      assert_eq!(hasher.finalize(), oneshot, "chunk_len={chunk_len}");
    }
  }

  #[test]
  fn crc64_default_matches_new() {
    assert_eq!(Crc64Nvme::default().finalize(), Crc64Nvme::new().finalize());
  }

  #[test]
  fn crc64_reset() {
    let mut hasher = Crc64Xz::new();
    hasher.update(b"some data");
    hasher.reset();
    hasher.update(TEST_DATA);
    assert_eq!(hasher.finalize(), Crc64Xz::checksum(TEST_DATA));
  }

  #[test]
  fn crc64_combine_all_splits() {
    for split in 0..=TEST_DATA.len() {
      let (a, b) = TEST_DATA.split_at(split);
      let crc_a = Crc64Nvme::checksum(a);
      let crc_b = Crc64Nvme::checksum(b);
      let combined = Crc64Nvme::combine(crc_a, crc_b, b.len());
      assert_eq!(combined, Crc64Nvme::checksum(TEST_DATA), "failed at split {split}");
    }
  }

  #[test]
  fn crc64_resume() {
    let data = b"resumable checksum computation";
    let (a, b) = data.split_at(11);

    let partial = Crc64Nvme::checksum(a);
    let mut resumed = Crc64Nvme::resume(partial);
    resumed.update(b);
    assert_eq!(resumed.finalize(), Crc64Nvme::checksum(data));
  }

  #[test]
  fn crc64_variants_disagree() {
    // Same input, different polynomials: digests must differ.
    assert_ne!(Crc64Xz::checksum(TEST_DATA), Crc64Nvme::checksum(TEST_DATA));
  }
}
