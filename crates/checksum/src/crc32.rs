//! Pre-wired CRC-32 variants.
//!
//! This module provides:
//! - [`Crc32`] - CRC-32 ISO-HDLC (Ethernet, gzip, ZIP, PNG)
//! - [`Crc32C`] - CRC-32C Castagnoli (iSCSI, ext4, Btrfs)
//!
//! Both run the portable slice-by-16 kernel over tables embedded in the
//! binary. Their check values are verified at compile time in
//! `reference.rs`; for runtime-configured specs use
//! [`Crc32Engine`](crate::Crc32Engine).

use crate::{
  params::CrcParams,
  tables::{Aligned64, generate_crc32_tables_16},
};

/// Slice-by-16 tables, pre-computed at compile time.
mod kernel_tables {
  use super::*;

  pub static ISO_TABLES: Aligned64<[[u32; 256]; 16]> =
    Aligned64(generate_crc32_tables_16(CrcParams::CRC32_ISO.polynomial_reflected() as u32));
  pub static CASTAGNOLI_TABLES: Aligned64<[[u32; 256]; 16]> =
    Aligned64(generate_crc32_tables_16(CrcParams::CRC32C.polynomial_reflected() as u32));
}

define_crc32_variant! {
  /// CRC-32 checksum (ISO 3309 / IEEE 802.3).
  ///
  /// Used in Ethernet FCS, ZIP, gzip, PNG, and many other formats.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
  /// - **Initial value**: 0xFFFFFFFF
  /// - **Final XOR**: 0xFFFFFFFF
  /// - **Reflect input/output**: Yes
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::{Checksum, Crc32};
  ///
  /// let crc = Crc32::checksum(b"123456789");
  /// assert_eq!(crc, 0xCBF43926); // "123456789" test vector
  /// ```
  pub struct Crc32 {
    params: crate::params::CrcParams::CRC32_ISO,
    tables: kernel_tables::ISO_TABLES,
  }
}

define_crc32_variant! {
  /// CRC-32C checksum (Castagnoli polynomial).
  ///
  /// Used in iSCSI, ext4, Btrfs, SCTP, and other modern protocols.
  /// Has better error detection properties than CRC-32 ISO-HDLC.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x1EDC6F41 (normal), 0x82F63B78 (reflected)
  /// - **Initial value**: 0xFFFFFFFF
  /// - **Final XOR**: 0xFFFFFFFF
  /// - **Reflect input/output**: Yes
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::{Checksum, Crc32C};
  ///
  /// let crc = Crc32C::checksum(b"123456789");
  /// assert_eq!(crc, 0xE3069283); // "123456789" test vector
  /// ```
  pub struct Crc32C {
    params: crate::params::CrcParams::CRC32C,
    tables: kernel_tables::CASTAGNOLI_TABLES,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use traits::{Checksum, ChecksumCombine};

  use super::*;

  const TEST_DATA: &[u8] = b"123456789";

  #[test]
  fn crc32_check_value() {
    assert_eq!(Crc32::checksum(TEST_DATA), 0xCBF4_3926);
  }

  #[test]
  fn crc32c_check_value() {
    assert_eq!(Crc32C::checksum(TEST_DATA), 0xE306_9283);
  }

  #[test]
  fn crc32_streaming() {
    let oneshot = Crc32::checksum(TEST_DATA);

    let mut hasher = Crc32::new();
    hasher.update(&TEST_DATA[..5]);
    hasher.update(&TEST_DATA[5..]);
    hasher.update(&[]);
    assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn crc32c_streaming() {
    let oneshot = Crc32C::checksum(TEST_DATA);

    let mut hasher = Crc32C::new();
    for chunk in TEST_DATA.chunks(3) {
      hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn crc32_empty() {
    assert_eq!(Crc32::checksum(&[]), 0);
    assert_eq!(Crc32C::checksum(&[]), 0);
  }

  #[test]
  fn crc32_default_matches_new() {
    assert_eq!(Crc32::default().finalize(), Crc32::new().finalize());
  }

  #[test]
  fn crc32_reset() {
    let mut hasher = Crc32C::new();
    hasher.update(b"some data");
    hasher.reset();
    hasher.update(TEST_DATA);
    assert_eq!(hasher.finalize(), Crc32C::checksum(TEST_DATA));
  }

  #[test]
  fn crc32_finalize_is_idempotent() {
    let mut hasher = Crc32::new();
    hasher.update(TEST_DATA);
    assert_eq!(hasher.finalize(), hasher.finalize());
  }

  #[test]
  fn crc32_combine_all_splits() {
    for split in 0..=TEST_DATA.len() {
      let (a, b) = TEST_DATA.split_at(split);
      let crc_a = Crc32C::checksum(a);
      let crc_b = Crc32C::checksum(b);
      let combined = Crc32C::combine(crc_a, crc_b, b.len());
      assert_eq!(combined, Crc32C::checksum(TEST_DATA), "failed at split {split}");
    }
  }

  #[test]
  fn crc32_resume() {
    let mut h1 = Crc32C::new();
    h1.update(&TEST_DATA[..5]);
    let partial = h1.finalize();

    let mut h2 = Crc32C::resume(partial);
    h2.update(&TEST_DATA[5..]);
    assert_eq!(h2.finalize(), Crc32C::checksum(TEST_DATA));
  }

  #[test]
  fn crc32_vectored_matches_contiguous() {
    let bufs: &[&[u8]] = &[b"123", b"", b"456", b"789"];
    assert_eq!(Crc32::checksum_vectored(bufs), Crc32::checksum(TEST_DATA));
  }
}
