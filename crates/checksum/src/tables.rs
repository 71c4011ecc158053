//! CRC lookup table generation and runtime-built table handles.
//!
//! Table generation is a pure function of the polynomial: table 0 maps a byte
//! value to its 8-bit-step partial remainder, and table `k` is table 0
//! advanced by `k` additional zero-byte positions. The slice-by-16 kernels
//! consume 16 chained tables per width.
//!
//! The `const fn` generators back the pre-wired variants (tables embedded in
//! the binary); [`Crc32Table::build`] and [`Crc64Table::build`] derive the
//! same tables at runtime from an arbitrary [`CrcParams`].
//!
//! # Table Strategies
//!
//! | Spec kind | Tables | Kernel |
//! |-----------|--------|--------|
//! | Reflected (LSB-first) | 16×256 | slice-by-16 + bytewise tail |
//! | Normal (MSB-first) | 1×256 | mirrored bytewise |
//!
//! Tables are immutable after construction and safely shared (read-only)
//! across any number of engines.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..16).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use traits::ConfigError;

use crate::params::CrcParams;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// Used to align lookup tables so table lookups do not straddle cache lines.
/// The inner type `T` is accessible via `.0`.
#[repr(align(64))]
#[derive(Debug)]
pub struct Aligned64<T>(pub T);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-32 lookup table entry (reflected polynomial).
#[must_use]
pub(crate) const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 16 CRC-32 lookup tables for slice-by-16 computation.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub(crate) const fn generate_crc32_tables_16(poly: u32) -> [[u32; 256]; 16] {
  let mut tables = [[0u32; 256]; 16];

  let mut i = 0u16;
  while i < 256 {
    tables[0][i as usize] = crc32_table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 16 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

/// Generate the single MSB-first CRC-32 lookup table (normal polynomial).
#[must_use]
pub(crate) const fn generate_crc32_msb_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0u16;
  while i < 256 {
    let mut crc = (i as u32) << 24;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    table[i as usize] = crc;
    i += 1;
  }
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-64 lookup table entry (reflected polynomial).
#[must_use]
pub(crate) const fn crc64_table_entry(poly: u64, index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 16 CRC-64 lookup tables for slice-by-16 computation.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub(crate) const fn generate_crc64_tables_16(poly: u64) -> [[u64; 256]; 16] {
  let mut tables = [[0u64; 256]; 16];

  let mut i = 0u16;
  while i < 256 {
    tables[0][i as usize] = crc64_table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 16 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

/// Generate the single MSB-first CRC-64 lookup table (normal polynomial).
#[must_use]
pub(crate) const fn generate_crc64_msb_table(poly: u64) -> [u64; 256] {
  let mut table = [0u64; 256];
  let mut i = 0u16;
  while i < 256 {
    let mut crc = (i as u64) << 56;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000_0000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    table[i as usize] = crc;
    i += 1;
  }
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime Table Handles
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) enum TableKind32 {
  Reflected(Aligned64<[[u32; 256]; 16]>),
  Normal(Aligned64<[u32; 256]>),
}

#[derive(Debug)]
pub(crate) enum TableKind64 {
  Reflected(Aligned64<[[u64; 256]; 16]>),
  Normal(Aligned64<[u64; 256]>),
}

/// Lookup tables for a 32-bit spec, built at runtime.
///
/// Remembers the spec it was built from; engines borrow the table and
/// inherit the spec through it. Building is deterministic and side-effect
/// free. 32-bit and 64-bit tables are distinct types, so mixing widths in
/// one computation is unrepresentable.
#[derive(Debug)]
pub struct Crc32Table {
  params: CrcParams,
  kind: TableKind32,
}

impl Crc32Table {
  /// Derive the lookup tables for a 32-bit spec.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::UnsupportedWidth`] when the spec's width is not 32.
  pub fn build(params: CrcParams) -> Result<Self, ConfigError> {
    if params.width != 32 {
      return Err(ConfigError::UnsupportedWidth { width: params.width });
    }
    let kind = if params.reflect_in {
      TableKind32::Reflected(Aligned64(generate_crc32_tables_16(params.polynomial_reflected() as u32)))
    } else {
      TableKind32::Normal(Aligned64(generate_crc32_msb_table(params.polynomial as u32)))
    };
    Ok(Self { params, kind })
  }

  /// The spec these tables were derived from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  #[inline]
  pub(crate) const fn kind(&self) -> &TableKind32 {
    &self.kind
  }
}

/// Lookup tables for a 64-bit spec, built at runtime.
///
/// See [`Crc32Table`]; identical contract at 64-bit width.
#[derive(Debug)]
pub struct Crc64Table {
  params: CrcParams,
  kind: TableKind64,
}

impl Crc64Table {
  /// Derive the lookup tables for a 64-bit spec.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::UnsupportedWidth`] when the spec's width is not 64.
  pub fn build(params: CrcParams) -> Result<Self, ConfigError> {
    if params.width != 64 {
      return Err(ConfigError::UnsupportedWidth { width: params.width });
    }
    let kind = if params.reflect_in {
      TableKind64::Reflected(Aligned64(generate_crc64_tables_16(params.polynomial_reflected())))
    } else {
      TableKind64::Normal(Aligned64(generate_crc64_msb_table(params.polynomial)))
    };
    Ok(Self { params, kind })
  }

  /// The spec these tables were derived from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  #[inline]
  pub(crate) const fn kind(&self) -> &TableKind64 {
    &self.kind
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const CRC32_ISO_POLY: u32 = 0xEDB8_8320;
  const CRC64_NVME_POLY: u64 = 0x9A6C_9329_AC4B_C9B5;

  #[test]
  fn crc32_tables_16_chained() {
    let tables = generate_crc32_tables_16(CRC32_ISO_POLY);

    assert_eq!(tables[0][0], 0);
    assert_ne!(tables[0][1], 0);

    for k in 1..16 {
      for i in 0..256 {
        let prev = tables[k - 1][i];
        let expected = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
        assert_eq!(tables[k][i], expected);
      }
    }
  }

  #[test]
  fn crc64_tables_16_chained() {
    let tables = generate_crc64_tables_16(CRC64_NVME_POLY);

    assert_eq!(tables[0][0], 0);
    assert_ne!(tables[0][1], 0);

    for k in 1..16 {
      for i in 0..256 {
        let prev = tables[k - 1][i];
        let expected = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
        assert_eq!(tables[k][i], expected);
      }
    }
  }

  #[test]
  fn crc64_polynomials_differ() {
    let xz = generate_crc64_tables_16(0xC96C_5795_D787_0F42);
    let nvme = generate_crc64_tables_16(CRC64_NVME_POLY);
    assert_ne!(xz[0], nvme[0]);
  }

  #[test]
  fn table_entry_matches_bitwise_reference() {
    for b in 0u16..256 {
      let entry = crc32_table_entry(CRC32_ISO_POLY, b as u8);
      let reference = crate::reference::crc32_bitwise(CRC32_ISO_POLY, 0, &[b as u8]);
      assert_eq!(entry, reference);

      let entry = crc64_table_entry(CRC64_NVME_POLY, b as u8);
      let reference = crate::reference::crc64_bitwise(CRC64_NVME_POLY, 0, &[b as u8]);
      assert_eq!(entry, reference);
    }
  }

  #[test]
  fn build_rejects_wrong_width() {
    use crate::params::CrcParams;

    let err = Crc32Table::build(CrcParams::CRC64_NVME).unwrap_err();
    assert_eq!(err, traits::ConfigError::UnsupportedWidth { width: 64 });

    let err = Crc64Table::build(CrcParams::CRC32_ISO).unwrap_err();
    assert_eq!(err, traits::ConfigError::UnsupportedWidth { width: 32 });
  }

  #[test]
  fn build_accepts_shipped_specs() {
    use crate::params::CrcParams;

    assert!(Crc32Table::build(CrcParams::CRC32_ISO).is_ok());
    assert!(Crc32Table::build(CrcParams::CRC32C).is_ok());
    assert!(Crc32Table::build(CrcParams::CRC32_MPEG2).is_ok());
    assert!(Crc64Table::build(CrcParams::CRC64_XZ).is_ok());
    assert!(Crc64Table::build(CrcParams::CRC64_NVME).is_ok());
  }
}
