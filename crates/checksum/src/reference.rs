//! Bitwise reference implementations.
//!
//! This module is the canonical "source of truth" for CRC computation.
//! These implementations process one bit at a time, making them:
//!
//! - **Obviously correct**: The algorithm directly mirrors the mathematical definition
//! - **Audit-friendly**: A handful of lines per width, no lookup tables
//! - **Const-evaluable**: Check values are verified at compile time
//!
//! All table-driven paths (bytewise, slice-by-16) must produce identical
//! results to these reference functions. They are intentionally slow
//! (~8 operations per bit); use them as test oracles, never for throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::params::{CHECK_INPUT, CrcParams};

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xEDB88320 for CRC-32/ISO)
/// * `init` - Initial register value (typically 0xFFFFFFFF)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies final XOR if needed).
#[must_use]
pub(crate) const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC-64 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0x9A6C9329AC4BC9B5 for CRC-64/NVME)
/// * `init` - Initial register value (typically all ones)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies final XOR if needed).
#[must_use]
pub(crate) const fn crc64_bitwise(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise digest under an arbitrary spec, both bit orders.
///
/// Handles reflected (LSB-first) and normal (MSB-first) specs of any width
/// from 8 to 64 bits, including the full init/reflect/xor finalization.
/// This is the oracle the engines and the combine operation are tested
/// against.
#[must_use]
pub(crate) const fn crc_digest_bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let mask = params.mask();
  let mut crc = params.init_register();

  if params.reflect_in {
    let poly = params.polynomial_reflected();
    let mut i: usize = 0;
    while i < data.len() {
      crc ^= data[i] as u64;
      let mut bit = 0;
      while bit < 8 {
        let m = 0u64.wrapping_sub(crc & 1);
        crc = (crc >> 1) ^ (poly & m);
        bit += 1;
      }
      i += 1;
    }
  } else {
    let poly = params.polynomial & mask;
    let top = 1u64 << (params.width - 1);
    let shift = params.width as u32 - 8;
    let mut i: usize = 0;
    while i < data.len() {
      crc ^= (data[i] as u64) << shift;
      let mut bit = 0;
      while bit < 8 {
        crc = if crc & top != 0 { ((crc << 1) ^ poly) & mask } else { (crc << 1) & mask };
        bit += 1;
      }
      i += 1;
    }
  }

  params.finalize_register(crc)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Every shipped spec must reproduce its declared check value through the
// bitwise oracle. If these fail, the build fails.

// CRC-32/ISO: init=0xFFFFFFFF, xorout=0xFFFFFFFF, check 0xCBF43926
const _: () = {
  let raw = crc32_bitwise(0xEDB8_8320, !0u32, CHECK_INPUT);
  assert!(raw ^ !0u32 == 0xCBF4_3926);
};

// CRC-64/NVME: init=all ones, xorout=all ones, check 0xAE8B14860A799888
const _: () = {
  let raw = crc64_bitwise(0x9A6C_9329_AC4B_C9B5, !0u64, CHECK_INPUT);
  assert!(raw ^ !0u64 == 0xAE8B_1486_0A79_9888);
};

const _: () = {
  assert!(crc_digest_bitwise(&CrcParams::CRC32_ISO, CHECK_INPUT) == CrcParams::CRC32_ISO.check);
  assert!(crc_digest_bitwise(&CrcParams::CRC32C, CHECK_INPUT) == CrcParams::CRC32C.check);
  assert!(crc_digest_bitwise(&CrcParams::CRC32_MPEG2, CHECK_INPUT) == CrcParams::CRC32_MPEG2.check);
  assert!(crc_digest_bitwise(&CrcParams::CRC64_XZ, CHECK_INPUT) == CrcParams::CRC64_XZ.check);
  assert!(crc_digest_bitwise(&CrcParams::CRC64_NVME, CHECK_INPUT) == CrcParams::CRC64_NVME.check);
};
