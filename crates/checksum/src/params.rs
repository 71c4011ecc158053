//! CRC polynomial specs.
//!
//! This module defines the parameters for the supported CRC algorithms
//! following the conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

/// Standard input for reference check values.
///
/// Every spec's [`check`](CrcParams::check) field is the digest of this input.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// CRC polynomial spec.
///
/// This struct captures all the parameters needed to define a CRC algorithm,
/// plus the reference check value used for self-testing. The parameters
/// follow the conventions from the CRC Catalogue.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC register (32 or 64 for the engines)
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `init`: Initial value for the CRC register
/// - `reflect_in`: If true, input bytes are processed LSB-first
/// - `reflect_out`: If true, reflect the final register before XOR
/// - `xor_out`: Value XORed with the final register to produce the digest
/// - `check`: Expected digest of [`CHECK_INPUT`], verified at engine construction
///
/// # Reflection
///
/// "Reflected" means bit-reversed. The common CRC-32 and CRC-64 variants use
/// reflected input and output, which maps to LSB-first processing.
///
/// All fields are fixed for the lifetime of a spec; two specs with different
/// widths are never mixed in one computation (the table types enforce this).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Width in bits.
  pub width: u8,
  /// Generator polynomial (normal form, without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub init: u64,
  /// Process input bytes LSB-first.
  pub reflect_in: bool,
  /// Reflect final register before XOR.
  pub reflect_out: bool,
  /// XOR value applied to the final register.
  pub xor_out: u64,
  /// Digest of [`CHECK_INPUT`] under this spec.
  pub check: u64,
}

impl CrcParams {
  /// CRC32 (ISO 3309 / IEEE 802.3) - Ethernet, gzip, PNG, zip, SATA
  ///
  /// The most widely used CRC32 variant. Used in virtually all file formats
  /// and network protocols that use CRC32.
  pub const CRC32_ISO: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
    check: 0xCBF4_3926,
  };

  /// CRC32-C (Castagnoli) - iSCSI, SCTP, Btrfs, ext4, RocksDB, LevelDB
  ///
  /// This polynomial was specifically designed to have good error detection
  /// properties for data storage and networking.
  pub const CRC32C: Self = Self {
    width: 32,
    polynomial: 0x1EDC_6F41,
    init: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
    check: 0xE306_9283,
  };

  /// CRC32/MPEG-2 - MPEG transport streams
  ///
  /// The only MSB-first (non-reflected) spec shipped here; it exercises the
  /// mirrored engine path.
  pub const CRC32_MPEG2: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
    check: 0x0376_E6E7,
  };

  /// CRC64 (ECMA-182) - XZ Utils, 7-Zip, PostgreSQL, Redis
  ///
  /// 64-bit CRC used in data storage and compression.
  pub const CRC64_XZ: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    init: 0xFFFF_FFFF_FFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
    check: 0x995D_C9BB_DF19_39FA,
  };

  /// CRC64/NVME - NVMe storage specification, AWS S3 object integrity
  pub const CRC64_NVME: Self = Self {
    width: 64,
    polynomial: 0xAD93_D235_94C9_3659,
    init: 0xFFFF_FFFF_FFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
    check: 0xAE8B_1486_0A79_9888,
  };

  /// Bit mask covering `width` bits.
  #[must_use]
  pub const fn mask(&self) -> u64 {
    if self.width >= 64 {
      return u64::MAX;
    }
    (1u64 << self.width) - 1
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect_bits(self.polynomial, self.width)
  }

  /// The register value a fresh engine starts from, in processing bit order.
  ///
  /// LSB-first (reflected) specs hold the register in reflected form, so the
  /// catalogue's `init` is reflected into that domain.
  #[must_use]
  pub const fn init_register(&self) -> u64 {
    if self.reflect_in {
      reflect_bits(self.init & self.mask(), self.width)
    } else {
      self.init & self.mask()
    }
  }

  /// The digest this spec produces for zero bytes of input.
  ///
  /// Used by the combine operation to convert affine parameter sets into a
  /// linear form.
  #[must_use]
  pub const fn empty_digest(&self) -> u64 {
    self.finalize_register(self.init_register())
  }

  /// Turn a raw register (in processing bit order) into the external digest.
  pub(crate) const fn finalize_register(&self, register: u64) -> u64 {
    let out = if self.reflect_out != self.reflect_in {
      reflect_bits(register, self.width)
    } else {
      register
    };
    (out ^ self.xor_out) & self.mask()
  }

  /// Inverse of [`finalize_register`](Self::finalize_register): recover the
  /// raw register from an external digest.
  pub(crate) const fn raw_register(&self, digest: u64) -> u64 {
    let r = (digest ^ self.xor_out) & self.mask();
    if self.reflect_out != self.reflect_in {
      reflect_bits(r, self.width)
    } else {
      r
    }
  }
}

/// Reflect (bit-reverse) the lower `width` bits of `value`.
#[must_use]
pub(crate) const fn reflect_bits(value: u64, width: u8) -> u64 {
  let mut result = 0u64;
  let mut i = 0u8;
  while i < width {
    if (value >> i) & 1 != 0 {
      result |= 1 << (width - 1 - i);
    }
    i += 1;
  }
  result
}
