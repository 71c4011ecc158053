//! Internal macros for CRC variant generation.
//!
//! These macros eliminate boilerplate when defining multiple polynomial
//! variants of the same width (e.g., CRC-64/XZ and CRC-64/NVME share
//! identical structure but different polynomials and tables).
//!
//! The macros assume a reflected spec whose empty digest is zero (init and
//! xor_out cancel), which holds for every pre-wired variant. Specs outside
//! that shape go through the runtime engines instead.

/// Generate a CRC-32 variant type with all trait implementations.
///
/// This macro creates:
/// - The struct definition with `state: u32`
/// - A public `PARAMS` spec constant and a `resume()` constructor
/// - `Checksum` and `ChecksumCombine` trait implementations
///
/// # Arguments
///
/// - `params`: The [`CrcParams`](crate::CrcParams) constant for the variant
/// - `tables`: The static slice-by-16 tables derived from the same spec
macro_rules! define_crc32_variant {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      params: $params:expr,
      tables: $tables:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone)]
    $vis struct $name {
      state: u32,
    }

    impl $name {
      /// The polynomial spec this variant computes under.
      pub const PARAMS: $crate::CrcParams = $params;

      const INIT: u32 = Self::PARAMS.init_register() as u32;
      const XOR_OUT: u32 = Self::PARAMS.xor_out as u32;
      const POLY_REFLECTED: u32 = Self::PARAMS.polynomial_reflected() as u32;

      /// Create a hasher to resume from a previously finalized CRC value.
      #[inline]
      #[must_use]
      pub const fn resume(crc: u32) -> Self {
        Self {
          state: crc ^ Self::XOR_OUT,
        }
      }
    }

    impl ::core::default::Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as ::traits::Checksum>::new()
      }
    }

    impl ::traits::Checksum for $name {
      const OUTPUT_SIZE: usize = 4;
      type Output = u32;

      #[inline]
      fn new() -> Self {
        Self { state: Self::INIT }
      }

      #[inline]
      fn with_initial(initial: u32) -> Self {
        Self::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = $crate::portable::slice16_32(self.state, data, &$tables.0);
      }

      #[inline]
      fn finalize(&self) -> u32 {
        self.state ^ Self::XOR_OUT
      }

      #[inline]
      fn reset(&mut self) {
        self.state = Self::INIT;
      }
    }

    impl ::traits::ChecksumCombine for $name {
      #[inline]
      fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
        $crate::combine::crc32_combine_poly(Self::POLY_REFLECTED, crc_a, crc_b, len_b)
      }
    }
  };
}

/// Generate a CRC-64 variant type with all trait implementations.
///
/// Identical shape to [`define_crc32_variant!`] at 64-bit width.
macro_rules! define_crc64_variant {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      params: $params:expr,
      tables: $tables:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone)]
    $vis struct $name {
      state: u64,
    }

    impl $name {
      /// The polynomial spec this variant computes under.
      pub const PARAMS: $crate::CrcParams = $params;

      const INIT: u64 = Self::PARAMS.init_register();
      const XOR_OUT: u64 = Self::PARAMS.xor_out;
      const POLY_REFLECTED: u64 = Self::PARAMS.polynomial_reflected();

      /// Create a hasher to resume from a previously finalized CRC value.
      #[inline]
      #[must_use]
      pub const fn resume(crc: u64) -> Self {
        Self {
          state: crc ^ Self::XOR_OUT,
        }
      }
    }

    impl ::core::default::Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as ::traits::Checksum>::new()
      }
    }

    impl ::traits::Checksum for $name {
      const OUTPUT_SIZE: usize = 8;
      type Output = u64;

      #[inline]
      fn new() -> Self {
        Self { state: Self::INIT }
      }

      #[inline]
      fn with_initial(initial: u64) -> Self {
        Self::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = $crate::portable::slice16_64(self.state, data, &$tables.0);
      }

      #[inline]
      fn finalize(&self) -> u64 {
        self.state ^ Self::XOR_OUT
      }

      #[inline]
      fn reset(&mut self) {
        self.state = Self::INIT;
      }
    }

    impl ::traits::ChecksumCombine for $name {
      #[inline]
      fn combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
        $crate::combine::crc64_combine_poly(Self::POLY_REFLECTED, crc_a, crc_b, len_b)
      }
    }
  };
}
