//! Spec-driven streaming CRC engines.
//!
//! An engine owns a width-sized accumulator register and a shared borrow of
//! one runtime-built table ([`Crc32Table`] / [`Crc64Table`]). Construction
//! runs the spec's check vector through the freshly paired table and refuses
//! to return an engine that cannot reproduce it: an unverified table/spec
//! pairing would silently corrupt every subsequent checksum.
//!
//! Engines are synchronous and single-threaded: `update` and `digest` never
//! suspend and never perform I/O. A table may back any number of engines
//! concurrently; each engine's mutable state is exclusively owned (`&mut
//! self` on `update`/`reset`), so per-worker engines plus
//! [`combine`](Crc32Engine::combine) give segmented/parallel processing.

use traits::ConfigError;

use crate::{
  combine::crc_combine_params,
  params::{CHECK_INPUT, CrcParams},
  portable,
  tables::{Crc32Table, Crc64Table, TableKind32, TableKind64},
};

/// Streaming CRC engine over a 32-bit spec.
///
/// Created from a [`Crc32Table`]; fails construction when the self-test
/// digest does not match the spec's check value.
///
/// # Example
///
/// ```
/// use checksum::{Crc32Engine, Crc32Table, CrcParams};
///
/// let table = Crc32Table::build(CrcParams::CRC32_ISO)?;
/// let mut engine = Crc32Engine::new(&table)?;
/// engine.update(b"1234");
/// engine.update(b"56789");
/// assert_eq!(engine.digest(), 0xCBF43926);
/// # Ok::<(), checksum::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Crc32Engine<'t> {
  table: &'t Crc32Table,
  state: u32,
  processed: u64,
}

impl<'t> Crc32Engine<'t> {
  /// Construct an engine over `table`, verifying the spec's check vector.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::CheckMismatch`] when the table/spec pairing does
  /// not reproduce the digest declared for `"123456789"`. No engine is
  /// returned in that case.
  pub fn new(table: &'t Crc32Table) -> Result<Self, ConfigError> {
    let params = table.params();
    let mut engine = Self {
      table,
      state: params.init_register() as u32,
      processed: 0,
    };

    engine.update(CHECK_INPUT);
    let actual = u64::from(engine.digest());
    if actual != params.check {
      return Err(ConfigError::CheckMismatch {
        expected: params.check,
        actual,
      });
    }
    engine.reset();
    Ok(engine)
  }

  /// The spec this engine computes under.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    self.table.params()
  }

  /// Feed `data` into the running checksum.
  ///
  /// May be called any number of times with any chunk sizes; the result is
  /// the checksum of the concatenation in call order. An empty buffer is a
  /// no-op.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = match self.table.kind() {
      // Below one slice group the single-table kernel avoids the chunking
      // scaffolding.
      TableKind32::Reflected(tables) if data.len() < 16 => portable::crc32_bytewise(self.state, data, &tables.0[0]),
      TableKind32::Reflected(tables) => portable::slice16_32(self.state, data, &tables.0),
      TableKind32::Normal(table) => portable::crc32_bytewise_msb(self.state, data, &table.0),
    };
    self.processed += data.len() as u64;
  }

  /// The finalized checksum of everything fed so far.
  ///
  /// Side-effect free and idempotent: repeated calls without intervening
  /// [`update`](Self::update) return the same value.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> u32 {
    self.params().finalize_register(u64::from(self.state)) as u32
  }

  /// Restore the engine to its freshly constructed state.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.params().init_register() as u32;
    self.processed = 0;
  }

  /// Number of bytes fed since construction or the last reset.
  #[inline]
  #[must_use]
  pub const fn bytes_processed(&self) -> u64 {
    self.processed
  }

  /// Combine two finalized digests computed under this engine's spec.
  ///
  /// See [`crc_combine_params`] for the algorithm; `len_b == 0` returns
  /// `crc_a` unchanged.
  #[inline]
  #[must_use]
  pub fn combine(&self, crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    crc_combine_params(self.params(), u64::from(crc_a), u64::from(crc_b), len_b) as u32
  }
}

/// Streaming CRC engine over a 64-bit spec.
///
/// See [`Crc32Engine`]; identical contract at 64-bit width.
#[derive(Clone)]
pub struct Crc64Engine<'t> {
  table: &'t Crc64Table,
  state: u64,
  processed: u64,
}

impl<'t> Crc64Engine<'t> {
  /// Construct an engine over `table`, verifying the spec's check vector.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::CheckMismatch`] when the table/spec pairing does
  /// not reproduce the digest declared for `"123456789"`.
  pub fn new(table: &'t Crc64Table) -> Result<Self, ConfigError> {
    let params = table.params();
    let mut engine = Self {
      table,
      state: params.init_register(),
      processed: 0,
    };

    engine.update(CHECK_INPUT);
    let actual = engine.digest();
    if actual != params.check {
      return Err(ConfigError::CheckMismatch {
        expected: params.check,
        actual,
      });
    }
    engine.reset();
    Ok(engine)
  }

  /// The spec this engine computes under.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    self.table.params()
  }

  /// Feed `data` into the running checksum.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = match self.table.kind() {
      TableKind64::Reflected(tables) if data.len() < 16 => portable::crc64_bytewise(self.state, data, &tables.0[0]),
      TableKind64::Reflected(tables) => portable::slice16_64(self.state, data, &tables.0),
      TableKind64::Normal(table) => portable::crc64_bytewise_msb(self.state, data, &table.0),
    };
    self.processed += data.len() as u64;
  }

  /// The finalized checksum of everything fed so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> u64 {
    self.params().finalize_register(self.state)
  }

  /// Restore the engine to its freshly constructed state.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.params().init_register();
    self.processed = 0;
  }

  /// Number of bytes fed since construction or the last reset.
  #[inline]
  #[must_use]
  pub const fn bytes_processed(&self) -> u64 {
    self.processed
  }

  /// Combine two finalized digests computed under this engine's spec.
  #[inline]
  #[must_use]
  pub fn combine(&self, crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    crc_combine_params(self.params(), crc_a, crc_b, len_b)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use traits::Checksum;

  use super::*;
  use crate::{
    crc32::Crc32,
    crc64::Crc64Nvme,
    reference::crc_digest_bitwise,
  };

  fn table32(params: CrcParams) -> Crc32Table {
    Crc32Table::build(params).unwrap()
  }

  fn table64(params: CrcParams) -> Crc64Table {
    Crc64Table::build(params).unwrap()
  }

  #[test]
  fn construction_self_tests() {
    for params in [CrcParams::CRC32_ISO, CrcParams::CRC32C, CrcParams::CRC32_MPEG2] {
      let table = table32(params);
      assert!(Crc32Engine::new(&table).is_ok(), "self-test failed for {params:?}");
    }
    for params in [CrcParams::CRC64_XZ, CrcParams::CRC64_NVME] {
      let table = table64(params);
      assert!(Crc64Engine::new(&table).is_ok(), "self-test failed for {params:?}");
    }
  }

  #[test]
  fn construction_rejects_bad_check_value() {
    let params = CrcParams {
      check: 0xDEAD_BEEF,
      ..CrcParams::CRC32_ISO
    };
    let table = table32(params);
    let err = Crc32Engine::new(&table).unwrap_err();
    assert_eq!(
      err,
      ConfigError::CheckMismatch {
        expected: 0xDEAD_BEEF,
        actual: 0xCBF4_3926,
      }
    );
  }

  #[test]
  fn engine_matches_prewired_variant() {
    let table = table32(CrcParams::CRC32_ISO);
    let mut engine = Crc32Engine::new(&table).unwrap();

    let data: Vec<u8> = (0..4096u32).map(|i| (i.wrapping_mul(73) >> 2) as u8).collect();
    engine.update(&data);
    assert_eq!(engine.digest(), Crc32::checksum(&data));

    let table = table64(CrcParams::CRC64_NVME);
    let mut engine = Crc64Engine::new(&table).unwrap();
    engine.update(&data);
    assert_eq!(engine.digest(), Crc64Nvme::checksum(&data));
  }

  #[test]
  fn digest_is_idempotent_and_empty_update_is_noop() {
    let table = table64(CrcParams::CRC64_NVME);
    let mut engine = Crc64Engine::new(&table).unwrap();

    engine.update(b"some data");
    let first = engine.digest();
    assert_eq!(engine.digest(), first);

    engine.update(&[]);
    assert_eq!(engine.digest(), first);
    assert_eq!(engine.bytes_processed(), 9);
  }

  #[test]
  fn reset_restores_fresh_state() {
    let table = table32(CrcParams::CRC32C);
    let mut engine = Crc32Engine::new(&table).unwrap();

    engine.update(b"garbage that must not leak into the next run");
    engine.reset();
    assert_eq!(engine.bytes_processed(), 0);

    engine.update(CHECK_INPUT);
    assert_eq!(u64::from(engine.digest()), CrcParams::CRC32C.check);
  }

  #[test]
  fn streaming_is_chunking_invariant() {
    let table = table64(CrcParams::CRC64_XZ);
    let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();

    let mut oneshot = Crc64Engine::new(&table).unwrap();
    oneshot.update(&data);

    for chunk_len in [1, 3, 16, 17, 64, 999] {
      let mut chunked = Crc64Engine::new(&table).unwrap();
      for chunk in data.chunks(chunk_len) {
        chunked.update(chunk);
      }
      assert_eq!(chunked.digest(), oneshot.digest(), "chunk_len={chunk_len}");
      assert_eq!(chunked.bytes_processed(), data.len() as u64);
    }
  }

  #[test]
  fn msb_engine_matches_oracle() {
    let params = CrcParams::CRC32_MPEG2;
    let table = table32(params);
    let mut engine = Crc32Engine::new(&table).unwrap();

    let data = b"MSB-first engines share the streaming contract";
    engine.update(data);
    assert_eq!(u64::from(engine.digest()), crc_digest_bitwise(&params, data));
  }

  #[test]
  fn engine_combine_matches_oneshot() {
    let table = table64(CrcParams::CRC64_NVME);
    let engine = Crc64Engine::new(&table).unwrap();

    let data: Vec<u8> = (0..2048u32).map(|i| (i.wrapping_mul(29) >> 1) as u8).collect();
    let (a, b) = data.split_at(700);

    let mut ea = engine.clone();
    ea.update(a);
    let mut eb = engine.clone();
    eb.update(b);

    let combined = engine.combine(ea.digest(), eb.digest(), b.len());
    assert_eq!(combined, Crc64Nvme::checksum(&data));
  }
}
