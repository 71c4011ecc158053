//! Error types for checksum configuration and combination.
//!
//! All errors are reported synchronously at the point of the offending call.
//! The core never retries and never logs on its own behalf; callers decide
//! whether a failure aborts the run or is merely reported.

use core::fmt;

/// Engine or table construction failed.
///
/// Returned when a polynomial spec cannot be turned into a working engine.
/// Construction must abort on this error; a partially-initialized engine is
/// never returned, since an unverified table/spec pairing would silently
/// corrupt every subsequent checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigError {
  /// The spec's register width is not supported by this table family.
  UnsupportedWidth {
    /// The offending width in bits.
    width: u8,
  },
  /// The freshly constructed engine failed to reproduce the spec's
  /// reference check value.
  CheckMismatch {
    /// The digest the spec declares for the check input.
    expected: u64,
    /// The digest the engine actually produced.
    actual: u64,
  },
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedWidth { width } => write!(f, "unsupported CRC width: {width}"),
      Self::CheckMismatch { expected, actual } => {
        write!(f, "self-test mismatch: expected {expected:#018x}, computed {actual:#018x}")
      }
    }
  }
}

impl core::error::Error for ConfigError {}

/// Combine invoked across different polynomial specs.
///
/// The combine operation is only meaningful when both checksums were computed
/// under the same spec. Mixing specs is reported to the caller, never
/// silently coerced into a garbage result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct SpecMismatchError;

impl SpecMismatchError {
  /// Create a new spec mismatch error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for SpecMismatchError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for SpecMismatchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("checksums were computed under different polynomial specs")
  }
}

impl core::error::Error for SpecMismatchError {}
