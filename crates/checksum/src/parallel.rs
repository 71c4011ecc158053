//! Segmented checksum computation utilities.
//!
//! The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and
//! `len(B)` in O(log n) time. These helpers merge per-segment checksums into
//! the checksum of the whole, so a large buffer can be partitioned into
//! contiguous segments, checksummed on independent workers, and reduced
//! without reprocessing any bytes.
//!
//! This module does not add any dependencies or spawn anything itself: users
//! bring their own parallelism (threads, rayon, remote workers) and use these
//! helpers to merge results. All functions work in `no_std` environments.
//!
//! # Example
//!
//! ```
//! use checksum::{Checksum, Crc64Nvme, parallel::checksum_chunks};
//!
//! let data = b"The quick brown fox jumps over the lazy dog";
//! let chunks: [&[u8]; 3] = [&data[..16], &data[16..32], &data[32..]];
//!
//! assert_eq!(checksum_chunks::<Crc64Nvme>(&chunks), Crc64Nvme::checksum(data));
//! ```

use traits::{Checksum, ChecksumCombine};

/// Compute the checksum of chunked data by combining per-chunk checksums.
///
/// Equivalent to checksumming the concatenation of `chunks` in order.
/// An empty chunk list yields the checksum of empty data.
///
/// # Complexity
///
/// - Checksum computation: O(total bytes)
/// - Combine operations: O(n × log(max chunk len)) for n chunks
#[inline]
#[must_use]
pub fn checksum_chunks<C: ChecksumCombine>(chunks: &[&[u8]]) -> C::Output {
  let Some((first, rest)) = chunks.split_first() else {
    return C::checksum(&[]);
  };

  let mut result = C::checksum(first);
  for chunk in rest {
    let chunk_crc = C::checksum(chunk);
    result = C::combine(result, chunk_crc, chunk.len());
  }

  result
}

/// Merge pre-computed `(checksum, length)` pairs into one checksum.
///
/// The pairs must be in segment order; the lengths are the byte lengths of
/// the segments the checksums were computed over. Segments may have been
/// checksummed anywhere - another thread, another process, another machine.
/// An empty list yields the checksum of empty data.
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Crc32, parallel::combine_checksums};
///
/// let data = b"hello world";
/// let (a, b) = data.split_at(6);
///
/// // Computed separately (possibly in parallel).
/// let parts = [
///   (Crc32::checksum(a), a.len()),
///   (Crc32::checksum(b), b.len()),
/// ];
///
/// assert_eq!(combine_checksums::<Crc32>(&parts), Crc32::checksum(data));
/// ```
#[inline]
#[must_use]
pub fn combine_checksums<C: ChecksumCombine>(checksums: &[(C::Output, usize)]) -> C::Output {
  let Some(((first, _), rest)) = checksums.split_first() else {
    return C::checksum(&[]);
  };

  let mut result = *first;
  for &(crc, len) in rest {
    result = C::combine(result, crc, len);
  }

  result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
