// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the rampart crates.
//!
//! Everything here operates on raw byte images: the positional checksum that
//! covers a guarded buffer, the comparison used to check guard slots, and the
//! hex rendering used when dumping a corrupted buffer.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;

/// Computes the positional weighted checksum of a byte image.
///
/// The byte at offset `i` (0-indexed) contributes `(i + 1) * byte` to the sum.
/// Arithmetic wraps on overflow. Weighting by position means that swapping two
/// bytes changes the result, which a plain sum would miss.
///
/// This is a tripwire for accidental overwrites, not a cryptographic digest.
///
/// # Example
///
/// ```
/// use rampart_util::weighted_checksum;
///
/// assert_eq!(weighted_checksum(&[]), 0);
/// assert_eq!(weighted_checksum(&[1, 2, 3]), 1 * 1 + 2 * 2 + 3 * 3);
/// assert_ne!(weighted_checksum(&[1, 2]), weighted_checksum(&[2, 1]));
/// ```
#[inline]
pub fn weighted_checksum(bytes: &[u8]) -> u64 {
    bytes.iter().enumerate().fold(0u64, |acc, (i, &byte)| {
        acc.wrapping_add((i as u64 + 1).wrapping_mul(u64::from(byte)))
    })
}

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// The comparison time does not depend on where the first difference occurs.
///
/// # Example
///
/// ```
/// use rampart_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Renders bytes as a `0x`-prefixed lowercase hex string.
///
/// # Example
///
/// ```
/// use rampart_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "0xdeadbeef");
/// assert_eq!(bytes_to_hex(&[]), "0x");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Splits `slice` into `chunk`-sized slots and returns the `index`-th slot.
///
/// Returns `None` when the slot would run past the end of the slice or when
/// `chunk` is zero.
///
/// # Example
///
/// ```
/// use rampart_util::slot;
///
/// let bytes = [0u8, 1, 2, 3, 4, 5];
/// assert_eq!(slot(&bytes, 2, 1), Some(&[2u8, 3][..]));
/// assert_eq!(slot(&bytes, 2, 3), None);
/// ```
#[inline]
pub fn slot(slice: &[u8], chunk: usize, index: usize) -> Option<&[u8]> {
    if chunk == 0 {
        return None;
    }
    let start = index.checked_mul(chunk)?;
    let end = start.checked_add(chunk)?;
    slice.get(start..end)
}

/// Mutable counterpart of [`slot`].
#[inline]
pub fn slot_mut(slice: &mut [u8], chunk: usize, index: usize) -> Option<&mut [u8]> {
    if chunk == 0 {
        return None;
    }
    let start = index.checked_mul(chunk)?;
    let end = start.checked_add(chunk)?;
    slice.get_mut(start..end)
}
