// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte images of stack elements.

use core::fmt::Debug;

/// A plain fixed-size value that can be stored in a guarded buffer.
///
/// The stack keeps its slots as raw bytes so that guard slots can hold
/// arbitrary sentinel patterns and the checksum can cover every byte.
/// `Element` converts between a value and its little-endian byte image.
///
/// # Contract
///
/// - `write_bytes` receives exactly [`SIZE`](Element::SIZE) bytes and must
///   fill all of them.
/// - `read_bytes` must be total: it may be handed any bit pattern (e.g. while
///   dumping a corrupted buffer) and must never panic. Missing trailing bytes
///   read as zero.
///
/// # Example
///
/// ```rust
/// use rampart::Element;
///
/// let mut image = [0u8; 4];
/// 0x0102_0304u32.write_bytes(&mut image);
/// assert_eq!(image, [4, 3, 2, 1]);
/// assert_eq!(u32::read_bytes(&image), 0x0102_0304);
///
/// // Invalid scalar values decode to U+FFFD instead of panicking.
/// assert_eq!(char::read_bytes(&[0xFF; 4]), char::REPLACEMENT_CHARACTER);
/// ```
pub trait Element: Copy + PartialEq + Debug {
    /// Size of the byte image in bytes.
    const SIZE: usize;

    /// Writes the byte image of `self` into `dst`.
    fn write_bytes(&self, dst: &mut [u8]);

    /// Decodes a value from a byte image.
    fn read_bytes(src: &[u8]) -> Self;
}

/// Copies `src` into a fixed array, zero-padding when `src` is short.
#[inline(always)]
fn padded<const N: usize>(src: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    let n = src.len().min(N);
    buf[..n].copy_from_slice(&src[..n]);
    buf
}

/// Implements [`Element`] for types with `to_le_bytes`/`from_le_bytes`.
macro_rules! impl_element_le {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const SIZE: usize = core::mem::size_of::<$t>();

                #[inline(always)]
                fn write_bytes(&self, dst: &mut [u8]) {
                    dst.copy_from_slice(&self.to_le_bytes());
                }

                #[inline(always)]
                fn read_bytes(src: &[u8]) -> Self {
                    <$t>::from_le_bytes(padded(src))
                }
            }
        )*
    };
}

impl_element_le!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl Element for bool {
    const SIZE: usize = 1;

    #[inline(always)]
    fn write_bytes(&self, dst: &mut [u8]) {
        dst[0] = u8::from(*self);
    }

    #[inline(always)]
    fn read_bytes(src: &[u8]) -> Self {
        src.first().is_some_and(|&b| b != 0)
    }
}

impl Element for char {
    const SIZE: usize = 4;

    #[inline(always)]
    fn write_bytes(&self, dst: &mut [u8]) {
        dst.copy_from_slice(&u32::from(*self).to_le_bytes());
    }

    #[inline(always)]
    fn read_bytes(src: &[u8]) -> Self {
        char::from_u32(u32::from_le_bytes(padded(src))).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl<T: Element, const N: usize> Element for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn write_bytes(&self, dst: &mut [u8]) {
        for (item, chunk) in self.iter().zip(dst.chunks_exact_mut(T::SIZE.max(1))) {
            item.write_bytes(chunk);
        }
    }

    fn read_bytes(src: &[u8]) -> Self {
        core::array::from_fn(|i| {
            let start = i * T::SIZE;
            let item = src.get(start..).unwrap_or(&[]);
            T::read_bytes(&item[..item.len().min(T::SIZE)])
        })
    }
}
