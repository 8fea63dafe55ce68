// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod weighted_checksum_tests {
    use proptest::prelude::*;
    use rampart_util::weighted_checksum;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(weighted_checksum(&[]), 0);
    }

    #[test]
    fn test_all_zero_bytes_is_zero() {
        assert_eq!(weighted_checksum(&[0u8; 64]), 0);
    }

    #[test]
    fn test_weights_are_one_based() {
        // 1*10 + 2*20 + 3*30
        assert_eq!(weighted_checksum(&[10, 20, 30]), 140);
    }

    #[test]
    fn test_bytes_are_unsigned() {
        // 0xFF must weigh 255, never -1.
        assert_eq!(weighted_checksum(&[0xFF]), 255);
        assert_eq!(weighted_checksum(&[0, 0xFF]), 510);
    }

    #[test]
    fn test_swapped_bytes_change_checksum() {
        assert_ne!(weighted_checksum(&[1, 2, 3]), weighted_checksum(&[3, 2, 1]));
    }

    proptest! {
        #[test]
        fn prop_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(weighted_checksum(&bytes), weighted_checksum(&bytes));
        }

        #[test]
        fn prop_single_byte_flip_detected(
            bytes in proptest::collection::vec(any::<u8>(), 1..512),
            index in any::<prop::sample::Index>(),
            delta in 1u8..=255,
        ) {
            let i = index.index(bytes.len());
            let mut flipped = bytes.clone();
            flipped[i] = flipped[i].wrapping_add(delta);

            // A single-byte change shifts the sum by (i + 1) * d with |d| < 256,
            // which cannot wrap to zero for buffers of this size.
            prop_assert_ne!(weighted_checksum(&bytes), weighted_checksum(&flipped));
        }
    }
}
