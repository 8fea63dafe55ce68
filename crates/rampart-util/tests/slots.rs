// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod slot_tests {
    use rampart_util::{bytes_to_hex, slot, slot_mut};

    #[test]
    fn test_slot_first_and_last() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(slot(&bytes, 4, 0), Some(&[1u8, 2, 3, 4][..]));
        assert_eq!(slot(&bytes, 4, 1), Some(&[5u8, 6, 7, 8][..]));
    }

    #[test]
    fn test_slot_out_of_range() {
        let bytes = [0u8; 8];
        assert_eq!(slot(&bytes, 4, 2), None);
        assert_eq!(slot(&bytes, 3, 2), None);
    }

    #[test]
    fn test_slot_zero_chunk() {
        let bytes = [0u8; 8];
        assert_eq!(slot(&bytes, 0, 0), None);
    }

    #[test]
    fn test_slot_index_overflow() {
        let bytes = [0u8; 8];
        assert_eq!(slot(&bytes, 2, usize::MAX), None);
    }

    #[test]
    fn test_slot_mut_writes_through() {
        let mut bytes = [0u8; 6];
        if let Some(middle) = slot_mut(&mut bytes, 2, 1) {
            middle.copy_from_slice(&[0xAA, 0xBB]);
        }
        assert_eq!(bytes, [0, 0, 0xAA, 0xBB, 0, 0]);
    }

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xf0, 0xff]), "0x000ff0ff");
        assert_eq!(bytes_to_hex(&[]), "0x");
    }
}
