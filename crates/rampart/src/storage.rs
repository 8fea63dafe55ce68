// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Guarded byte storage: the slots, their canaries and the checksum.
//!
//! Layout, in slots of `T::SIZE` bytes:
//!
//! ```text
//! [ FRONT | data 0 | data 1 | ... | data n-1 | BACK ]
//!   slot 0                                     slot n+1
//! ```
//!
//! The guard slots hold random sentinels. The checksum covers every byte,
//! guard slots included.

use core::marker::PhantomData;
use core::ops::Range;

use rampart_rand::{EntropyError, EntropySource};
use rampart_util::{constant_time_eq, slot, slot_mut, weighted_checksum};

use crate::element::Element;
use crate::error::CorruptionReport;

/// Slot index of the front guard.
pub(crate) const FRONT_GUARD: usize = 0;
/// Guard slots per buffer (front + back).
pub(crate) const GUARD_SLOTS: usize = 2;

pub(crate) struct GuardedStorage<T: Element> {
    bytes: Vec<u8>,
    slots: usize,
    front_sentinel: Vec<u8>,
    back_sentinel: Vec<u8>,
    checksum: u64,
    _marker: PhantomData<T>,
}

impl<T: Element> GuardedStorage<T> {
    /// Allocates zeroed storage for `logical_capacity` elements, draws fresh
    /// sentinels into the guard slots and seals the checksum.
    pub(crate) fn allocate<E: EntropySource>(
        logical_capacity: usize,
        entropy: &E,
    ) -> Result<Self, EntropyError> {
        let slots = logical_capacity
            .checked_add(GUARD_SLOTS)
            .unwrap_or_else(|| panic!("capacity overflow"));
        let byte_len = slots
            .checked_mul(T::SIZE)
            .unwrap_or_else(|| panic!("capacity overflow"));

        let mut storage = Self {
            bytes: vec![0u8; byte_len],
            slots,
            front_sentinel: vec![0u8; T::SIZE],
            back_sentinel: vec![0u8; T::SIZE],
            checksum: 0,
            _marker: PhantomData,
        };

        storage.generate_sentinels(entropy)?;
        storage.reseal();

        Ok(storage)
    }

    /// Slot index of the back guard.
    #[inline(always)]
    pub(crate) fn back_guard(&self) -> usize {
        self.slots - 1
    }

    /// Usable slots, guard slots excluded.
    #[inline(always)]
    pub(crate) fn logical_capacity(&self) -> usize {
        self.slots - GUARD_SLOTS
    }

    #[inline(always)]
    fn slot_range(&self, slot: usize) -> Range<usize> {
        slot * T::SIZE..(slot + 1) * T::SIZE
    }

    /// Draws a new pair of sentinels and writes them into the guard slots.
    ///
    /// Does not reseal; callers recompute the checksum afterwards.
    fn generate_sentinels<E: EntropySource>(&mut self, entropy: &E) -> Result<(), EntropyError> {
        entropy.fill_bytes(&mut self.front_sentinel)?;
        entropy.fill_bytes(&mut self.back_sentinel)?;

        let front = self.slot_range(FRONT_GUARD);
        self.bytes[front].copy_from_slice(&self.front_sentinel);
        let back = self.slot_range(self.back_guard());
        self.bytes[back].copy_from_slice(&self.back_sentinel);

        Ok(())
    }

    /// Positional weighted checksum over the whole byte image.
    #[inline]
    pub(crate) fn compute_checksum(&self) -> u64 {
        weighted_checksum(&self.bytes)
    }

    /// Stores the checksum of the current contents as the expected value.
    #[inline]
    pub(crate) fn reseal(&mut self) {
        self.checksum = self.compute_checksum();
    }

    /// Checks both guard slots and the checksum.
    pub(crate) fn inspect(&self) -> CorruptionReport {
        CorruptionReport {
            front_sentinel_ok: constant_time_eq(self.front_guard_bytes(), &self.front_sentinel),
            back_sentinel_ok: constant_time_eq(self.back_guard_bytes(), &self.back_sentinel),
            expected_checksum: self.checksum,
            actual_checksum: self.compute_checksum(),
        }
    }

    pub(crate) fn front_guard_bytes(&self) -> &[u8] {
        &self.bytes[self.slot_range(FRONT_GUARD)]
    }

    pub(crate) fn back_guard_bytes(&self) -> &[u8] {
        &self.bytes[self.slot_range(self.back_guard())]
    }

    pub(crate) fn front_sentinel(&self) -> &[u8] {
        &self.front_sentinel
    }

    pub(crate) fn back_sentinel(&self) -> &[u8] {
        &self.back_sentinel
    }

    /// Decodes data slot `index` (zero-based, guards excluded).
    ///
    /// Total for any contents; an out-of-range index decodes as zero bytes.
    #[inline]
    pub(crate) fn read(&self, index: usize) -> T {
        let bytes = index
            .checked_add(1)
            .and_then(|slot_index| slot(&self.bytes, T::SIZE, slot_index))
            .unwrap_or(&[]);
        T::read_bytes(bytes)
    }

    /// Encodes `value` into data slot `index` (zero-based, guards excluded).
    ///
    /// Does not reseal.
    #[inline]
    pub(crate) fn write(&mut self, index: usize, value: &T) {
        debug_assert!(index < self.logical_capacity());

        if let Some(dst) = slot_mut(&mut self.bytes, T::SIZE, index + 1) {
            value.write_bytes(dst);
        }
    }

    /// Builds a larger storage holding the first `live` elements of `self`.
    ///
    /// The new buffer gets fresh sentinels; the old sentinels are not carried
    /// over. The returned storage is sealed.
    pub(crate) fn grown<E: EntropySource>(
        &self,
        new_logical_capacity: usize,
        live: usize,
        entropy: &E,
    ) -> Result<Self, EntropyError> {
        debug_assert!(new_logical_capacity >= live);

        let mut grown = Self::allocate(new_logical_capacity, entropy)?;
        let data = T::SIZE..(live + 1) * T::SIZE;
        grown.bytes[data.clone()].copy_from_slice(&self.bytes[data]);
        grown.reseal();

        Ok(grown)
    }

    /// Raw byte image, guard slots included.
    #[inline]
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}
