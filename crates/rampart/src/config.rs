// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Logical capacity of a stack built with [`StackConfig::default`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Exit status used when corruption is detected in fail-fast mode.
pub const CORRUPTION_EXIT_CODE: i32 = 123;

/// Construction-time settings for a [`ValidatedStack`](crate::ValidatedStack).
///
/// # Example
///
/// ```rust
/// use rampart::{StackConfig, ValidatedStack};
///
/// let config = StackConfig::default()
///     .with_initial_capacity(32)
///     .with_corruption_exit_code(70);
///
/// let stack = ValidatedStack::<u64>::with_config(config);
/// assert_eq!(stack.capacity(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    /// Usable slots allocated up front (guard slots not included).
    pub initial_capacity: usize,
    /// Status handed to the terminator on detected corruption.
    pub corruption_exit_code: i32,
}

impl StackConfig {
    /// Sets the initial logical capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the exit status used on corruption.
    pub fn with_corruption_exit_code(mut self, code: i32) -> Self {
        self.corruption_exit_code = code;
        self
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            corruption_exit_code: CORRUPTION_EXIT_CODE,
        }
    }
}
