// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart.

use core::fmt;

use rampart_rand::EntropyError;
use thiserror::Error;

/// Outcome of a single integrity inspection.
///
/// Each signal is recorded separately so a dump can say which one tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorruptionReport {
    /// Whether the front guard slot still holds its sentinel.
    pub front_sentinel_ok: bool,
    /// Whether the back guard slot still holds its sentinel.
    pub back_sentinel_ok: bool,
    /// Checksum stored after the last mutation.
    pub expected_checksum: u64,
    /// Checksum recomputed from the current buffer contents.
    pub actual_checksum: u64,
}

impl CorruptionReport {
    /// Whether the checksums agree.
    #[inline]
    pub fn checksum_ok(&self) -> bool {
        self.expected_checksum == self.actual_checksum
    }

    /// Whether every signal is intact.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.front_sentinel_ok && self.back_sentinel_ok && self.checksum_ok()
    }
}

pub(crate) fn verdict(ok: bool) -> &'static str {
    if ok { "ok" } else { "error" }
}

impl fmt::Display for CorruptionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "front sentinel {}, back sentinel {}, checksum {} (expected {}, actual {})",
            verdict(self.front_sentinel_ok),
            verdict(self.back_sentinel_ok),
            verdict(self.checksum_ok()),
            self.expected_checksum,
            self.actual_checksum,
        )
    }
}

/// Errors returned by the result-mode stack operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Integrity check failed; the contents cannot be trusted.
    #[error("storage corrupted: {0}")]
    Corrupted(CorruptionReport),

    /// The operation needs at least one element.
    #[error("stack is empty")]
    Empty,

    /// Sentinel generation failed.
    #[error("EntropyError: {0}")]
    Entropy(#[from] EntropyError),

    /// The element type has no byte image to guard.
    #[error("zero-sized element types cannot be guarded")]
    ZeroSizedElement,
}

