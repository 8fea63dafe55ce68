// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_rand
//!
//! Random byte sources used to generate guard-slot sentinels.
//!
//! Sentinels only need to be unlikely to match whatever garbage an overrun
//! writes over them, so any source works. The OS CSPRNG is the default; a
//! seeded xorshift source makes sentinel values reproducible.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`XorShiftEntropySource`]: seeded xorshift64 generator
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for byte sources
//!
//! ## Example
//!
//! ```rust
//! use rampart_rand::{EntropySource, SystemEntropySource, XorShiftEntropySource};
//!
//! let mut sentinel = [0u8; 8];
//! SystemEntropySource {}
//!     .fill_bytes(&mut sentinel)
//!     .expect("Failed to generate entropy");
//!
//! let seeded = XorShiftEntropySource::from_seed(42);
//! seeded.fill_bytes(&mut sentinel).expect("xorshift never fails");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;
mod xorshift;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;
pub use xorshift::XorShiftEntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
