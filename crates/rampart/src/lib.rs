// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart
//!
//! A stack that refuses to run on corrupted memory.
//!
//! [`ValidatedStack`] keeps its elements in a contiguous buffer bracketed by
//! two guard slots filled with random sentinels, and covers the whole buffer
//! with a positional checksum. Every public operation checks both signals
//! before and after doing its work. A stray write from elsewhere in the
//! process (an overrun into the guard slots, a scribble over live data) is
//! caught at the next operation boundary.
//!
//! On detection the default behaviour is fail-fast: the full state is dumped
//! to stderr and the process exits with status `123`. A `Result`-returning
//! API exposes the same checks without terminating.
//!
//! ## Example: fail-fast
//!
//! ```rust
//! use rampart::ValidatedStack;
//!
//! let mut stack = ValidatedStack::new();
//! for i in 0..100u64 {
//!     stack.push(i);
//! }
//!
//! assert_eq!(stack.len(), 100);
//! assert_eq!(stack.pop(), 99);
//! ```
//!
//! ## Example: result mode
//!
//! ```rust
//! use rampart::{StackConfig, StackError, ValidatedStack};
//!
//! fn example() -> Result<(), StackError> {
//!     let mut stack = ValidatedStack::<i32>::try_with_config(StackConfig::default())?;
//!
//!     stack.try_push(-1)?;
//!     assert_eq!(stack.try_peek()?, -1);
//!     assert_eq!(stack.try_pop()?, -1);
//!     assert_eq!(stack.try_pop(), Err(StackError::Empty));
//!
//!     stack.try_destroy()
//! }
//! # example().unwrap();
//! ```
//!
//! ## Collaborators
//!
//! - [`EntropySource`](rampart_rand::EntropySource): where sentinels come from
//!   (OS CSPRNG by default, or a seeded
//!   [`XorShiftEntropySource`](rampart_rand::XorShiftEntropySource)).
//! - [`DiagnosticSink`]: where the corruption dump goes ([`StderrSink`],
//!   [`MemorySink`]).
//! - [`Terminator`]: how the process ends ([`ProcessExit`],
//!   [`ProcessAbort`], [`PanicTerminator`]).
//!
//! ## Test Utilities
//!
//! The `test-utils` feature exposes
//! [`ValidatedStack::storage_mut`] for corruption-injection tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
mod tests;

mod config;
mod diagnostics;
mod element;
mod error;
mod stack;
mod storage;
mod terminate;

pub use config::{CORRUPTION_EXIT_CODE, DEFAULT_INITIAL_CAPACITY, StackConfig};
pub use diagnostics::{DiagnosticSink, MemorySink, StderrSink};
pub use element::Element;
pub use error::{CorruptionReport, StackError};
pub use stack::ValidatedStack;
pub use terminate::{PanicTerminator, ProcessAbort, ProcessExit, Terminator};

pub use rampart_rand::{EntropyError, EntropySource, SystemEntropySource, XorShiftEntropySource};
