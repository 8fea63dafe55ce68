// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::any::type_name;
use core::fmt;

use rampart_rand::{EntropySource, SystemEntropySource};
use rampart_util::bytes_to_hex;

use crate::config::StackConfig;
use crate::diagnostics::{DiagnosticSink, StderrSink};
use crate::element::Element;
use crate::error::{StackError, verdict};
use crate::storage::GuardedStorage;
use crate::terminate::{ProcessExit, Terminator};

/// A stack that checks its own storage for corruption on every operation.
///
/// The elements live between two guard slots holding random sentinels, and a
/// positional checksum covers the whole buffer. Every public operation
/// validates on entry, performs its work, reseals the checksum and validates
/// again before returning.
///
/// Two modes share the same checks:
///
/// - **Fail-fast** ([`push`](Self::push), [`pop`](Self::pop),
///   [`peek`](Self::peek), [`destroy`](Self::destroy), `Drop`): on
///   corruption the state is dumped to the [`DiagnosticSink`] and the
///   [`Terminator`] ends the process with the configured exit code
///   (default `123`). Popping an empty stack panics.
/// - **Result** ([`try_push`](Self::try_push), [`try_pop`](Self::try_pop),
///   [`try_peek`](Self::try_peek), [`try_destroy`](Self::try_destroy)):
///   failures come back as [`StackError`].
///
/// Dropping a stack validates it too. Use [`try_destroy`](Self::try_destroy)
/// to tear down a stack whose corruption was already reported.
///
/// # Example
///
/// ```rust
/// use rampart::ValidatedStack;
///
/// let mut stack = ValidatedStack::with_capacity(2);
/// stack.push(10u32);
/// stack.push(20);
/// stack.push(30); // grows
///
/// assert_eq!(stack.pop(), 30);
/// assert_eq!(stack.pop(), 20);
/// assert_eq!(stack.pop(), 10);
/// assert!(stack.is_empty());
/// ```
pub struct ValidatedStack<T: Element, E: EntropySource = SystemEntropySource> {
    storage: GuardedStorage<T>,
    len: usize,
    entropy: E,
    config: StackConfig,
    sink: Box<dyn DiagnosticSink + Send>,
    terminator: Box<dyn Terminator + Send>,
    reallocations: usize,
    armed: bool,
}

impl<T: Element> ValidatedStack<T> {
    /// Creates a stack with the default logical capacity (8).
    ///
    /// # Panics
    ///
    /// Panics if the system entropy source fails or `T` is zero-sized.
    pub fn new() -> Self {
        Self::with_config(StackConfig::default())
    }

    /// Creates a stack with room for `initial_capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the system entropy source fails or `T` is zero-sized.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::with_config(StackConfig::default().with_initial_capacity(initial_capacity))
    }

    /// Creates a stack from `config`, drawing sentinels from the OS.
    ///
    /// # Panics
    ///
    /// Panics if the system entropy source fails or `T` is zero-sized.
    pub fn with_config(config: StackConfig) -> Self {
        Self::with_entropy(config, SystemEntropySource {})
    }

    /// Fallible counterpart of [`with_config`](Self::with_config).
    pub fn try_with_config(config: StackConfig) -> Result<Self, StackError> {
        Self::try_with_entropy(config, SystemEntropySource {})
    }
}

impl<T: Element> Default for ValidatedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, E: EntropySource> ValidatedStack<T, E> {
    /// Creates a stack that draws its sentinels from `entropy`.
    ///
    /// # Panics
    ///
    /// Panics if `entropy` fails or `T` is zero-sized.
    pub fn with_entropy(config: StackConfig, entropy: E) -> Self {
        match Self::try_with_entropy(config, entropy) {
            Ok(stack) => stack,
            Err(err) => panic!("failed to build ValidatedStack: {}", err),
        }
    }

    /// Fallible counterpart of [`with_entropy`](Self::with_entropy).
    ///
    /// # Errors
    ///
    /// - [`StackError::ZeroSizedElement`] if `T::SIZE == 0`.
    /// - [`StackError::Entropy`] if sentinel generation fails.
    pub fn try_with_entropy(config: StackConfig, entropy: E) -> Result<Self, StackError> {
        if T::SIZE == 0 {
            return Err(StackError::ZeroSizedElement);
        }

        let storage = GuardedStorage::allocate(config.initial_capacity, &entropy)?;

        Ok(Self {
            storage,
            len: 0,
            entropy,
            config,
            sink: Box::new(StderrSink),
            terminator: Box::new(ProcessExit),
            reallocations: 0,
            armed: true,
        })
    }

    /// Replaces the diagnostic sink.
    pub fn set_sink(&mut self, sink: impl DiagnosticSink + Send + 'static) {
        self.sink = Box::new(sink);
    }

    /// Replaces the terminator.
    pub fn set_terminator(&mut self, terminator: impl Terminator + Send + 'static) {
        self.terminator = Box::new(terminator);
    }

    /// Builder-style [`set_sink`](Self::set_sink).
    pub fn with_sink(mut self, sink: impl DiagnosticSink + Send + 'static) -> Self {
        self.set_sink(sink);
        self
    }

    /// Builder-style [`set_terminator`](Self::set_terminator).
    pub fn with_terminator(mut self, terminator: impl Terminator + Send + 'static) -> Self {
        self.set_terminator(terminator);
        self
    }

    // =========================================================================
    // Inspection (never validates)
    // =========================================================================

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Usable slots before the next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.logical_capacity()
    }

    /// Number of times the buffer has been reallocated.
    #[inline]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Settings the stack was built with.
    #[inline]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Raw byte image of the buffer, guard slots included.
    ///
    /// Slot `i` occupies bytes `i * T::SIZE..(i + 1) * T::SIZE`; slot 0 is
    /// the front guard and the last slot the back guard.
    #[inline]
    pub fn storage(&self) -> &[u8] {
        self.storage.bytes()
    }

    /// Mutable raw byte image, for corruption-injection tests.
    ///
    /// Writing through this slice bypasses resealing, so any change is seen
    /// as corruption by the next operation.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn storage_mut(&mut self) -> &mut [u8] {
        self.storage.bytes_mut()
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Returns `true` if both sentinels are intact and the checksum matches.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.storage.inspect().is_ok()
    }

    /// Validates the storage.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Corrupted`] with the individual verdicts.
    pub fn validate(&self) -> Result<(), StackError> {
        let report = self.storage.inspect();

        if report.is_ok() {
            return Ok(());
        }

        tracing::error!(
            front_sentinel_ok = report.front_sentinel_ok,
            back_sentinel_ok = report.back_sentinel_ok,
            expected_checksum = report.expected_checksum,
            actual_checksum = report.actual_checksum,
            "ValidatedStack<{}> corrupted",
            type_name::<T>()
        );

        Err(StackError::Corrupted(report))
    }

    // =========================================================================
    // Result mode
    // =========================================================================

    /// Pushes `value`, growing the buffer if it is full.
    ///
    /// # Errors
    ///
    /// - [`StackError::Corrupted`] if validation fails before or after.
    /// - [`StackError::Entropy`] if growing needs sentinels and the source fails.
    pub fn try_push(&mut self, value: T) -> Result<(), StackError> {
        self.validate()?;

        if self.len == self.storage.logical_capacity() {
            self.grow()?;
            self.validate()?;
        }

        self.storage.write(self.len, &value);
        self.len += 1;
        self.storage.reseal();

        self.validate()
    }

    /// Removes and returns the top element.
    ///
    /// The slot keeps its bytes until a later push overwrites it.
    ///
    /// # Errors
    ///
    /// - [`StackError::Corrupted`] if validation fails before or after.
    /// - [`StackError::Empty`] if there is nothing to pop.
    pub fn try_pop(&mut self) -> Result<T, StackError> {
        self.validate()?;

        if self.is_empty() {
            return Err(StackError::Empty);
        }

        self.len -= 1;
        self.validate()?;

        Ok(self.storage.read(self.len))
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// - [`StackError::Corrupted`] if validation fails.
    /// - [`StackError::Empty`] if there is nothing to peek at.
    pub fn try_peek(&self) -> Result<T, StackError> {
        self.validate()?;

        match self.len.checked_sub(1) {
            Some(top) => Ok(self.storage.read(top)),
            None => Err(StackError::Empty),
        }
    }

    /// Validates and releases the stack without ever terminating.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Corrupted`] if the final validation fails; the
    /// buffer is released either way.
    pub fn try_destroy(mut self) -> Result<(), StackError> {
        self.armed = false;
        self.validate()
    }

    // =========================================================================
    // Fail-fast mode
    // =========================================================================

    /// Pushes `value`, growing the buffer if it is full.
    ///
    /// Terminates the process on corruption.
    ///
    /// # Panics
    ///
    /// Panics if growing needs sentinels and the entropy source fails.
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            self.fail(err)
        }
    }

    /// Removes and returns the top element.
    ///
    /// Terminates the process on corruption.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Ok(value) => value,
            Err(err) => self.fail(err),
        }
    }

    /// Returns the top element, or `None` if the stack is empty.
    ///
    /// Terminates the process on corruption.
    pub fn peek(&mut self) -> Option<T> {
        match self.try_peek() {
            Ok(value) => Some(value),
            Err(StackError::Empty) => None,
            Err(err) => self.fail(err),
        }
    }

    /// Validates and releases the stack.
    ///
    /// Terminates the process on corruption instead of completing.
    pub fn destroy(self) {
        drop(self)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Renders the full integrity state, one line per entry.
    ///
    /// Data slots are decoded whatever they contain; the slot just past the
    /// top is marked `(POISON)`.
    pub fn diagnostic_lines(&self) -> Vec<String> {
        let report = self.storage.inspect();
        let capacity = self.storage.logical_capacity();
        let mut lines = Vec::with_capacity(capacity + 8);

        lines.push(format!(
            "ValidatedStack<{}> [{:p}] ({}) {{",
            type_name::<T>(),
            self,
            verdict(report.is_ok())
        ));
        lines.push(format!(
            "\tfront sentinel = {}; expected {} ({})",
            bytes_to_hex(self.storage.front_guard_bytes()),
            bytes_to_hex(self.storage.front_sentinel()),
            verdict(report.front_sentinel_ok)
        ));
        lines.push(format!(
            "\tback sentinel = {}; expected {} ({})",
            bytes_to_hex(self.storage.back_guard_bytes()),
            bytes_to_hex(self.storage.back_sentinel()),
            verdict(report.back_sentinel_ok)
        ));
        lines.push(format!(
            "\tchecksum = {}; expected {} ({})",
            report.actual_checksum,
            report.expected_checksum,
            verdict(report.checksum_ok())
        ));
        lines.push(format!("\tdata[{}] (len {}) {{", capacity, self.len));
        for index in 0..capacity {
            let poison = if index == self.len { " (POISON)" } else { "" };
            lines.push(format!(
                "\t\t[{}]: {:?}{}",
                index,
                self.storage.read(index),
                poison
            ));
        }
        lines.push("\t}".to_owned());
        lines.push("}".to_owned());

        lines
    }

    /// Writes [`diagnostic_lines`](Self::diagnostic_lines) to the installed
    /// sink, mirroring each line as a `tracing` error event.
    pub fn diagnose(&mut self) {
        for line in self.diagnostic_lines() {
            tracing::error!(target: "rampart::diagnose", "{}", line);
            self.sink.write_line(&line);
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Doubles the logical capacity (at least one slot) with fresh sentinels.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), StackError> {
        let old_capacity = self.storage.logical_capacity();
        let new_capacity = old_capacity
            .checked_mul(2)
            .unwrap_or_else(|| panic!("capacity overflow"))
            .max(1);

        self.storage = self.storage.grown(new_capacity, self.len, &self.entropy)?;
        self.reallocations += 1;

        tracing::debug!(
            old_capacity,
            new_capacity,
            len = self.len,
            "ValidatedStack<{}> reallocated",
            type_name::<T>()
        );

        Ok(())
    }

    fn fail(&mut self, err: StackError) -> ! {
        match err {
            StackError::Corrupted(_) => self.abort_corrupted(),
            StackError::Empty => panic!("pop from an empty ValidatedStack"),
            other => panic!("ValidatedStack operation failed: {}", other),
        }
    }

    #[cold]
    #[inline(never)]
    fn abort_corrupted(&mut self) -> ! {
        // The object is never used again; keep Drop from re-reporting.
        self.armed = false;
        self.diagnose();
        self.sink.write_line("ValidatedStack invalid!");

        let code = self.config.corruption_exit_code;
        self.terminator.terminate(code)
    }
}

impl<T: Element, E: EntropySource> Drop for ValidatedStack<T, E> {
    fn drop(&mut self) {
        if !self.armed || std::thread::panicking() {
            return;
        }

        if !self.is_valid() {
            self.abort_corrupted();
        }
    }
}

impl<T: Element, E: EntropySource> fmt::Debug for ValidatedStack<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedStack")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("reallocations", &self.reallocations)
            .finish_non_exhaustive()
    }
}
