// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Where corruption dumps go.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Line-oriented destination for corruption dumps.
///
/// Only written to on the corruption path, right before termination.
pub trait DiagnosticSink {
    /// Writes one line of diagnostic output.
    fn write_line(&mut self, line: &str);
}

/// Writes dump lines to standard error. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn write_line(&mut self, line: &str) {
        // Nothing useful can be done if stderr is gone; termination follows anyway.
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

/// Collects dump lines in memory.
///
/// Clones share the same buffer, so a handle kept by the caller sees lines
/// written through the copy installed into a stack.
///
/// # Example
///
/// ```rust
/// use rampart::{DiagnosticSink, MemorySink};
///
/// let sink = MemorySink::default();
/// let mut installed = sink.clone();
/// installed.write_line("hello");
///
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Returns a copy of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Drops every collected line.
    pub fn clear(&self) {
        match self.lines.lock() {
            Ok(mut lines) => lines.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line(&mut self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_owned()),
            Err(poisoned) => poisoned.into_inner().push(line.to_owned()),
        }
    }
}
