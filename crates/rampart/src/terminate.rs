// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! How the process ends once corruption is detected.

/// Ends execution after a corruption dump. Never returns.
pub trait Terminator {
    /// Terminates with the given status code.
    fn terminate(&mut self, code: i32) -> !;
}

/// Exits the process with the given status. The default terminator.
///
/// Destructors of other live objects do not run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&mut self, code: i32) -> ! {
        std::process::exit(code)
    }
}

/// Aborts the process (SIGABRT on Unix); the status code is ignored.
///
/// Useful when a core dump of the corrupted state is wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessAbort;

impl Terminator for ProcessAbort {
    fn terminate(&mut self, _code: i32) -> ! {
        std::process::abort()
    }
}

/// Panics instead of ending the process.
///
/// Lets in-process tests observe fail-fast behaviour with `#[should_panic]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicTerminator;

impl Terminator for PanicTerminator {
    fn terminate(&mut self, code: i32) -> ! {
        panic!("ValidatedStack corruption detected (exit code {})", code)
    }
}
