// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::diagnostics::{DiagnosticSink, MemorySink};
use crate::error::{CorruptionReport, StackError};
use crate::stack::ValidatedStack;

// =============================================================================
// MemorySink
// =============================================================================

#[test]
fn test_memory_sink_shares_lines_between_clones() {
    let sink = MemorySink::default();
    let mut writer = sink.clone();

    writer.write_line("a");
    writer.write_line("b");

    assert_eq!(sink.lines(), vec!["a".to_string(), "b".to_string()]);

    sink.clear();
    assert!(writer.lines().is_empty());
}

// =============================================================================
// diagnostic_lines() / diagnose()
// =============================================================================

#[test]
fn test_diagnostic_lines_of_valid_stack() {
    let mut stack = ValidatedStack::<u32>::with_capacity(3);
    stack.push(7);
    stack.push(8);

    let lines = stack.diagnostic_lines();

    assert!(lines[0].starts_with("ValidatedStack<u32> [0x"));
    assert!(lines[0].ends_with("(ok) {"));
    assert!(lines[1].contains("front sentinel = 0x"));
    assert!(lines[1].ends_with("(ok)"));
    assert!(lines[2].ends_with("(ok)"));
    assert!(lines[3].starts_with("\tchecksum = "));
    assert_eq!(lines[4], "\tdata[3] (len 2) {");
    assert_eq!(lines[5], "\t\t[0]: 7");
    assert_eq!(lines[6], "\t\t[1]: 8");
    assert_eq!(lines[7], "\t\t[2]: 0 (POISON)");
    assert_eq!(lines[8], "\t}");
    assert_eq!(lines[9], "}");
}

#[test]
fn test_full_stack_has_no_poison_marker() {
    let mut stack = ValidatedStack::<u8>::with_capacity(2);
    stack.push(1);
    stack.push(2);

    let lines = stack.diagnostic_lines();

    assert!(!lines.iter().any(|l| l.contains("POISON")));
}

#[test]
fn test_diagnose_writes_to_installed_sink() {
    let sink = MemorySink::default();
    let mut stack = ValidatedStack::<i8>::with_capacity(1).with_sink(sink.clone());
    stack.push(-3);

    stack.diagnose();

    assert_eq!(sink.lines(), stack.diagnostic_lines());
    assert!(stack.is_valid());
}

// =============================================================================
// CorruptionReport / StackError display
// =============================================================================

#[test]
fn test_report_display() {
    let report = CorruptionReport {
        front_sentinel_ok: true,
        back_sentinel_ok: false,
        expected_checksum: 10,
        actual_checksum: 10,
    };

    assert!(!report.is_ok());
    assert!(report.checksum_ok());
    assert_eq!(
        report.to_string(),
        "front sentinel ok, back sentinel error, checksum ok (expected 10, actual 10)"
    );
    assert!(
        StackError::Corrupted(report)
            .to_string()
            .starts_with("storage corrupted: ")
    );
    assert_eq!(StackError::Empty.to_string(), "stack is empty");
}
