// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Exit status and error output of the built binary.

use std::process::{Command, Output};

fn ftuart(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ftuart"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ftuart")
}

// --- Parse failures ---

#[test]
fn test_bad_hex_count_exits_non_zero() {
    let output = ftuart(&["--read", "ZZ"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("parse error"), "stderr: {}", stderr);
    assert!(stderr.contains("ZZ"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bad_base_exits_non_zero() {
    let output = ftuart(&["--read", "10", "99"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("invalid base 99"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_write_missing_data_is_a_usage_error() {
    let output = ftuart(&["--write", "100"]);

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}
