// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual tlmstk binary and verify its behavior.

mod common;

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use common::{sample, RecordingBuilder};

/// Get the path to the built tlmstk binary
fn tlmstk_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tlmstk"))
}

/// Run tlmstk with arguments from a working directory
fn run_in(dir: &Path, args: &[&str]) -> Output {
    let bin = tlmstk_bin();
    Command::new(&bin)
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin))
}

/// Run tlmstk and assert success
fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = run_in(dir, args);
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run tlmstk and assert failure
fn run_err(dir: &Path, args: &[&str]) -> String {
    let output = run_in(dir, args);
    assert!(
        !output.status.success(),
        "Command should have failed but succeeded: {:?}",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn two_records() -> Vec<u8> {
    RecordingBuilder::new()
        .record(sample(3600, [50000, 0, 0], [2_000_000_000, 0, 0, 0]))
        .record(sample(3605, [0, 50000, 0], [0, 2_000_000_000, 0, 0]))
        .build()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_ok(dir.path(), &["--help"]);
    assert!(output.contains("STK attitude and ephemeris"));
    assert!(output.contains("--attitude"));
    assert!(output.contains("--ephemeris"));
    assert!(output.contains("--byte-order"));
}

#[test]
fn test_cli_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_ok(dir.path(), &["--version"]);
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_cli_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("telemetry.bin"), two_records()).unwrap();

    let output = run_ok(dir.path(), &[]);
    assert!(output.contains("Records:    2"));
    assert!(output.contains("2000-01-01 00:11:23.000 UTC"));

    let attitude = fs::read_to_string(dir.path().join("Attitude.a")).unwrap();
    assert!(attitude.contains("NumberOfAttitudePoints 2\n"));
    assert!(attitude.contains("\n684.0 0.0 1.0 0.0 0.0\nEND Attitude"));

    let ephemeris = fs::read_to_string(dir.path().join("Ephemeris.e")).unwrap();
    assert!(ephemeris.contains("NumberOfEphemerisPoints 2\n"));
    assert!(ephemeris.contains("\n683.0 1.0 0.0 0.0\n"));
}

#[test]
fn test_cli_explicit_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("capture.bin"), two_records()).unwrap();

    run_ok(
        dir.path(),
        &["capture.bin", "--attitude", "sat.a", "--ephemeris", "sat.e"],
    );
    assert!(dir.path().join("sat.a").exists());
    assert!(dir.path().join("sat.e").exists());
    assert!(!dir.path().join("Attitude.a").exists());
}

#[test]
fn test_cli_reports_trailing_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = two_records();
    data.extend([0u8; 17]);
    fs::write(dir.path().join("telemetry.bin"), data).unwrap();

    let output = run_ok(dir.path(), &[]);
    assert!(output.contains("Ignored:    17 trailing bytes"));
}

#[test]
fn test_cli_big_endian() {
    let dir = tempfile::tempdir().unwrap();
    let data = RecordingBuilder::big_endian()
        .record(sample(3600, [50000, 0, 0], [0, 0, 0, 2_000_000_000]))
        .build();
    fs::write(dir.path().join("telemetry.bin"), data).unwrap();

    run_ok(dir.path(), &["--byte-order", "big"]);
    let attitude = fs::read_to_string(dir.path().join("Attitude.a")).unwrap();
    assert!(attitude.contains("\n683.0 0.0 0.0 0.0 1.0\n"));
}

#[test]
fn test_cli_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("telemetry.bin"), two_records()).unwrap();
    fs::write(
        dir.path().join("tlmstk.toml"),
        "[conversion]\ntime_offset = 0.0\n",
    )
    .unwrap();

    run_ok(dir.path(), &["--config", "tlmstk.toml"]);
    let ephemeris = fs::read_to_string(dir.path().join("Ephemeris.e")).unwrap();
    assert!(ephemeris.contains("\n720.0 1.0 0.0 0.0\n"));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_cli_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let stderr = run_err(dir.path(), &[]);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("telemetry.bin"));
}

#[test]
fn test_cli_invalid_byte_order() {
    let dir = tempfile::tempdir().unwrap();
    let stderr = run_err(dir.path(), &["--byte-order", "middle"]);
    assert!(stderr.contains("invalid byte order"));
}

#[test]
fn test_cli_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("telemetry.bin"), two_records()).unwrap();
    fs::write(dir.path().join("bad.toml"), "[layout]\nblock_size = 8\n").unwrap();

    let stderr = run_err(dir.path(), &["--config", "bad.toml"]);
    assert!(stderr.contains("Invalid configuration"));
}
