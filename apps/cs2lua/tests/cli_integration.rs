//! Integration tests for the cs2lua launcher binary.
//!
//! These tests spawn the compiled executable and validate behavior through
//! stdout, stderr, and exit codes. No real translation runs: the engine
//! binary is substituted through the `CS2LUAC_PATH` override, either with a
//! path that does not exist (to pin down the error surface) or, on unix,
//! with a stub script (to drive the success path end to end).

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn cs2lua() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("cs2lua"))
}

/// Writes an executable stub engine into `dir` and returns its path.
#[cfg(unix)]
fn stub_engine(dir: &assert_fs::TempDir, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.child("cs2luac");
    script.write_str(&format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(script.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
    script.path().to_path_buf()
}

#[test]
fn no_arguments_prints_help_and_fails() {
    cs2lua()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: cs2lua"));
}

#[test]
fn help_flag_prints_help_and_succeeds() {
    cs2lua()
        .arg("-h")
        .assert()
        .success()
        .stderr(predicate::str::contains("Usage: cs2lua"));
}

#[test]
fn help_flag_wins_over_required_flag_checks() {
    // No -s/-d supplied; -h must short-circuit before the required reads.
    cs2lua()
        .args(["-c", "-h"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Usage: cs2lua"));
}

#[test]
fn missing_output_dir_reports_the_flag_with_usage() {
    cs2lua()
        .args(["-s", "src"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required argument -d is not found"))
        .stderr(predicate::str::contains("Usage: cs2lua"));
}

#[test]
fn dangling_value_flag_reports_a_syntax_error() {
    cs2lua()
        .args(["-d", "out", "-s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing value for argument -s"))
        .stderr(predicate::str::contains("Usage: cs2lua"));
}

#[test]
fn missing_engine_override_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    cs2lua()
        .env("CS2LUAC_PATH", "/nonexistent/path/to/cs2luac")
        .args(["-s", temp.path().to_str().unwrap(), "-d", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CS2LUAC_PATH"));
}

#[cfg(unix)]
#[test]
fn successful_translation_reports_completion() {
    let temp = assert_fs::TempDir::new().unwrap();
    let engine = stub_engine(&temp, "exit 0");

    cs2lua()
        .env("CS2LUAC_PATH", engine)
        .args(["-s", "src", "-d", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("translating src -> out"))
        .stdout(predicate::str::contains("translation completed"));
}

#[cfg(unix)]
#[test]
fn engine_receives_the_captured_compiler_arguments() {
    let temp = assert_fs::TempDir::new().unwrap();
    // The stub appends its argument vector to a file the test inspects.
    let log = temp.child("args.log");
    let engine = stub_engine(
        &temp,
        &format!("echo \"$@\" > {}\nexit 0", log.path().display()),
    );

    cs2lua()
        .env("CS2LUAC_PATH", engine)
        .args(["-s", "src", "-d", "out", "-c", "-csc", "-define:DEBUG", "-warn:4"])
        .assert()
        .success();

    let recorded = std::fs::read_to_string(log.path()).unwrap();
    assert!(recorded.contains("-s src -d out"));
    assert!(recorded.contains("--csc -define:DEBUG -warn:4"));
    assert!(recorded.contains("--classic"));
}

#[cfg(unix)]
#[test]
fn engine_exit_code_is_mirrored() {
    let temp = assert_fs::TempDir::new().unwrap();
    let engine = stub_engine(&temp, "echo 'translation error' >&2\nexit 3");

    cs2lua()
        .env("CS2LUAC_PATH", engine)
        .args(["-s", "src", "-d", "out"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("translation error"));
}
