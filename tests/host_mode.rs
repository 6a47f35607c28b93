//! Drives the demo binaries as a supervising process would: exit code for
//! the outcome, stderr for the diagnostic.

#![cfg(not(all(target_arch = "arm", target_os = "none")))]

use std::process::{Command, Output};

fn run(bin: &str) -> Output {
    Command::new(bin)
        .env_remove("UNIT_LOG")
        .output()
        .expect("failed to spawn demo binary")
}

fn text(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).expect("output is not utf-8")
}

#[cfg(not(feature = "disable-assertions"))]
#[test]
fn passing_run_exits_zero_quietly() {
    let out = run(env!("CARGO_BIN_EXE_unit-pass"));
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(text(&out.stderr), "");
}

#[cfg(not(feature = "disable-assertions"))]
#[test]
fn first_failure_stops_the_run() {
    let out = run(env!("CARGO_BIN_EXE_unit-fail"));
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        text(&out.stderr),
        "assertion failure in demos/fail.rs:14 (tests): '2 == 3'\n"
    );
    assert_eq!(text(&out.stdout), "first check held\n");
}

#[cfg(not(feature = "disable-assertions"))]
#[test]
fn log_level_comes_from_environment() {
    let out = Command::new(env!("CARGO_BIN_EXE_unit-pass"))
        .env("UNIT_LOG", "debug")
        .output()
        .expect("failed to spawn demo binary");
    assert_eq!(out.status.code(), Some(0));
    let stderr = text(&out.stderr);
    assert!(stderr.contains("[DEBUG] running tests\n"));
    assert!(stderr.contains("[INFO] all checks held\n"));
    assert!(stderr.ends_with("[DEBUG] tests returned\n"));
}

#[test]
fn bad_log_level_falls_back() {
    let out = Command::new(env!("CARGO_BIN_EXE_unit-pass"))
        .env("UNIT_LOG", "loud")
        .output()
        .expect("failed to spawn demo binary");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        text(&out.stderr),
        "[WARN] UNIT_LOG is not a log level, using WARN\n"
    );
}

#[test]
fn panic_fails_the_run() {
    let out = run(env!("CARGO_BIN_EXE_unit-panic"));
    assert_eq!(out.status.code(), Some(1));
    let stderr = text(&out.stderr);
    assert!(stderr.contains("demos/panic.rs"));
    assert!(stderr.contains("sensor returned no reading"));
}

#[cfg(feature = "disable-assertions")]
#[test]
fn disabled_assertions_do_not_evaluate() {
    let out = run(env!("CARGO_BIN_EXE_unit-disabled"));
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(text(&out.stderr), "");
    assert_eq!(text(&out.stdout), "side_effect_flag = false\n");
}
