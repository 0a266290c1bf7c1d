//! Fatal entries terminate the process
//!
//! Each scenario re-runs this test binary filtered to a single child test.
//! The child only does its work when `CLI_LOGGER_FATAL_CHILD` is set; the
//! parent inspects the exit status and captured streams.

use rust_cli_logger::prelude::*;
use rust_cli_logger::{fatal, FATAL_EXIT_CODE};
use std::process::{Command, Output};

const CHILD_ENV: &str = "CLI_LOGGER_FATAL_CHILD";

fn run_child(test_name: &str) -> Output {
    let exe = std::env::current_exe().expect("Failed to locate test binary");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("Failed to run child test")
}

fn is_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

fn strict_logger() -> Logger {
    Logger::builder()
        .sink(StreamSink::stdio())
        .colors(false)
        .level(LogLevel::Fatal)
        .build()
}

#[test]
fn child_fatal_under_strict_threshold() {
    if !is_child() {
        return;
    }
    let logger = strict_logger();
    logger.debug("filtered debug");
    logger.info("filtered info");
    logger.done("filtered done");
    logger.warn("filtered warn");
    logger.error("filtered error");
    logger.fatal("the only entry");
}

#[test]
fn child_fatal_macro_with_fields() {
    if !is_child() {
        return;
    }
    let logger = strict_logger().with_fields(FieldSet::new().with("code", 42));
    fatal!(logger, "giving up after {} retries", 3);
}

#[test]
fn test_fatal_exits_with_single_entry() {
    let output = run_child("child_fatal_under_strict_threshold");

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("filtered") && !stderr.contains("filtered"));

    let entries: Vec<&str> = stderr
        .lines()
        .filter(|line| line.contains("the only entry"))
        .collect();
    assert_eq!(entries, vec!["fatal the only entry"]);
}

#[test]
fn test_fatal_macro_exits_with_fields() {
    let output = run_child("child_fatal_macro_with_fields");

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr
        .lines()
        .any(|line| line == "fatal giving up after 3 retries code=42"));
}
