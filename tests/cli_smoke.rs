use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn bin_path() -> String {
    std::env::var("CARGO_BIN_EXE_postcode").unwrap_or_else(|_| "target/debug/postcode".to_string())
}

fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(bin_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG")
        .spawn()
        .expect("Failed to spawn postcode binary");

    {
        let mut child_stdin = child.stdin.take().expect("Child stdin should be available");
        if let Some(input) = stdin {
            child_stdin
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for postcode binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be valid UTF-8")
}

#[test]
fn validate_arguments() {
    let output = run(&["validate", "M1 1AE", "B33 8TH"], None);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "M1 1AE: valid\nB33 8TH: valid\n");
}

#[test]
fn validate_reports_failure_status() {
    let output = run(&["validate", "M1 1AE", "AB5 1PT"], None);
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("M1 1AE: valid"));
    assert!(stdout.contains("AB5 1PT: invalid (area AB only has double-digit districts)"));
}

#[test]
fn format_from_stdin() {
    let output = run(&["format"], Some("WC1A0AX\r\n\n  \nec1a1bb\n"));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "WC1A 0AX\nec1a 1bb\n");
}

#[test]
fn format_invalid_goes_to_stderr() {
    let output = run(&["format", "WC1A 0AC"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("You need to pass a valid postcode"));
}

#[test]
fn json_output_is_one_object_per_line() {
    let output = run(&["--output", "json", "validate", "SW1A 2AA", "NW11 0AX"], None);
    assert_eq!(output.status.code(), Some(1));

    let records: Vec<Value> = stdout_of(&output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["valid"], true);
    assert!(records[0]["reason"].is_null());
    assert_eq!(records[1]["valid"], false);
    assert_eq!(
        records[1]["reason"],
        "central London area NW has no district 11"
    );
}

#[test]
fn bad_log_level_fails() {
    let output = run(&["--log-level", "loud", "validate", "M1 1AE"], None);
    assert!(!output.status.success());
}
