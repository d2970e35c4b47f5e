//! Integration tests for the explain workflow.
//!
//! Drives `run` end to end through a capturing test host, covering the
//! explicit-arguments path, the interactive prompts, and error surfacing.

use cvss_explain::Host;
use std::io::{BufRead, Cursor, Write};

/// Test host that captures output to in-memory buffers and reads input from a canned script.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    input_buf: Cursor<Vec<u8>>,
    exit_code: Option<i32>,
}

impl TestHost {
    fn new(input: &str) -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            input_buf: Cursor::new(input.as_bytes().to_vec()),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn input(&mut self) -> impl BufRead {
        &mut self.input_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

#[test]
fn test_explain_with_explicit_arguments() {
    let mut host = TestHost::new("");
    let result = cvss_explain::run(
        &mut host,
        [
            "cvss-explain",
            "--cvss-version",
            "4.0",
            "--color",
            "never",
            "CVSS:4.0/AV:N/AC:L/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:H/S:U",
        ],
    );

    assert!(result.is_ok(), "explain with explicit args should succeed: {result:?}");

    let output = host.output_str();
    assert!(output.contains("CVSS Details"));
    assert!(output.contains("AV: Attack Vector: Network"));
    assert!(output.contains("VC: Vulnerability Confidentiality: High"));
    assert!(output.contains("S: Scope: Unchanged"));
    assert!(!output.contains("Select CVSS version:"), "no prompt expected, got: {output}");
    assert!(!output.contains("\x1b["), "no ANSI sequences expected with --color never");
    assert_eq!(host.exit_code, None);
}

#[test]
fn test_explain_prompts_for_version_and_vector() {
    let mut host = TestHost::new("1\nCVSS:3.1/AV:N/AC:L/PR:N/UI:R/S:C/C:H/I:H/A:H\n");
    let result = cvss_explain::run(&mut host, ["cvss-explain", "--color", "never"]);

    assert!(result.is_ok(), "prompted explain should succeed: {result:?}");

    let output = host.output_str();
    assert!(output.contains("Select CVSS version:"));
    assert!(output.contains("Enter CVSS 3.1 short code (starting with 'CVSS:3.1/')"));
    assert!(output.contains("UI: User Interaction: Required"));
    assert!(output.contains("S: Scope: Changed"));
    assert_eq!(host.exit_code, None);
}

#[test]
fn test_explain_invalid_version_selection_exits_with_one() {
    let mut host = TestHost::new("9\n");
    let result = cvss_explain::run(&mut host, ["cvss-explain"]);

    assert!(result.is_ok(), "invalid selection is reported via exit code, not Err: {result:?}");
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("Invalid option selected."));
}

#[test]
fn test_explain_unknown_segments_are_reported_in_band() {
    let mut host = TestHost::new("");
    let result = cvss_explain::run(
        &mut host,
        ["cvss-explain", "--cvss-version", "3.1", "--color", "never", "CVSS:3.1/AV:Z/E:H"],
    );

    assert!(result.is_ok(), "unknown metrics should not fail the decode: {result:?}");

    let output = host.output_str();
    assert!(output.contains("AV: Unknown value 'Z' for metric 'AV'"));
    assert!(output.contains("E: Unknown value 'H' for metric 'E'"));
}

#[test]
fn test_explain_rejects_wrong_prefix() {
    let mut host = TestHost::new("");
    let result = cvss_explain::run(
        &mut host,
        ["cvss-explain", "--cvss-version", "4.0", "--color", "never", "CVSS:3.1/AV:N"],
    );

    assert!(result.is_err(), "a 3.1 short code must not decode as 4.0");

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("CVSS:4.0/"), "error should name the expected prefix: {message}");
}
