use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    cargo_bin_cmd!("hstspreload-cli")
}

#[test]
fn compliant_header_exits_zero() {
    cmd()
        .args(["--raw", "max-age=31536000; includeSubDomains; preload"])
        .assert()
        .success()
        .stdout("No issues found.\n");
}

#[test]
fn missing_directives_exit_two() {
    cmd()
        .args(["--raw", "max-age=100"])
        .assert()
        .code(2)
        .stdout(contains(
            "Header requirement error: Header must contain the `includeSubDomains` directive.",
        ))
        .stdout(contains("but the header only had max-age=100."));
}

#[test]
fn warnings_only_exit_zero() {
    cmd()
        .args(["--raw", "max-age=31536001; includeSubDomains; preload"])
        .assert()
        .success()
        .stdout(contains("Header FYI: The max-age (31536001 seconds) is longer than a year."));
}

#[test]
fn reads_stdin_and_strips_newline() {
    cmd()
        .write_stdin("max-age=10886400; includeSubDomains; preload\n")
        .assert()
        .success()
        .stdout("No issues found.\n");
}

#[test]
fn parse_mode_prints_record() {
    cmd()
        .args(["--mode", "parse", "--raw", "max-age=42; preload"])
        .assert()
        .success()
        .stdout(contains("preload:           yes"))
        .stdout(contains("includeSubDomains: no"))
        .stdout(contains("max-age:           42"));
}

#[test]
fn parse_mode_json() {
    let output = cmd()
        .args(["--mode", "parse", "--format", "json", "--raw", "max-age"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["header"]["maxAge"], -1);
    assert_eq!(value["issues"]["errors"][0]["category"], "syntax");
}

#[test]
fn check_json_output() {
    let output = cmd()
        .args(["--format", "json", "--raw", ""])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["errors"].as_array().unwrap().len(), 3);
    assert_eq!(value["warnings"][0]["message"], "Header is empty.");
}

#[test]
fn response_mode_extracts_header() {
    cmd()
        .args([
            "--mode",
            "response",
            "--raw",
            r"HTTP/1.1 200 OK\r\nStrict-Transport-Security: max-age=10886400; includeSubDomains; preload\r\n\r\n",
        ])
        .assert()
        .success()
        .stdout("No issues found.\n");
}

#[test]
fn response_mode_missing_header() {
    cmd()
        .args(["--mode", "response", "--raw", r"HTTP/1.1 200 OK\r\n\r\n"])
        .assert()
        .code(2)
        .stdout(contains("Response error: No HSTS header is present on the response."));
}

#[test]
fn malformed_response_is_input_error() {
    cmd()
        .args(["--mode", "response", "--raw", "garbage"])
        .assert()
        .code(1)
        .stderr(contains("Input error: malformed response head at line 1"));
}

#[test]
fn oversized_input_is_input_error() {
    cmd()
        .args(["--max-header-len", "4", "--raw", "preload"])
        .assert()
        .code(1)
        .stderr(contains("exceeding the maximum of 4 bytes"));
}

#[test]
fn missing_file_is_input_error() {
    cmd()
        .arg("/nonexistent/hsts-header.txt")
        .assert()
        .code(1)
        .stderr(contains("Error reading input"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    cmd()
        .args(["--verbose", "--raw", "max-age=31536000; includeSubDomains; preload"])
        .assert()
        .success()
        .stdout("No issues found.\n")
        .stderr(contains("checked preload requirements").and(contains("DEBUG")));
}
