//! CLI contract tests
//!
//! Runs the built `vata` binary against files written into temp
//! directories and against stdin.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn vata_bin() -> &'static str {
    env!("CARGO_BIN_EXE_vata")
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(vata_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("VATA_CONFIG")
        .output()
        .expect("Failed to run vata")
}

fn run_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(vata_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("VATA_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn vata");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for vata")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn parse_json(output: &Output) -> Vec<serde_json::Value> {
    let v: serde_json::Value = serde_json::from_str(&stdout(output)).expect("Invalid JSON");
    v.as_array().expect("JSON array").clone()
}

#[test]
fn test_score_stdin_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_with_stdin(dir.path(), &["score"], "x=1");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("<stdin>"));
    assert!(out.contains("Score: 15%"));
    assert!(out.contains("Classification: SOULLESS"));
    assert!(out.contains("Violations: None detected"));
    assert!(!out.contains('\x1b'), "piped output should not be colored");
}

#[test]
fn test_score_empty_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_with_stdin(dir.path(), &["score", "-", "--format", "json"], "   \n");
    assert!(output.status.success());
    let entries = parse_json(&output);
    assert_eq!(entries[0]["result"]["score"], "0%");
    assert_eq!(entries[0]["result"]["tier"], "Tier X - Invalid");
    assert_eq!(entries[0]["result"]["proof"], "No proof generated");
}

#[test]
fn test_score_directory_json_in_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.py"), "import os\nos.system('ls')\n").unwrap();
    std::fs::write(dir.path().join("a.py"), "x=1\n").unwrap();
    std::fs::write(dir.path().join("README.md"), "# readme\n").unwrap();

    let output = run(dir.path(), &["score", ".", "-f", "json"]);
    assert!(output.status.success());
    let entries = parse_json(&output);
    assert_eq!(entries.len(), 2);
    assert!(entries[0]["source"].as_str().unwrap().ends_with("a.py"));
    assert!(entries[1]["source"].as_str().unwrap().ends_with("b.py"));
    assert_eq!(entries[1]["result"]["verdict"], "VATA REJECTED (Violations)");
    assert_eq!(entries[1]["result"]["violations"], "- Dangerous ops");
    assert!(entries[0].get("breakdown").is_none());
}

#[test]
fn test_explain_json_includes_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.py"), "x=1\n").unwrap();
    let output = run(dir.path(), &["score", "a.py", "-f", "json", "--explain"]);
    assert!(output.status.success());
    let entries = parse_json(&output);
    let breakdown = &entries[0]["breakdown"];
    assert_eq!(breakdown["score"], 15);
    assert_eq!(breakdown["penalties"]["simplicity"], -25.0);
}

#[test]
fn test_config_defaults_apply() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("vata.toml"), "[defaults]\nformat = \"json\"\n").unwrap();
    std::fs::write(dir.path().join("a.py"), "x=1\n").unwrap();

    let output = run(dir.path(), &["score", "a.py"]);
    assert!(output.status.success());
    assert_eq!(parse_json(&output).len(), 1);

    // Command line wins over config
    let output = run(dir.path(), &["score", "a.py", "-f", "text"]);
    assert!(stdout(&output).contains("Trust Tier: Tier C - High Risk"));
}

#[test]
fn test_fail_on_violations_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("clean.py"), "x=1\n").unwrap();
    std::fs::write(dir.path().join("risky.py"), "api_key = 'abc'\n").unwrap();

    let clean = run(dir.path(), &["score", "clean.py", "--fail-on-violations"]);
    assert_eq!(clean.status.code(), Some(0));

    let risky = run(dir.path(), &["score", "risky.py", "--fail-on-violations"]);
    assert_eq!(risky.status.code(), Some(1));
    assert!(stdout(&risky).contains("- Hardcoded secrets"));
}

#[test]
fn test_output_file_then_verify() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.py"), "value = a | b\nprint(value)\n").unwrap();

    let output = run(dir.path(), &["score", "a.py", "-f", "json", "-o", "report.json"]);
    assert!(output.status.success());
    let report = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&report).unwrap();
    let proof = entries[0]["result"]["proof"].as_str().unwrap().to_string();
    std::fs::write(dir.path().join("proof.txt"), &proof).unwrap();

    let verified = run(dir.path(), &["verify", "proof.txt"]);
    assert!(verified.status.success());
    let out = stdout(&verified);
    assert!(out.starts_with("OK "));
    assert!(out.contains(&format!("Score:   {}", entries[0]["result"]["score"].as_str().unwrap())));

    let forged = proof.replace("VATA REJECTED", "VATA COMPLIANT");
    let rejected = run_with_stdin(dir.path(), &["verify"], &forged);
    assert!(!rejected.status.success());
    assert!(String::from_utf8_lossy(&rejected.stderr).contains("Digest mismatch"));
}
