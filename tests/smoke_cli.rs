//! Smoke tests running the `lisky` binary against a scratch config directory.
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_lisky(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lisky"))
        .args(args)
        .env("LISKY_CONFIG_DIR", config_dir)
        .env_remove("NON_INTERACTIVE_MODE")
        .env_remove("LISKY_LOG")
        .output()
        .expect("failed to run binary")
}

fn read_config(config_dir: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(config_dir.join("config.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn set_writes_config_and_reports_success() {
    let dir = TempDir::new().unwrap();

    let out = run_lisky(dir.path(), &["set", "liskJS.testnet", "true"]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "Successfully set liskJS.testnet to true."
    );
    assert_eq!(read_config(dir.path())["liskJS"]["testnet"], serde_json::json!(true));
    assert_eq!(read_config(dir.path())["name"], serde_json::json!("lisky"));
}

#[test]
fn string_value_may_start_with_hyphen() {
    let dir = TempDir::new().unwrap();

    let out = run_lisky(dir.path(), &["set", "liskJS.node", "-v"]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "Successfully set liskJS.node to -v."
    );
    assert_eq!(read_config(dir.path())["liskJS"]["node"], serde_json::json!("-v"));
}

#[test]
fn unsupported_variable_fails_with_prefix() {
    let dir = TempDir::new().unwrap();

    let out = run_lisky(dir.path(), &["set", "colour", "blue"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr)
        .contains("Could not set config variable: Unsupported variable name."));
}

#[test]
fn json_output_follows_config() {
    let dir = TempDir::new().unwrap();

    let out = run_lisky(dir.path(), &["set", "json", "true"]);

    assert!(out.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(parsed, serde_json::json!({ "message": "Successfully set json to true." }));
}

#[test]
fn help_lists_variables() {
    let dir = TempDir::new().unwrap();

    let out = run_lisky(dir.path(), &["set", "--help"]);

    let help = String::from_utf8_lossy(&out.stdout);
    assert!(help.contains("liskJS.testnet"), "help output: {help}");
    assert!(help.contains("config.json"), "help output: {help}");
}
