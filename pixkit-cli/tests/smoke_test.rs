//! Smoke tests for the pixkit binary
//!
//! These run the compiled CLI against a temporary config file.

use std::process::{Command, Output};
use tempfile::TempDir;

const REFERENCE_PAYLOAD: &str = "00020126360014br.gov.bcb.pix0114+5511987654321\
5204000053039865406150.505802BR5910Joao Silva6007Goiania62070503***630402DE";

fn pixkit(config_dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pixkit"))
        .arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .args(args)
        .env_remove("PIXKIT_CONFIG")
        .output()
        .expect("Failed to execute pixkit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = pixkit(&dir, &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("generate"), "Help should mention 'generate'");
    assert!(text.contains("decode"), "Help should mention 'decode'");
}

#[test]
fn test_generate_json_from_flags() {
    let dir = TempDir::new().unwrap();
    let output = pixkit(
        &dir,
        &[
            "generate",
            "--key",
            "11987654321",
            "--name",
            "Joao Silva",
            "--city",
            "Goiania",
            "--amount",
            "150,50",
            "--json",
        ],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["payload"], REFERENCE_PAYLOAD);
    assert_eq!(json["key_kind"], "phone");
}

#[test]
fn test_generate_without_merchant_fails() {
    let dir = TempDir::new().unwrap();
    let output = pixkit(&dir, &["generate", "--no-qr"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_init_then_generate() {
    let dir = TempDir::new().unwrap();
    let init = pixkit(
        &dir,
        &[
            "config",
            "init",
            "--key",
            "11987654321",
            "--name",
            "Joao Silva",
            "--city",
            "Goiania",
            "--force",
        ],
    );
    assert!(init.status.success());

    let output = pixkit(&dir, &["generate", "--amount", "150.5", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["payload"], REFERENCE_PAYLOAD);
}

#[test]
fn test_decode_reference_payload() {
    let dir = TempDir::new().unwrap();
    let output = pixkit(&dir, &["decode", REFERENCE_PAYLOAD, "--json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["key"], "+5511987654321");
    assert_eq!(json["merchant_city"], "Goiania");
}

#[test]
fn test_decode_rejects_tampered_payload() {
    let dir = TempDir::new().unwrap();
    let tampered = REFERENCE_PAYLOAD.replace("150.50", "950.50");
    let output = pixkit(&dir, &["decode", &tampered]);
    assert!(!output.status.success());
}

#[test]
fn test_checksum_check_value() {
    let dir = TempDir::new().unwrap();
    let output = pixkit(&dir, &["checksum", "123456789"]);
    assert_eq!(stdout(&output).trim(), "29B1");
}
