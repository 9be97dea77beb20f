//! Integration test: run the binary end to end.

use std::path::PathBuf;
use std::process::Command;

fn temp_config(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let config = dir.join("config.toml");
    let log = dir.join("lanegrid.log");
    std::fs::write(
        &config,
        format!(
            "lane_count = 2\nwidth = 200\nheight = 100\ncell_scale = 10\nlog_file_path = {:?}\n",
            log
        ),
    )
    .expect("Failed to write config");
    config
}

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_lanegrid"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn binary_prints_json_snapshot() {
    let config = temp_config("lanegrid_cli_json");
    let output = Command::new(env!("CARGO_BIN_EXE_lanegrid"))
        .args(["--config", config.to_str().unwrap(), "--count", "30", "--scroll", "50"])
        .env_remove("LANEGRID_LANES")
        .env_remove("LANEGRID_ORIENTATION")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let snapshot: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(snapshot["lane_count"], 2);
    assert_eq!(snapshot["lane_size"], 100);
    assert!(!snapshot["items"].as_array().unwrap().is_empty());
}

#[test]
fn binary_renders_preview() {
    let config = temp_config("lanegrid_cli_preview");
    let output = Command::new(env!("CARGO_BIN_EXE_lanegrid"))
        .args(["--config", config.to_str().unwrap(), "--count", "10", "--format", "preview"])
        .env_remove("LANEGRID_LANES")
        .env_remove("LANEGRID_ORIENTATION")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("┌0"), "unexpected preview:\n{stdout}");
}

#[test]
fn binary_rejects_zero_lanes() {
    let config = temp_config("lanegrid_cli_zero");
    let output = Command::new(env!("CARGO_BIN_EXE_lanegrid"))
        .args(["--config", config.to_str().unwrap(), "--lanes", "0"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("lane_count"));
}
