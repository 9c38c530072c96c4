// main.rsとエントリーポイントのテスト
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bounded_pipeline"))
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("bounded_pipeline"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("show-config"));
    assert!(stdout.contains("presets"));
}

#[test]
fn test_cli_version() {
    let output = binary().arg("--version").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_run_demo_prints_source_and_destination() {
    let output = binary()
        .args(["run", "--quiet", "--queue-size", "5"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Source items: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]"));
    assert!(stdout.contains("Destination items: [0, 1, 4, 9, 16, 25, 36, 49, 64, 81]"));
}

#[test]
fn test_run_json_output() {
    let output = binary()
        .args(["run", "--json", "--items", "1,2,3,4", "--transform", "double"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["destination"], serde_json::json!([2, 4, 6, 8]));
    assert_eq!(report["summary"]["total_items"], 4);
}

#[test]
fn test_run_zero_queue_size_fails() {
    let output = binary()
        .args(["run", "--queue-size", "0"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("max_queue_size"));
}

#[test]
fn test_show_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pipeline.json");
    fs::write(&config_path, r#"{ "max_queue_size": 7, "timeout_ms": null }"#).unwrap();

    let output = binary()
        .args(["show-config", "--config"])
        .arg(&config_path)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["max_queue_size"], 7);
    assert!(config["timeout_ms"].is_null());
}

#[test]
fn test_presets_lists_all() {
    let output = binary().arg("presets").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in ["default", "low_latency", "high_throughput", "testing"] {
        assert!(stdout.contains(name), "{name} が一覧にありません");
    }
}
