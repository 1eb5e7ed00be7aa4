use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn arcanum_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_arcanum"))
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let config_content = format!(
        r#"[db]
path = "{}/data/arcanum.sqlite"

[server]
bind = "127.0.0.1:5055"
auto_seed = false
"#,
        root.display()
    );

    let config_path = config_dir.join("arcanum.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_arcanum(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = arcanum_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run arcanum binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_init_then_reinit() {
    let (_tmp, config) = setup_test_env();

    let (stdout, stderr, ok) = run_arcanum(&config, &["init"]);
    assert!(ok, "init failed: {}", stderr);
    assert!(stdout.contains("Dataset loaded"));
    assert!(stdout.contains("78 cards"));

    let (stdout, stderr, ok) = run_arcanum(&config, &["init"]);
    assert!(ok, "second init failed: {}", stderr);
    assert!(stdout.contains("Dataset already current"));
}

#[test]
fn test_stats_reports_counts() {
    let (_tmp, config) = setup_test_env();
    run_arcanum(&config, &["init"]);

    let (stdout, stderr, ok) = run_arcanum(&config, &["stats"]);
    assert!(ok, "stats failed: {}", stderr);
    assert!(stdout.contains("Cards:        78"));
    assert!(stdout.contains("(current)"));
    assert!(stdout.contains("Golden Dawn"));
}

#[test]
fn test_card_prints_correspondences() {
    let (_tmp, config) = setup_test_env();
    run_arcanum(&config, &["init"]);

    let (stdout, stderr, ok) = run_arcanum(&config, &["card", "0"]);
    assert!(ok, "card failed: {}", stderr);
    let view: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(view["card"]["name"], "The Fool");
    assert_eq!(view["qabalah_path"]["number"], 11);
}

#[test]
fn test_card_requires_loaded_store_without_auto_seed() {
    let (_tmp, config) = setup_test_env();

    let (_, stderr, ok) = run_arcanum(&config, &["card", "0"]);
    assert!(!ok);
    assert!(stderr.contains("arcanum init"));
}

#[test]
fn test_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, ok) = run_arcanum(&tmp.path().join("nope.toml"), &["stats"]);
    assert!(!ok);
    assert!(stderr.contains("Failed to read config file"));
}
