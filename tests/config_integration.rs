use hayrack::config::{ConfigStore, Configuration, Section, Value, DEFAULTS};
use hayrack::HayrackError;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Settings file path inside a fresh temp dir
fn settings_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("hayrack.conf")
}

fn section(options: &[(&str, Value)]) -> Section {
    let mut section = Section::new();
    for (name, value) in options {
        section.add_option(*name, value.clone());
    }
    section
}

#[test]
fn test_defaults_only() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = ConfigStore::with_path(settings_path(&temp_dir));

    let config = store.get().unwrap();

    assert_eq!(config.len(), DEFAULTS.len());
    for (name, options) in DEFAULTS {
        let section = config.section(name).expect("default section missing");
        assert_eq!(section.len(), options.len());
        for (option, value) in *options {
            assert_eq!(section.get(option), Some(value), "[{name}] {option}");
        }
    }
}

#[test]
fn test_empty_settings_file_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    fs::write(&path, "").unwrap();
    let mut store = ConfigStore::with_path(&path);

    assert_eq!(store.get().unwrap(), &Configuration::default());
}

#[test]
fn test_override_drops_unrepeated_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    fs::write(&path, "[core]\nzmq_bind_port = 6000\n").unwrap();
    let mut store = ConfigStore::with_path(&path);

    let config = store.get().unwrap();

    assert_eq!(
        config.section("core"),
        Some(&section(&[("zmq_bind_port", Value::str("6000"))]))
    );
    assert!(config.get("core", "zmq_bind_host").is_none());
    assert!(config.get("core", "zmq_hwm").is_none());
}

#[test]
fn test_untouched_section_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    fs::write(&path, "[core]\nzmq_bind_port = \"6000\"\n").unwrap();
    let mut store = ConfigStore::with_path(&path);

    let defaults = Configuration::default();
    let config = store.get().unwrap();

    assert_eq!(config.section("logging"), defaults.section("logging"));
}

#[test]
fn test_new_section_added() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    fs::write(&path, "[newsec]\nx = \"y\"\n").unwrap();
    let mut store = ConfigStore::with_path(&path);

    let config = store.get().unwrap();

    assert_eq!(config.len(), DEFAULTS.len() + 1);
    assert_eq!(config.section("newsec"), Some(&section(&[("x", Value::str("y"))])));
}

#[test]
fn test_load_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    fs::write(
        &path,
        "[core]\nzmq_bind_host = \"127.0.0.1\"\n\n[newsec]\nx = \"y\"\n",
    )
    .unwrap();
    let mut store = ConfigStore::with_path(&path);

    let first = store.load(&path).unwrap().clone();
    let second = store.load(&path).unwrap();

    assert_eq!(second, &first);
}

#[test]
fn test_load_merges_on_top_of_previous_state() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.conf");
    let second = temp_dir.path().join("second.conf");
    fs::write(&first, "[core]\nzmq_hwm = 5\n\n[extra]\nkeep = true\n").unwrap();
    fs::write(&second, "[logging]\nverbosity = \"INFO\"\n").unwrap();
    let mut store = ConfigStore::with_path(&first);

    store.load(&first).unwrap();
    let config = store.load(&second).unwrap();

    // No reset to defaults between loads
    assert_eq!(config.get("core", "zmq_hwm"), Some(&Value::str("5")));
    assert!(config.get("core", "zmq_linger").is_none());
    assert_eq!(config.get("extra", "keep"), Some(&Value::str("true")));
    assert_eq!(
        config.section("logging"),
        Some(&section(&[("verbosity", Value::str("INFO"))]))
    );
}

#[test]
fn test_duplicate_option_fails_without_merging() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    fs::write(&path, "[core]\nzmq_hwm = 1\nzmq_hwm = 2\n\n[newsec]\nx = \"y\"\n").unwrap();
    let mut store = ConfigStore::with_path(&path);

    let err = store.get().unwrap_err();

    assert!(matches!(err, HayrackError::Parse { .. }));
    assert!(err.to_string().contains("duplicate key"));
    assert_eq!(store.configuration(), &Configuration::default());
}

#[test]
fn test_cli_show_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(&temp_dir);
    fs::write(&path, "[core]\nzmq_bind_port = \"6000\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hayrack-config"))
        .arg("--config")
        .arg(&path)
        .args(["show", "--json"])
        .output()
        .expect("Failed to run hayrack-config");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["core"], serde_json::json!({ "zmq_bind_port": "6000" }));
    assert_eq!(json["logging"]["console"], serde_json::json!(true));
    assert_eq!(json["logging"]["logfile"], serde_json::Value::Null);
}

#[test]
fn test_cli_get_missing_option_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hayrack-config"))
        .arg("--config")
        .arg(settings_path(&temp_dir))
        .args(["get", "core", "nope"])
        .output()
        .expect("Failed to run hayrack-config");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No option 'nope' in [core]"));
}

#[test]
fn test_cli_get_option() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hayrack-config"))
        .arg("--config")
        .arg(settings_path(&temp_dir))
        .args(["get", "logging", "verbosity"])
        .output()
        .expect("Failed to run hayrack-config");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "DEBUG");
}

#[test]
fn test_cli_rust_log_enables_debug_without_verbose() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hayrack-config"))
        .env("RUST_LOG", "debug")
        .arg("--config")
        .arg(settings_path(&temp_dir))
        .arg("sections")
        .output()
        .expect("Failed to run hayrack-config");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using settings file"), "stderr: {stderr}");
}

#[test]
fn test_cli_quiet_by_default() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hayrack-config"))
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(settings_path(&temp_dir))
        .arg("sections")
        .output()
        .expect("Failed to run hayrack-config");

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Using settings file"));
}

#[test]
fn test_cli_verbose_enables_debug() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hayrack-config"))
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .arg("--config")
        .arg(settings_path(&temp_dir))
        .arg("sections")
        .output()
        .expect("Failed to run hayrack-config");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Using settings file"));
}
