//! End-to-end tests for `layoutsmith init` command.

use layoutsmith::models::LayoutSchema;
use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_init_creates_empty_schema() {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("site.json");

    let output = run_cli(&["init", "--schema", arg(&schema_path)], temp_dir.path());
    assert_exit_code(&output, 0);

    let schema = LayoutSchema::from_json(&fs::read_to_string(&schema_path).unwrap()).unwrap();
    assert_eq!(schema.schema_version, "2.0");
    assert!(schema.components.is_empty());
    assert_eq!(schema.breakpoints.len(), 5);
}

#[test]
fn test_init_starter_components() {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("site.json");

    let output = run_cli(
        &["init", "--schema", arg(&schema_path), "--starter"],
        temp_dir.path(),
    );
    assert_exit_code(&output, 0);
    assert!(String::from_utf8_lossy(&output.stdout).contains("3 components"));

    let schema = LayoutSchema::from_json(&fs::read_to_string(&schema_path).unwrap()).unwrap();
    let names: Vec<_> = schema.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Header", "Content", "Footer"]);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("site.json");
    fs::write(&schema_path, "keep me").unwrap();

    let output = run_cli(&["init", "--schema", arg(&schema_path)], temp_dir.path());
    assert_exit_code(&output, 1);
    assert_eq!(fs::read_to_string(&schema_path).unwrap(), "keep me");

    let output = run_cli(
        &["init", "--schema", arg(&schema_path), "--force"],
        temp_dir.path(),
    );
    assert_exit_code(&output, 0);
    assert_ne!(fs::read_to_string(&schema_path).unwrap(), "keep me");
}

#[test]
fn test_init_writes_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    let schema_path = temp_dir.path().join("site.json");

    let output = run_cli(
        &["init", "--schema", arg(&schema_path), "--write-config"],
        &config_dir,
    );
    assert_exit_code(&output, 0);

    let config = fs::read_to_string(config_dir.join("config.toml")).unwrap();
    assert!(config.contains("[export]"));
    assert!(config.contains("product_name = \"layoutsmith\""));
}
