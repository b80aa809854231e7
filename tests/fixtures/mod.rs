//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use layoutsmith::models::{
    Align, BreakpointKey, ComponentDescriptor, Justify, LayoutDescriptor, LayoutSchema,
    LayoutType, PositionType, PositioningDescriptor, ResponsiveDescriptor, ResponsiveOverride,
    SemanticTag, Shadow, StylingDescriptor,
};
use layoutsmith::services::SchemaService;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the layoutsmith binary
pub fn layoutsmith_bin() -> &'static str {
    env!("CARGO_BIN_EXE_layoutsmith")
}

/// Creates a schema with a sticky header, a main column, and a footer.
///
/// Ids are fixed so generated output is deterministic.
pub fn test_schema_basic() -> LayoutSchema {
    let mut header = ComponentDescriptor::new("Header", SemanticTag::Header)
        .with_positioning(
            PositioningDescriptor::new(PositionType::Sticky)
                .with_top(0)
                .with_z_index(40),
        )
        .with_layout(
            LayoutDescriptor::new(LayoutType::Flex)
                .with_justify(Justify::Between)
                .with_align(Align::Center)
                .with_padding(4),
        )
        .with_styling(StylingDescriptor {
            background: Some("white".to_string()),
            shadow: Some(Shadow::Md),
            ..StylingDescriptor::default()
        })
        .with_prop("title", "Acme")
        .with_prop("showLogo", true);
    header.id = "00000000-0000-4000-8000-000000000001".to_string();

    let mut main = ComponentDescriptor::new("MainContent", SemanticTag::Main)
        .with_layout(LayoutDescriptor {
            max_width: Some("5xl".to_string()),
            centered: true,
            ..LayoutDescriptor::new(LayoutType::Grid).with_columns(3).with_gap(6)
        })
        .with_responsive(
            ResponsiveDescriptor::new()
                .with(BreakpointKey::Base, ResponsiveOverride {
                    columns: Some(1),
                    ..ResponsiveOverride::default()
                })
                .with(BreakpointKey::Md, ResponsiveOverride {
                    columns: Some(3),
                    ..ResponsiveOverride::default()
                }),
        );
    main.id = "00000000-0000-4000-8000-000000000002".to_string();

    let mut footer = ComponentDescriptor::new("Footer", SemanticTag::Footer).with_styling(
        StylingDescriptor {
            border_top: true,
            ..StylingDescriptor::default()
        },
    );
    footer.id = "00000000-0000-4000-8000-000000000003".to_string();

    let mut schema = LayoutSchema::new();
    schema.components = vec![header, main, footer];
    schema
}

/// Writes a schema into a fresh temp dir.
///
/// Returns the schema path and the temp dir (keep it alive for the test).
pub fn create_temp_schema_file(schema: &LayoutSchema) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("layout.schema.json");
    SchemaService::save(schema, &path).expect("Failed to write schema");
    (path, temp_dir)
}

/// Writes raw JSON into a fresh temp dir.
pub fn create_temp_json_file(json: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("layout.schema.json");
    std::fs::write(&path, json).expect("Failed to write schema");
    (path, temp_dir)
}

/// Runs the binary with an isolated config directory.
pub fn run_cli(args: &[&str], config_dir: &Path) -> Output {
    Command::new(layoutsmith_bin())
        .args(args)
        .env("LAYOUTSMITH_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Asserts an exit code, printing stderr on mismatch.
pub fn assert_exit_code(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// Path as &str for command arguments.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
