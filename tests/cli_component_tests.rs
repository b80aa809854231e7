//! End-to-end tests for `layoutsmith component` subcommands.

use layoutsmith::models::{LayoutSchema, SemanticTag};
use layoutsmith::services::SchemaService;
use serde_json::json;

mod fixtures;
use fixtures::*;

#[test]
fn test_component_list_json() {
    let (schema_path, temp_dir) = create_temp_schema_file(&test_schema_basic());

    let output = run_cli(
        &["component", "list", "--schema", arg(&schema_path), "--json"],
        temp_dir.path(),
    );
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    assert_eq!(result["count"], 3);
    assert_eq!(result["components"][0]["name"], "Header");
    assert_eq!(result["components"][0]["tag"], "header");
    assert_eq!(result["components"][0]["props"], 2);
    assert_eq!(result["components"][2]["index"], 2);
}

#[test]
fn test_component_add_with_props() {
    let (schema_path, temp_dir) = create_temp_schema_file(&LayoutSchema::new());

    let output = run_cli(
        &[
            "component",
            "add",
            "--schema",
            arg(&schema_path),
            "--name",
            "PricingCard",
            "--tag",
            "article",
            "--prop",
            "price=19",
            "--prop",
            "plan=Pro",
        ],
        temp_dir.path(),
    );
    assert_exit_code(&output, 0);

    let schema = SchemaService::load(&schema_path).unwrap();
    let card = schema.component_by_name("PricingCard").unwrap();
    assert_eq!(card.semantic_tag, SemanticTag::Article);
    assert_eq!(card.props["price"], json!(19));
    assert_eq!(card.props["plan"], json!("Pro"));
    assert!(uuid::Uuid::parse_str(&card.id).is_ok());
}

#[test]
fn test_component_add_from_template() {
    let (schema_path, temp_dir) = create_temp_schema_file(&LayoutSchema::new());

    let output = run_cli(
        &[
            "component",
            "add",
            "--schema",
            arg(&schema_path),
            "--template",
            "sidebar",
        ],
        temp_dir.path(),
    );
    assert_exit_code(&output, 0);

    let schema = SchemaService::load(&schema_path).unwrap();
    assert_eq!(schema.components[0].name, "Sidebar");
    assert_eq!(schema.components[0].semantic_tag, SemanticTag::Aside);
}

#[test]
fn test_component_add_rejects_bad_names() {
    let (schema_path, temp_dir) = create_temp_schema_file(&test_schema_basic());

    for name in ["footer", "Footer", "Main Content"] {
        let output = run_cli(
            &["component", "add", "--schema", arg(&schema_path), "--name", name],
            temp_dir.path(),
        );
        assert_exit_code(&output, 1);
    }

    let schema = SchemaService::load(&schema_path).unwrap();
    assert_eq!(schema.components.len(), 3);
}

#[test]
fn test_component_add_rejects_reserved_prop() {
    let (schema_path, temp_dir) = create_temp_schema_file(&LayoutSchema::new());

    let output = run_cli(
        &[
            "component",
            "add",
            "--schema",
            arg(&schema_path),
            "--name",
            "Banner",
            "--prop",
            "class=big",
        ],
        temp_dir.path(),
    );
    assert_exit_code(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid Prop Key"));
}

#[test]
fn test_component_remove_and_move() {
    let (schema_path, temp_dir) = create_temp_schema_file(&test_schema_basic());

    let output = run_cli(
        &[
            "component",
            "move",
            "--schema",
            arg(&schema_path),
            "--name",
            "Footer",
            "--index",
            "0",
        ],
        temp_dir.path(),
    );
    assert_exit_code(&output, 0);

    let output = run_cli(
        &[
            "component",
            "remove",
            "--schema",
            arg(&schema_path),
            "--name",
            "Header",
        ],
        temp_dir.path(),
    );
    assert_exit_code(&output, 0);

    let schema = SchemaService::load(&schema_path).unwrap();
    let names: Vec<_> = schema.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Footer", "MainContent"]);

    let output = run_cli(
        &[
            "component",
            "remove",
            "--schema",
            arg(&schema_path),
            "--name",
            "Header",
        ],
        temp_dir.path(),
    );
    assert_exit_code(&output, 1);
}

#[test]
fn test_component_templates_json() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = run_cli(&["component", "templates", "--json"], temp_dir.path());
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    let keys: Vec<_> = result
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        keys,
        vec!["header", "navbar", "sidebar", "hero", "content", "footer"]
    );
}

#[test]
fn test_component_missing_schema_is_io_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let output = run_cli(
        &["component", "list", "--schema", arg(&missing)],
        temp_dir.path(),
    );
    assert_exit_code(&output, 2);
}
