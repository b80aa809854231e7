//! Component management commands for schema files.

use crate::cli::common::{load_schema, print_json, save_schema, CliError, CliResult};
use crate::models::{ComponentDescriptor, SemanticTag};
use crate::services::SCHEMA_FILE_NAME;
use crate::state::EditorState;
use crate::templates::ComponentTemplate;
use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// Manage components in a schema
#[derive(Debug, Clone, Args)]
pub struct ComponentArgs {
    /// Component subcommand
    #[command(subcommand)]
    pub command: ComponentCommand,
}

/// Component subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ComponentCommand {
    /// Add a component
    Add(AddArgs),
    /// Remove a component
    Remove(RemoveArgs),
    /// Move a component to another position
    Move(MoveArgs),
    /// List components
    List(ListArgs),
    /// List built-in templates
    Templates(TemplatesArgs),
}

/// Add a component, from scratch or from a template
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Schema file
    #[arg(short, long, value_name = "FILE", default_value = SCHEMA_FILE_NAME)]
    pub schema: PathBuf,

    /// Component name (PascalCase); defaults to the template name
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Semantic HTML element (header, nav, main, aside, footer, section, article, div)
    #[arg(long, value_name = "TAG", conflicts_with = "template")]
    pub tag: Option<SemanticTag>,

    /// Start from a built-in template
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<ComponentTemplate>,

    /// Default prop as key=value (value parsed as JSON, else taken as text)
    #[arg(short, long = "prop", value_name = "KEY=VALUE")]
    pub props: Vec<String>,
}

/// Remove a component by name
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Schema file
    #[arg(short, long, value_name = "FILE", default_value = SCHEMA_FILE_NAME)]
    pub schema: PathBuf,

    /// Component name
    #[arg(short, long, value_name = "NAME")]
    pub name: String,
}

/// Move a component by name
#[derive(Debug, Clone, Args)]
pub struct MoveArgs {
    /// Schema file
    #[arg(short, long, value_name = "FILE", default_value = SCHEMA_FILE_NAME)]
    pub schema: PathBuf,

    /// Component name
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Target position (0-based, clamped to the end)
    #[arg(short, long, value_name = "INDEX")]
    pub index: usize,
}

/// List components in schema order
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Schema file
    #[arg(short, long, value_name = "FILE", default_value = SCHEMA_FILE_NAME)]
    pub schema: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// List built-in templates
#[derive(Debug, Clone, Args)]
pub struct TemplatesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Component summary for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ComponentInfo {
    /// Position in the schema
    pub index: usize,
    /// Component id
    pub id: String,
    /// Component name
    pub name: String,
    /// Semantic element
    pub tag: String,
    /// Number of default props
    pub props: usize,
}

/// Component list response
#[derive(Debug, Clone, Serialize)]
pub struct ComponentListResponse {
    /// Components in order
    pub components: Vec<ComponentInfo>,
    /// Total number of components
    pub count: usize,
}

/// Template summary for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    /// Template key
    pub key: String,
    /// Default component name
    pub name: String,
    /// Semantic element
    pub tag: String,
    /// Short description
    pub description: String,
}

impl ComponentArgs {
    /// Execute the component command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ComponentCommand::Add(args) => args.execute(),
            ComponentCommand::Remove(args) => args.execute(),
            ComponentCommand::Move(args) => args.execute(),
            ComponentCommand::List(args) => args.execute(),
            ComponentCommand::Templates(args) => args.execute(),
        }
    }
}

fn load_state(schema: &std::path::Path) -> CliResult<EditorState> {
    let schema = load_schema(schema)?;
    EditorState::from_schema(schema).map_err(|e| CliError::validation(format!("{e:#}")))
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let mut state = load_state(&self.schema)?;

        let mut component = match (self.template, &self.name) {
            (Some(template), Some(name)) => template.instantiate_as(name),
            (Some(template), None) => template.instantiate(),
            (None, Some(name)) => {
                ComponentDescriptor::new(name, self.tag.unwrap_or_default())
            }
            (None, None) => {
                return Err(CliError::validation(
                    "Either --name or --template is required",
                ))
            }
        };

        for prop in &self.props {
            let (key, value) = parse_prop(prop)?;
            component.props.insert(key, value);
        }

        let name = component.name.clone();
        state
            .add_component(component)
            .map_err(|e| CliError::validation(e.to_string()))?;
        save_schema(state.schema(), &self.schema)?;

        println!("✓ Added component '{name}'");
        Ok(())
    }
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let mut state = load_state(&self.schema)?;
        let id = state
            .id_for_name(&self.name)
            .map(str::to_string)
            .ok_or_else(|| CliError::validation(format!("Component '{}' not found", self.name)))?;

        state
            .remove_component(&id)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        save_schema(state.schema(), &self.schema)?;

        println!("✓ Removed component '{}'", self.name);
        Ok(())
    }
}

impl MoveArgs {
    /// Execute the move command
    pub fn execute(&self) -> CliResult<()> {
        let mut state = load_state(&self.schema)?;
        let id = state
            .id_for_name(&self.name)
            .map(str::to_string)
            .ok_or_else(|| CliError::validation(format!("Component '{}' not found", self.name)))?;

        state
            .move_component(&id, self.index)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        save_schema(state.schema(), &self.schema)?;

        println!("✓ Moved component '{}'", self.name);
        Ok(())
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let schema = load_schema(&self.schema)?;

        let components: Vec<ComponentInfo> = schema
            .components
            .iter()
            .enumerate()
            .map(|(index, c)| ComponentInfo {
                index,
                id: c.id.clone(),
                name: c.name.clone(),
                tag: c.semantic_tag.to_string(),
                props: c.props.len(),
            })
            .collect();

        if self.json {
            return print_json(&ComponentListResponse {
                count: components.len(),
                components,
            });
        }

        if components.is_empty() {
            println!("No components.");
            return Ok(());
        }

        println!("Components ({}):", components.len());
        for info in &components {
            println!("  {}. {:<20} <{}>", info.index + 1, info.name, info.tag);
        }
        Ok(())
    }
}

impl TemplatesArgs {
    /// Execute the templates command
    pub fn execute(&self) -> CliResult<()> {
        let templates: Vec<TemplateInfo> = ComponentTemplate::all()
            .iter()
            .map(|t| TemplateInfo {
                key: t.as_str().to_string(),
                name: t.default_name().to_string(),
                tag: t.instantiate().semantic_tag.to_string(),
                description: t.description().to_string(),
            })
            .collect();

        if self.json {
            return print_json(&templates);
        }

        println!("Templates:");
        for info in &templates {
            println!("  {:<10} <{}>  {}", info.key, info.tag, info.description);
        }
        Ok(())
    }
}

/// Parses `key=value`; the value is JSON if it parses, else a string.
fn parse_prop(input: &str) -> CliResult<(String, Value)> {
    let (key, raw) = input.split_once('=').ok_or_else(|| {
        CliError::validation(format!("Invalid prop '{input}'. Expected KEY=VALUE"))
    })?;

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.trim().to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_prop() {
        assert_eq!(parse_prop("title=Hello").unwrap(), ("title".to_string(), json!("Hello")));
        assert_eq!(parse_prop("count=3").unwrap(), ("count".to_string(), json!(3)));
        assert_eq!(parse_prop("open=true").unwrap(), ("open".to_string(), json!(true)));
        assert_eq!(parse_prop("empty=").unwrap(), ("empty".to_string(), json!("")));
        assert!(parse_prop("novalue").is_err());
    }
}
