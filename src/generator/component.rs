//! React component source generation.
//!
//! One [`ComponentDescriptor`] becomes one self-contained source file: an
//! optional header comment, imports, an optional props interface, and a
//! default-exported function component wrapping its children in the
//! descriptor's semantic element.

use crate::constants::APP_NAME;
use crate::error::{GenerationError, GenerationResult};
use crate::generator::classes::ComponentClasses;
use crate::generator::GeneratedFile;
use crate::models::{BreakpointDescriptor, ComponentDescriptor, ExportOptions};
use crate::validation::{is_reserved_component_name, is_valid_prop_key};
use serde_json::Value;

/// Directory holding generated component files.
pub const COMPONENTS_DIR: &str = "components";

/// Generates component source files.
#[derive(Debug, Clone)]
pub struct ComponentGenerator {
    options: ExportOptions,
    breakpoints: Vec<BreakpointDescriptor>,
}

impl ComponentGenerator {
    /// Creates a generator for the given options and the default breakpoints.
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            breakpoints: BreakpointDescriptor::defaults(),
        }
    }

    /// Resolves responsive keys against these breakpoints instead of the defaults.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: &[BreakpointDescriptor]) -> Self {
        self.breakpoints = breakpoints.to_vec();
        self
    }

    /// Archive path of a component's source file.
    pub fn file_path(&self, name: &str) -> String {
        format!("{COMPONENTS_DIR}/{name}.{}", self.options.extension())
    }

    /// Generates the file for one component.
    pub fn generate(&self, component: &ComponentDescriptor) -> GenerationResult<GeneratedFile> {
        let content = self.generate_source(component)?;
        Ok(GeneratedFile::new(self.file_path(&component.name), content))
    }

    /// Generates the source text for one component.
    pub fn generate_source(&self, component: &ComponentDescriptor) -> GenerationResult<String> {
        if is_reserved_component_name(&component.name) {
            return Err(GenerationError::ReservedComponentName(
                component.name.clone(),
            ));
        }

        let classes = ComponentClasses::for_component(component, &self.breakpoints);
        if classes.combined.is_empty() {
            return Err(GenerationError::EmptyClassList {
                component: component.name.clone(),
            });
        }

        if let Some(key) = component.props.keys().find(|key| !is_valid_prop_key(key)) {
            return Err(GenerationError::InvalidPropKey {
                component: component.name.clone(),
                key: key.clone(),
            });
        }

        let name = &component.name;
        let tag = component.semantic_tag.as_str();
        let mut out = String::new();

        if self.options.include_comments {
            out.push_str(&header_comment(component, &classes));
        }

        out.push_str("import React from 'react';\n\n");

        if self.options.include_types {
            out.push_str(&props_interface(component));
            out.push('\n');
        }

        // Parameters: declared props with their defaults, then children
        out.push_str(&format!("export default function {name}({{\n"));
        for (key, value) in &component.props {
            out.push_str(&format!("  {key} = {},\n", js_literal(value)));
        }
        if !component.props.contains_key("children") {
            out.push_str("  children,\n");
        }
        if self.options.include_types {
            out.push_str(&format!("}}: {name}Props) {{\n"));
        } else {
            out.push_str("}) {\n");
        }

        out.push_str("  return (\n");
        out.push_str(&format!(
            "    <{tag} {}>\n",
            class_attribute(&classes.combined)
        ));
        out.push_str("      {children}\n");
        out.push_str(&format!("    </{tag}>\n"));
        out.push_str("  );\n");
        out.push_str("}\n");

        Ok(out)
    }
}

/// Builds the explanatory header comment.
fn header_comment(component: &ComponentDescriptor, classes: &ComponentClasses) -> String {
    let mut out = String::new();
    out.push_str("/**\n");
    out.push_str(&format!(" * {}\n", component.name));
    out.push_str(" *\n");
    out.push_str(&format!(
        " * Renders a <{}> element. Generated by {} from component {}.\n",
        component.semantic_tag, APP_NAME, component.id
    ));

    let categories = [
        ("Positioning", &classes.positioning),
        ("Layout", &classes.layout),
        ("Styling", &classes.styling),
        ("Responsive", &classes.responsive),
    ];
    if categories.iter().any(|(_, value)| !value.is_empty()) {
        out.push_str(" *\n");
        for (label, value) in categories {
            if !value.is_empty() {
                out.push_str(&format!(" * {label}: {}\n", comment_safe(value)));
            }
        }
    }

    out.push_str(" */\n");
    out
}

/// Builds the TypeScript props interface.
fn props_interface(component: &ComponentDescriptor) -> String {
    let mut out = format!("export interface {}Props {{\n", component.name);
    for (key, value) in &component.props {
        out.push_str(&format!("  {key}?: {};\n", typescript_type(value)));
    }
    if !component.props.contains_key("children") {
        out.push_str("  children?: React.ReactNode;\n");
    }
    out.push_str("}\n");
    out
}

/// Renders the `className` attribute, falling back to an expression when the
/// class string contains a double quote.
fn class_attribute(classes: &str) -> String {
    if classes.contains('"') {
        format!("className={{{}}}", js_string(classes))
    } else {
        format!("className=\"{classes}\"")
    }
}

/// JSON literals are valid JavaScript expressions.
fn js_literal(value: &Value) -> String {
    value.to_string()
}

fn js_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

/// Keeps class strings from terminating the surrounding block comment.
fn comment_safe(value: &str) -> String {
    value.replace("*/", "*\\/")
}

/// Infers a TypeScript type from a default value.
fn typescript_type(value: &Value) -> String {
    match value {
        Value::Null => "unknown".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => {
            let mut element_types = items.iter().map(typescript_type);
            match element_types.next() {
                Some(first) if first != "unknown" && element_types.all(|t| t == first) => {
                    format!("{first}[]")
                }
                _ => "unknown[]".to_string(),
            }
        }
        Value::Object(_) => "Record<string, unknown>".to_string(),
    }
}
