//! Validation command for schema files.

use crate::cli::common::{load_schema, print_json, CliError, CliResult};
use crate::services::SCHEMA_FILE_NAME;
use crate::validation::SchemaValidator;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a schema file for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Schema file
    #[arg(short, long, value_name = "FILE", default_value = SCHEMA_FILE_NAME)]
    pub schema: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// One reported problem
#[derive(Debug, Clone, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Error kind, absent for warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Component the message refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Message text
    pub message: String,
    /// How to fix it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Validation response
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// True when there are no errors
    pub valid: bool,
    /// Number of components checked
    pub components: usize,
    /// Errors followed by warnings
    pub messages: Vec<ValidationMessage>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let schema = load_schema(&self.schema)?;
        let report = SchemaValidator::new(&schema).validate();

        let mut messages: Vec<ValidationMessage> = report
            .errors
            .iter()
            .map(|e| ValidationMessage {
                severity: "error".to_string(),
                kind: Some(e.kind.to_string()),
                component: e.component.clone(),
                message: e.message.clone(),
                suggestion: e.suggestion.clone(),
            })
            .collect();
        messages.extend(report.warnings.iter().map(|w| ValidationMessage {
            severity: "warning".to_string(),
            kind: None,
            component: w.component.clone(),
            message: w.message.clone(),
            suggestion: None,
        }));

        let response = ValidationResponse {
            valid: report.is_valid(),
            components: schema.components.len(),
            messages,
        };

        if self.json {
            print_json(&response)?;
        } else {
            if response.valid {
                println!("✓ Validation passed ({} components)", response.components);
            } else {
                println!("✗ Validation failed");
            }

            if !report.errors.is_empty() || !report.warnings.is_empty() {
                println!();
                print!("{}", report.format_message());
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
