//! Generate command: writes the generated project files to a directory.

use crate::cli::common::{
    load_config, load_schema, print_json, CliError, CliResult, ExportOptionArgs,
};
use crate::error::PipelineError;
use crate::generator::ProjectExporter;
use crate::models::LayoutSchema;
use crate::services::{SchemaService, SCHEMA_FILE_NAME};
use crate::validation::SchemaValidator;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Generate component source files into a directory
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Schema file
    #[arg(short, long, value_name = "FILE", default_value = SCHEMA_FILE_NAME)]
    pub schema: PathBuf,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub out: PathBuf,

    /// Export option overrides
    #[command(flatten)]
    pub options: ExportOptionArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Generate response
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// Output directory
    pub output_dir: String,
    /// Written files, relative to the output directory
    pub files: Vec<String>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let options = self.options.apply(config.export.options());

        let schema = load_schema(&self.schema)?;
        ensure_valid(&schema)?;

        let files = ProjectExporter::new(options)
            .export(&schema)
            .map_err(|e| CliError::from(PipelineError::from(e)))?;

        SchemaService::write_files(&files, &self.out)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let response = GenerateResponse {
            output_dir: self.out.display().to_string(),
            files: files.into_iter().map(|f| f.path).collect(),
        };

        if self.json {
            return print_json(&response);
        }

        println!(
            "✓ Generated {} files in {}",
            response.files.len(),
            response.output_dir
        );
        for file in &response.files {
            println!("  {file}");
        }
        Ok(())
    }
}

/// Rejects schemas with validation errors before generating anything.
pub fn ensure_valid(schema: &LayoutSchema) -> CliResult<()> {
    let report = SchemaValidator::new(schema).validate();
    if report.is_valid() {
        return Ok(());
    }
    Err(CliError::validation(format!(
        "Schema is invalid:\n{}",
        report.format_message()
    )))
}
