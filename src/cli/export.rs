//! Export command: packages the generated project into a zip archive.

use crate::cli::common::{load_config, load_schema, print_json, CliResult, ExportOptionArgs};
use crate::cli::generate::ensure_valid;
use crate::export::{default_archive_name, ExportPipeline, FileSystemSink};
use crate::services::SCHEMA_FILE_NAME;
use clap::Args;
use std::path::PathBuf;

/// Export the project as a zip archive
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Schema file
    #[arg(short, long, value_name = "FILE", default_value = SCHEMA_FILE_NAME)]
    pub schema: PathBuf,

    /// Directory the archive is written to (defaults to the configured output_dir)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Archive file name (defaults to [product]-export-[timestamp].zip)
    #[arg(short, long, value_name = "FILE")]
    pub name: Option<String>,

    /// Fail instead of exporting a schema without components
    #[arg(long)]
    pub require_components: bool,

    /// Export option overrides
    #[command(flatten)]
    pub options: ExportOptionArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let options = self.options.apply(config.export.options());

        let schema = load_schema(&self.schema)?;
        ensure_valid(&schema)?;

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| config.paths.output_dir.clone());
        let archive_name = self
            .name
            .clone()
            .unwrap_or_else(|| default_archive_name(&config.export.product_name));

        let receipt = ExportPipeline::new(options)
            .require_components(self.require_components)
            .run(schema, &archive_name, &FileSystemSink::new(output_dir))?;

        if self.json {
            return print_json(&receipt);
        }

        println!(
            "✓ Exported {} files to: {} ({} bytes)",
            receipt.files.len(),
            receipt.location,
            receipt.size_bytes
        );
        Ok(())
    }
}
