//! Init command: creates a new schema file and, optionally, the config.

use crate::cli::common::{save_schema, CliError, CliResult};
use crate::config::Config;
use crate::services::SCHEMA_FILE_NAME;
use crate::state::EditorState;
use crate::templates::ComponentTemplate;
use clap::Args;
use std::path::PathBuf;

/// Create a new layout schema
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Schema file to create
    #[arg(short, long, value_name = "FILE", default_value = SCHEMA_FILE_NAME)]
    pub schema: PathBuf,

    /// Start with header, content, and footer components
    #[arg(long)]
    pub starter: bool,

    /// Overwrite an existing schema file
    #[arg(long)]
    pub force: bool,

    /// Also write a default config file if none exists
    #[arg(long)]
    pub write_config: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> CliResult<()> {
        if self.schema.exists() && !self.force {
            return Err(CliError::validation(format!(
                "{} already exists. Use --force to overwrite",
                self.schema.display()
            )));
        }

        let mut state = EditorState::new();
        if self.starter {
            for template in [
                ComponentTemplate::Header,
                ComponentTemplate::Content,
                ComponentTemplate::Footer,
            ] {
                state
                    .add_component(template.instantiate())
                    .map_err(|e| CliError::validation(e.to_string()))?;
            }
        }

        save_schema(state.schema(), &self.schema)?;
        println!(
            "✓ Created {} ({} components)",
            self.schema.display(),
            state.schema().components.len()
        );

        if self.write_config && !Config::exists() {
            let path = Config::new()
                .save()
                .map_err(|e| CliError::io(format!("Failed to write config: {e:#}")))?;
            println!("✓ Wrote default config to {}", path.display());
        }

        Ok(())
    }
}
