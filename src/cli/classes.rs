//! Classes command: shows the utility classes each component resolves to.

use crate::cli::common::{load_schema, print_json, CliError, CliResult};
use crate::generator::ComponentClasses;
use crate::services::SCHEMA_FILE_NAME;
use clap::Args;
use std::path::PathBuf;

/// Print the synthesized classes per component
#[derive(Debug, Clone, Args)]
pub struct ClassesArgs {
    /// Schema file
    #[arg(short, long, value_name = "FILE", default_value = SCHEMA_FILE_NAME)]
    pub schema: PathBuf,

    /// Only show this component
    #[arg(short, long, value_name = "NAME")]
    pub component: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ClassesArgs {
    /// Execute the classes command
    pub fn execute(&self) -> CliResult<()> {
        let schema = load_schema(&self.schema)?;

        let classes: Vec<ComponentClasses> = match &self.component {
            Some(name) => {
                let component = schema.component_by_name(name).ok_or_else(|| {
                    CliError::validation(format!("Component '{name}' not found"))
                })?;
                vec![ComponentClasses::for_component(component, &schema.breakpoints)]
            }
            None => schema
                .components
                .iter()
                .map(|component| ComponentClasses::for_component(component, &schema.breakpoints))
                .collect(),
        };

        if self.json {
            return print_json(&classes);
        }

        for entry in &classes {
            println!("{}", entry.name);
            for (label, value) in [
                ("positioning", &entry.positioning),
                ("layout", &entry.layout),
                ("styling", &entry.styling),
                ("responsive", &entry.responsive),
            ] {
                if !value.is_empty() {
                    println!("  {label:<12} {value}");
                }
            }
            println!("  {:<12} {}", "className", entry.combined);
        }

        Ok(())
    }
}
