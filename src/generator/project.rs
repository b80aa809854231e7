//! Whole-project export.
//!
//! Walks a schema in component order and produces the complete virtual file
//! set: one file per component, the page composing them, and `schema.json`.

use crate::constants::APP_NAME;
use crate::error::{GenerationError, GenerationResult};
use crate::generator::component::{ComponentGenerator, COMPONENTS_DIR};
use crate::generator::GeneratedFile;
use crate::models::{CssSolution, ExportOptions, Framework, LayoutSchema};
use std::collections::HashSet;
use tracing::{debug, info};

/// Path of the serialized schema inside the export.
pub const MANIFEST_PATH: &str = "schema.json";

/// Directory of the root composition file.
pub const APP_DIR: &str = "app";

/// Builds the file set for a schema.
#[derive(Debug, Clone, Copy)]
pub struct ProjectExporter {
    options: ExportOptions,
    require_components: bool,
}

impl ProjectExporter {
    /// Creates an exporter that accepts empty schemas.
    pub const fn new(options: ExportOptions) -> Self {
        Self {
            options,
            require_components: false,
        }
    }

    /// Rejects schemas without components when set.
    #[must_use]
    pub const fn require_components(mut self, required: bool) -> Self {
        self.require_components = required;
        self
    }

    /// Returns the options this exporter generates with.
    pub const fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Path of the root composition file.
    pub fn page_path(&self) -> String {
        format!("{APP_DIR}/page.{}", self.options.extension())
    }

    /// Generates every file for the schema.
    ///
    /// Order: component files in schema order, then the page, then the
    /// manifest. Nothing is written anywhere; any failure aborts the whole
    /// export.
    pub fn export(&self, schema: &LayoutSchema) -> GenerationResult<Vec<GeneratedFile>> {
        self.check_options()?;

        if self.require_components && schema.components.is_empty() {
            return Err(GenerationError::EmptySchema);
        }

        let mut seen = HashSet::new();
        for component in &schema.components {
            if !seen.insert(component.name.as_str()) {
                return Err(GenerationError::DuplicateComponentName(
                    component.name.clone(),
                ));
            }
        }

        info!(
            components = schema.components.len(),
            framework = %self.options.framework,
            "Exporting project"
        );

        let generator =
            ComponentGenerator::new(self.options).with_breakpoints(&schema.breakpoints);
        let mut files = Vec::with_capacity(schema.components.len() + 2);

        for component in &schema.components {
            let file = generator.generate(component)?;
            debug!(path = %file.path, bytes = file.content.len(), "Generated component");
            files.push(file);
        }

        files.push(GeneratedFile::new(self.page_path(), self.generate_page(schema)));
        files.push(GeneratedFile::new(MANIFEST_PATH, generate_manifest(schema)?));

        info!(files = files.len(), "Project export complete");
        Ok(files)
    }

    /// Generates the composition file rendering every component in order.
    pub fn generate_page(&self, schema: &LayoutSchema) -> String {
        let mut out = String::new();

        if self.options.include_comments {
            out.push_str("/**\n");
            out.push_str(&format!(" * Page composition generated by {APP_NAME}.\n"));
            out.push_str(" *\n");
            out.push_str(&format!(
                " * Renders {} component{} in schema order (schema version {}).\n",
                schema.components.len(),
                if schema.components.len() == 1 { "" } else { "s" },
                schema.schema_version
            ));
            out.push_str(" */\n");
        }

        out.push_str("import React from 'react';\n");
        for component in &schema.components {
            out.push_str(&format!(
                "import {0} from '../{COMPONENTS_DIR}/{0}';\n",
                component.name
            ));
        }
        out.push('\n');

        out.push_str("export default function Page() {\n");
        out.push_str("  return (\n");
        out.push_str("    <>\n");
        for component in &schema.components {
            out.push_str(&format!("      <{} />\n", component.name));
        }
        out.push_str("    </>\n");
        out.push_str("  );\n");
        out.push_str("}\n");

        out
    }

    fn check_options(&self) -> GenerationResult<()> {
        if self.options.framework != Framework::React {
            return Err(GenerationError::Unsupported {
                option: "framework",
                value: self.options.framework.to_string(),
            });
        }
        if self.options.css_solution != CssSolution::Tailwind {
            return Err(GenerationError::Unsupported {
                option: "cssSolution",
                value: self.options.css_solution.to_string(),
            });
        }
        Ok(())
    }
}

/// Serializes the schema for `schema.json`.
pub fn generate_manifest(schema: &LayoutSchema) -> GenerationResult<String> {
    let mut json = schema.to_json_pretty()?;
    json.push('\n');
    Ok(json)
}
