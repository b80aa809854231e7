//! Schema file I/O service.
//!
//! This module centralizes reading and writing `schema.json` documents and
//! writing generated file sets to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::generator::GeneratedFile;
use crate::models::LayoutSchema;

/// Default schema file name inside a project directory.
pub const SCHEMA_FILE_NAME: &str = "layout.schema.json";

/// Service for loading and saving layout schemas.
pub struct SchemaService;

impl SchemaService {
    /// Loads a schema from a JSON file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use layoutsmith::services::SchemaService;
    ///
    /// let schema = SchemaService::load(Path::new("layout.schema.json"))?;
    /// println!("{} components", schema.components.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<LayoutSchema> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema from {}", path.display()))?;

        LayoutSchema::from_json(&content)
            .with_context(|| format!("Failed to parse schema in {}", path.display()))
    }

    /// Saves a schema as pretty-printed JSON.
    ///
    /// This performs an atomic write using a temp file + rename pattern to ensure
    /// the file is never left in a corrupted state.
    pub fn save(schema: &LayoutSchema, path: &Path) -> Result<()> {
        let mut content = schema
            .to_json_pretty()
            .context("Failed to serialize schema")?;
        content.push('\n');

        write_atomic(path, content.as_bytes())
            .with_context(|| format!("Failed to save schema to {}", path.display()))?;

        debug!(path = %path.display(), components = schema.components.len(), "Saved schema");
        Ok(())
    }

    /// Writes generated files below `root`, creating directories as needed.
    ///
    /// Returns the written paths in the order given.
    pub fn write_files(files: &[GeneratedFile], root: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(files.len());

        for file in files {
            let target = resolve_relative(root, &file.path)?;
            write_atomic(&target, file.content.as_bytes())
                .with_context(|| format!("Failed to write {}", target.display()))?;
            debug!(path = %target.display(), "Wrote generated file");
            written.push(target);
        }

        Ok(written)
    }
}

/// Joins a forward-slash relative path onto `root`, refusing to leave it.
fn resolve_relative(root: &Path, relative: &str) -> Result<PathBuf> {
    let mut target = root.to_path_buf();
    for segment in relative.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
            anyhow::bail!("Refusing to write outside the output directory: {relative}");
        }
        target.push(segment);
    }
    Ok(target)
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let file_name = path
        .file_name()
        .context("Target path has no file name")?
        .to_string_lossy();
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to rename temp file to {}", path.display()));
    }

    Ok(())
}
