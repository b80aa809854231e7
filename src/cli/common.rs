//! Shared CLI plumbing: error type, exit codes, and common arguments.

use crate::config::Config;
use crate::error::PipelineError;
use crate::models::{CssSolution, ExportOptions, Framework, LayoutSchema};
use crate::services::SchemaService;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was rejected (invalid schema, unsupported option, ...)
    ValidationError = 1,
    /// Reading or writing files failed
    IoError = 2,
}

impl ExitCode {
    /// Returns the numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code the process should end with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Input was rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// A file could not be read or written.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<PipelineError> for CliError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::Generation(e) => Self::validation(format!("Generation failed: {e}")),
            PipelineError::Packaging(e) => Self::io(format!("Packaging failed: {e}")),
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Export options that override the configured defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct ExportOptionArgs {
    /// Target framework (react, vue, svelte)
    #[arg(long, value_name = "NAME")]
    pub framework: Option<Framework>,

    /// Styling approach (tailwind, css-modules, styled-components)
    #[arg(long, value_name = "NAME")]
    pub css: Option<CssSolution>,

    /// Emit plain JSX without TypeScript annotations
    #[arg(long)]
    pub no_types: bool,

    /// Omit generated header comments
    #[arg(long)]
    pub no_comments: bool,
}

impl ExportOptionArgs {
    /// Applies the flags on top of `defaults`.
    pub fn apply(&self, defaults: ExportOptions) -> ExportOptions {
        ExportOptions {
            framework: self.framework.unwrap_or(defaults.framework),
            css_solution: self.css.unwrap_or(defaults.css_solution),
            include_types: defaults.include_types && !self.no_types,
            include_comments: defaults.include_comments && !self.no_comments,
        }
    }
}

/// Loads the user config, falling back to defaults when it is unreadable.
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring config: {e:#}");
        Config::default()
    })
}

/// Loads a schema file, mapping failures to I/O errors.
pub fn load_schema(path: &Path) -> CliResult<LayoutSchema> {
    SchemaService::load(path).map_err(|e| CliError::io(format!("{e:#}")))
}

/// Saves a schema file, mapping failures to I/O errors.
pub fn save_schema(schema: &LayoutSchema, path: &Path) -> CliResult<()> {
    SchemaService::save(schema, path).map_err(|e| CliError::io(format!("{e:#}")))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
