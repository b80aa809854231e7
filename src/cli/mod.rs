//! CLI command handlers for Layoutsmith.
//!
//! This module provides headless, scriptable access to schema editing,
//! validation, code generation, and archive export.

pub mod classes;
pub mod common;
pub mod component;
pub mod export;
pub mod generate;
pub mod init;
pub mod validate;

// Re-export types used by main.rs and tests
pub use classes::ClassesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use component::ComponentArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use init::InitArgs;
pub use validate::ValidateArgs;
