//! Service layer for file-backed operations.
//!
//! This module contains services that sit between the CLI and the pure
//! generation code: loading and saving schemas, writing generated files.

pub mod schemas;

// Re-export commonly used types
pub use schemas::{SchemaService, SCHEMA_FILE_NAME};
