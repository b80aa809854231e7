//! Schema-to-code generation.
//!
//! This module turns a [`crate::models::LayoutSchema`] into React + Tailwind
//! source files: class synthesis, per-component code, and the project file set.

pub mod classes;
pub mod component;
pub mod project;

use serde::Serialize;

pub use classes::{
    dedupe_classes, generate_component_classes, generate_layout_classes,
    generate_positioning_classes, generate_responsive_classes, generate_styling_classes,
    resolve_breakpoint, ComponentClasses, ResolvedBreakpoint,
};
pub use component::ComponentGenerator;
pub use project::{ProjectExporter, MANIFEST_PATH};

/// A generated file, addressed by its path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Relative path (forward slashes)
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Creates a generated file.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
