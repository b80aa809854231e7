//! Data models for layout schemas, style descriptors, and export options.
//!
//! Models are plain serde types with no knowledge of generation or I/O.

pub mod descriptors;
pub mod options;
pub mod schema;

// Re-export all model types
pub use descriptors::{
    Align, BreakpointKey, FlexDirection, Justify, LayoutDescriptor, LayoutType, Offset,
    PositionType, PositioningDescriptor, ResponsiveDescriptor, ResponsiveOverride, Rounded,
    Shadow, StylingDescriptor,
};
pub use options::{CssSolution, ExportOptions, Framework};
pub use schema::{BreakpointDescriptor, ComponentDescriptor, LayoutSchema, SemanticTag};
