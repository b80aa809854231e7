//! Error types for the generation pipeline.
//!
//! Validation problems never reach this module: they are collected in a
//! [`crate::validation::ValidationReport`] while the schema is being edited.

use thiserror::Error;

/// Errors raised while turning a schema into source files.
///
/// These indicate a schema the generator cannot represent faithfully; the
/// export is aborted instead of emitting partial output.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A component synthesized no classes at all.
    #[error("Component '{component}' produced an empty class list")]
    EmptyClassList {
        /// Component name
        component: String,
    },

    /// A default prop key cannot be used as a parameter name.
    #[error("Component '{component}' has prop '{key}' which is not a valid identifier")]
    InvalidPropKey {
        /// Component name
        component: String,
        /// Offending prop key
        key: String,
    },

    /// A component name would redeclare an identifier of the generated code.
    #[error("Component name '{0}' clashes with an identifier in the generated code")]
    ReservedComponentName(String),

    /// Two components would be written to the same file.
    #[error("Component name '{0}' is used more than once")]
    DuplicateComponentName(String),

    /// The caller requires at least one component.
    #[error("Schema has no components to export")]
    EmptySchema,

    /// The requested framework or CSS solution has no generator.
    #[error("Export option {option} = '{value}' is not supported yet")]
    Unsupported {
        /// Option name
        option: &'static str,
        /// Requested value
        value: String,
    },

    /// The schema could not be serialized into the manifest.
    #[error("Failed to serialize schema manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Errors raised while building or delivering the archive.
#[derive(Error, Debug)]
pub enum PackagingError {
    /// A file path would escape the archive root.
    #[error("Invalid file path in archive: {0}")]
    InvalidEntryName(String),

    /// The archive file name is unusable.
    #[error("Invalid archive name '{0}': expected a plain file name ending in .zip")]
    InvalidArchiveName(String),

    /// The zip writer failed.
    #[error("Failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Writing archive data failed.
    #[error("Archive I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The download target rejected the archive.
    #[error("Failed to deliver archive to {target}: {source}")]
    Download {
        /// Where the archive was being delivered
        target: String,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a complete export run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Source generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Packaging or delivery failed.
    #[error(transparent)]
    Packaging(#[from] PackagingError),
}

/// Result alias for generation steps.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// Result alias for packaging steps.
pub type PackagingResult<T> = std::result::Result<T, PackagingError>;
