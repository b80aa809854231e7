//! Archive packaging and the export entry point.
//!
//! The generated file set from [`crate::generator`] is zipped in memory and
//! handed to a [`DownloadSink`], which stands in for the browser download.

pub mod archive;
pub mod pipeline;

pub use archive::{
    archive_name_at, default_archive_name, validate_archive_name, ArchivePackager, DownloadSink,
    FileSystemSink, MemorySink,
};
pub use pipeline::{export_schema, ExportPipeline, ExportReceipt};
