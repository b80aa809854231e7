//! Single entry point for exporting a schema as a downloadable archive.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::PipelineError;
use crate::export::archive::{validate_archive_name, ArchivePackager, DownloadSink};
use crate::generator::{GeneratedFile, ProjectExporter};
use crate::models::{ExportOptions, LayoutSchema};

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReceipt {
    /// Archive file name
    pub archive_name: String,
    /// Where the sink put the archive
    pub location: String,
    /// Archive size in bytes
    pub size_bytes: usize,
    /// Archive entries, in order
    pub files: Vec<String>,
}

/// Generate → package → deliver.
///
/// Each run works on the schema snapshot it was handed, so edits made to the
/// live editor state while an export is in flight do not affect its output.
#[derive(Debug, Clone, Copy)]
pub struct ExportPipeline {
    exporter: ProjectExporter,
    packager: ArchivePackager,
}

impl ExportPipeline {
    /// Creates a pipeline for the given options.
    pub const fn new(options: ExportOptions) -> Self {
        Self {
            exporter: ProjectExporter::new(options),
            packager: ArchivePackager::new(),
        }
    }

    /// Fails with an empty-schema error instead of exporting no components.
    #[must_use]
    pub const fn require_components(mut self, required: bool) -> Self {
        self.exporter = self.exporter.require_components(required);
        self
    }

    /// Generates the file set and packs it, without delivering.
    pub fn build_archive(
        &self,
        schema: &LayoutSchema,
    ) -> Result<(Vec<GeneratedFile>, Vec<u8>), PipelineError> {
        let files = self.exporter.export(schema)?;
        let bytes = self.packager.package(&files)?;
        Ok((files, bytes))
    }

    /// Runs a full export and hands the archive to `sink`.
    pub fn run(
        &self,
        schema: LayoutSchema,
        archive_name: &str,
        sink: &dyn DownloadSink,
    ) -> Result<ExportReceipt, PipelineError> {
        validate_archive_name(archive_name)?;

        let result = self.build_archive(&schema).and_then(|(files, bytes)| {
            let location = sink.deliver(archive_name, &bytes)?;
            Ok(ExportReceipt {
                archive_name: archive_name.to_string(),
                location,
                size_bytes: bytes.len(),
                files: files.into_iter().map(|f| f.path).collect(),
            })
        });

        match &result {
            Ok(receipt) => info!(
                archive = %receipt.archive_name,
                bytes = receipt.size_bytes,
                "Export finished"
            ),
            Err(e) => warn!(error = %e, "Export failed"),
        }

        result
    }
}

/// Exports `schema` with `options` into `sink` under `archive_name`.
pub fn export_schema(
    schema: LayoutSchema,
    options: ExportOptions,
    archive_name: &str,
    sink: &dyn DownloadSink,
) -> Result<ExportReceipt, PipelineError> {
    ExportPipeline::new(options).run(schema, archive_name, sink)
}
