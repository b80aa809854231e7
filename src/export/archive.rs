//! Zip packaging and delivery of generated files.
//!
//! ## Design
//!
//! - Archives are built fully in memory, then handed to a [`DownloadSink`]
//! - Entry names are the generated files' relative paths, contents are written
//!   byte-for-byte
//! - Entries carry a fixed timestamp so identical input yields identical bytes
//!
//! ## Security
//!
//! - Entry names are validated to prevent path traversal (zip-slip)
//! - Archive names must be plain file names

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{PackagingError, PackagingResult};
use crate::generator::GeneratedFile;

/// Builds the default archive name, `<product>-export-<unix millis>.zip`.
pub fn default_archive_name(product: &str) -> String {
    archive_name_at(product, chrono::Utc::now().timestamp_millis())
}

/// Builds an archive name for a fixed timestamp.
pub fn archive_name_at(product: &str, timestamp_millis: i64) -> String {
    format!("{product}-export-{timestamp_millis}.zip")
}

/// Checks that an archive name is a plain `.zip` file name.
pub fn validate_archive_name(name: &str) -> PackagingResult<()> {
    let stem = name.strip_suffix(".zip").unwrap_or_default();
    if stem.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.contains(char::is_control)
    {
        return Err(PackagingError::InvalidArchiveName(name.to_string()));
    }
    Ok(())
}

/// Serializes generated files into a zip archive.
#[derive(Debug, Clone, Copy)]
pub struct ArchivePackager {
    compression: CompressionMethod,
}

impl ArchivePackager {
    /// Creates a packager using Deflate compression.
    pub const fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Stores entries without compression.
    #[must_use]
    pub const fn stored(mut self) -> Self {
        self.compression = CompressionMethod::Stored;
        self
    }

    /// Packages files into zip bytes, one entry per file, in the given order.
    pub fn package(&self, files: &[GeneratedFile]) -> PackagingResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        let options = SimpleFileOptions::default()
            .compression_method(self.compression)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);

        for file in files {
            add_file_to_zip(&mut zip, &file.path, file.content.as_bytes(), options)?;
        }

        let bytes = zip.finish()?.into_inner();
        info!(
            entries = files.len(),
            bytes = bytes.len(),
            "Archive packaged"
        );
        Ok(bytes)
    }
}

impl Default for ArchivePackager {
    fn default() -> Self {
        Self::new()
    }
}

/// Adds a file to a zip archive with zip-slip prevention.
fn add_file_to_zip<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    content: &[u8],
    options: SimpleFileOptions,
) -> PackagingResult<()> {
    validate_entry_name(name)?;

    zip.start_file(name, options)?;
    zip.write_all(content)?;
    debug!(entry = name, bytes = content.len(), "Added archive entry");

    Ok(())
}

/// Rejects absolute paths, backslashes, and `.`/`..`/empty segments.
fn validate_entry_name(name: &str) -> PackagingResult<()> {
    let invalid = name.is_empty()
        || name.starts_with('/')
        || name.contains('\\')
        || name
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");

    if invalid {
        return Err(PackagingError::InvalidEntryName(name.to_string()));
    }
    Ok(())
}

/// Destination that receives the finished archive ("download").
pub trait DownloadSink {
    /// Delivers the archive and returns a description of where it went.
    fn deliver(&self, archive_name: &str, bytes: &[u8]) -> PackagingResult<String>;
}

/// Writes archives into a directory.
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    dir: PathBuf,
}

impl FileSystemSink {
    /// Creates a sink writing into `dir` (created on first delivery).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for FileSystemSink {
    /// Writes via temp file + rename so a failed delivery never leaves a
    /// truncated archive behind.
    fn deliver(&self, archive_name: &str, bytes: &[u8]) -> PackagingResult<String> {
        validate_archive_name(archive_name)?;

        let target = self.dir.join(archive_name);
        let temp_path = self.dir.join(format!(".{archive_name}.tmp"));
        let download_error = |source: std::io::Error| PackagingError::Download {
            target: target.display().to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(download_error)?;
        if let Err(e) = fs::write(&temp_path, bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(download_error(e));
        }
        fs::rename(&temp_path, &target).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            download_error(e)
        })?;

        info!(path = %target.display(), "Archive written");
        Ok(target.display().to_string())
    }
}

/// Keeps delivered archives in memory, for embedding hosts that stream the
/// bytes themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every archive delivered so far.
    pub fn take(&self) -> Vec<(String, Vec<u8>)> {
        std::mem::take(&mut *self.delivered.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&self, archive_name: &str, bytes: &[u8]) -> PackagingResult<String> {
        validate_archive_name(archive_name)?;
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((archive_name.to_string(), bytes.to_vec()));
        Ok(format!("memory:{archive_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn sample_files() -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new("components/Header.tsx", "export default function Header() {}\n"),
            GeneratedFile::new("app/page.tsx", "// page: ünïcödé\n"),
            GeneratedFile::new("schema.json", "{}\n"),
        ]
    }

    fn read_entries(bytes: &[u8]) -> Vec<(String, String)> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut entry = archive.by_index(i).unwrap();
                let mut content = String::new();
                entry.read_to_string(&mut content).unwrap();
                (entry.name().to_string(), content)
            })
            .collect()
    }

    #[test]
    fn test_package_preserves_paths_and_contents() {
        let files = sample_files();
        let bytes = ArchivePackager::new().package(&files).unwrap();
        let entries = read_entries(&bytes);

        let expected: Vec<_> = files
            .iter()
            .map(|f| (f.path.clone(), f.content.clone()))
            .collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_package_is_reproducible() {
        let files = sample_files();
        let first = ArchivePackager::new().package(&files).unwrap();
        let second = ArchivePackager::new().package(&files).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stored_packaging() {
        let bytes = ArchivePackager::new().stored().package(&sample_files()).unwrap();
        assert_eq!(read_entries(&bytes).len(), 3);
    }

    #[test]
    fn test_add_file_to_zip_validation() {
        for name in ["../evil.txt", "/etc/passwd", "a\\b.txt", "a//b", "", "./x", "a/.."] {
            let files = vec![GeneratedFile::new(name, "x")];
            let err = ArchivePackager::new().package(&files).unwrap_err();
            assert!(
                matches!(err, PackagingError::InvalidEntryName(_)),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_archive_names() {
        assert_eq!(
            archive_name_at("layoutsmith", 1_700_000_000_000),
            "layoutsmith-export-1700000000000.zip"
        );
        assert!(default_archive_name("demo").starts_with("demo-export-"));
        assert!(validate_archive_name("site.zip").is_ok());
        for name in ["site.tar", ".zip", "../site.zip", "dir/site.zip", ".hidden.zip"] {
            assert!(validate_archive_name(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_file_system_sink_writes_archive() {
        let temp = TempDir::new().unwrap();
        let sink = FileSystemSink::new(temp.path().join("out"));
        let location = sink.deliver("site.zip", b"PK-bytes").unwrap();

        let target = temp.path().join("out").join("site.zip");
        assert_eq!(location, target.display().to_string());
        assert_eq!(fs::read(&target).unwrap(), b"PK-bytes");
        assert!(!temp.path().join("out").join(".site.zip.tmp").exists());
    }

    #[test]
    fn test_file_system_sink_reports_failure() {
        let temp = TempDir::new().unwrap();
        // A regular file where the output directory should be
        let blocker = temp.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();

        let err = FileSystemSink::new(&blocker)
            .deliver("site.zip", b"data")
            .unwrap_err();
        assert!(matches!(err, PackagingError::Download { .. }));
    }

    #[test]
    fn test_memory_sink_collects_archives() {
        let sink = MemorySink::new();
        sink.deliver("a.zip", b"1").unwrap();
        sink.deliver("b.zip", b"22").unwrap();

        let delivered = sink.take();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[1], ("b.zip".to_string(), b"22".to_vec()));
        assert!(sink.take().is_empty());
    }
}
