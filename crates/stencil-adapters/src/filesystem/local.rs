//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stencil_core::application::ports::{DirEntry, Filesystem};
use stencil_core::error::{ScaffoldError, ScaffoldResult};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        // Any metadata failure counts as "not a directory".
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> ScaffoldResult<Vec<DirEntry>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry.path(), e, "read entry type"))?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_file: file_type.is_file(),
            });
        }

        // read_dir order is platform-dependent; sort for deterministic
        // enumeration and write order.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        trace!(path = %path.display(), entries = entries.len(), "listed directory");
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
}
