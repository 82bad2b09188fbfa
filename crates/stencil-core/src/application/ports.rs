//! Driven (output) ports — implemented by infrastructure.
//!
//! The application layer needs exactly one thing from the outside world: a
//! filesystem.  `stencil-adapters` provides the implementations:
//!
//! - `LocalFilesystem` over `std::fs` (production)
//! - `MemoryFilesystem` (testing)

use std::path::Path;

use crate::error::ScaffoldResult;

/// A direct child of a directory, as reported by [`Filesystem::list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Base name of the entry.
    pub name: String,
    /// `true` for a regular file, `false` for a directory.
    pub is_file: bool,
}

/// Port for filesystem operations.
///
/// All reads and writes the pipeline performs go through this trait, so the
/// whole pipeline runs unmodified against an in-memory filesystem in tests.
pub trait Filesystem: Send + Sync {
    /// `true` iff `path` exists and is a directory.  Lookup failures are
    /// absorbed into `false`; this probe never fails.
    fn is_dir(&self, path: &Path) -> bool;

    /// Direct children of `path`, in a deterministic (sorted) order.
    /// Not recursive.
    fn list_dir(&self, path: &Path) -> ScaffoldResult<Vec<DirEntry>>;

    /// Full text content of the file at `path`.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write `content` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
}
