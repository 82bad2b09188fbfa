//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stencil_core::application::ports::{DirEntry, Filesystem};
use stencil_core::error::{ScaffoldError, ScaffoldResult};

/// In-memory filesystem for testing.
///
/// Clones share the same underlying state, so a test can hand one clone to
/// the pipeline and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        insert_with_parents(&mut inner.directories, path.into());
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_with_parents(&mut inner.directories, parent.to_path_buf());
        }
        inner.files.insert(path, content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

fn insert_with_parents(directories: &mut BTreeSet<PathBuf>, path: PathBuf) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(path)
    }

    fn list_dir(&self, path: &Path) -> ScaffoldResult<Vec<DirEntry>> {
        let inner = self.inner.read().unwrap();
        if !inner.directories.contains(path) {
            return Err(ScaffoldError::Io {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            });
        }

        // BTree iteration keeps entries sorted, matching the local adapter.
        let mut entries: Vec<DirEntry> = inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|name| DirEntry {
                name: name.to_string_lossy().into_owned(),
                is_file: true,
            })
            .collect();
        entries.extend(
            inner
                .directories
                .iter()
                .filter(|d| d.parent() == Some(path))
                .filter_map(|d| d.file_name())
                .map(|name| DirEntry {
                    name: name.to_string_lossy().into_owned(),
                    is_file: false,
                }),
        );
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        self.read_file(path).ok_or_else(|| ScaffoldError::Io {
            path: path.to_path_buf(),
            reason: "No such file".into(),
        })
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().unwrap();
        insert_with_parents(&mut inner.directories, path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ScaffoldError::Io {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                });
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let observer = fs.clone();
        fs.add_file("/t/f.txt", "x");
        assert_eq!(observer.read_file(Path::new("/t/f.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn add_file_creates_parent_directories() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/a/b/c.txt", "x");
        assert!(fs.is_dir(Path::new("/a")));
        assert!(fs.is_dir(Path::new("/a/b")));
        assert!(!fs.is_dir(Path::new("/a/b/c.txt")));
    }

    #[test]
    fn write_without_parent_fails() {
        let fs = MemoryFilesystem::new();
        let err = fs.write_file(Path::new("/missing/f.txt"), "x").unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }

    #[test]
    fn list_dir_reports_files_and_subdirectories_sorted() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/b.txt", "b");
        fs.add_file("/t/a.txt", "a");
        fs.add_dir("/t/sub");

        let entries = fs.list_dir(Path::new("/t")).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "sub"]);
        assert!(!entries[2].is_file);
    }

    #[test]
    fn list_dir_of_missing_directory_fails() {
        let fs = MemoryFilesystem::new();
        assert!(fs.list_dir(Path::new("/nope")).is_err());
    }
}
