//! Template resolution and file materialization.
//!
//! A template is a named subdirectory of the templates root; its direct file
//! children are the template's files.  Materializing a template reads each
//! file, substitutes the `{{app-name}}` placeholder, and writes the result
//! under a freshly created application directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::application::ports::Filesystem;
use crate::domain::template::{TemplateFile, substitute, template_kind};
use crate::error::{ScaffoldError, ScaffoldResult};

/// Resolves template names to files and writes them into the destination
/// tree.
pub struct TemplatesManager {
    templates_root: PathBuf,
    fs: Box<dyn Filesystem>,
}

impl TemplatesManager {
    /// Create a manager rooted at `templates_root`.
    pub fn new(templates_root: impl Into<PathBuf>, fs: Box<dyn Filesystem>) -> Self {
        Self {
            templates_root: templates_root.into(),
            fs,
        }
    }

    /// `true` iff a directory named `name` exists under the templates root.
    ///
    /// A file with a matching name does not count, and lookup failures are
    /// absorbed into `false` — this check never propagates an error.
    pub fn template_exists(&self, name: &str) -> bool {
        self.fs.is_dir(&self.templates_root.join(name))
    }

    /// Enumerate and read the files of template `name`.
    ///
    /// Subdirectories inside the template are silently skipped, not recursed
    /// into.  Returns [`ScaffoldError::UnknownTemplate`] when no directory
    /// with that name exists.
    pub fn template_files(&self, name: &str) -> ScaffoldResult<Vec<TemplateFile>> {
        if !self.template_exists(name) {
            return Err(ScaffoldError::UnknownTemplate {
                name: name.to_string(),
            });
        }

        let template_dir = self.templates_root.join(name);
        let kind = template_kind(name);

        let mut files = Vec::new();
        for entry in self.fs.list_dir(&template_dir)? {
            if !entry.is_file {
                debug!(entry = %entry.name, "skipping template subdirectory");
                continue;
            }
            let content = self.fs.read_to_string(&template_dir.join(&entry.name))?;
            files.push(TemplateFile {
                name: entry.name,
                kind: kind.clone(),
                path: "/".to_string(),
                content,
            });
        }

        info!(template = name, files = files.len(), "template resolved");
        Ok(files)
    }

    /// Write `files` into `dest/app_name`, substituting the placeholder.
    ///
    /// The application directory (with any missing intermediates) is created
    /// first; files are then written in enumeration order.  There is no
    /// cross-file atomicity — a failure partway leaves a partially populated
    /// directory.
    pub fn write_template_files(
        &self,
        app_name: &str,
        files: &[TemplateFile],
        dest: &Path,
    ) -> ScaffoldResult<()> {
        let app_dir = dest.join(app_name);
        self.fs.create_dir_all(&app_dir)?;

        for file in files {
            // The stored path is rooted at the destination tree; strip the
            // leading separator so joining stays inside the app directory.
            let relative = file.path.trim_matches('/');
            let target = if relative.is_empty() {
                app_dir.join(&file.name)
            } else {
                app_dir.join(relative).join(&file.name)
            };
            self.fs.write_file(&target, &substitute(&file.content, app_name))?;
            debug!(file = %target.display(), "wrote template file");
        }

        info!(app = app_name, files = files.len(), "application materialized");
        Ok(())
    }
}
