//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`STENCIL_TEMPLATES_DIR`, `NO_COLOR`)
//! 2. Config file (`config.toml` in the platform config directory)
//! 3. Built-in defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template settings.
    pub templates: TemplatesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Explicit templates root; overrides the executable-relative lookup.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file if one exists,
    /// then environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::fs::read_to_string(Self::config_path()) {
            Ok(raw) => toml::from_str(&raw)?,
            Err(_) => Self::default(),
        };

        if let Ok(dir) = std::env::var("STENCIL_TEMPLATES_DIR") {
            if !dir.is_empty() {
                config.templates.dir = Some(PathBuf::from(dir));
            }
        }
        if std::env::var_os("NO_COLOR").is_some() {
            config.output.no_color = true;
        }

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stencil.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stencil.toml"))
    }

    /// Resolve the templates root directory.
    ///
    /// An explicit config/env directory wins; otherwise look next to the
    /// executable (`templates/`, then `../templates` for installed layouts),
    /// finally fall back to `<cwd>/templates`.
    pub fn templates_root(&self, cwd: &std::path::Path) -> PathBuf {
        if let Some(dir) = &self.templates.dir {
            return dir.clone();
        }

        if let Ok(exe) = std::env::current_exe() {
            if let Some(exe_dir) = exe.parent() {
                for candidate in [exe_dir.join("templates"), exe_dir.join("../templates")] {
                    if candidate.is_dir() {
                        return candidate;
                    }
                }
            }
        }

        cwd.join("templates")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_templates_dir() {
        let cfg = AppConfig::default();
        assert!(cfg.templates.dir.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_dir_wins_over_fallbacks() {
        let cfg = AppConfig {
            templates: TemplatesConfig {
                dir: Some(PathBuf::from("/opt/stencil/templates")),
            },
            ..Default::default()
        };
        let root = cfg.templates_root(std::path::Path::new("/work"));
        assert_eq!(root, PathBuf::from("/opt/stencil/templates"));
    }

    #[test]
    fn config_file_parses() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [templates]
            dir = "/srv/templates"

            [output]
            no_color = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.templates.dir, Some(PathBuf::from("/srv/templates")));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn empty_config_file_is_all_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert!(cfg.templates.dir.is_none());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
