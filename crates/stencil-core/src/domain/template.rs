//! Template file records and placeholder substitution.

use std::path::Path;

/// The literal token replaced by the application name at write time.
///
/// This is the only templating directive the tool supports.
pub const PLACEHOLDER: &str = "{{app-name}}";

/// One file read out of a template directory, consumed exactly once when the
/// destination tree is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// File base name within the template directory.
    pub name: String,
    /// Extension of the *template's name argument*, not of this file.
    /// Historical behavior, kept as-is; see `template_kind`.
    pub kind: String,
    /// Path of the file relative to the destination root.  Always `"/"` in
    /// current behavior — templates are flat, subdirectories are skipped.
    pub path: String,
    /// Raw file text, placeholder not yet substituted.
    pub content: String,
}

/// Replace every occurrence of [`PLACEHOLDER`] in `content` with `app_name`.
pub fn substitute(content: &str, app_name: &str) -> String {
    content.replace(PLACEHOLDER, app_name)
}

/// Extension of a template name (`"react.ts"` → `"ts"`, `"base"` → `""`).
pub fn template_kind(template_name: &str) -> String {
    Path::new(template_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_replaces_every_occurrence() {
        let content = "# {{app-name}}\nWelcome to {{app-name}}!";
        assert_eq!(substitute(content, "demo"), "# demo\nWelcome to demo!");
    }

    #[test]
    fn substitute_of_bare_placeholder_roundtrips() {
        assert_eq!(substitute(PLACEHOLDER, "demo"), "demo");
    }

    #[test]
    fn substitute_leaves_other_braces_alone() {
        let content = "{{other}} and {app-name}";
        assert_eq!(substitute(content, "demo"), content);
    }

    #[test]
    fn kind_is_template_name_extension() {
        assert_eq!(template_kind("base"), "");
        assert_eq!(template_kind("widget.ts"), "ts");
    }
}
