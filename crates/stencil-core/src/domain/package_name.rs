//! npm package-name validation.
//!
//! The scaffolded application name becomes the `name` field of the generated
//! `package.json`, so it has to satisfy the npm registry's naming rules.
//! This mirrors the `validate-npm-package-name` checks: *errors* are rules
//! every package name must satisfy; *warnings* are legacy allowances that are
//! still rejected for newly published packages.  A name is acceptable here
//! only when both lists are empty.

/// Hard upper bound imposed by the npm registry.
const MAX_NAME_LENGTH: usize = 214;

/// Names that can never be used as package names.
const BLACKLIST: &[&str] = &["node_modules", "favicon.ico"];

/// Node built-in module names; shadowing them is rejected for new packages.
const CORE_MODULES: &[&str] = &[
    "assert",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "worker_threads",
    "zlib",
];

/// Outcome of validating a candidate package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValidity {
    /// Violations of rules every package name must satisfy.
    pub errors: Vec<String>,
    /// Legacy allowances that are rejected for newly created packages.
    pub warnings: Vec<String>,
}

impl NameValidity {
    /// `true` iff the name may be used for a new package.
    pub fn valid_for_new_packages(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Errors and warnings flattened into one problem list, errors first.
    pub fn problems(&self) -> Vec<String> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .cloned()
            .collect()
    }
}

/// Validate `name` against the npm package naming rules.
pub fn validate_package_name(name: &str) -> NameValidity {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if name.is_empty() {
        errors.push("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        errors.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        errors.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        errors.push("name cannot contain leading or trailing spaces".to_string());
    }
    for blacklisted in BLACKLIST {
        if name.eq_ignore_ascii_case(blacklisted) {
            errors.push(format!("{blacklisted} is a blacklisted name"));
        }
    }

    if CORE_MODULES.contains(&name) {
        warnings.push(format!("{name} is a core module name"));
    }
    if name.len() > MAX_NAME_LENGTH {
        warnings.push(format!(
            "name can no longer contain more than {MAX_NAME_LENGTH} characters"
        ));
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        warnings.push("name can no longer contain capital letters".to_string());
    }
    if name.chars().any(|c| "~'!()*".contains(c)) {
        warnings.push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }
    if !is_url_friendly(name) {
        warnings.push("name can only contain URL-friendly characters".to_string());
    }

    NameValidity { errors, warnings }
}

/// A name is URL-friendly when percent-encoding leaves it unchanged.
/// Scoped names (`@scope/name`) are checked per part.
fn is_url_friendly(name: &str) -> bool {
    if let Some(rest) = name.strip_prefix('@') {
        if let Some((scope, pkg)) = rest.split_once('/') {
            return url_safe(scope) && url_safe(pkg);
        }
    }
    url_safe(name)
}

/// Characters `encodeURIComponent` leaves untouched.
fn url_safe(part: &str) -> bool {
    part.chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_.!~*'()".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(name: &str) -> bool {
        validate_package_name(name).valid_for_new_packages()
    }

    #[test]
    fn plain_lowercase_names_are_valid() {
        assert!(ok("my-app"));
        assert!(ok("my_app"));
        assert!(ok("app123"));
        assert!(ok("some-long-but-reasonable-name"));
    }

    #[test]
    fn scoped_names_are_valid() {
        assert!(ok("@scope/my-app"));
    }

    #[test]
    fn empty_name_is_an_error() {
        let validity = validate_package_name("");
        assert!(!validity.valid_for_new_packages());
        assert!(validity.errors.iter().any(|e| e.contains("length")));
    }

    #[test]
    fn leading_period_and_underscore_are_errors() {
        assert!(
            validate_package_name(".hidden")
                .errors
                .iter()
                .any(|e| e.contains("period"))
        );
        assert!(
            validate_package_name("_private")
                .errors
                .iter()
                .any(|e| e.contains("underscore"))
        );
    }

    #[test]
    fn surrounding_whitespace_is_an_error() {
        assert!(!validate_package_name(" my-app ").errors.is_empty());
    }

    #[test]
    fn blacklisted_names_are_errors() {
        assert!(!validate_package_name("node_modules").errors.is_empty());
        assert!(!validate_package_name("favicon.ico").errors.is_empty());
    }

    #[test]
    fn capital_letters_fail_for_new_packages() {
        let validity = validate_package_name("MyApp");
        assert!(validity.errors.is_empty());
        assert!(!validity.valid_for_new_packages());
    }

    #[test]
    fn slash_in_unscoped_name_is_not_url_friendly() {
        let validity = validate_package_name("Invalid/Name");
        assert!(!validity.valid_for_new_packages());
        assert!(
            validity
                .warnings
                .iter()
                .any(|w| w.contains("URL-friendly"))
        );
    }

    #[test]
    fn special_characters_fail_for_new_packages() {
        assert!(!ok("not-ok!"));
        assert!(!ok("wow*"));
    }

    #[test]
    fn core_module_names_fail_for_new_packages() {
        let validity = validate_package_name("http");
        assert!(validity.errors.is_empty());
        assert!(!validity.valid_for_new_packages());
    }

    #[test]
    fn overlong_names_fail_for_new_packages() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(!ok(&name));
    }

    #[test]
    fn problems_lists_errors_before_warnings() {
        let validity = validate_package_name(".Bad");
        let problems = validity.problems();
        assert_eq!(problems.len(), validity.errors.len() + validity.warnings.len());
        assert!(problems[0].contains("period"));
    }
}
