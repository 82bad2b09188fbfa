//! Host runtime version gate.
//!
//! The templates this tool ships scaffold Node applications, so the run is
//! refused outright when the host Node toolchain is older than the generated
//! projects support.

use crate::error::{ScaffoldError, ScaffoldResult};

/// Oldest Node major the generated projects run on.
pub const MIN_RUNTIME_MAJOR: u64 = 14;

/// Reject runtime versions whose numeric major is below
/// [`MIN_RUNTIME_MAJOR`].
///
/// `version` is a dotted version string such as `"18.2.0"`.  A major that
/// does not parse as a number is *not* rejected — the gate only fires on a
/// version it can positively identify as too old.  An empty major is treated
/// as zero and rejected.
pub fn check_runtime_version(version: &str) -> ScaffoldResult<()> {
    let major = version.split('.').next().unwrap_or("");

    let parsed = if major.is_empty() {
        Some(0)
    } else {
        major.parse::<u64>().ok()
    };

    match parsed {
        Some(m) if m < MIN_RUNTIME_MAJOR => Err(ScaffoldError::UnsupportedRuntimeVersion {
            version: version.to_string(),
            minimum: MIN_RUNTIME_MAJOR,
        }),
        _ => Ok(()),
    }
}
