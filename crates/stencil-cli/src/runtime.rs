//! Host Node version detection.
//!
//! The templates scaffold Node applications, so the version gate in the core
//! checks the host `node` toolchain.  Detection order:
//!
//! 1. `STENCIL_NODE_VERSION` environment override (used by tests);
//! 2. `node --version` probe;
//! 3. `"unknown"` — the core gate only rejects versions it can positively
//!    identify as too old, so an undetectable Node does not block the run.

use std::process::Command;

use tracing::debug;

/// Detect the host Node version as a dotted string, e.g. `"18.2.0"`.
pub fn detect_node_version() -> String {
    if let Ok(version) = std::env::var("STENCIL_NODE_VERSION") {
        if !version.is_empty() {
            return version;
        }
    }

    match probe_node() {
        Some(version) => version,
        None => {
            debug!("could not detect a node toolchain; skipping the version gate");
            "unknown".to_string()
        }
    }
}

/// Run `node --version` and normalize its `vX.Y.Z` output.
fn probe_node() -> Option<String> {
    let output = Command::new("node").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let raw = String::from_utf8(output.stdout).ok()?;
    let version = raw.trim().trim_start_matches('v');
    if version.is_empty() {
        return None;
    }
    Some(version.to_string())
}
