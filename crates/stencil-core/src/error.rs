//! Unified error handling for the stencil core.
//!
//! Every failure the pipeline can hit is a [`ScaffoldError`] carrying a fixed
//! exit code.  The core never terminates the process; it returns errors up to
//! the binary, which maps them to exit codes in exactly one place.  The codes
//! are part of the CLI contract — scripts depend on them — so they must stay
//! distinct and stable across versions.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for a scaffolding run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// The host Node toolchain is older than the scaffolded projects support.
    #[error(
        "You are running Node \"{version}\".\n\
         stencil requires Node {minimum} or higher.\n\
         Please update your version of Node."
    )]
    UnsupportedRuntimeVersion { version: String, minimum: u64 },

    /// A positional argument or `--key value` key outside the allow-list.
    #[error("Unknown argument \"{name}\".")]
    UnknownArgument { name: String },

    /// A boolean `--flag` outside the allow-list.
    #[error("Unknown option \"{name}\".")]
    UnknownOption { name: String },

    /// No template directory with the requested name.
    #[error("Unknown template \"{name}\".")]
    UnknownTemplate { name: String },

    /// The application name fails npm package-naming rules.
    #[error("Invalid app name \"{name}\"\n{}", .problems.join(", "))]
    InvalidPackageName { name: String, problems: Vec<String> },

    /// An I/O operation failed while reading or materializing a template.
    #[error("I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

impl ScaffoldError {
    /// Exit code contract:
    ///
    /// | Code | Meaning                     |
    /// |------|-----------------------------|
    /// |  1   | unsupported runtime version |
    /// |  2   | unknown argument            |
    /// |  3   | unknown option              |
    /// |  4   | unknown template            |
    /// |  5   | invalid package name        |
    ///
    /// I/O failures share code 1 with runtime errors; they have no code of
    /// their own in the contract above.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedRuntimeVersion { .. } => 1,
            Self::UnknownArgument { .. } => 2,
            Self::UnknownOption { .. } => 3,
            Self::UnknownTemplate { .. } => 4,
            Self::InvalidPackageName { .. } => 5,
            Self::Io { .. } => 1,
        }
    }
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
