//! Application layer: orchestration over the filesystem port.
//!
//! This is where the domain logic meets I/O — the [`TemplatesManager`] reads
//! and writes template files through [`ports::Filesystem`], and [`Program`]
//! sequences the validation gates around it.

pub mod ports;
pub mod program;
pub mod templates;

pub use ports::{DirEntry, Filesystem};
pub use program::{AppStat, DEFAULT_TEMPLATE, Program, RunEnv};
pub use templates::TemplatesManager;
