//! stencil core — the scaffolding pipeline, free of process state.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (binary)          │
//! │  captures argv/cwd/runtime, maps errors │
//! │          to exit codes, prints          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application (orchestration)      │
//! │      Program · TemplatesManager         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Filesystem port (trait)           │
//! │  implemented by stencil-adapters        │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain (pure logic)              │
//! │  ArgvParser · package-name rules ·      │
//! │  runtime gate · placeholder substitution│
//! └─────────────────────────────────────────┘
//! ```
//!
//! The core never prints, never reads global process state, and never exits:
//! every gate returns a [`error::ScaffoldError`] carrying its fixed exit
//! code, and only the binary's outermost boundary terminates the process.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stencil_core::application::{Program, RunEnv, TemplatesManager};
//!
//! # fn filesystem() -> Box<dyn stencil_core::application::Filesystem> { unimplemented!() }
//! let templates = TemplatesManager::new("/usr/lib/stencil/templates", filesystem());
//! let env = RunEnv {
//!     argv: std::env::args().skip(1).collect(),
//!     cwd: std::env::current_dir().unwrap(),
//!     runtime_version: "18.2.0".into(),
//! };
//! let stat = Program::new(env, templates).run().unwrap();
//! println!("created {}", stat.name);
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppStat, DEFAULT_TEMPLATE, Filesystem, Program, RunEnv, TemplatesManager,
    };
    pub use crate::domain::{AllowList, ArgvParser, PLACEHOLDER, TemplateFile};
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
