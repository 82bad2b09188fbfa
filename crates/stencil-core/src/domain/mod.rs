//! Core domain layer: pure logic, no I/O.
//!
//! Everything in this module is synchronous, deterministic, and touches no
//! filesystem or process state — the argument grammar, the naming rules, the
//! runtime gate, and the template records.  All I/O happens behind the ports
//! defined in the application layer.

pub mod args;
pub mod package_name;
pub mod runtime;
pub mod template;

pub use args::{AllowList, ArgvParser};
pub use package_name::{NameValidity, validate_package_name};
pub use runtime::{MIN_RUNTIME_MAJOR, check_runtime_version};
pub use template::{PLACEHOLDER, TemplateFile, substitute, template_kind};
