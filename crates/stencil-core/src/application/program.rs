//! The scaffolding run, gate by gate.
//!
//! [`Program::run`] drives the whole pipeline: runtime gate → argument gate →
//! package-name gate → materialization.  Control flow is strictly linear and
//! every gate returns a `Result`; nothing in here prints or exits, so the
//! entire run is assertable in tests.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::application::templates::TemplatesManager;
use crate::domain::args::{AllowList, ArgvParser};
use crate::domain::package_name::validate_package_name;
use crate::domain::runtime::check_runtime_version;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Template used when the caller does not pass `--template`.
pub const DEFAULT_TEMPLATE: &str = "base";

/// The arguments the CLI accepts.  `yarn` is accepted but currently unused,
/// reserved for the package-manager choice of the post-install step.
const ALLOWED_ARGS: AllowList<'static> = AllowList {
    positionals: &[],
    values: &["name", "template"],
    options: &["yarn"],
};

/// Everything the run reads from its environment, captured explicitly so the
/// orchestrator never touches global process state.
#[derive(Debug, Clone)]
pub struct RunEnv {
    /// Raw argument tokens, program name already stripped.
    pub argv: Vec<String>,
    /// Directory the application directory is created under.
    pub cwd: PathBuf,
    /// Host runtime version string, e.g. `"18.2.0"`.
    pub runtime_version: String,
}

/// Success value of a run: the created application's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppStat {
    pub name: String,
}

/// Orchestrates one scaffolding run.
pub struct Program {
    env: RunEnv,
    templates: TemplatesManager,
}

impl Program {
    pub fn new(env: RunEnv, templates: TemplatesManager) -> Self {
        Self { env, templates }
    }

    /// Run all four gates and materialize the application.
    ///
    /// Fails fast: the first gate that rejects ends the run, and the
    /// destination directory is only ever created after the template has
    /// been fully resolved and read.
    #[instrument(skip_all, fields(cwd = %self.env.cwd.display()))]
    pub fn run(&self) -> ScaffoldResult<AppStat> {
        check_runtime_version(&self.env.runtime_version)?;

        let args = ArgvParser::parse(&self.env.argv);
        args.validate(&ALLOWED_ARGS)?;

        let name = args.value("name").unwrap_or_default();
        let validity = validate_package_name(name);
        if !validity.valid_for_new_packages() {
            return Err(ScaffoldError::InvalidPackageName {
                name: name.to_string(),
                problems: validity.problems(),
            });
        }

        let template = args.value("template").unwrap_or(DEFAULT_TEMPLATE);
        info!(app = name, template, "starting scaffold");

        let files = self.templates.template_files(template)?;
        self.templates
            .write_template_files(name, &files, &self.env.cwd)?;

        Ok(AppStat {
            name: name.to_string(),
        })
    }
}
