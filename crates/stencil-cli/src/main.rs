//! # stencil CLI
//!
//! Scaffolds an application directory from a named template:
//!
//! ```text
//! stencil --name <app-name> [--template <template-name>] [--yarn]
//! ```
//!
//! ## Startup sequence
//!
//! 1. Load `.env` and configuration.
//! 2. Initialise the tracing subscriber (logging).
//! 3. Capture process state (argv, cwd, host Node version) into a `RunEnv`.
//! 4. Run the core pipeline.
//! 5. Translate any `ScaffoldError` into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                       |
//! |------|-------------------------------|
//! |  0   | Success                       |
//! |  1   | Unsupported runtime version   |
//! |  2   | Unknown argument              |
//! |  3   | Unknown option                |
//! |  4   | Unknown template              |
//! |  5   | Invalid package name          |

use std::process::ExitCode;

use tracing::{debug, warn};

use stencil_adapters::LocalFilesystem;
use stencil_core::application::{Program, RunEnv, TemplatesManager};
use stencil_core::error::ScaffoldError;

use crate::{config::AppConfig, logging::init_logging, output::Reporter};

mod config;
mod logging;
mod output;
mod runtime;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.  Silently
    // ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::from(1);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(config.output.no_color) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let reporter = Reporter::new(config.output.no_color);

    // ── 3. Capture process state ──────────────────────────────────────────
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            reporter.error(&format!("Cannot determine working directory: {e}"));
            return ExitCode::from(1);
        }
    };
    let env = RunEnv {
        argv: std::env::args().skip(1).collect(),
        cwd: cwd.clone(),
        runtime_version: runtime::detect_node_version(),
    };
    let templates_root = config.templates_root(&cwd);
    debug!(
        templates_root = %templates_root.display(),
        runtime = %env.runtime_version,
        "starting stencil"
    );

    // ── 4. Run the pipeline + 5. Error handling ───────────────────────────
    let templates = TemplatesManager::new(templates_root, Box::new(LocalFilesystem::new()));
    match Program::new(env, templates).run() {
        Ok(stat) => {
            let _ = reporter.success(&format!("App \"{}\" created successfully!", stat.name));
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &reporter),
    }
}

/// Translate a `ScaffoldError` into a user message and its fixed exit code.
///
/// This is the single place where the core's typed failures become output
/// and process termination.
fn handle_error(err: ScaffoldError, reporter: &Reporter) -> ExitCode {
    warn!(code = err.exit_code(), "run failed: {err}");
    reporter.error(&err.to_string());
    ExitCode::from(err.exit_code())
}
