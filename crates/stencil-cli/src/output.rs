//! Console output formatting.
//!
//! The reporter is the single sink for user-facing messages: informational
//! lines and the success banner go to stdout, errors to stderr.  It never
//! terminates the process — exit codes are handled in `main`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

/// Writes user-facing messages with optional color.
pub struct Reporter {
    no_color: bool,
    term: Term,
}

impl Reporter {
    /// Build a reporter; color is disabled explicitly or when stdout is not
    /// a terminal.
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color: no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    /// Generic informational message.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success message, rendered green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            msg.to_owned()
        } else {
            msg.green().to_string()
        };
        self.term.write_line(&line)
    }

    /// Error message, rendered red on stderr.  Never suppressed.
    pub fn error(&self, msg: &str) {
        if self.no_color {
            eprintln!("{msg}");
        } else {
            eprintln!("{}", msg.red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporter_methods_do_not_panic() {
        let reporter = Reporter::new(true);
        assert!(reporter.info("hello").is_ok());
        assert!(reporter.success("done").is_ok());
        reporter.error("boom");
    }
}
