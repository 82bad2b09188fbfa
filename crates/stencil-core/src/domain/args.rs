//! Command-line argument grammar.
//!
//! The grammar is deliberately tiny — three token classes, resolved in a
//! single left-to-right pass:
//!
//! - **positional**: a token without the `--` prefix that was not consumed as
//!   a value by the preceding token;
//! - **value**: `--key value`, binding `value` to `key` and skipping it;
//! - **option**: `--flag` with no following value token, recorded as `true`.
//!
//! A `--key` immediately followed by another `--`-prefixed token is a
//! standalone option; it never swallows the next token.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{ScaffoldError, ScaffoldResult};

const FLAG_PREFIX: &str = "--";

/// Allow-lists for [`ArgvParser::validate`].
///
/// Anything parsed that is absent from its corresponding list is an offense:
/// positionals and value keys map to [`ScaffoldError::UnknownArgument`],
/// option keys to [`ScaffoldError::UnknownOption`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowList<'a> {
    pub positionals: &'a [&'a str],
    pub values: &'a [&'a str],
    pub options: &'a [&'a str],
}

/// Parsed command-line arguments.
///
/// Built once by [`ArgvParser::parse`] and immutable afterwards.  Accessors
/// are pure lookups: absence is `None`, never a default — in particular
/// [`ArgvParser::option`] yields `Some(true)` or `None`, never `Some(false)`.
///
/// Values and options live in `BTreeMap`s so validation walks them in a
/// deterministic order and the first reported offense is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgvParser {
    positional: Vec<String>,
    values: BTreeMap<String, String>,
    options: BTreeMap<String, bool>,
}

impl ArgvParser {
    /// Tokenize raw argument tokens (everything after the program name).
    pub fn parse(argv: &[String]) -> Self {
        let mut positional = Vec::new();
        let mut values = BTreeMap::new();
        let mut options = BTreeMap::new();

        let mut i = 0;
        while i < argv.len() {
            let arg = argv[i].as_str();
            let prev = if i > 0 { Some(argv[i - 1].as_str()) } else { None };
            let next = argv.get(i + 1).map(String::as_str);

            if !arg.starts_with(FLAG_PREFIX) {
                // A bare token whose predecessor was a `--key` would have been
                // consumed as that key's value below, so reaching it here means
                // it stands on its own.
                if prev.is_none_or(|p| !p.starts_with(FLAG_PREFIX)) {
                    positional.push(arg.to_owned());
                }
                i += 1;
                continue;
            }

            let key = &arg[FLAG_PREFIX.len()..];
            match next {
                Some(value) if !value.starts_with(FLAG_PREFIX) => {
                    values.insert(key.to_owned(), value.to_owned());
                    // Skip the value token so it is never classified itself.
                    i += 2;
                }
                _ => {
                    options.insert(key.to_owned(), true);
                    i += 1;
                }
            }
        }

        debug!(
            positionals = positional.len(),
            values = values.len(),
            options = options.len(),
            "argv parsed"
        );

        Self {
            positional,
            values,
            options,
        }
    }

    /// All offenses against `allow`, in a deterministic order: positionals in
    /// their parse order, then unknown value keys, then unknown option keys.
    ///
    /// Running this twice against the same allow-lists yields the same set.
    pub fn offenses(&self, allow: &AllowList<'_>) -> Vec<ScaffoldError> {
        let mut offenses = Vec::new();

        for arg in &self.positional {
            if !allow.positionals.contains(&arg.as_str()) {
                offenses.push(ScaffoldError::UnknownArgument { name: arg.clone() });
            }
        }
        for key in self.values.keys() {
            if !allow.values.contains(&key.as_str()) {
                offenses.push(ScaffoldError::UnknownArgument { name: key.clone() });
            }
        }
        for key in self.options.keys() {
            if !allow.options.contains(&key.as_str()) {
                offenses.push(ScaffoldError::UnknownOption { name: key.clone() });
            }
        }

        offenses
    }

    /// Enforce the allow-lists, surfacing only the first offense.
    ///
    /// The presentation layer exits on the first reported error, so later
    /// offenses would never be seen anyway; returning just the first keeps the
    /// observable behavior identical while staying a plain `Result`.
    pub fn validate(&self, allow: &AllowList<'_>) -> ScaffoldResult<()> {
        match self.offenses(allow).into_iter().next() {
            Some(offense) => Err(offense),
            None => Ok(()),
        }
    }

    /// Positional argument at `index`, if any.
    pub fn at(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Value bound to `--name <value>`, if present.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// `Some(true)` if `--name` was passed as a flag; `None` otherwise.
    pub fn option(&self, name: &str) -> Option<bool> {
        self.options.get(name).copied()
    }
}
