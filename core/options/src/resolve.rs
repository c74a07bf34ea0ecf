//! Tokenizer/resolver: one left-to-right pass over the raw argument vector.
//!
//! Most flags follow a simple shape (a bare switch, or a flag plus exactly
//! one value token). The exception is `-csc`: its value is the whole run of
//! tokens up to the next flag found in the [`FlagCatalog`], which lets a
//! user pass a whitespace-separated compiler command line without any
//! quoting convention. The cost is that the captured value cannot itself
//! contain a token equal to a recognized flag.
//!
//! Tokens that are neither flags nor consumed as values are ignored; later
//! stages re-validate everything they read.

use std::collections::HashMap;

use crate::errors::CmdError;
use crate::help::FlagCatalog;

/// Flags whose value is exactly the next token. A trailing one of these with
/// nothing after it is a hard syntax error.
const VALUE_FLAGS: &[&str] = &["-s", "-d", "-l", "-m"];

/// Flag whose value may be omitted entirely (a bare `-a` means "export all
/// attributes").
const OPTIONAL_VALUE_FLAG: &str = "-a";

/// Flag whose value is the free-form token run ending at the next recognized
/// flag.
const CAPTURE_FLAG: &str = "-csc";

/// The flag -> value mapping produced by [`resolve`].
///
/// `None` records a bare flag; `Some("")` records an explicitly empty value,
/// which is distinct from the flag being absent entirely. Built once per run
/// and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    entries: HashMap<String, Option<String>>,
}

impl ResolvedOptions {
    /// Returns whether `flag` occurred in the argument vector at all.
    #[must_use]
    pub fn has(&self, flag: &str) -> bool {
        self.entries.contains_key(flag)
    }

    /// Returns the value recorded for `flag`, if the flag carried one.
    ///
    /// `None` covers both an absent flag and a bare one; callers that need
    /// to tell those apart combine this with [`has`](Self::has).
    #[must_use]
    pub fn value(&self, flag: &str) -> Option<&str> {
        self.entries.get(flag).and_then(|v| v.as_deref())
    }

    /// Returns the non-empty value of a required flag.
    ///
    /// # Errors
    ///
    /// Returns [`CmdError::MissingArgument`] when the flag is absent, bare,
    /// or carries an empty value.
    pub fn required(&self, flag: &str) -> Result<&str, CmdError> {
        match self.value(flag) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(CmdError::missing_argument(flag)),
        }
    }

    fn insert(&mut self, flag: &str, value: Option<String>) {
        self.entries.insert(flag.to_owned(), value);
    }
}

/// Resolves a raw argument vector into a flag -> value mapping.
///
/// Tokens are scanned left to right exactly once. A `-`-prefixed token is a
/// flag; any other token not consumed as a value is an orphan and is
/// ignored. When a flag occurs more than once the last occurrence wins.
/// `-csc` captures every token up to the first subsequent member of
/// `catalog` (or the end of the vector), joined with single spaces; the
/// boundary flag itself is then processed normally.
///
/// # Errors
///
/// Returns [`CmdError::ArgumentSyntax`] when a flag that requires a value is
/// the last token in the vector.
pub fn resolve(args: &[String], catalog: &FlagCatalog) -> Result<ResolvedOptions, CmdError> {
    let mut options = ResolvedOptions::default();
    let mut i = 0;
    while i < args.len() {
        let token = args[i].as_str();
        if !token.starts_with('-') {
            i += 1;
            continue;
        }
        if token == CAPTURE_FLAG {
            let rest = &args[i + 1..];
            let end = rest
                .iter()
                .position(|t| catalog.contains(t))
                .unwrap_or(rest.len());
            options.insert(token, Some(rest[..end].join(" ")));
            i += 1 + end;
        } else if VALUE_FLAGS.contains(&token) {
            let Some(value) = args.get(i + 1) else {
                return Err(CmdError::argument_syntax(token));
            };
            options.insert(token, Some(value.clone()));
            i += 2;
        } else if token == OPTIONAL_VALUE_FLAG {
            match args.get(i + 1) {
                Some(next) if !next.starts_with('-') => {
                    options.insert(token, Some(next.clone()));
                    i += 2;
                }
                _ => {
                    options.insert(token, None);
                    i += 1;
                }
            }
        } else {
            options.insert(token, None);
            i += 1;
        }
    }
    Ok(options)
}
