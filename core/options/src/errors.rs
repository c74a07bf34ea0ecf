//! Error types for argument resolution.
//!
//! Both variants carry the offending flag token so the entry point can name
//! it next to the usage text. Engine-side failures are not represented here;
//! they belong to the launcher binary, which owns the engine bridge.

use thiserror::Error;

/// Errors raised while turning the raw argument vector into options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CmdError {
    /// A flag that requires a value was the last token in the vector.
    #[error("missing value for argument {flag}")]
    ArgumentSyntax {
        /// The flag that was left without a value.
        flag: String,
    },

    /// A required flag was absent, or carried no usable value, after
    /// resolution.
    #[error("required argument {flag} is not found")]
    MissingArgument {
        /// The flag that was expected.
        flag: String,
    },
}

impl CmdError {
    /// Creates a new `ArgumentSyntax` error.
    #[must_use]
    pub fn argument_syntax(flag: impl Into<String>) -> Self {
        Self::ArgumentSyntax { flag: flag.into() }
    }

    /// Creates a new `MissingArgument` error.
    #[must_use]
    pub fn missing_argument(flag: impl Into<String>) -> Self {
        Self::MissingArgument { flag: flag.into() }
    }
}
