//! Usage text and the flag catalog derived from it.
//!
//! The help document is the single source of truth for which flag tokens the
//! resolver recognizes: a line declares a flag iff it begins with `-`, and
//! the token is that line's leading run of non-whitespace characters. The
//! `-csc` capture in [`resolve`](crate::resolve::resolve) ends at the first
//! token found in this catalog, so documenting a new flag is also what makes
//! it a capture boundary.

use std::collections::HashSet;

/// Usage document, printed verbatim on `-h` and after any argument error.
pub const HELP_TEXT: &str = "\
Usage: cs2lua [-s srcfolder] [-d dstfolder]
Arguments
-s              : source directory, all *.cs files under it are translated
-d              : destination directory for the generated .lua files

Options
-h              : show this help message and exit
-l              : path to a folder of dynamic libraries to reference

-m              : meta files, like System.xml, use ';' to separate
-csc            : compiler command arguments, use ' ' or '\\t' to separate

-c              : target classic Lua (5.1); the default target is 5.3
-a              : attributes to export, use ';' to separate; a bare -a exports all
-metadata       : export all metadata, use @CS2Lua.Metadata annotations for precise control
-module         : the compiled assembly is referenced by another module, useful for multi-module builds
";

/// Extracts the set of flag tokens a help document declares.
///
/// Duplicate declarations collapse silently; the document is authored, not
/// user input, so a malformed line is a defect the test suite catches rather
/// than a runtime failure.
#[must_use]
pub fn document_to_flag_set(text: &str) -> HashSet<String> {
    text.lines()
        .filter(|line| line.starts_with('-'))
        .map(|line| {
            line.chars()
                .take_while(|c| !c.is_whitespace())
                .collect::<String>()
        })
        .collect()
}

/// The set of flag tokens the launcher recognizes.
///
/// Constructed once at startup and passed by reference wherever the token
/// set is consulted; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagCatalog {
    flags: HashSet<String>,
}

impl FlagCatalog {
    /// Builds a catalog from an arbitrary help document.
    #[must_use]
    pub fn from_document(text: &str) -> Self {
        Self {
            flags: document_to_flag_set(text),
        }
    }

    /// Builds the catalog for the launcher's own [`HELP_TEXT`].
    #[must_use]
    pub fn standard() -> Self {
        Self::from_document(HELP_TEXT)
    }

    /// Returns whether `token` is a recognized flag.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.flags.contains(token)
    }

    /// Number of recognized flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns whether the catalog recognizes no flags at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
