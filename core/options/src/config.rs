//! Run configuration assembly: validated reads plus cross-field derivations.
//!
//! The assembler is the last stage before the engine boundary. It re-reads
//! the resolved options through the accessor (which enforces required vs.
//! optional), derives the aggregated library list from the `-l` directory,
//! and produces the read-only [`RunConfiguration`] the engine consumes.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::resolve::ResolvedOptions;

/// Which attributes the engine should export into the generated Lua.
///
/// The three states are pairwise distinguishable: `-a` absent, a bare `-a`,
/// and `-a` with a `;`-separated list each map to their own variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeExport {
    /// `-a` was not supplied; the engine uses its default selection.
    Unset,
    /// A bare `-a`: export every attribute.
    All,
    /// `-a Name;Other`: export exactly the listed attributes.
    List(Vec<String>),
}

/// The validated option set handed to the translation engine.
///
/// Required fields are never empty once the value exists; construction fails
/// otherwise. Ownership passes to the engine bridge, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Directory holding the C# sources to translate.
    pub source_dir: String,
    /// Directory receiving the generated Lua files.
    pub output_dir: String,
    /// `;`-joined full paths of the referenced dynamic libraries. Empty when
    /// `-l` was not supplied or its directory held no matching files.
    pub libraries: String,
    /// `;`-delimited meta files, passed through to the engine verbatim.
    pub meta_files: Option<String>,
    /// Free-form compiler arguments captured after `-csc`.
    pub compiler_args: Option<String>,
    /// Target classic Lua 5.1 instead of the default 5.3.
    pub classic: bool,
    /// Attribute-export selection.
    pub attributes: AttributeExport,
    /// Export all metadata.
    pub export_metadata: bool,
    /// The compiled assembly is referenced by another module.
    pub module: bool,
}

impl RunConfiguration {
    /// Builds the engine configuration from resolved options.
    ///
    /// # Errors
    ///
    /// Returns [`CmdError::MissingArgument`](crate::errors::CmdError) when
    /// `-s` or `-d` is absent or empty, and an I/O error when the `-l`
    /// directory cannot be read. A library directory with no matching files
    /// is not an error; it yields an empty list.
    pub fn assemble(opts: &ResolvedOptions) -> Result<Self> {
        let source_dir = opts.required("-s")?.to_owned();
        let output_dir = opts.required("-d")?.to_owned();

        let libraries = match opts.value("-l") {
            Some(dir) => collect_libraries(Path::new(dir))?,
            None => String::new(),
        };

        let attributes = if opts.has("-a") {
            match opts.value("-a") {
                Some(list) => AttributeExport::List(
                    list.split(';')
                        .filter(|name| !name.is_empty())
                        .map(str::to_owned)
                        .collect(),
                ),
                None => AttributeExport::All,
            }
        } else {
            AttributeExport::Unset
        };

        Ok(Self {
            source_dir,
            output_dir,
            libraries,
            meta_files: opts.value("-m").map(str::to_owned),
            compiler_args: opts.value("-csc").map(str::to_owned),
            classic: opts.has("-c"),
            attributes,
            export_metadata: opts.has("-metadata"),
            module: opts.has("-module"),
        })
    }
}

/// Aggregates the dynamic libraries directly inside `dir` into one
/// `;`-joined string of full paths, in the directory's natural enumeration
/// order (not guaranteed stable across platforms).
fn collect_libraries(dir: &Path) -> Result<String> {
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read library directory {}", dir.display()))?;

    Ok(entries
        .iter()
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::path)
        .filter(|path| {
            path.extension().and_then(OsStr::to_str) == Some(std::env::consts::DLL_EXTENSION)
        })
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(";"))
}
