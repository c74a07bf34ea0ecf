//! Bridge to the external translation engine.
//!
//! The launcher does not translate anything itself: it locates the `cs2luac`
//! binary and hands it the assembled [`RunConfiguration`] on the engine's
//! argument surface. Engine diagnostics pass through on inherited stdio; a
//! non-zero exit becomes [`EngineError::TranslationFailed`] so the entry
//! point can mirror the code without printing anything twice.
//!
//! ## Engine resolution
//!
//! 1. `CS2LUAC_PATH` environment variable (explicit override)
//! 2. System PATH via `which::which("cs2luac")`

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result, bail};
use cs2lua_options::{AttributeExport, RunConfiguration};
use thiserror::Error;

/// Environment variable for an explicit engine binary override.
const CS2LUAC_PATH_ENV: &str = "CS2LUAC_PATH";

/// Failures reported by the engine bridge.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine exited with a non-zero code after printing its own
    /// diagnostics; the launcher exits with the same code.
    #[error("translation failed with exit code {code}")]
    TranslationFailed {
        /// Exit code reported by the engine process.
        code: i32,
    },
}

/// Locates the `cs2luac` engine binary.
///
/// # Errors
///
/// Returns an error if `CS2LUAC_PATH` is set but the path does not exist, or
/// if no engine binary could be found at all. The message explains how to
/// make the engine available.
pub fn find_engine() -> Result<PathBuf> {
    // Priority 1: CS2LUAC_PATH environment variable
    if let Ok(path) = std::env::var(CS2LUAC_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(path);
        }
        bail!(
            "CS2LUAC_PATH environment variable set to '{}', but file does not exist",
            path.display()
        );
    }

    // Priority 2: System PATH
    if let Ok(path) = which::which("cs2luac") {
        return Ok(path);
    }

    bail!(
        "cs2luac engine not found.\n\n\
        The cs2luac binary performs the actual C# to Lua translation.\n\n\
        To make it available:\n  \
        - Put cs2luac on your PATH\n  \
        - Or set the CS2LUAC_PATH environment variable to the binary's location"
    );
}

/// Maps a configuration onto the engine's argument surface.
///
/// The engine receives already-derived data: the aggregated `;`-joined
/// library list rather than the `-l` directory, and the captured compiler
/// argument string as a single value.
#[must_use]
pub fn engine_args(config: &RunConfiguration) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-s".into(),
        config.source_dir.clone().into(),
        "-d".into(),
        config.output_dir.clone().into(),
    ];
    if !config.libraries.is_empty() {
        args.push("--libs".into());
        args.push(config.libraries.clone().into());
    }
    if let Some(meta) = &config.meta_files {
        args.push("--meta".into());
        args.push(meta.clone().into());
    }
    if let Some(csc) = &config.compiler_args {
        args.push("--csc".into());
        args.push(csc.clone().into());
    }
    if config.classic {
        args.push("--classic".into());
    }
    match &config.attributes {
        AttributeExport::Unset => {}
        AttributeExport::All => args.push("--attributes".into()),
        AttributeExport::List(names) => {
            args.push("--attributes".into());
            args.push(names.join(";").into());
        }
    }
    if config.export_metadata {
        args.push("--metadata".into());
    }
    if config.module {
        args.push("--module".into());
    }
    args
}

/// Runs the engine with the given configuration.
///
/// # Errors
///
/// Returns an error when the binary cannot be located or spawned, and
/// [`EngineError::TranslationFailed`] when the engine exits non-zero.
pub fn run(config: &RunConfiguration) -> Result<()> {
    let engine = find_engine()?;

    let status = Command::new(&engine)
        .args(engine_args(config))
        .stdin(std::process::Stdio::inherit())
        .stdout(std::process::Stdio::inherit())
        .stderr(std::process::Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute cs2luac at {}", engine.display()))?;

    if status.success() {
        Ok(())
    } else {
        let code = status.code().unwrap_or(1);
        Err(EngineError::TranslationFailed { code }.into())
    }
}
