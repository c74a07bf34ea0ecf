#![warn(clippy::pedantic)]

//! # cs2lua
//!
//! Command-line launcher for the C# to Lua translation engine.
//!
//! The launcher resolves the raw argument vector into a validated
//! [`RunConfiguration`] and hands it to the external `cs2luac` engine. Run
//! `cs2lua -h` for the full flag reference; the same usage text is printed
//! after any argument error.
//!
//! ## Exit codes
//!
//! * 0 – translation succeeded, or help was requested.
//! * non-zero – argument error, engine-reported failure, or unexpected
//!   failure. An engine exit code is mirrored verbatim.
//!
//! ## Environment variables
//!
//! * `CS2LUAC_PATH` – explicit path to the cs2luac engine binary.

mod engine;

use anyhow::Result;
use cs2lua_options::{CmdError, FlagCatalog, HELP_TEXT, RunConfiguration, resolve};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        show_help();
        std::process::exit(1);
    }
    if let Err(e) = run(&args) {
        std::process::exit(handle_error(&e));
    }
}

/// Resolves the arguments, assembles the configuration, and invokes the
/// engine. `-h` short-circuits after resolution, before any required-flag
/// validation runs.
fn run(args: &[String]) -> Result<()> {
    let catalog = FlagCatalog::standard();
    let options = resolve(args, &catalog)?;
    if options.has("-h") {
        show_help();
        return Ok(());
    }

    let config = RunConfiguration::assemble(&options)?;
    println!("translating {} -> {}", config.source_dir, config.output_dir);
    engine::run(&config)?;
    println!("translation completed");
    Ok(())
}

/// Prints the diagnostics for a failed run and picks the exit code.
///
/// Argument errors repeat the usage text. An engine exit code is mirrored
/// without extra output, since the engine already printed its diagnostics.
/// Anything else is surfaced with its full error chain.
fn handle_error(e: &anyhow::Error) -> i32 {
    if let Some(cmd) = e.downcast_ref::<CmdError>() {
        eprintln!("Error: {cmd}");
        show_help();
        return 1;
    }
    if let Some(engine::EngineError::TranslationFailed { code }) =
        e.downcast_ref::<engine::EngineError>()
    {
        return *code;
    }
    eprintln!("Error: {e:?}");
    1
}

fn show_help() {
    eprintln!("{HELP_TEXT}");
}
