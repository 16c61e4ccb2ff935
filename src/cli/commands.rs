//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! File generation and route registration report independently: a page can be
//! created successfully while its registration is skipped (absent or
//! anchor-less registry). Skips warn and exit zero; only real failures
//! (invalid name, I/O) are non-zero.

use std::path::Path;

use crate::registry::PatchDetail;
use crate::scaffold::{ScaffoldError, Scaffolder};

use super::{CliError, CliResult, ExitCode};

/// Seed a project layout and route registry.
pub fn init(dir: &Path) -> CliResult<ExitCode> {
    let scaffolder = Scaffolder::new(dir);
    let emitted = scaffolder.init().map_err(describe)?;

    let mut created = 0;
    for file in &emitted {
        if file.created {
            println!("Created: {}", file.path.display());
            created += 1;
        } else {
            println!("Exists, skipped: {}", file.path.display());
        }
    }
    println!("\n✓ Project seeded ({} file(s) created)", created);
    Ok(ExitCode::SUCCESS)
}

/// Generate a page widget and register its route.
pub fn create_page(dir: &Path, name: &str) -> CliResult<ExitCode> {
    let scaffolder = Scaffolder::new(dir);
    let report = scaffolder.create_page(name).map_err(describe)?;

    if report.file.created {
        println!("Created: {}", report.file.path.display());
    } else {
        println!("Exists, skipped: {}", report.file.path.display());
    }

    match report.registration.detail {
        PatchDetail::Applied => {
            println!("✓ Route registered");
        }
        PatchDetail::AlreadyRegistered => {
            println!("Route already registered");
        }
        PatchDetail::SkippedNoRegistry => {
            eprintln!("Warning: no route registry found; run `fledge init` first. Page left unregistered.");
        }
        PatchDetail::SkippedMissingAnchor(missing) => {
            eprintln!(
                "Warning: registry is missing an anchor ({}); left untouched. Register the route by hand.",
                missing.describe()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Generate a data model.
pub fn create_model(dir: &Path, name: &str) -> CliResult<ExitCode> {
    let file = Scaffolder::new(dir).create_model(name).map_err(describe)?;
    if file.created {
        println!("Created: {}", file.path.display());
    } else {
        println!("Exists, skipped: {}", file.path.display());
    }
    Ok(ExitCode::SUCCESS)
}

/// Generate a domain entity.
pub fn create_entity(dir: &Path, name: &str) -> CliResult<ExitCode> {
    let file = Scaffolder::new(dir).create_entity(name).map_err(describe)?;
    if file.created {
        println!("Created: {}", file.path.display());
    } else {
        println!("Exists, skipped: {}", file.path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(err: ScaffoldError) -> CliError {
    CliError::failure(format!("Error: {}", err))
}
