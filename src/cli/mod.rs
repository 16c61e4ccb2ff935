//! CLI module for fledge
//!
//! ## Commands
//!
//! - `init [DIR]` - seed a project layout and route registry
//! - `create page <NAME>` - generate a page and register its route
//! - `create model <NAME>` - generate a data model
//! - `create entity <NAME>` - generate a domain entity
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scaffolding CLI for Flutter-style projects
#[derive(Parser, Debug)]
#[command(name = "fledge")]
#[command(version = VERSION)]
#[command(about = "Generate pages, models and entities, and keep the route registry in sync", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed a project layout and route registry
    Init {
        /// Project root directory
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },

    /// Generate source files from a feature name
    Create {
        #[command(subcommand)]
        kind: CreateKind,
    },
}

#[derive(Subcommand, Debug)]
pub enum CreateKind {
    /// Generate a page widget and register its route
    Page {
        /// Feature name (e.g. user_profile)
        #[arg(value_name = "NAME")]
        name: String,
        /// Project root directory
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },

    /// Generate a data model
    Model {
        /// Feature name (e.g. user_profile)
        #[arg(value_name = "NAME")]
        name: String,
        /// Project root directory
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },

    /// Generate a domain entity
    Entity {
        /// Feature name (e.g. user_profile)
        #[arg(value_name = "NAME")]
        name: String,
        /// Project root directory
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Init { dir } => commands::init(&dir),
        Command::Create { kind } => match kind {
            CreateKind::Page { name, dir } => commands::create_page(&dir, &name),
            CreateKind::Model { name, dir } => commands::create_model(&dir, &name),
            CreateKind::Entity { name, dir } => commands::create_entity(&dir, &name),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
