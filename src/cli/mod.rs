//! CLI module for the driven-script tooling
//!
//! This module provides the command-line interface for the token dumper, the checker, and the
//! highlighter.
//!
//! ## Commands
//!
//! - `tokens <file>` - Dump the token stream (plain or `--json`)
//! - `check <file>` - Lex and parse, reporting diagnostics
//! - `highlight <file>` - Render the script with ANSI colors
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

use crate::version::DRIVEN_VERSION;

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
/// Contains a user-facing message and an exit code. The CLI entry point catches these errors,
/// prints the message, and exits with the code.
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

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tooling for the driven-script rule language
#[derive(Parser, Debug)]
#[command(name = "driven")]
#[command(version = DRIVEN_VERSION)]
#[command(about = "Tooling for the driven-script rule language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dump the token stream for a script
    Tokens {
        /// Script to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit tokens as JSON instead of the plain listing
        #[arg(long)]
        json: bool,
    },

    /// Lex and parse a script, reporting diagnostics
    Check {
        /// Script to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Render a script with ANSI colors using the standard theme
    Highlight {
        /// Script to render
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the language vocabulary as Markdown reference tables
    Reference,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command implementations return
/// `CliResult` and errors are handled here.
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
        Command::Tokens { file, json } => commands::tokens(&file, json),
        Command::Check { file } => commands::check(&file),
        Command::Highlight { file } => commands::highlight(&file),
        Command::Reference => commands::reference(),
    }
}
