//! Error handling utilities for the CLI.

use std::num::ParseIntError;

use thiserror::Error;

/// Everything that can go wrong while running a command.
///
/// The array operations themselves never fail; these all come from reading
/// input or from arithmetic inside a callback.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid integer `{token}`: {source}")]
    InvalidItem {
        token: String,
        source: ParseIntError,
    },

    #[error("integer overflow in `{operation}`")]
    Overflow { operation: &'static str },
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Print an error to stderr and exit with code 1.
pub fn report_and_exit(error: CliError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}
