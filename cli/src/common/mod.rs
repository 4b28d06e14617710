//! Common utilities shared across CLI commands.

pub mod callbacks;
pub mod error;
pub mod format;
pub mod input;

pub use error::{CliError, CliResult};
