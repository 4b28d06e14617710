//! Command implementations.
//!
//! Each command reads its sequence, runs one array operation and returns the
//! text to print. Commands never print themselves.

pub mod query;
pub mod reorder;
pub mod transform;

use crate::cli::Command;
use crate::common::CliResult;

/// Run a parsed command and return its output.
pub fn run(command: Command) -> CliResult<String> {
    match command {
        Command::ForEach(args) => query::for_each(args),
        Command::Some(args) => query::some(args),
        Command::Every(args) => query::every(args),
        Command::Find(args) => query::find(args),
        Command::FindIndex(args) => query::find_index(args),
        Command::Filter(args) => transform::filter(args),
        Command::Map(args) => transform::map(args),
        Command::FlatMap(args) => transform::flat_map(args),
        Command::Reduce(args) => transform::reduce(args),
        Command::Reverse(args) => reorder::reverse(args),
        Command::Slice(args) => reorder::slice(args),
        Command::Splice(args) => reorder::splice(args),
    }
}
