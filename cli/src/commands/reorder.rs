//! Commands that reorder or cut a sequence.

use arrayfns_core::array;

use crate::cli::{SequenceArgs, SliceArgs, SpliceArgs};
use crate::common::CliResult;
use crate::common::format::format_sequence;
use crate::common::input::read_items;

pub fn reverse(args: SequenceArgs) -> CliResult<String> {
    let mut items = read_items(&args)?;
    Ok(format_sequence(array::reverse(&mut items)))
}

pub fn slice(args: SliceArgs) -> CliResult<String> {
    let items = read_items(&args.sequence)?;
    let part = array::slice(&items, args.start, args.end);
    Ok(format_sequence(&part))
}

/// `splice`: prints the removed elements, then the mutated sequence.
pub fn splice(args: SpliceArgs) -> CliResult<String> {
    let mut items = read_items(&args.sequence)?;
    let removed = array::splice(&mut items, args.start, args.delete_count, args.insert);
    Ok(format!(
        "removed: {}\nresult: {}",
        format_sequence(&removed),
        format_sequence(&items)
    ))
}
