//! Commands that inspect a sequence without building a new one.

use arrayfns_core::array;

use crate::cli::{PredicateArgs, SequenceArgs};
use crate::common::CliResult;
use crate::common::input::read_items;

/// `for-each`: one `index: item` line per element.
pub fn for_each(args: SequenceArgs) -> CliResult<String> {
    let items = read_items(&args)?;
    let mut lines = Vec::with_capacity(items.len());
    array::for_each(&items, |item, index, _| lines.push(format!("{index}: {item}")));
    Ok(lines.join("\n"))
}

pub fn some(args: PredicateArgs) -> CliResult<String> {
    let items = read_items(&args.sequence)?;
    let found = array::some(&items, |item, _, _| args.predicate.test(*item));
    Ok(found.to_string())
}

pub fn every(args: PredicateArgs) -> CliResult<String> {
    let items = read_items(&args.sequence)?;
    let all = array::every(&items, |item, _, _| args.predicate.test(*item));
    Ok(all.to_string())
}

/// `find`: the first match, or `none`.
pub fn find(args: PredicateArgs) -> CliResult<String> {
    let items = read_items(&args.sequence)?;
    let found = array::find(&items, |item, _, _| args.predicate.test(*item));
    Ok(found.map_or_else(|| "none".to_string(), |item| item.to_string()))
}

/// `find-index`: the index of the first match, or `-1`.
pub fn find_index(args: PredicateArgs) -> CliResult<String> {
    let items = read_items(&args.sequence)?;
    let index = array::find_index(&items, |item, _, _| args.predicate.test(*item));
    Ok(index.map_or_else(|| "-1".to_string(), |index| index.to_string()))
}
