//! Commands that build a new sequence or value from the input.

use arrayfns_core::array::{self, FlatMapped};

use crate::cli::{FlatMapArgs, MapArgs, PredicateArgs, ReduceArgs};
use crate::common::format::format_sequence;
use crate::common::input::read_items;
use crate::common::{CliError, CliResult};

pub fn filter(args: PredicateArgs) -> CliResult<String> {
    let items = read_items(&args.sequence)?;
    let kept = array::filter(&items, |item, _, _| args.predicate.test(*item));
    Ok(format_sequence(&kept))
}

pub fn map(args: MapArgs) -> CliResult<String> {
    let items = read_items(&args.sequence)?;
    let mapped = array::map(&items, |item, _, _| args.transform.apply(*item))
        .into_iter()
        .collect::<CliResult<Vec<_>>>()?;
    Ok(format_sequence(&mapped))
}

/// `flat-map`: `x` becomes `x, f(x)`, unless `--expand-if` rejects it.
pub fn flat_map(args: FlatMapArgs) -> CliResult<String> {
    let items = read_items(&args.sequence)?;
    let expanded = array::flat_map(&items, |item, _, _| {
        let expand = args.expand_if.is_none_or(|predicate| predicate.test(*item));
        if expand {
            FlatMapped::Many(vec![Ok(*item), args.transform.apply(*item)])
        } else {
            FlatMapped::One(Ok(*item))
        }
    })
    .into_iter()
    .collect::<CliResult<Vec<_>>>()?;
    Ok(format_sequence(&expanded))
}

/// `reduce`: fold with `--op`, seeded by `--initial` or the op's identity.
pub fn reduce(args: ReduceArgs) -> CliResult<String> {
    let items = read_items(&args.sequence)?;
    let initial = args.initial.unwrap_or_else(|| args.op.identity());
    let result = array::reduce(
        &items,
        |acc: Option<i64>, item, _, _| acc.and_then(|acc| args.op.step(acc, *item)),
        Some(initial),
    );
    let result = result.ok_or(CliError::Overflow {
        operation: args.op.name(),
    })?;
    Ok(result.to_string())
}
