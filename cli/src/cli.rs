//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module, and the
//! callbacks behind `Predicate`, `Transform` and `Fold` live in
//! `common::callbacks`.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// arrayfns - Run array operations over a list of integers
#[derive(Parser, Debug)]
#[command(name = "arrayfns", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every element with its index
    ForEach(SequenceArgs),

    /// Check whether any element matches a predicate
    Some(PredicateArgs),

    /// Check whether every element matches a predicate
    Every(PredicateArgs),

    /// Print the first element matching a predicate, or `none`
    Find(PredicateArgs),

    /// Print the index of the first element matching a predicate, or `-1`
    FindIndex(PredicateArgs),

    /// Keep the elements matching a predicate
    Filter(PredicateArgs),

    /// Transform every element
    Map(MapArgs),

    /// Expand every element `x` into `x, f(x)`
    FlatMap(FlatMapArgs),

    /// Fold the elements into one value
    Reduce(ReduceArgs),

    /// Reverse the elements
    Reverse(SequenceArgs),

    /// Copy a range of elements
    Slice(SliceArgs),

    /// Remove a range of elements and insert new ones in its place
    Splice(SpliceArgs),
}

/// The integers a command operates on.
#[derive(Args, Debug, Default)]
pub struct SequenceArgs {
    /// Integers to operate on
    #[arg(allow_negative_numbers = true, conflicts_with = "input")]
    pub items: Vec<i64>,

    /// Read the integers from a file instead (`-` for stdin)
    #[arg(long, short)]
    pub input: Option<String>,
}

/// Arguments for commands taking a predicate.
#[derive(Args, Debug)]
pub struct PredicateArgs {
    /// Predicate applied to each element
    #[arg(long = "where", value_enum)]
    pub predicate: Predicate,

    #[command(flatten)]
    pub sequence: SequenceArgs,
}

/// Arguments for the `map` command.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Transform applied to each element
    #[arg(long = "with", value_enum)]
    pub transform: Transform,

    #[command(flatten)]
    pub sequence: SequenceArgs,
}

/// Arguments for the `flat-map` command.
#[derive(Args, Debug)]
pub struct FlatMapArgs {
    /// Transform producing the second element of each expansion
    #[arg(long = "with", value_enum)]
    pub transform: Transform,

    /// Only expand elements matching this predicate; others are kept as-is
    #[arg(long, value_enum)]
    pub expand_if: Option<Predicate>,

    #[command(flatten)]
    pub sequence: SequenceArgs,
}

/// Arguments for the `reduce` command.
#[derive(Args, Debug)]
pub struct ReduceArgs {
    /// Fold operation
    #[arg(long, value_enum)]
    pub op: Fold,

    /// Initial accumulator (defaults to the operation's identity)
    #[arg(long, allow_negative_numbers = true)]
    pub initial: Option<i64>,

    #[command(flatten)]
    pub sequence: SequenceArgs,
}

/// Arguments for the `slice` command.
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// First index to copy; negative counts from the end
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<isize>,

    /// Index to stop before; negative counts from the end
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<isize>,

    #[command(flatten)]
    pub sequence: SequenceArgs,
}

/// Arguments for the `splice` command.
#[derive(Args, Debug)]
pub struct SpliceArgs {
    /// First index to remove; negative counts from the end
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<isize>,

    /// Number of elements to remove (defaults to the rest of the sequence)
    #[arg(long, allow_negative_numbers = true)]
    pub delete_count: Option<isize>,

    /// Element to insert at `start` (repeatable)
    #[arg(long, allow_negative_numbers = true)]
    pub insert: Vec<i64>,

    #[command(flatten)]
    pub sequence: SequenceArgs,
}

/// Named predicates for `--where` and `--expand-if`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Predicate {
    /// Divisible by two
    Even,
    /// Not divisible by two
    Odd,
    /// Greater than zero
    Positive,
    /// Less than zero
    Negative,
    /// Equal to zero
    Zero,
}

/// Named transforms for `--with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    /// Multiply by two
    Double,
    /// Multiply by itself
    Square,
    /// Flip the sign
    Negate,
    /// Absolute value
    Abs,
}

/// Named folds for `reduce --op`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fold {
    /// Add the elements (identity 0)
    Sum,
    /// Multiply the elements (identity 1)
    Product,
}
