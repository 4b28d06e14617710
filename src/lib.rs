//! arrayfns - Array operations written from first principles
//!
//! # Overview
//!
//! A small set of array operations over ordered sequences, each written
//! directly in terms of element access instead of the standard library's
//! equivalents:
//!
//! - Traversal: `for_each`, `some`, `every`, `find`, `find_index`, `filter`, `map`, `flat_map`
//! - Folding: `reduce`
//! - In-place: `reverse`, `splice`
//! - Copying: `slice`
//!
//! Callbacks receive `(item, index, arr)`. Nothing panics on out-of-range
//! arguments: missing matches are `None`, and `slice`/`splice` bounds are
//! clamped, with negative indices counted from the end.
//!
//! # Quick Start
//!
//! ```
//! use arrayfns::{FlatMapped, filter, flat_map, reduce, reverse, slice, splice};
//!
//! let evens = filter(&[1, 2, 3, 4], |x, _, _| x % 2 == 0);
//! assert_eq!(evens, [2, 4]);
//!
//! let pairs = flat_map(&[1, 2, 3], |x, _, _| FlatMapped::Many(vec![*x, x * 2]));
//! assert_eq!(pairs, [1, 2, 2, 4, 3, 6]);
//!
//! assert_eq!(reduce(&[1, 2, 3, 4, 5], |acc, x, _, _| acc + x, 0), 15);
//! assert_eq!(slice(&[1, 2, 3, 4, 5], Some(1), Some(-1)), [2, 3, 4]);
//!
//! let mut arr = vec![1, 2, 3, 4, 5];
//! let removed = splice(&mut arr, Some(1), Some(2), [10, 20]);
//! assert_eq!(removed, [2, 3]);
//! assert_eq!(arr, [1, 10, 20, 4, 5]);
//!
//! reverse(&mut arr);
//! assert_eq!(arr, [5, 4, 20, 10, 1]);
//! ```
//!
//! # Mutation
//!
//! `reverse` and `splice` mutate the caller's sequence. `reverse` takes
//! `&mut [T]` and returns the same slice for chaining; `splice` takes
//! `&mut Vec<T>` because it can change the length. Everything else borrows the
//! sequence immutably and returns a new value.

// Re-export public API from arrayfns_core
pub use arrayfns_core::array::{
    FlatMapped, every, filter, find, find_index, flat_map, for_each, map, reduce, resolve_index,
    reverse, slice, some, splice,
};
