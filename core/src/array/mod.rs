//! Array operations over ordered sequences.
//!
//! Every operation is a free function over a slice (or a `Vec` where the length
//! changes). None of them call each other, and none keep state between calls:
//!
//! - Traversal: [`for_each`], [`some`], [`every`], [`find`], [`find_index`],
//!   [`filter`], [`map`], [`flat_map`]
//! - Folding: [`reduce()`]
//! - In-place: [`reverse()`], [`splice()`]
//! - Copying: [`slice()`]
//!
//! Callbacks receive `(item, index, arr)` where `arr` is the sequence being
//! traversed, so a callback can look at neighbours without capturing the slice.
//!
//! Out-of-range arguments never panic. Missing matches come back as `None`, and
//! `slice`/`splice` bounds are clamped into the sequence.

mod reduce;
mod reverse;
mod slice;
mod splice;
mod traversal;

pub use reduce::reduce;
pub use reverse::reverse;
pub use slice::{resolve_index, slice};
pub use splice::splice;
pub use traversal::{FlatMapped, every, filter, find, find_index, flat_map, for_each, map, some};
