#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Array operations over ordered sequences, without the standard library's
//! equivalents.
//!
//! See [`array`] for the operations themselves.

// This works on std and no_std and is harmless.
extern crate alloc;

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::vec::Vec;

pub mod array;
