//! Left-to-right traversal primitives.
//!
//! All of these visit indices `0..arr.len()` in ascending order, each at most
//! once, and hand the callback the original slice.
use crate::Vec;

// ============================================================================
// Visiting
// ============================================================================

/// Call `callback` once per element, left to right.
///
/// # Examples
/// - `for_each(&[1, 2], |x, i, _| println!("{i}: {x}"))` prints `0: 1` then `1: 2`
pub fn for_each<T, F>(arr: &[T], mut callback: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (index, item) in arr.iter().enumerate() {
        callback(item, index, arr);
    }
}

// ============================================================================
// Predicates
// ============================================================================

/// Check whether any element satisfies `callback`.
///
/// Stops at the first match.
///
/// # Edge Cases
///
/// - Empty array: always `false`, the callback is never called
///
/// # Examples
/// - `some(&[1, 2, 3], |x, _, _| *x > 2)` → `true`
/// - `some(&[1, 2, 3], |x, _, _| *x > 3)` → `false`
pub fn some<T, F>(arr: &[T], mut callback: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, item) in arr.iter().enumerate() {
        if callback(item, index, arr) {
            return true;
        }
    }
    false
}

/// Check whether every element satisfies `callback`.
///
/// Stops at the first element that fails.
///
/// # Edge Cases
///
/// - Empty array: always `true` (vacuous truth), the callback is never called
///
/// # Examples
/// - `every(&[2, 4], |x, _, _| x % 2 == 0)` → `true`
/// - `every(&[2, 3], |x, _, _| x % 2 == 0)` → `false`
pub fn every<T, F>(arr: &[T], mut callback: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, item) in arr.iter().enumerate() {
        if !callback(item, index, arr) {
            return false;
        }
    }
    true
}

// ============================================================================
// Searching
// ============================================================================

/// Return the first element satisfying `callback`, or `None`.
///
/// The element is borrowed from `arr`, so a legitimate `0`, `false` or empty
/// string is never confused with "not found".
///
/// # Examples
/// - `find(&[5, 12, 8], |x, _, _| *x > 10)` → `Some(&12)`
/// - `find(&[5, 8], |x, _, _| *x > 10)` → `None`
pub fn find<'a, T, F>(arr: &'a [T], mut callback: F) -> Option<&'a T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, item) in arr.iter().enumerate() {
        if callback(item, index, arr) {
            return Some(item);
        }
    }
    None
}

/// Return the zero-based index of the first element satisfying `callback`.
///
/// # Examples
/// - `find_index(&[5, 12, 8], |x, _, _| *x > 10)` → `Some(1)`
/// - `find_index(&[], |x: &i32, _, _| *x > 10)` → `None`
pub fn find_index<T, F>(arr: &[T], mut callback: F) -> Option<usize>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, item) in arr.iter().enumerate() {
        if callback(item, index, arr) {
            return Some(index);
        }
    }
    None
}

// ============================================================================
// Building new arrays
// ============================================================================

/// Collect, in order, the elements for which `callback` returns `true`.
///
/// # Examples
/// - `filter(&[1, 2, 3, 4], |x, _, _| x % 2 == 0)` → `[2, 4]`
/// - `filter(&[1, 3], |x, _, _| x % 2 == 0)` → `[]`
pub fn filter<T, F>(arr: &[T], mut callback: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    let mut result = Vec::new();
    for (index, item) in arr.iter().enumerate() {
        if callback(item, index, arr) {
            result.push(item.clone());
        }
    }
    result
}

/// Transform every element, producing an array of the same length.
///
/// # Examples
/// - `map(&[1, 2, 3], |x, _, _| x * 2)` → `[2, 4, 6]`
/// - `map(&["a", "bb"], |s, _, _| s.len())` → `[1, 2]`
pub fn map<T, R, F>(arr: &[T], mut callback: F) -> Vec<R>
where
    F: FnMut(&T, usize, &[T]) -> R,
{
    let mut result = Vec::with_capacity(arr.len());
    for (index, item) in arr.iter().enumerate() {
        result.push(callback(item, index, arr));
    }
    result
}

/// What a [`flat_map`] callback produces for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatMapped<R> {
    /// Appended as a single element.
    One(R),
    /// Each element appended individually. Nested sequences are not flattened
    /// any further.
    Many(Vec<R>),
}

impl<R> From<Vec<R>> for FlatMapped<R> {
    fn from(items: Vec<R>) -> Self {
        FlatMapped::Many(items)
    }
}

/// Like [`map`], but a callback returning [`FlatMapped::Many`] has its elements
/// spliced into the output one by one.
///
/// # Edge Cases
///
/// - `Many(vec![])` contributes nothing, so the output can be shorter than the input
/// - Only one level is flattened: `Many(vec![vec![1]])` appends `vec![1]`
///
/// # Examples
/// - `flat_map(&[1, 2, 3], |x, _, _| FlatMapped::Many(vec![*x, x * 2]))` → `[1, 2, 2, 4, 3, 6]`
/// - `flat_map(&[1, 2], |x, _, _| FlatMapped::One(x + 1))` → `[2, 3]`
pub fn flat_map<T, R, F>(arr: &[T], mut callback: F) -> Vec<R>
where
    F: FnMut(&T, usize, &[T]) -> FlatMapped<R>,
{
    let mut result = Vec::with_capacity(arr.len());
    for (index, item) in arr.iter().enumerate() {
        match callback(item, index, arr) {
            FlatMapped::One(value) => result.push(value),
            FlatMapped::Many(values) => {
                for value in values {
                    result.push(value);
                }
            }
        }
    }
    result
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
