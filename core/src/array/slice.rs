use crate::Vec;

/// Resolve a possibly negative index against an array of length `len`.
///
/// Negative indices count from the tail (`-1` is the last position). The result
/// is always clamped into `0..=len`: it never wraps around and never points past
/// the end.
///
/// # Examples
/// - `resolve_index(-2, 5)` → `3`
/// - `resolve_index(-10, 5)` → `0`
/// - `resolve_index(7, 5)` → `5`
pub fn resolve_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

/// Copy the elements in `[start, end)` into a new array.
///
/// `start` defaults to `0` and `end` to `arr.len()`. Both are resolved with
/// [`resolve_index`]. The input is left untouched.
///
/// # Edge Cases
///
/// - If the resolved `start >= end`, returns an empty array
/// - `end` beyond the array length is clamped to the length
/// - A negative index reaching past the head is clamped to `0`
///
/// # Examples
/// - `slice(&[1, 2, 3, 4, 5], Some(-2), None)` → `[4, 5]`
/// - `slice(&[1, 2, 3, 4, 5], Some(1), Some(-1))` → `[2, 3, 4]`
/// - `slice(&[1, 2, 3], Some(2), Some(1))` → `[]`
pub fn slice<T: Clone>(arr: &[T], start: Option<isize>, end: Option<isize>) -> Vec<T> {
    let len = arr.len();
    let start = start.map_or(0, |start| resolve_index(start, len));
    let end = end.map_or(len, |end| resolve_index(end, len));
    tracing::trace!(start, end, len, "resolved slice bounds");

    let mut result = Vec::new();
    let mut index = start;
    while index < end {
        result.push(arr[index].clone());
        index += 1;
    }
    result
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;
