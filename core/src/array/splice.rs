use super::slice::resolve_index;
use crate::Vec;

/// Remove a run of elements and insert `items` in their place, in place.
///
/// `start` is resolved like in [`slice`](fn@super::slice) and defaults to `0`.
/// `delete_count` defaults to everything from `start` to the end; a negative
/// count deletes nothing and a count past the end stops at the end. The
/// elements before and after the affected region keep their relative order.
///
/// Returns the removed elements in their original order. Elements are moved,
/// never cloned.
///
/// # Edge Cases
///
/// - `delete_count` of `0` (or negative): pure insertion, returns `[]`
/// - `start` past the end: `items` are appended, returns `[]`
/// - No `items`: pure deletion
///
/// # Examples
/// - `splice(&mut vec![1, 2, 3, 4, 5], Some(1), Some(2), [10, 20])` → `[2, 3]`,
///   leaving `[1, 10, 20, 4, 5]`
/// - `splice(&mut vec![1, 2, 3], Some(-1), None, [])` → `[3]`, leaving `[1, 2]`
pub fn splice<T, I>(
    arr: &mut Vec<T>,
    start: Option<isize>,
    delete_count: Option<isize>,
    items: I,
) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let len = arr.len();
    let start = start.map_or(0, |start| resolve_index(start, len));
    let available = len - start;
    let delete_count = match delete_count {
        None => available,
        Some(count) if count <= 0 => 0,
        Some(count) => count.unsigned_abs().min(available),
    };
    tracing::trace!(start, delete_count, len, "resolved splice bounds");

    // Everything from `start` onwards, with the element at `start` on top.
    let mut tail = Vec::with_capacity(available);
    while arr.len() > start {
        let Some(item) = arr.pop() else { break };
        tail.push(item);
    }

    let mut removed = Vec::with_capacity(delete_count);
    while removed.len() < delete_count {
        let Some(item) = tail.pop() else { break };
        removed.push(item);
    }

    for item in items {
        arr.push(item);
    }
    while let Some(item) = tail.pop() {
        arr.push(item);
    }

    removed
}

#[cfg(test)]
#[path = "splice_test.rs"]
mod splice_test;
