//! Output formatting.

use std::fmt::Display;

use arrayfns_core::array::map;

/// Format a sequence as `[a, b, c]`.
pub fn format_sequence<T: Display>(items: &[T]) -> String {
    let parts = map(items, |item, _, _| item.to_string());
    format!("[{}]", parts.join(", "))
}
