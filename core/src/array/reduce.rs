/// Fold an array into a single value, left to right.
///
/// The accumulator starts at `initial` and is replaced by
/// `callback(acc, item, index, arr)` for every element. There is no
/// "first element as seed" mode, so the accumulator type `R` is free to differ
/// from the element type.
///
/// # Edge Cases
///
/// - Empty array: returns `initial` untouched
///
/// # Examples
/// - `reduce(&[1, 2, 3, 4, 5], |acc, x, _, _| acc + x, 0)` → `15`
/// - `reduce(&["a", "bc"], |acc, s, _, _| acc + s.len(), 0)` → `3`
pub fn reduce<T, R, F>(arr: &[T], mut callback: F, initial: R) -> R
where
    F: FnMut(R, &T, usize, &[T]) -> R,
{
    let mut acc = initial;
    for (index, item) in arr.iter().enumerate() {
        acc = callback(acc, item, index, arr);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reduce_sum() {
        assert_eq!(reduce(&[1, 2, 3, 4, 5], |acc, x, _, _| acc + x, 0), 15);
    }

    #[test]
    fn test_reduce_empty_returns_initial() {
        let arr: [i32; 0] = [];
        assert_eq!(reduce(&arr, |acc, x, _, _| acc + x, 42), 42);
    }

    #[test]
    fn test_reduce_initial_is_seed_not_first_element() {
        assert_eq!(reduce(&[2, 3], |acc, x, _, _| acc * x, 10), 60);
    }

    #[test]
    fn test_reduce_changes_type() {
        let joined = reduce(
            &["a", "b", "c"],
            |mut acc: String, s, index, _| {
                if index > 0 {
                    acc.push('-');
                }
                acc.push_str(s);
                acc
            },
            String::new(),
        );
        assert_eq!(joined, "a-b-c");
    }

    #[test]
    fn test_reduce_visits_in_ascending_order() {
        let order = reduce(
            &['x', 'y', 'z'],
            |mut acc: Vec<(usize, char)>, c, index, whole| {
                assert_eq!(whole.len(), 3);
                acc.push((index, *c));
                acc
            },
            Vec::new(),
        );
        assert_eq!(order, vec![(0, 'x'), (1, 'y'), (2, 'z')]);
    }
}
