/// Reverse an array in place and hand the same slice back.
///
/// Pairs are swapped from both ends towards the middle; the middle element of an
/// odd-length array stays where it is.
///
/// # Edge Cases
///
/// - Empty array: no-op
/// - Single element: no-op
///
/// # Examples
/// - `reverse(&mut [1, 2, 3])` → `[3, 2, 1]`
/// - `reverse(&mut ["a", "b"])` → `["b", "a"]`
pub fn reverse<T>(arr: &mut [T]) -> &mut [T] {
    let len = arr.len();
    let mut front = 0;
    while front < len / 2 {
        arr.swap(front, len - 1 - front);
        front += 1;
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reverse_odd() {
        let mut arr = [1, 2, 3, 4, 5];
        reverse(&mut arr);
        assert_eq!(arr, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_even() {
        let mut arr = vec!["a", "b", "c", "d"];
        reverse(&mut arr);
        assert_eq!(arr, vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_reverse_empty_and_single() {
        let mut empty: Vec<u8> = vec![];
        assert!(reverse(&mut empty).is_empty());

        let mut single = [42];
        reverse(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_reverse_returns_same_slice() {
        let mut arr = vec![1, 2, 3];
        let before = arr.as_ptr();
        let returned = reverse(&mut arr);
        assert_eq!(returned.as_ptr(), before);
        assert_eq!(returned, &mut [3, 2, 1]);
    }

    #[test]
    fn test_reverse_twice_restores() {
        let mut arr = vec![3, 1, 4, 1, 5, 9];
        reverse(reverse(&mut arr));
        assert_eq!(arr, vec![3, 1, 4, 1, 5, 9]);
    }
}
