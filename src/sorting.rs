//! Sorting routines.

use std::cmp::Ordering;

/// Sorts `items` in ascending order with insertion sort.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    insertion_sort_by(items, T::cmp);
}

/// Sorts `items` with insertion sort according to `compare`.
///
/// Each element is swapped towards the front while it compares less than its
/// predecessor.  Equal elements are never swapped, so the sort is stable.
/// Runs in `O(n^2)` time and `O(1)` extra space.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for pos in 1..items.len() {
        let mut current = pos;
        while current > 0 && compare(&items[current], &items[current - 1]) == Ordering::Less {
            items.swap(current, current - 1);
            current -= 1;
        }
    }
}

/// Sorts `items` by the key `f` extracts, using the standard library's stable
/// sort.
pub fn library_sort_by_key<T, K, F>(items: &mut [T], f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    items.sort_by_key(f);
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_insertion_sort() {
        let mut vals = [7, 23, 16, 50, 49, 2, 71, 18];
        insertion_sort(&mut vals);
        assert_eq!(vals, [2, 7, 16, 18, 23, 49, 50, 71]);
    }

    #[test]
    fn test_insertion_sort_trivial_inputs() {
        let mut empty: [i32; 0] = [];
        insertion_sort(&mut empty);
        let mut single = [1];
        insertion_sort(&mut single);
        assert_eq!(single, [1]);
    }

    #[test]
    fn test_insertion_sort_by_descending() {
        let mut vals = vec![1, 3, 2, 3, 0];
        insertion_sort_by(&mut vals, |a, b| b.cmp(a));
        assert_eq!(vals, vec![3, 3, 2, 1, 0]);
    }

    #[test]
    fn test_insertion_sort_by_is_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_library_sort_by_key() {
        let mut airports = vec![
            ("Colombo", "Sri Lanka"),
            ("Lagos", "Nigeria"),
            ("Los Angeles", "America"),
            ("Montreal", "Canada"),
            ("New York", "America"),
        ];
        library_sort_by_key(&mut airports, |&(_, country)| country);
        let cities: Vec<_> = airports.iter().map(|&(city, _)| city).collect();
        assert_eq!(
            cities,
            vec!["Los Angeles", "New York", "Montreal", "Lagos", "Colombo"]
        );
    }

    #[quickcheck]
    fn prop_insertion_sort_matches_std(mut vals: Vec<i32>) -> bool {
        let mut expected = vals.clone();
        expected.sort();
        insertion_sort(&mut vals);
        vals == expected
    }
}
