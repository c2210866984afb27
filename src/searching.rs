//! Searching slices for an element.

use std::cmp::Ordering;

/// Returns the index of the first element equal to `target`.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    linear_search_by_key(items, target, |item| item)
}

/// Returns the index of the first element whose key equals `key`, scanning
/// from the front.
pub fn linear_search_by_key<'a, T, K, F>(items: &'a [T], key: &K, mut f: F) -> Option<usize>
where
    K: PartialEq + ?Sized + 'a,
    F: FnMut(&'a T) -> &'a K,
{
    items.iter().position(|item| f(item) == key)
}

/// Binary search for `target` in `items`, which must be sorted in ascending
/// order.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    binary_search_by_key(items, target, |item| item)
}

/// Binary search over `items`, which must be sorted by the key `f` extracts.
///
/// Returns the index of an element whose key equals `key`; if several match,
/// any one of them may be returned.
pub fn binary_search_by_key<'a, T, K, F>(items: &'a [T], key: &K, mut f: F) -> Option<usize>
where
    K: Ord + ?Sized + 'a,
    F: FnMut(&'a T) -> &'a K,
{
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match key.cmp(f(&items[mid])) {
            Ordering::Less => high = mid,
            Ordering::Greater => low = mid + 1,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}
