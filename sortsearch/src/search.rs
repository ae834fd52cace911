use core::cmp::Ordering;

/// Returns the index of the first element equal to `target`, or `None`.
///
/// Works on unsorted input.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Returns the index of an element equal to `target`, or `None`.
///
/// `items` must be sorted ascending. This is not checked: on unsorted input
/// the result is unspecified (but the call is still memory-safe and
/// terminates). When several elements match, any one of their indices may be
/// returned.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    // Half-open range [left, right)
    let mut left = 0;
    let mut right = items.len();

    while left < right {
        let mid = left + (right - left) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }
    None
}
