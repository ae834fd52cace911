use alloc::vec::Vec;

/// Sorts `items` ascending with bubble sort.
///
/// Each pass moves the largest element of the unsorted prefix to its final
/// position. Stops after the first pass that performs no swap, so sorted
/// input costs a single pass. Stable.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sorts `items` ascending with selection sort. Not stable.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..len {
            if items[j] < items[min_index] {
                min_index = j;
            }
        }
        items.swap(i, min_index);
    }
}

/// Sorts `items` ascending with insertion sort.
///
/// Each element is shifted right past all strictly larger predecessors, so
/// equal elements keep their order.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[i] {
            j -= 1;
        }
        items[j..=i].rotate_right(1);
    }
}

/// Sorts `items` ascending with top-down merge sort. Stable.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);
    merge(items, mid);
}

/// Merges the sorted runs `items[..mid]` and `items[mid..]`. Ties take from
/// the left run.
fn merge<T: Ord + Clone>(items: &mut [T], mid: usize) {
    let left: Vec<T> = items[..mid].to_vec();
    let right: Vec<T> = items[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if take_left {
            slot.clone_from(&left[i]);
            i += 1;
        } else {
            slot.clone_from(&right[j]);
            j += 1;
        }
    }
}

/// Sorts `items` ascending with quick sort, pivoting on the last element of
/// each range. Degrades to O(n²) time on already sorted input. Not stable.
///
/// Only the smaller side of each partition is sorted recursively, the larger
/// side is handled by the loop, so recursion depth stays within O(log n).
pub fn quick_sort<T: Ord>(mut items: &mut [T]) {
    while items.len() > 1 {
        let pivot = partition(items);
        let (low, high) = core::mem::take(&mut items).split_at_mut(pivot);
        let high = &mut high[1..];
        if low.len() < high.len() {
            quick_sort(low);
            items = high;
        } else {
            quick_sort(high);
            items = low;
        }
    }
}

/// Lomuto partition. Returns the final index of the pivot.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let last = items.len() - 1;
    let mut boundary = 0;
    for j in 0..last {
        if items[j] <= items[last] {
            items.swap(boundary, j);
            boundary += 1;
        }
    }
    items.swap(boundary, last);
    boundary
}
