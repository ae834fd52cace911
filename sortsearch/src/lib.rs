#![no_std]

//! `sortsearch`: classic in-place sorting and searching routines over slices.
//!
//! Every sort takes `&mut [T]` and leaves it in non-decreasing order. Every
//! search takes `&[T]` and a target and returns `Some(index)` or `None` when
//! the target is absent.
//!
//! This crate is `no_std` compatible; merge sort needs `alloc` for its
//! temporary buffers.
//!
//! # Performance Characteristics
//!
//! | Algorithm      | Best       | Average    | Worst      | Extra space | Stable |
//! |----------------|------------|------------|------------|-------------|--------|
//! | bubble sort    | O(n)       | O(n²)      | O(n²)      | O(1)        | yes    |
//! | selection sort | O(n²)      | O(n²)      | O(n²)      | O(1)        | no     |
//! | insertion sort | O(n)       | O(n²)      | O(n²)      | O(1)        | yes    |
//! | merge sort     | O(n log n) | O(n log n) | O(n log n) | O(n)        | yes    |
//! | quick sort     | O(n log n) | O(n log n) | O(n²)      | O(log n)    | no     |
//!
//! Quick sort always pivots on the last element of a range, so already sorted
//! or reverse sorted input hits its worst case.
//!
//! ```
//! # use sortsearch::{binary_search, linear_search, merge_sort, quick_sort};
//! let mut items = [42, 7, 19, 3, 7];
//! quick_sort(&mut items);
//! assert_eq!(items, [3, 7, 7, 19, 42]);
//!
//! let mut words = ["pear", "apple", "fig"];
//! merge_sort(&mut words);
//! assert_eq!(words, ["apple", "fig", "pear"]);
//!
//! let sorted = [2, 4, 6, 8, 10];
//! assert_eq!(binary_search(&sorted, &6), Some(2));
//! assert_eq!(binary_search(&sorted, &5), None);
//! assert_eq!(linear_search(&[9, 1, 9], &9), Some(0));
//! ```
//!
//! # Choosing an Algorithm at Runtime
//!
//! ```
//! # use sortsearch::SortAlgorithm;
//! for algorithm in SortAlgorithm::ALL {
//!     let mut items = vec![5, 1, 4, 2, 3];
//!     algorithm.sort(&mut items);
//!     assert_eq!(items, [1, 2, 3, 4, 5], "{}", algorithm.name());
//! }
//! ```

extern crate alloc;

mod search;
mod sort;

pub use search::{binary_search, linear_search};
pub use sort::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};

/// One of the five sorting algorithms provided by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Adjacent swaps with early exit, see [`bubble_sort`]
    Bubble,
    /// Minimum of the suffix swapped into place, see [`selection_sort`]
    Selection,
    /// Shift larger predecessors right, see [`insertion_sort`]
    Insertion,
    /// Top-down merge through temporary buffers, see [`merge_sort`]
    Merge,
    /// Lomuto partition around the last element, see [`quick_sort`]
    Quick,
}

impl SortAlgorithm {
    /// Every algorithm, in the order they are listed above.
    ///
    /// ```
    /// # use sortsearch::SortAlgorithm;
    /// let stable: Vec<_> = SortAlgorithm::ALL
    ///     .into_iter()
    ///     .filter(|a| a.is_stable())
    ///     .map(SortAlgorithm::name)
    ///     .collect();
    /// assert_eq!(stable, ["bubble", "insertion", "merge"]);
    /// ```
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }

    /// Whether equal elements keep their relative input order.
    #[must_use]
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge
        )
    }

    /// Sorts `items` ascending in place.
    pub fn sort<T: Ord + Clone>(self, items: &mut [T]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(items),
            SortAlgorithm::Selection => selection_sort(items),
            SortAlgorithm::Insertion => insertion_sort(items),
            SortAlgorithm::Merge => merge_sort(items),
            SortAlgorithm::Quick => quick_sort(items),
        }
    }
}

impl core::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} sort", self.name())
    }
}
