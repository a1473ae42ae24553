//! Standard library compatibility layer
//!
//! Conversions between this crate's [`BinaryHeap`] and the standard library's
//! `Ord`-based collections.
//!
//! # Differences from `std::collections::BinaryHeap`
//!
//! - **Ordering source**: `std` always uses `Ord` and is a max-heap. Here the
//!   ordering is a comparator; [`MaxOrder`] reproduces the `std` behavior and
//!   [`MinOrder`] flips it without needing `std::cmp::Reverse`.
//! - **Iteration**: there is no `IntoIterator` impl. Sorted consumption goes
//!   through `drain_sorted` / `into_iter_sorted`, and `as_slice` gives the
//!   unsorted storage.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{BinaryHeap, MaxOrder};
//!
//! let std_heap: std::collections::BinaryHeap<i32> = vec![5, 3, 7].into();
//! let heap: BinaryHeap<i32, MaxOrder> = std_heap.into();
//! assert_eq!(heap.peek(), Some(&7));
//!
//! let back: std::collections::BinaryHeap<i32> = heap.into();
//! assert_eq!(back.into_sorted_vec(), vec![3, 5, 7]);
//! ```

use std::collections::BinaryHeap as StdBinaryHeap;

use crate::binary::BinaryHeap;
use crate::traits::{MaxOrder, MinOrder};

impl<T: Ord> From<StdBinaryHeap<T>> for BinaryHeap<T, MaxOrder> {
    /// Rebuilds the `std` heap's storage under [`MaxOrder`] in O(n)
    fn from(heap: StdBinaryHeap<T>) -> Self {
        BinaryHeap::from_vec(heap.into_vec(), MaxOrder)
    }
}

impl<T: Ord> From<BinaryHeap<T, MaxOrder>> for StdBinaryHeap<T> {
    fn from(heap: BinaryHeap<T, MaxOrder>) -> Self {
        StdBinaryHeap::from(heap.into_vec())
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T, MinOrder> {
    /// Heapifies `vec` as a min-heap in O(n)
    fn from(vec: Vec<T>) -> Self {
        BinaryHeap::from_vec(vec, MinOrder)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinaryHeap<T, MinOrder> {
    fn from(arr: [T; N]) -> Self {
        BinaryHeap::from_vec(Vec::from(arr), MinOrder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_std_heap_keeps_max_order() {
        let std_heap: StdBinaryHeap<u32> = (0..20).collect();
        let heap: BinaryHeap<u32, MaxOrder> = std_heap.into();
        assert!(heap.is_heap());
        assert_eq!(heap.into_sorted_vec(), (0..20).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_into_std_heap() {
        let mut heap = BinaryHeap::max_heap();
        heap.extend([2, 8, 5]);
        let mut std_heap: StdBinaryHeap<i32> = heap.into();
        assert_eq!(std_heap.pop(), Some(8));
        assert_eq!(std_heap.pop(), Some(5));
        assert_eq!(std_heap.pop(), Some(2));
    }

    #[test]
    fn test_from_vec_and_array_are_min_heaps() {
        let heap: BinaryHeap<i32, MinOrder> = vec![3, 1, 2].into();
        assert_eq!(heap.peek(), Some(&1));

        let heap = BinaryHeap::from([10, 2, 3, 1, 2, 3, 9, 5]);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 2, 3, 3, 5, 9, 10]);
    }
}
