//! Ordering and error types shared by the heap
//!
//! The heap never looks at `Ord` directly. Instead it asks a [`Compare`]
//! implementation whether one element belongs nearer the root than another:
//!
//! - [`MinOrder`]: smallest element at the root (`a < b`)
//! - [`MaxOrder`]: largest element at the root (`a > b`)
//! - any `Fn(&T, &T) -> bool` closure, for custom orderings
//!
//! Equality used to locate elements for `update`/`remove` is `T: PartialEq`,
//! which is independent of the ordering chosen here.

use std::fmt;

/// Error type reported by [`BinaryHeap::validate`](crate::BinaryHeap::validate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The child at `child` is ordered before its parent at `parent`
    HeapPropertyViolated {
        /// Index of the parent slot
        parent: usize,
        /// Index of the offending child slot
        child: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::HeapPropertyViolated { parent, child } => {
                write!(
                    f,
                    "heap property violated: element at {} precedes its parent at {}",
                    child, parent
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A strict weak ordering used to arrange heap elements
///
/// `precedes(a, b)` returns true when `a` belongs nearer the root than `b`.
/// Implementations must be irreflexive, transitive, and treat incomparable
/// elements consistently. The heap does not check this; a broken ordering
/// silently produces out-of-order pops.
///
/// # Example
///
/// ```rust
/// use comparator_heap::{BinaryHeap, Compare};
///
/// struct ByLength;
///
/// impl Compare<String> for ByLength {
///     fn precedes(&self, a: &String, b: &String) -> bool {
///         a.len() < b.len()
///     }
/// }
///
/// let mut heap = BinaryHeap::new(ByLength);
/// heap.push("three".to_string());
/// heap.push("a".to_string());
/// assert_eq!(heap.pop().as_deref(), Some("a"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` should sit nearer the root than `b`
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders the smallest element first, giving a min-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders the largest element first, giving a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}
