//! Comparator-driven binary heap for Rust
//!
//! This crate provides a single array-backed binary heap whose ordering is
//! injected at construction rather than taken from `Ord`.
//!
//! # Features
//!
//! - **Any ordering**: min-heap ([`MinOrder`]), max-heap ([`MaxOrder`]), or a
//!   closure such as `|a: &Task, b: &Task| a.priority < b.priority`
//! - **In-place update**: re-sort an element after its priority changed,
//!   locating it by `PartialEq` rather than by ordering
//! - **Arbitrary removal**: remove any element equal to a given value
//! - **Destructive sorted iteration**: [`BinaryHeap::drain_sorted`] pops until
//!   the heap is empty
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::min_heap();
//! for value in [10, 2, 3, 1, 2, 3, 9, 5] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.remove(&9), Some(9));
//! assert_eq!(heap.remove(&9), None);
//!
//! let drained: Vec<i32> = heap.drain_sorted().collect();
//! assert_eq!(drained, vec![1, 2, 2, 3, 3, 5, 10]);
//! assert!(heap.is_empty());
//! ```
//!
//! # Thread Safety
//!
//! The heap holds no locks. Every mutation takes `&mut self`, so sharing one
//! across threads means wrapping it in a `Mutex` or similar.

pub mod binary;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, DrainSorted, IntoIterSorted};
pub use traits::{Compare, HeapError, MaxOrder, MinOrder};
