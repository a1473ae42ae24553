//! Comparator-driven binary heap
//!
//! A `Vec`-backed implicit binary tree. The root lives at index 0, the
//! children of slot `i` at `2i + 1` and `2i + 2`, and its parent at
//! `(i - 1) >> 1`. Ordering comes from a [`Compare`] value supplied at
//! construction, so the same structure serves as a min-heap, a max-heap, or
//! anything a closure can express.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `push`         | O(log n)   |
//! | `pop`          | O(log n)   |
//! | `peek`         | O(1)       |
//! | `update`       | O(n)       |
//! | `remove`       | O(n)       |
//! | `from_vec`     | O(n)       |
//! | `clear`        | O(n) drops |
//!
//! `update` and `remove` find their target with a linear scan using
//! `PartialEq`. Callers who need O(log n) decrease-key have to keep their own
//! index map; this heap hands out no handles.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new(|a: &i32, b: &i32| a > b);
//! heap.push(3);
//! heap.push(7);
//! heap.push(5);
//!
//! assert_eq!(heap.peek(), Some(&7));
//! assert_eq!(heap.drain_sorted().collect::<Vec<_>>(), vec![7, 5, 3]);
//! assert!(heap.is_empty());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::traits::{Compare, HeapError, MaxOrder, MinOrder};

/// A binary heap ordered by a user-supplied comparator
///
/// The element for which the comparator says "precedes everything else"
/// sits at the root and is returned first by [`pop`](Self::pop).
///
/// Lookups for [`update`](Self::update) and [`remove`](Self::remove) use
/// `T`'s `PartialEq`, which may deliberately ignore the fields the
/// comparator looks at. That split is what lets a caller change an element's
/// priority and then hand the new value back to `update`.
#[derive(Clone)]
pub struct BinaryHeap<T, C> {
    /// Heap-ordered storage; index 0 is the root
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn new(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from arbitrary-order elements in O(n)
    ///
    /// ```rust
    /// use comparator_heap::{BinaryHeap, MinOrder};
    ///
    /// let heap = BinaryHeap::from_vec(vec![4, 1, 3, 2], MinOrder);
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert!(heap.is_heap());
    /// ```
    pub fn from_vec(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.rebuild();
        heap
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the comparator the heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Read-only view of the storage in heap order (not sorted order)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Pushes an element onto the heap
    pub fn push(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the root element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the root element, or `None` if the heap is empty
    pub fn pop(&mut self) -> Option<T> {
        if self.data.len() <= 1 {
            return self.data.pop();
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();
        self.sift_down(0);

        result
    }

    /// Removes every element, keeping the comparator and the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Pops elements in priority order through a borrowing iterator
    ///
    /// Every call to `next` is a [`pop`](Self::pop), so running it to the end
    /// empties the heap. Elements not yet yielded stay in the heap if the
    /// iterator is dropped early.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap, yielding its elements in priority order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { heap: self }
    }

    /// Consumes the heap and returns its elements in priority order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap and returns the storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns true if every parent/child pair satisfies the heap property
    pub fn is_heap(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the heap property, reporting the first violating pair
    ///
    /// A violation can only come from a comparator that is not a strict
    /// weak ordering, or one whose answers changed while elements were
    /// stored (for example through interior mutability).
    pub fn validate(&self) -> Result<(), HeapError> {
        for child in 1..self.data.len() {
            let parent = (child - 1) >> 1;
            if self.cmp.precedes(&self.data[child], &self.data[parent]) {
                return Err(HeapError::HeapPropertyViolated { parent, child });
            }
        }
        Ok(())
    }

    /// Restores the heap property over the whole storage
    fn rebuild(&mut self) {
        let len = self.data.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) >> 1;
            if self.cmp.precedes(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// The left child is checked first and the right child only replaces it
    /// when strictly preferred, so ties go left.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut best = index;

            if left < len && self.cmp.precedes(&self.data[left], &self.data[best]) {
                best = left;
            }
            if right < len && self.cmp.precedes(&self.data[right], &self.data[best]) {
                best = right;
            }

            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T: PartialEq, C: Compare<T>> BinaryHeap<T, C> {
    /// Replaces the first stored element equal to `element` and re-sorts it
    ///
    /// The scan runs from the root in storage order, so with duplicates only
    /// the lowest-index match is touched. The stored slot is overwritten with
    /// `element` and then sifted in whichever direction its new priority
    /// requires. Returns the entry that was replaced, or `None` if nothing
    /// matched (in which case `element` is dropped).
    ///
    /// # Example
    ///
    /// ```rust
    /// use comparator_heap::BinaryHeap;
    ///
    /// #[derive(Debug, Clone)]
    /// struct Task { id: u32, priority: i32 }
    ///
    /// impl PartialEq for Task {
    ///     fn eq(&self, other: &Self) -> bool { self.id == other.id }
    /// }
    ///
    /// let mut heap = BinaryHeap::new(|a: &Task, b: &Task| a.priority < b.priority);
    /// heap.push(Task { id: 1, priority: 10 });
    /// heap.push(Task { id: 2, priority: 20 });
    ///
    /// let old = heap.update(Task { id: 2, priority: 5 });
    /// assert_eq!(old.map(|t| t.priority), Some(20));
    /// assert_eq!(heap.peek().map(|t| t.id), Some(2));
    /// ```
    pub fn update(&mut self, element: T) -> Option<T> {
        let index = self.position(&element)?;
        let previous = std::mem::replace(&mut self.data[index], element);
        self.sift_down(index);
        self.sift_up(index);
        Some(previous)
    }

    /// Removes the first stored element equal to `element`
    ///
    /// The last element is moved into the vacated slot and sifted down and
    /// then up, since the moved element may belong on either side of its new
    /// position. Returns `None` if nothing matched.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        let index = self.position(element)?;
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.sift_down(index);
            self.sift_up(index);
        }
        Some(removed)
    }

    /// Returns true if some stored element equals `element`
    pub fn contains(&self, element: &T) -> bool {
        self.position(element).is_some()
    }

    fn position(&self, element: &T) -> Option<usize> {
        self.data.iter().position(|item| item == element)
    }
}

impl<T: Ord> BinaryHeap<T, MinOrder> {
    /// Creates an empty heap that pops the smallest element first
    pub fn min_heap() -> Self {
        Self::new(MinOrder)
    }
}

impl<T: Ord> BinaryHeap<T, MaxOrder> {
    /// Creates an empty heap that pops the largest element first
    pub fn max_heap() -> Self {
        Self::new(MaxOrder)
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// Draining iterator returned by [`BinaryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C> {
    heap: &'a mut BinaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Compare<T>> FusedIterator for DrainSorted<'_, T, C> {}

/// Consuming iterator returned by [`BinaryHeap::into_iter_sorted`]
#[derive(Clone)]
pub struct IntoIterSorted<T, C> {
    heap: BinaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}
