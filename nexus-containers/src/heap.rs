//! Array-backed binary min-heap with removal by position.
//!
//! Positions are 1-based: the root lives at position 1, and for any position
//! `i` the parent is `i / 2` and the children are `2i` and `2i + 1`. The
//! backing vector stores position `p` in slot `p - 1`.
//!
//! Finding an element's position is not part of the O(log n) contract.
//! [`MinHeap::position`] is a linear scan; callers that need fast lookups
//! should track positions themselves.
//!
//! # Example
//!
//! ```
//! use nexus_containers::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! for v in [5, 3, 8, 1, 4] {
//!     heap.push(v);
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//!
//! // Remove the root, then an arbitrary element
//! assert_eq!(heap.remove_at(1), Some(1));
//! assert_eq!(heap.peek(), Some(&3));
//!
//! let pos = heap.position(&8).unwrap();
//! assert_eq!(heap.remove_at(pos), Some(8));
//! assert_eq!(heap.len(), 3);
//! ```

use core::fmt;

use tracing::trace;

use crate::HeapInvariantError;

const ROOT: usize = 1;

#[inline]
const fn parent(pos: usize) -> usize {
    pos / 2
}

#[inline]
const fn left(pos: usize) -> usize {
    pos * 2
}

#[inline]
const fn right(pos: usize) -> usize {
    pos * 2 + 1
}

/// A binary min-heap.
///
/// The smallest element is always at position 1. Equal elements may come out
/// in any order.
#[derive(Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    /// Creates an empty heap.
    #[inline]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the minimum element without removing it.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the element at 1-based position `pos`.
    ///
    /// Returns `None` if `pos` is not in `1..=len`.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        pos.checked_sub(1).and_then(|slot| self.data.get(slot))
    }

    /// Returns the elements in level order (root first, not sorted).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements in level order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning the elements in level order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a - 1, b - 1);
    }
}

impl<T: Ord> MinHeap<T> {
    /// Inserts an element.
    ///
    /// The element is placed at the next free position and swims up past
    /// every parent it is smaller than. O(log n).
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let pos = self.data.len();
        self.swim(pos);
    }

    /// Removes and returns the minimum element.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.remove_at(ROOT)
    }

    /// Removes and returns the element at 1-based position `pos`.
    ///
    /// The target is swapped with the last element and detached. The element
    /// moved into `pos` then swims up if it is smaller than its new parent,
    /// or sinks down if it is larger than either child. A single displaced
    /// element can only violate order in one direction, so at most one of
    /// the two runs. O(log n).
    ///
    /// Returns `None`, leaving the heap unchanged, if the heap is empty or
    /// `pos` is not in `1..=len`.
    pub fn remove_at(&mut self, pos: usize) -> Option<T> {
        let last = self.data.len();
        if pos < ROOT || pos > last {
            return None;
        }

        self.swap(pos, last);
        let removed = self.data.pop()?;

        if pos == last {
            return Some(removed);
        }

        let len = self.data.len();
        let current = &self.data[pos - 1];

        let swim = pos > ROOT && *current < self.data[parent(pos) - 1];
        let sink = !swim
            && ((left(pos) <= len && *current > self.data[left(pos) - 1])
                || (right(pos) <= len && *current > self.data[right(pos) - 1]));

        if swim {
            trace!(pos, len, "heap remove_at: swim");
            self.swim(pos);
        } else if sink {
            trace!(pos, len, "heap remove_at: sink");
            self.sink(pos);
        }

        Some(removed)
    }

    /// Returns the 1-based position of the first element equal to `value`.
    ///
    /// This is a linear scan in level order. O(n).
    pub fn position(&self, value: &T) -> Option<usize> {
        self.data.iter().position(|v| v == value).map(|slot| slot + 1)
    }

    /// Consumes the heap, returning the elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(v) = self.pop() {
            out.push(v);
        }
        out
    }

    /// Checks min-heap order at every position.
    ///
    /// # Errors
    ///
    /// Returns the first position whose element is smaller than its parent.
    pub fn check_invariants(&self) -> Result<(), HeapInvariantError> {
        for pos in (ROOT + 1)..=self.data.len() {
            if self.data[pos - 1] < self.data[parent(pos) - 1] {
                return Err(HeapInvariantError::OrderViolated {
                    position: pos,
                    parent: parent(pos),
                });
            }
        }
        Ok(())
    }

    /// Bubbles the element at `pos` toward the root.
    fn swim(&mut self, mut pos: usize) {
        while pos > ROOT && self.data[pos - 1] < self.data[parent(pos) - 1] {
            self.swap(pos, parent(pos));
            pos = parent(pos);
        }
    }

    /// Pushes the element at `pos` toward the leaves, always following the
    /// smaller child.
    fn sink(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let l = left(pos);
            if l > len {
                break;
            }

            let r = right(pos);
            let smaller = if r <= len && self.data[r - 1] < self.data[l - 1] {
                r
            } else {
                l
            };

            if self.data[pos - 1] <= self.data[smaller - 1] {
                break;
            }

            self.swap(pos, smaller);
            pos = smaller;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for v in iter {
            self.push(v);
        }
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over heap elements in level order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
