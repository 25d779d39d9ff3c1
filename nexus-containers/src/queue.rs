//! FIFO queue over a [`DoublyLinkedList`].

use core::fmt;

use crate::DoublyLinkedList;
use crate::list::Iter;

/// A first-in, first-out queue.
///
/// Elements enter at the back and leave from the front. Every operation maps
/// directly onto one list operation; empty-queue results are the list's own
/// `None`.
///
/// # Example
///
/// ```
/// use nexus_containers::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), Some(3));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: DoublyLinkedList::with_capacity(capacity),
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds an element to the back of the queue. O(1).
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the element at the front of the queue. O(1).
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns the element at the front of the queue. O(1).
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns an iterator from front (next out) to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Returns `true` if an element equal to `value` is queued. O(n).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }

    /// Removes the element equal to `value` that is nearest the front. O(n).
    #[inline]
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.list.remove(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("items", &self.list).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
