//! LIFO stack over a [`DoublyLinkedList`].

use core::fmt;

use crate::DoublyLinkedList;
use crate::list::Iter;

/// A last-in, first-out stack.
///
/// The top of the stack is the back of the underlying list.
///
/// # Example
///
/// ```
/// use nexus_containers::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Creates an empty stack with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: DoublyLinkedList::with_capacity(capacity),
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes an element onto the top of the stack. O(1).
    #[inline]
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the top element. O(1).
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Returns the top element. O(1).
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.back()
    }

    /// Returns an iterator from the bottom of the stack to the top.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("items", &self.list).finish()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
