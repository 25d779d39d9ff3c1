//! Doubly-linked list over slab-allocated nodes.
//!
//! Nodes live in a [`slab::Slab`] owned by the list and refer to each other by
//! slab key. The list tracks head, tail and length; none of them are exposed,
//! and node keys never leave the list, so no outside handle can observe a node
//! after it has been removed.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_front` / `push_back` | O(1) |
//! | `pop_front` / `pop_back` | O(1) |
//! | `front` / `back` | O(1) |
//! | `get` / `remove_at` | O(n), walking from the nearer end |
//!
//! # Example
//!
//! ```
//! use nexus_containers::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<char> = "abcde".chars().collect();
//!
//! assert_eq!(list.remove_at(2), Some('c'));
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.front(), Some(&'a'));
//! assert_eq!(list.back(), Some(&'e'));
//!
//! let rest: String = list.iter().collect();
//! assert_eq!(rest, "abde");
//! ```

use core::fmt;

use slab::Slab;
use tracing::trace;

use crate::ListInvariantError;
use crate::link::Link;

/// A list node: payload plus links to its neighbours.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    data: T,
    prev: Link,
    next: Link,
}

/// A doubly-linked list.
///
/// # Example
///
/// ```
/// use nexus_containers::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_back(2);
/// list.push_back(3);
/// list.push_front(1);
///
/// assert_eq!(list.get(1), Some(&2));
/// assert_eq!(list.pop_front(), Some(1));
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.pop_back(), Some(2));
/// assert_eq!(list.pop_back(), None);
/// ```
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Slab<Node<T>>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with node storage for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: Link::NONE,
            tail: Link::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the list can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[inline]
    fn node(&self, link: Link) -> &Node<T> {
        &self.nodes[link.index()]
    }

    #[inline]
    fn node_mut(&mut self, link: Link) -> &mut Node<T> {
        &mut self.nodes[link.index()]
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends an element to the back of the list.
    pub fn push_back(&mut self, value: T) {
        let old_tail = self.tail;
        let link = Link::to(self.nodes.insert(Node {
            data: value,
            prev: old_tail,
            next: Link::NONE,
        }));

        if old_tail.is_some() {
            self.node_mut(old_tail).next = link;
        } else {
            self.head = link;
        }

        self.tail = link;
        self.len += 1;
    }

    /// Prepends an element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let old_head = self.head;
        let link = Link::to(self.nodes.insert(Node {
            data: value,
            prev: Link::NONE,
            next: old_head,
        }));

        if old_head.is_some() {
            self.node_mut(old_head).prev = link;
        } else {
            self.tail = link;
        }

        self.head = link;
        self.len += 1;
    }

    /// Appends an element to the back of the list.
    ///
    /// Same as [`push_back`](Self::push_back).
    #[inline]
    pub fn add(&mut self, value: T) {
        self.push_back(value);
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }
        Some(self.unlink(self.head))
    }

    /// Removes and returns the back element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }
        Some(self.unlink(self.tail))
    }

    /// Removes and returns the element at `index`.
    ///
    /// Walks from whichever end is nearer. Returns `None` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let link = self.locate(index)?;
        Some(self.unlink(link))
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = Link::NONE;
        self.tail = Link::NONE;
        self.len = 0;
    }

    /// Detaches a linked node and returns its payload.
    ///
    /// Head and tail removal also move the list's own boundary references;
    /// interior removal only touches the two neighbours. The node's links are
    /// cleared before it is released from the slab.
    fn unlink(&mut self, link: Link) -> T {
        let (prev, next) = {
            let node = self.node(link);
            (node.prev, node.next)
        };

        if link == self.head {
            self.head = next;
            if next.is_some() {
                self.node_mut(next).prev = Link::NONE;
            } else {
                self.tail = Link::NONE;
            }
        } else if link == self.tail {
            self.tail = prev;
            self.node_mut(prev).next = Link::NONE;
        } else {
            self.node_mut(prev).next = next;
            self.node_mut(next).prev = prev;
        }

        let node = self.node_mut(link);
        node.prev = Link::NONE;
        node.next = Link::NONE;

        self.len -= 1;
        debug_assert_eq!(self.head.is_none(), self.len == 0);
        debug_assert_eq!(self.tail.is_none(), self.len == 0);

        self.nodes.remove(link.index()).data
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            Some(&self.node(self.head).data)
        }
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_none() {
            None
        } else {
            let head = self.head;
            Some(&mut self.node_mut(head).data)
        }
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&self.node(self.tail).data)
        }
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail.is_none() {
            None
        } else {
            let tail = self.tail;
            Some(&mut self.node_mut(tail).data)
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// O(1) for the first and last element, otherwise walks from the nearer
    /// end. Returns `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.locate(index).map(|link| &self.node(link).data)
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let link = self.locate(index)?;
        Some(&mut self.node_mut(link).data)
    }

    /// Finds the node at `index`, walking from whichever end is nearer.
    fn locate(&self, index: usize) -> Option<Link> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return Some(self.head);
        }
        if index == self.len - 1 {
            return Some(self.tail);
        }

        let mut link;
        if index < self.len - index {
            trace!(index, len = self.len, "list walk from head");
            link = self.head;
            for _ in 0..index {
                link = self.node(link).next;
            }
        } else {
            trace!(index, len = self.len, "list walk from tail");
            link = self.tail;
            for _ in index..self.len - 1 {
                link = self.node(link).prev;
            }
        }
        Some(link)
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// Every call starts again from the current head.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Walks the whole list and verifies its structure.
    ///
    /// Checks that head, tail and length agree on emptiness, that the
    /// boundary nodes have no outer links, that every `next` is mirrored by a
    /// `prev`, and that the reachable node count matches both the recorded
    /// length and the number of allocated nodes. O(n).
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), ListInvariantError> {
        let head = self.head.is_some();
        let tail = self.tail.is_some();
        if head != tail || head != (self.len > 0) {
            return Err(ListInvariantError::EmptinessMismatch {
                head,
                tail,
                len: self.len,
            });
        }

        if head {
            let head_node = self
                .nodes
                .get(self.head.index())
                .ok_or(ListInvariantError::DanglingLink { position: 0 })?;
            if head_node.prev.is_some() {
                return Err(ListInvariantError::HeadHasPrev);
            }

            let tail_node = self
                .nodes
                .get(self.tail.index())
                .ok_or(ListInvariantError::DanglingLink {
                    position: self.len - 1,
                })?;
            if tail_node.next.is_some() {
                return Err(ListInvariantError::TailHasNext);
            }
        }

        let mut reachable = 0;
        let mut prev = Link::NONE;
        let mut current = self.head;

        while let Some(key) = current.key() {
            // A cycle would otherwise never terminate
            if reachable >= self.nodes.len() {
                return Err(ListInvariantError::CountMismatch {
                    reachable: reachable + 1,
                    len: self.len,
                });
            }

            let node = self
                .nodes
                .get(key)
                .ok_or(ListInvariantError::DanglingLink {
                    position: reachable,
                })?;
            if node.prev != prev {
                return Err(ListInvariantError::BrokenBackLink {
                    position: reachable,
                });
            }

            prev = current;
            current = node.next;
            reachable += 1;
        }

        if prev != self.tail {
            return Err(ListInvariantError::TailMismatch);
        }

        if reachable != self.len {
            return Err(ListInvariantError::CountMismatch {
                reachable,
                len: self.len,
            });
        }

        if self.nodes.len() != self.len {
            return Err(ListInvariantError::LeakedNodes {
                allocated: self.nodes.len(),
                len: self.len,
            });
        }

        Ok(())
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns `true` if the list contains an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Returns the index of the first element equal to `value`.
    #[inline]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Removes and returns the first element equal to `value`.
    ///
    /// Returns `None` if no element matches.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut link = self.head;
        while link.is_some() {
            let node = self.node(link);
            if node.data == *value {
                return Some(self.unlink(link));
            }
            link = node.next;
        }
        None
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let nodes = self.nodes;
        let node = &nodes[self.front.index()];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let nodes = self.nodes;
        let node = &nodes[self.back.index()];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over list elements.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
