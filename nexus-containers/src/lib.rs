//! Foundational linear and priority containers.
//!
//! Two independent building blocks, plus two adapters:
//!
//! ```text
//! MinHeap<T>           - array-backed binary heap, removal by position
//! DoublyLinkedList<T>  - slab-allocated nodes, O(1) at both ends
//!     │
//!     ├── Queue<T>     - FIFO: push_back / pop_front
//!     │
//!     └── Stack<T>     - LIFO: push_back / pop_back
//! ```
//!
//! # Quick Start
//!
//! ```
//! use nexus_containers::{DoublyLinkedList, MinHeap, Queue, Stack};
//!
//! let mut heap: MinHeap<u32> = [5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.peek(), Some(&3));
//!
//! let mut list: DoublyLinkedList<u32> = (1..=5).collect();
//! assert_eq!(list.remove_at(2), Some(3));
//! assert_eq!(list.get(2), Some(&4));
//!
//! let mut queue: Queue<u32> = (1..=3).collect();
//! assert_eq!(queue.dequeue(), Some(1));
//!
//! let mut stack: Stack<u32> = (1..=3).collect();
//! assert_eq!(stack.pop(), Some(3));
//! ```
//!
//! # Empty and Invalid Access
//!
//! Reading or removing from an empty container, and out-of-range positional
//! access, are ordinary outcomes: they return `None` and leave the container
//! untouched. Nothing here panics on caller input.
//!
//! # Invariant Checks
//!
//! [`MinHeap::check_invariants`] and [`DoublyLinkedList::check_invariants`]
//! walk the whole structure and report the first corruption found as a
//! [`HeapInvariantError`] or [`ListInvariantError`]. They are O(n) and meant
//! for tests and debugging, not hot paths.
//!
//! # Threading
//!
//! Every container is a plain owned value. Mutation needs `&mut self`, so
//! sharing across threads means wrapping in a lock, the same as `Vec`.

#![warn(missing_docs)]

pub mod error;
pub mod heap;
mod link;
pub mod list;
pub mod queue;
pub mod stack;

pub use error::{HeapInvariantError, ListInvariantError};
pub use heap::MinHeap;
pub use list::DoublyLinkedList;
pub use queue::Queue;
pub use stack::Stack;
