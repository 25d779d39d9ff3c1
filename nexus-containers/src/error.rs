//! Structural invariant violations.
//!
//! Empty containers and out-of-range indices are expected conditions and are
//! reported as `None` by the containers themselves. The types here describe
//! corruption: states that only a bug inside this crate could produce. They
//! are returned by the `check_invariants` methods used throughout the tests.

use thiserror::Error;

/// A violation of min-heap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapInvariantError {
    /// An element compares less than its parent.
    #[error("element at position {position} is smaller than its parent at position {parent}")]
    OrderViolated {
        /// 1-based position of the offending element.
        position: usize,
        /// 1-based position of its parent.
        parent: usize,
    },
}

/// A violation of doubly-linked list structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListInvariantError {
    /// Head, tail and length disagree about whether the list is empty.
    #[error("head set: {head}, tail set: {tail}, len: {len}")]
    EmptinessMismatch {
        /// Whether the head link is set.
        head: bool,
        /// Whether the tail link is set.
        tail: bool,
        /// Recorded length.
        len: usize,
    },

    /// The head node has a back-link.
    #[error("head node has a back-link")]
    HeadHasPrev,

    /// The tail node has a forward-link.
    #[error("tail node has a forward-link")]
    TailHasNext,

    /// A link refers to a slot that holds no node.
    #[error("link at position {position} refers to a vacant slot")]
    DanglingLink {
        /// Traversal position at which the bad link was followed.
        position: usize,
    },

    /// `next.prev` does not point back at the node it was reached from.
    #[error("node at position {position} is not back-linked to its predecessor")]
    BrokenBackLink {
        /// Traversal position of the node with the wrong back-link.
        position: usize,
    },

    /// Forward traversal did not end at the recorded tail.
    #[error("forward traversal ended somewhere other than the tail")]
    TailMismatch,

    /// Reachable node count differs from the recorded length.
    #[error("{reachable} nodes reachable from head, {len} recorded")]
    CountMismatch {
        /// Nodes reachable from head via forward links.
        reachable: usize,
        /// Recorded length.
        len: usize,
    },

    /// Nodes are allocated that are not reachable from head.
    #[error("{allocated} nodes allocated, {len} linked")]
    LeakedNodes {
        /// Occupied node slots.
        allocated: usize,
        /// Recorded length.
        len: usize,
    },
}
