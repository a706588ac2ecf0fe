//! Shared-storage singly linked lists.
//!
//! A catalog keeps one small list per entity (a user's flights, a
//! user's reservations). Giving each list its own allocation would pay
//! fixed overhead thousands of times over, so all lists of one kind
//! carve their nodes from a single [`ListPool`]. A logical list is just
//! a [`ListHead`] — a handle to its first node — and independent lists
//! interleave freely within the pool because each node only ever points
//! along its own chain.
//!
//! Lists are prepend-only: `next` links are written once, at node
//! construction, which is what guarantees a traversal never crosses
//! into another list's nodes.

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::NodeRef;
use crate::pool::Pool;

#[derive(Clone, Copy, Debug)]
struct Node<T> {
    value: T,
    next: Option<NodeRef>,
}

/// The head of one logical list within a [`ListPool`].
///
/// A plain `Copy` value, cheap to store inside an entity record.
/// [`ListHead::EMPTY`] is the empty list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct ListHead(Option<NodeRef>);

impl ListHead {
    /// The empty list.
    pub const EMPTY: ListHead = ListHead(None);

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl Default for ListHead {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Backing storage shared by every list of one semantic kind.
#[derive(Clone, Debug)]
pub struct ListPool<T> {
    nodes: Pool<Node<T>>,
}

impl<T: Copy> ListPool<T> {
    /// Create a pool with one pre-allocated node block.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            nodes: Pool::new(config),
        }
    }

    /// Create a pool with the given block capacity and default budget.
    pub fn with_block_capacity(block_capacity: usize) -> Self {
        Self::new(PoolConfig::with_block_capacity(block_capacity))
    }

    /// Prepend `value` to the list at `head`, returning the new head.
    ///
    /// The old head remains a valid (shorter) list; callers replace
    /// their stored head with the returned one.
    pub fn prepend(&mut self, head: ListHead, value: T) -> Result<ListHead, PoolError> {
        let node = self.nodes.put(Node {
            value,
            next: head.0,
        })?;
        Ok(ListHead(Some(NodeRef(node))))
    }

    /// Number of nodes in the list at `head`.
    ///
    /// O(n); association lists are expected to be short.
    pub fn len(&self, head: ListHead) -> usize {
        self.iter(head).count()
    }

    /// Iterate the list's values, most recently prepended first.
    pub fn iter(&self, head: ListHead) -> Iter<'_, T> {
        Iter {
            pool: self,
            cursor: head.0,
        }
    }

    /// Total number of nodes across every list in the pool.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Reserved node storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.nodes.memory_bytes()
    }
}

/// Iterator over one logical list's values.
pub struct Iter<'a, T> {
    pool: &'a ListPool<T>,
    cursor: Option<NodeRef>,
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.pool.nodes.get(self.cursor?.0);
        self.cursor = node.next;
        Some(node.value)
    }
}
