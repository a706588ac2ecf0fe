//! Pool location handles.
//!
//! Handles encode the physical location of an allocation as indices
//! rather than pointers, so the borrow checker — not caller discipline —
//! governs access to pool contents. All handles are small `Copy` values
//! resolvable in O(1).

use std::fmt;

/// Location of one item within a [`Pool`](crate::Pool).
///
/// Valid for the pool's entire lifetime, or until
/// [`Pool::clear`](crate::Pool::clear) is called. Handles carry no
/// pool identity: resolving a handle against a pool other than the one
/// that issued it yields an unrelated item or a panic, never undefined
/// behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct ItemRef {
    /// Index of the block holding the item.
    pub(crate) block: u32,
    /// Slot within that block.
    pub(crate) slot: u32,
}

impl ItemRef {
    pub(crate) fn new(block: usize, slot: usize) -> Self {
        Self {
            block: block as u32,
            slot: slot as u32,
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemRef(block={}, slot={})", self.block, self.slot)
    }
}

/// Location of one interned string within a
/// [`StringPool`](crate::StringPool).
///
/// Two `StrRef`s from the same [`DedupStringPool`](crate::DedupStringPool)
/// are equal exactly when their contents are byte-equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct StrRef {
    /// Index of the block holding the bytes.
    pub(crate) block: u32,
    /// Byte offset within that block.
    pub(crate) offset: u32,
    /// Length in bytes.
    pub(crate) len: u32,
}

impl StrRef {
    /// A handle to the empty string, valid against any string pool.
    pub const EMPTY: StrRef = StrRef {
        block: 0,
        offset: 0,
        len: 0,
    };

    /// Length of the referenced string in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the referenced string is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for StrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StrRef(block={}, off={}, len={})",
            self.block, self.offset, self.len
        )
    }
}

/// Location of one list node within a [`ListPool`](crate::ListPool).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct NodeRef(pub(crate) ItemRef);

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef(block={}, slot={})", self.0.block, self.0.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_str_ref() {
        assert!(StrRef::EMPTY.is_empty());
        assert_eq!(StrRef::EMPTY.len(), 0);
    }

    #[test]
    fn item_ref_equality() {
        let a = ItemRef::new(1, 2);
        let b = ItemRef::new(1, 2);
        let c = ItemRef::new(1, 3);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
