//! The block pool allocator.
//!
//! A [`Pool`] owns an ordered sequence of fixed-capacity blocks. When
//! the block being filled runs out of slots, the pool appends a fresh
//! block instead of resizing — no existing item ever moves, so every
//! [`ItemRef`] issued stays valid until [`Pool::clear`]. Items are
//! never freed individually; storage is reclaimed only by clearing or
//! dropping the whole pool.

use crate::block::Block;
use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::ItemRef;

/// A grow-by-block arena for fixed-size items.
///
/// Designed for the "load once, read many" shape of a dataset catalog:
/// millions of small structs allocated during loading, referenced by
/// handle from index structures, and dropped all at once.
#[derive(Clone, Debug)]
pub struct Pool<T> {
    blocks: Vec<Block<T>>,
    config: PoolConfig,
    /// Index of the block currently being filled.
    current: usize,
}

impl<T> Pool<T> {
    /// Create a pool with one pre-allocated block.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            blocks: vec![Block::new(config.block_capacity)],
            config,
            current: 0,
        }
    }

    /// Create a pool with the given block capacity and default budget.
    pub fn with_block_capacity(block_capacity: usize) -> Self {
        Self::new(PoolConfig::with_block_capacity(block_capacity))
    }

    /// Copy `value` into a fresh slot and return its handle.
    ///
    /// Grows by one block when the current block is full. Returns
    /// [`PoolError::CapacityExceeded`] once the block budget is spent;
    /// the pool stays usable (the failure is not sticky, and a later
    /// [`clear`](Self::clear) makes the storage reusable).
    pub fn put(&mut self, value: T) -> Result<ItemRef, PoolError> {
        // Fast path: room in the block being filled.
        let value = match self.blocks[self.current].push(value) {
            Ok(slot) => return Ok(ItemRef::new(self.current, slot)),
            Err(value) => value,
        };

        // Advance into a block retained by an earlier `clear`, if any.
        let next = self.current + 1;
        if next < self.blocks.len() {
            if let Ok(slot) = self.blocks[next].push(value) {
                self.current = next;
                return Ok(ItemRef::new(next, slot));
            }
            unreachable!("retained blocks are empty after clear");
        }

        if self.blocks.len() >= self.config.max_blocks {
            return Err(PoolError::CapacityExceeded {
                requested: 1,
                capacity: self.config.total_capacity(),
            });
        }

        let mut block = Block::new(self.config.block_capacity);
        let slot = match block.push(value) {
            Ok(slot) => slot,
            // A fresh block only rejects when block_capacity is 0.
            Err(_) => {
                return Err(PoolError::CapacityExceeded {
                    requested: 1,
                    capacity: self.config.total_capacity(),
                })
            }
        };
        self.blocks.push(block);
        self.current = self.blocks.len() - 1;
        Ok(ItemRef::new(self.current, slot))
    }

    /// Resolve a handle to a shared reference.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this pool (or was
    /// invalidated by [`clear`](Self::clear)).
    pub fn get(&self, item: ItemRef) -> &T {
        self.blocks[item.block as usize].get(item.slot as usize)
    }

    /// Resolve a handle to a mutable reference.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this pool (or was
    /// invalidated by [`clear`](Self::clear)).
    pub fn get_mut(&mut self, item: ItemRef) -> &mut T {
        self.blocks[item.block as usize].get_mut(item.slot as usize)
    }

    /// Iterate over all items in block order, then slot order.
    ///
    /// This matches insertion order as long as [`clear`](Self::clear)
    /// has never been called.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.blocks.iter().flat_map(Block::iter)
    }

    /// Iterate mutably over all items in block order, then slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.blocks.iter_mut().flat_map(Block::iter_mut)
    }

    /// Remove every item, invalidating all outstanding handles.
    ///
    /// Block storage is retained for reuse, so a pool that is filled
    /// and cleared repeatedly allocates blocks only once.
    pub fn clear(&mut self) {
        for block in &mut self.blocks {
            block.clear();
        }
        self.current = 0;
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.blocks.iter().map(Block::len).sum()
    }

    /// Whether the pool holds no items.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.len() == 0)
    }

    /// Number of blocks currently allocated.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Reserved storage across all blocks, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.iter().map(Block::memory_bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_pool(block_capacity: usize, max_blocks: usize) -> Pool<u64> {
        Pool::new(PoolConfig {
            block_capacity,
            max_blocks,
        })
    }

    #[test]
    fn put_and_get_round_trip() {
        let mut pool = small_pool(4, 8);
        let a = pool.put(10).unwrap();
        let b = pool.put(20).unwrap();
        assert_eq!(*pool.get(a), 10);
        assert_eq!(*pool.get(b), 20);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn grows_by_appending_blocks() {
        let mut pool = small_pool(2, 8);
        for i in 0..5 {
            pool.put(i).unwrap();
        }
        assert_eq!(pool.block_count(), 3);
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn handles_stay_valid_across_growth() {
        let mut pool = small_pool(2, 64);
        let handles: Vec<_> = (0..100).map(|i| pool.put(i).unwrap()).collect();
        for (i, handle) in handles.iter().enumerate() {
            assert_eq!(*pool.get(*handle), i as u64);
        }
    }

    #[test]
    fn capacity_exceeded_is_not_fatal() {
        let mut pool = small_pool(2, 2);
        for i in 0..4 {
            pool.put(i).unwrap();
        }
        let err = pool.put(99).unwrap_err();
        assert!(matches!(err, PoolError::CapacityExceeded { .. }));

        // The pool is still intact and readable, and clearing makes the
        // storage reusable.
        assert_eq!(pool.len(), 4);
        pool.clear();
        assert_eq!(pool.put(7).map(|h| *pool.get(h)), Ok(7));
    }

    #[test]
    fn zero_block_capacity_rejects_every_put() {
        let mut pool = small_pool(0, 8);
        for _ in 0..3 {
            let err = pool.put(1).unwrap_err();
            assert!(matches!(err, PoolError::CapacityExceeded { .. }));
        }
        // No item ever fits, and failed puts never allocate blocks.
        assert!(pool.is_empty());
        assert_eq!(pool.block_count(), 1);
    }

    #[test]
    fn clear_reuses_existing_blocks() {
        let mut pool = small_pool(2, 4);
        for i in 0..6 {
            pool.put(i).unwrap();
        }
        assert_eq!(pool.block_count(), 3);
        pool.clear();
        assert!(pool.is_empty());
        for i in 0..6 {
            pool.put(i).unwrap();
        }
        // Refilling reused the retained blocks instead of growing.
        assert_eq!(pool.block_count(), 3);
    }

    #[test]
    fn iteration_is_block_then_slot_order() {
        let mut pool = small_pool(2, 8);
        for i in 0..5 {
            pool.put(i).unwrap();
        }
        let seen: Vec<_> = pool.iter().copied().collect();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn iter_mut_can_tombstone_in_place() {
        let mut pool = small_pool(4, 4);
        for i in 0..4 {
            pool.put(i).unwrap();
        }
        for item in pool.iter_mut() {
            if *item % 2 == 0 {
                *item = u64::MAX;
            }
        }
        let odd: Vec<_> = pool.iter().copied().filter(|v| *v != u64::MAX).collect();
        assert_eq!(odd, vec![1, 3]);
    }

    #[test]
    fn memory_bytes_counts_reserved_storage() {
        let pool = small_pool(100, 4);
        assert_eq!(pool.memory_bytes(), 100 * std::mem::size_of::<u64>());
    }

    #[test]
    fn clone_is_independent() {
        let mut pool = small_pool(4, 4);
        let a = pool.put(1).unwrap();
        let mut copy = pool.clone();
        *copy.get_mut(a) = 99;
        assert_eq!(*pool.get(a), 1);
        assert_eq!(*copy.get(a), 99);
    }
}
