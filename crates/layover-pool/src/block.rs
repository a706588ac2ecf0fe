//! Fixed-capacity storage blocks.
//!
//! A block reserves its full capacity at creation and never grows past
//! it, so pushing items never reallocates and item addresses — and, more
//! importantly, item *indices* — are stable for the block's lifetime.

/// One fixed-capacity block of a pool.
#[derive(Clone, Debug)]
pub(crate) struct Block<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Block<T> {
    /// Create a block with room for `capacity` items.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item, returning its slot, or give the item back if the
    /// block is full.
    pub(crate) fn push(&mut self, value: T) -> Result<usize, T> {
        if self.items.len() >= self.capacity {
            return Err(value);
        }
        self.items.push(value);
        Ok(self.items.len() - 1)
    }

    pub(crate) fn get(&self, slot: usize) -> &T {
        &self.items[slot]
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> &mut T {
        &mut self.items[slot]
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Drop all items but keep the reserved storage.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Reserved storage in bytes, regardless of fill level.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }
}
