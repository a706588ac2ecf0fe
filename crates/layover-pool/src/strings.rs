//! Byte-block arena for interned strings.
//!
//! Entity string fields (names, passports, airline names...) are copied
//! into a [`StringPool`] at load time and referenced by [`StrRef`]
//! afterwards, so records stay fixed-size and the strings share a
//! handful of large allocations instead of one heap allocation each.
//! Strings are freed only when the whole pool is dropped.

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::StrRef;

/// A grow-by-block arena for variable-length strings.
#[derive(Clone, Debug)]
pub struct StringPool {
    blocks: Vec<Vec<u8>>,
    config: PoolConfig,
    /// Index of the block currently being filled. Oversized blocks
    /// appended after it are always full and never become current.
    current: usize,
}

impl StringPool {
    /// Create a pool with one pre-allocated block.
    ///
    /// `config.block_capacity` is measured in bytes.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            blocks: vec![Vec::with_capacity(config.block_capacity)],
            config,
            current: 0,
        }
    }

    /// Create a pool with the given block capacity (in bytes) and the
    /// default block budget.
    pub fn with_block_capacity(block_capacity: usize) -> Self {
        Self::new(PoolConfig::with_block_capacity(block_capacity))
    }

    /// Copy `s` into the arena and return its handle.
    ///
    /// Strings longer than one block get a dedicated block of exactly
    /// their size, so a single long value cannot fail while budget
    /// remains. Returns [`PoolError::CapacityExceeded`] once the block
    /// budget is spent; the pool remains usable.
    pub fn put(&mut self, s: &str) -> Result<StrRef, PoolError> {
        let bytes = s.as_bytes();

        if bytes.len() > self.config.block_capacity {
            self.ensure_budget(bytes.len())?;
            self.blocks.push(bytes.to_vec());
            return Ok(StrRef {
                block: (self.blocks.len() - 1) as u32,
                offset: 0,
                len: bytes.len() as u32,
            });
        }

        let remaining = self.config.block_capacity - self.blocks[self.current].len();
        if bytes.len() > remaining {
            self.ensure_budget(bytes.len())?;
            self.blocks.push(Vec::with_capacity(self.config.block_capacity));
            self.current = self.blocks.len() - 1;
        }

        let block = &mut self.blocks[self.current];
        let offset = block.len();
        block.extend_from_slice(bytes);
        Ok(StrRef {
            block: self.current as u32,
            offset: offset as u32,
            len: bytes.len() as u32,
        })
    }

    fn ensure_budget(&self, requested: usize) -> Result<(), PoolError> {
        if self.blocks.len() >= self.config.max_blocks {
            return Err(PoolError::CapacityExceeded {
                requested,
                capacity: self.config.total_capacity(),
            });
        }
        Ok(())
    }

    /// Resolve a handle to the interned string.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this pool.
    pub fn get(&self, handle: StrRef) -> &str {
        let block = &self.blocks[handle.block as usize];
        let start = handle.offset as usize;
        let end = start + handle.len as usize;
        std::str::from_utf8(&block[start..end]).expect("pool contents are copies of &str")
    }

    /// Total bytes of string content stored.
    pub fn used_bytes(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }

    /// Reserved arena storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.iter().map(Vec::capacity).sum()
    }

    /// Number of blocks currently allocated.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl Default for StringPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get_round_trip() {
        let mut pool = StringPool::with_block_capacity(64);
        let a = pool.put("hello").unwrap();
        let b = pool.put("world").unwrap();
        assert_eq!(pool.get(a), "hello");
        assert_eq!(pool.get(b), "world");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_string_is_representable() {
        let mut pool = StringPool::with_block_capacity(8);
        let empty = pool.put("").unwrap();
        assert_eq!(pool.get(empty), "");
        assert_eq!(pool.get(StrRef::EMPTY), "");
    }

    #[test]
    fn grows_without_moving_existing_strings() {
        let mut pool = StringPool::with_block_capacity(8);
        let first = pool.put("abcdef").unwrap();
        let handles: Vec<_> = (0..20)
            .map(|i| {
                let s = format!("s{i:02}");
                (pool.put(&s).unwrap(), s)
            })
            .collect();
        assert_eq!(pool.get(first), "abcdef");
        for (handle, expected) in &handles {
            assert_eq!(pool.get(*handle), expected);
        }
        assert!(pool.block_count() > 1);
    }

    #[test]
    fn oversized_string_gets_dedicated_block() {
        let mut pool = StringPool::with_block_capacity(8);
        let long = "a".repeat(100);
        let handle = pool.put(&long).unwrap();
        assert_eq!(pool.get(handle), long);
        // A normal allocation afterwards continues in a regular block.
        let short = pool.put("hi").unwrap();
        assert_eq!(pool.get(short), "hi");
    }

    #[test]
    fn budget_exhaustion_is_reported() {
        let mut pool = StringPool::new(PoolConfig {
            block_capacity: 4,
            max_blocks: 1,
        });
        pool.put("abcd").unwrap();
        let err = pool.put("x").unwrap_err();
        assert!(matches!(err, PoolError::CapacityExceeded { .. }));
    }

    #[test]
    fn used_bytes_tracks_content() {
        let mut pool = StringPool::with_block_capacity(64);
        pool.put("abc").unwrap();
        pool.put("de").unwrap();
        assert_eq!(pool.used_bytes(), 5);
    }
}
