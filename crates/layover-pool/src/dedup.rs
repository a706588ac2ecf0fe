//! Deduplicating string pool.
//!
//! Datasets repeat a small set of values enormously often — airline
//! names, plane models, hotel names. Interning those through a
//! [`DedupStringPool`] stores each distinct string once and hands the
//! same [`StrRef`] back for every repeat, trading one hash probe per
//! insertion for a footprint bounded by the number of *distinct*
//! values.
//!
//! The index maps a 64-bit content hash to the handles of the interned
//! strings with that hash; buckets are compared by bytes on probe, so
//! hash collisions cost an extra comparison, never a wrong answer, and
//! the index itself stores no second copy of any string.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use smallvec::SmallVec;

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::StrRef;
use crate::strings::StringPool;

fn content_hash(s: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

/// A string pool that stores equal strings once.
///
/// Within one pool, `put(a) == put(b)` exactly when `a == b`, so
/// handles double as cheap equality tokens for interned content.
#[derive(Clone, Debug, Default)]
pub struct DedupStringPool {
    strings: StringPool,
    interned: HashMap<u64, SmallVec<[StrRef; 1]>>,
}

impl DedupStringPool {
    /// Create a pool with one pre-allocated block.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            strings: StringPool::new(config),
            interned: HashMap::new(),
        }
    }

    /// Create a pool with the given block capacity (in bytes) and the
    /// default block budget.
    pub fn with_block_capacity(block_capacity: usize) -> Self {
        Self::new(PoolConfig::with_block_capacity(block_capacity))
    }

    /// Intern `s`, returning the handle of its single stored copy.
    ///
    /// On a repeat insertion nothing is written to the arena. A failed
    /// insertion leaves both the arena and the index unchanged.
    pub fn put(&mut self, s: &str) -> Result<StrRef, PoolError> {
        let hash = content_hash(s);
        if let Some(bucket) = self.interned.get(&hash) {
            for &handle in bucket {
                if self.strings.get(handle) == s {
                    return Ok(handle);
                }
            }
        }

        let handle = self.strings.put(s)?;
        self.interned.entry(hash).or_default().push(handle);
        Ok(handle)
    }

    /// Resolve a handle to the interned string.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this pool.
    pub fn get(&self, handle: StrRef) -> &str {
        self.strings.get(handle)
    }

    /// Number of distinct strings interned.
    pub fn distinct_count(&self) -> usize {
        self.interned.values().map(SmallVec::len).sum()
    }

    /// Total bytes of string content stored in the arena.
    ///
    /// Index overhead is not included; this is the number that stays
    /// flat when the same value is inserted repeatedly.
    pub fn used_bytes(&self) -> usize {
        self.strings.used_bytes()
    }

    /// Reserved arena storage in bytes (excluding the index).
    pub fn memory_bytes(&self) -> usize {
        self.strings.memory_bytes()
    }
}
