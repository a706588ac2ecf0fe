//! Property tests for the pool layer's core invariants.
//!
//! Handle stability: any handle issued before a `clear` dereferences to
//! its original value after arbitrarily many later allocations. Dedup
//! correctness: byte-equal strings share a handle, distinct strings do
//! not, and everything decodes back to its original bytes.

use layover_pool::{DedupStringPool, Pool, PoolConfig, StringPool};
use proptest::prelude::*;

proptest! {
    #[test]
    fn item_handles_stable_under_growth(
        values in proptest::collection::vec(any::<u64>(), 1..500),
        block_capacity in 1usize..32,
    ) {
        let mut pool = Pool::new(PoolConfig {
            block_capacity,
            max_blocks: PoolConfig::DEFAULT_MAX_BLOCKS,
        });
        let handles: Vec<_> = values
            .iter()
            .map(|v| pool.put(*v).unwrap())
            .collect();
        for (value, handle) in values.iter().zip(&handles) {
            prop_assert_eq!(pool.get(*handle), value);
        }
        prop_assert_eq!(pool.len(), values.len());
    }

    #[test]
    fn string_handles_stable_under_growth(
        values in proptest::collection::vec("[a-zA-Z0-9 ]{0,40}", 1..200),
        block_capacity in 1usize..64,
    ) {
        let mut pool = StringPool::new(PoolConfig {
            block_capacity,
            max_blocks: PoolConfig::DEFAULT_MAX_BLOCKS,
        });
        let handles: Vec<_> = values
            .iter()
            .map(|v| pool.put(v).unwrap())
            .collect();
        for (value, handle) in values.iter().zip(&handles) {
            prop_assert_eq!(pool.get(*handle), value);
        }
    }

    #[test]
    fn dedup_handle_equality_matches_content_equality(
        values in proptest::collection::vec("[a-c]{0,4}", 1..100),
    ) {
        let mut pool = DedupStringPool::with_block_capacity(256);
        let handles: Vec<_> = values
            .iter()
            .map(|v| pool.put(v).unwrap())
            .collect();
        for (a, ha) in values.iter().zip(&handles) {
            for (b, hb) in values.iter().zip(&handles) {
                prop_assert_eq!(a == b, ha == hb);
            }
        }
        for (value, handle) in values.iter().zip(&handles) {
            prop_assert_eq!(pool.get(*handle), value);
        }
    }

    #[test]
    fn iteration_preserves_insertion_order(
        values in proptest::collection::vec(any::<u32>(), 0..300),
        block_capacity in 1usize..16,
    ) {
        let mut pool = Pool::new(PoolConfig {
            block_capacity,
            max_blocks: PoolConfig::DEFAULT_MAX_BLOCKS,
        });
        for v in &values {
            pool.put(*v).unwrap();
        }
        let seen: Vec<_> = pool.iter().copied().collect();
        prop_assert_eq!(seen, values);
    }
}
