//! Pool configuration parameters.

/// Configuration for a block pool.
///
/// Controls block sizing and the pool's total growth budget. Immutable
/// after the pool is created.
#[derive(Clone, Copy, Debug)]
pub struct PoolConfig {
    /// Number of item slots in each block (characters, for string
    /// pools).
    ///
    /// Default: 1024. Larger blocks amortize the per-block allocation
    /// better at the cost of coarser growth steps. A capacity of zero
    /// is not rejected, but no item fits in a zero-slot block, so every
    /// `put` fails with `CapacityExceeded`.
    pub block_capacity: usize,

    /// Maximum number of blocks the pool may allocate.
    ///
    /// Default: 65_536. Together with `block_capacity` this bounds the
    /// pool's total footprint; exceeding it is reported as an
    /// allocation failure rather than aborting.
    pub max_blocks: usize,
}

impl PoolConfig {
    /// Default number of slots per block.
    pub const DEFAULT_BLOCK_CAPACITY: usize = 1024;

    /// Default block budget.
    pub const DEFAULT_MAX_BLOCKS: usize = 65_536;

    /// Create a config with the given block capacity and the default
    /// block budget.
    pub fn with_block_capacity(block_capacity: usize) -> Self {
        Self {
            block_capacity,
            max_blocks: Self::DEFAULT_MAX_BLOCKS,
        }
    }

    /// Total item capacity across the whole block budget.
    pub fn total_capacity(&self) -> usize {
        self.block_capacity.saturating_mul(self.max_blocks)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::with_block_capacity(Self::DEFAULT_BLOCK_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget() {
        let config = PoolConfig::default();
        assert_eq!(config.block_capacity, 1024);
        assert_eq!(config.max_blocks, 65_536);
    }

    #[test]
    fn total_capacity_saturates() {
        let config = PoolConfig {
            block_capacity: usize::MAX,
            max_blocks: 2,
        };
        assert_eq!(config.total_capacity(), usize::MAX);
    }
}
