//! Pool-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during pool operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The pool's block budget is exhausted.
    ///
    /// The pool itself remains intact and usable; only the allocation
    /// that hit the budget fails.
    CapacityExceeded {
        /// Number of slots requested by the failing allocation.
        requested: usize,
        /// Total slot capacity across the pool's block budget.
        capacity: usize,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "pool capacity exceeded: requested {requested} slots, capacity {capacity}"
            ),
        }
    }
}

impl Error for PoolError {}
