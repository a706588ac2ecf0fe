//! Catalog-specific error types.

use std::error::Error;
use std::fmt;

use layover_pool::PoolError;

/// Errors that can occur during catalog operations.
///
/// Lookup misses are *not* errors — lookups return `Option` — so this
/// enum covers only allocation failures and association targets that
/// do not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// A backing pool refused the allocation.
    Allocation {
        /// The underlying pool error.
        source: PoolError,
    },
    /// An association referenced a user identifier that is not in the
    /// catalog.
    UserNotFound {
        /// The unknown identifier.
        id: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { source } => write!(f, "catalog allocation failed: {source}"),
            Self::UserNotFound { id } => write!(f, "user not found: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation { source } => Some(source),
            Self::UserNotFound { .. } => None,
        }
    }
}

impl From<PoolError> for CatalogError {
    fn from(source: PoolError) -> Self {
        Self::Allocation { source }
    }
}
