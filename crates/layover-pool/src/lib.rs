//! Block-based memory pools for the Layover catalog layer.
//!
//! Everything in the catalog layer allocates out of the pools defined
//! here rather than the global allocator:
//!
//! ```text
//! Pool<T>            fixed-size items, grow-by-block, stable handles
//! ├── StringPool     byte arena for interned strings (StrRef handles)
//! │   └── DedupStringPool   content-hash index, one copy per distinct string
//! └── ListPool<T>    singly linked nodes shared by many logical lists
//! ```
//!
//! # Handles
//!
//! Pools hand out small `Copy` index handles ([`ItemRef`], [`StrRef`],
//! [`NodeRef`]) instead of references. A handle stays valid for the
//! pool's whole lifetime: growth appends new blocks and never moves an
//! existing item. [`Pool::clear`] is the one exception — it invalidates
//! every handle issued so far, and callers must not retain handles
//! across it.
//!
//! # Capacity
//!
//! Each pool is bounded by [`PoolConfig::max_blocks`]. Exhausting the
//! budget yields [`PoolError::CapacityExceeded`] and leaves the pool
//! usable for further allocations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod block;
pub mod config;
pub mod dedup;
pub mod error;
pub mod handle;
pub mod list;
pub mod pool;
pub mod strings;

pub use config::PoolConfig;
pub use dedup::DedupStringPool;
pub use error::PoolError;
pub use handle::{ItemRef, NodeRef, StrRef};
pub use list::{ListHead, ListPool};
pub use pool::Pool;
pub use strings::StringPool;
