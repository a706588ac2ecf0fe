//! Batched query execution for the Layover catalog.
//!
//! Queries arrive as numbered instances of registered types. The
//! dispatcher groups same-type instances into contiguous partitions and
//! runs each type's statistics pass exactly once per partition:
//!
//! ```text
//! QueryInstanceList          sorted, type-contiguous
//!   └── partition (type 8) ──► generate_statistics (one catalog pass)
//!         ├── execute(instance 0) ──► QueryWriter 0
//!         └── execute(instance 3) ──► QueryWriter 3
//! ```
//!
//! One slow query type therefore costs one pass over the catalog no
//! matter how many instances of it the batch contains. A failing
//! instance is logged and only its own output stays empty; unknown
//! type identifiers skip their whole partition.
//!
//! The reference query types live in [`queries`] and are registered by
//! [`QueryTypeRegistry::with_builtin_queries`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod dispatch;
pub mod instance;
pub mod queries;
pub mod registry;
pub mod writer;

pub use args::QueryArgs;
pub use dispatch::{dispatch_list, dispatch_single};
pub use instance::{QueryInstance, QueryInstanceList};
pub use registry::{QueryType, QueryTypeRegistry, Statistics};
pub use writer::QueryWriter;
