//! Layover: an in-memory travel-dataset catalog with a batched query
//! engine.
//!
//! This is the top-level facade crate re-exporting the public API of
//! the Layover sub-crates. For most users, adding `layover` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use layover::prelude::*;
//!
//! let mut db = Database::new();
//! db.users_mut()
//!     .add(&UserRecord {
//!         id: "JoséLopes00",
//!         name: "José Lopes",
//!         passport: "PT123456",
//!         country_code: "PT".parse().unwrap(),
//!         birth_date: "1999/07/23".parse().unwrap(),
//!         sex: "M".parse().unwrap(),
//!         account_status: "active".parse().unwrap(),
//!         account_creation: "2019/03/01 09:30:00".parse().unwrap(),
//!     })
//!     .unwrap();
//!
//! let registry = QueryTypeRegistry::with_builtin_queries();
//! let instance = registry
//!     .parse(QueryTypeId(1), 0, &["JoséLopes00"])
//!     .unwrap();
//! let mut output = QueryWriter::new();
//! dispatch_single(&db, instance, &registry, &mut output);
//! assert_eq!(output.field(0, "name"), Some("José Lopes"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `layover-core` | Identifiers, dates, dataset enums, error types |
//! | [`pool`] | `layover-pool` | Block pools, string interning, shared lists |
//! | [`catalog`] | `layover-catalog` | Entity catalogs and the `Database` |
//! | [`query`] | `layover-query` | Query types, registry, writer, dispatcher |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers, calendar types, dataset enums and shared error types
/// (`layover-core`).
pub use layover_core as types;

/// The memory layer: block pools, string interning and shared-storage
/// lists (`layover-pool`).
///
/// Catalogs own their pools; reach for this module directly only when
/// building custom pool-backed structures.
pub use layover_pool as pool;

/// Entity catalogs and the [`catalog::Database`] aggregate
/// (`layover-catalog`).
pub use layover_catalog as catalog;

/// The batched query engine (`layover-query`).
///
/// Register query types in a [`query::QueryTypeRegistry`] and run
/// batches through [`query::dispatch_list`].
pub use layover_query as query;

/// Common imports for typical Layover usage.
///
/// ```rust
/// use layover::prelude::*;
/// ```
pub mod prelude {
    pub use layover_catalog::{
        Database, FlightRecord, ReservationRecord, UserRecord,
    };
    pub use layover_core::{
        AccountStatus, AirportCode, CountryCode, Date, DateTime, FlightId, HotelId,
        IncludesBreakfast, QueryTypeId, ReservationId, Sex, Time,
    };
    pub use layover_query::{
        dispatch_list, dispatch_single, QueryInstance, QueryInstanceList, QueryType,
        QueryTypeRegistry, QueryWriter,
    };
}
