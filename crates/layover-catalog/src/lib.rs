//! Entity catalogs for the Layover in-memory database.
//!
//! A catalog owns every entity of one kind plus an O(1) identifier
//! index. Internally each catalog is a composition of pools from
//! `layover-pool`:
//!
//! ```text
//! UserCatalog
//! ├── Pool<User>                 entity records (tombstoned, never freed)
//! ├── StringPool                 ids, names, passports
//! ├── HashMap<Box<str>, ItemRef> identifier index
//! ├── ListPool<FlightId>         per-user flight associations
//! └── ListPool<ReservationId>    per-user reservation associations
//! ```
//!
//! `FlightCatalog` and `ReservationCatalog` follow the same shape, with
//! deduplicating pools for the heavily repeated strings (airlines,
//! plane models, hotel names) and numeric identifier keys.
//!
//! [`Database`] aggregates the three catalogs and is the unit of deep
//! cloning: a clone shares no mutable state with its source.
//!
//! # Error discipline
//!
//! Loading never aborts over one bad record: an entity whose strings
//! fail to intern is tombstoned in place (pool slots cannot be
//! reclaimed individually) and skipped by every lookup and iteration
//! path. A duplicate identifier is logged and overwrites the previous
//! entry — availability over strict uniqueness at this layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod database;
pub mod error;
pub mod flight;
pub mod reservation;
pub mod user;

pub use database::Database;
pub use error::CatalogError;
pub use flight::{FlightCatalog, FlightRecord, FlightView};
pub use reservation::{ReservationCatalog, ReservationRecord, ReservationView};
pub use user::{UserCatalog, UserRecord, UserView};
