//! Core types for the Layover in-memory travel catalog.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the strongly-typed identifiers, calendar value types, dataset enums
//! and error types shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod code;
pub mod date;
pub mod error;
pub mod id;
pub mod record;

pub use code::{AirportCode, CountryCode, ParseCodeError};
pub use date::{Date, DateError, DateTime, Time};
pub use error::{ArgumentError, ExecuteError};
pub use id::{FlightId, HotelId, ParseIdError, QueryTypeId, ReservationId};
pub use record::{AccountStatus, IncludesBreakfast, ParseRecordError, Sex};
