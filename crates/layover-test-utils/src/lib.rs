//! Test fixtures for Layover development.
//!
//! Provides canned entity records and a small pre-populated
//! [`Database`] so catalog and query tests do not each rebuild the same
//! dataset by hand.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{
    sample_database, sample_flight, sample_reservation, sample_user, SAMPLE_FLIGHT_COUNT,
    SAMPLE_RESERVATION_COUNT, SAMPLE_USER_COUNT,
};
