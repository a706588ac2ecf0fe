//! The reference query implementations.
//!
//! Numbered after the batch-file format: type 1 is the entity lookup,
//! type 7 ranks airports by median departure delay, type 8 sums a
//! hotel's revenue over a date range.

mod airport_delays;
mod entity_lookup;
mod hotel_revenue;

pub use airport_delays::AirportDelays;
pub use entity_lookup::EntityLookup;
pub use hotel_revenue::HotelRevenue;
