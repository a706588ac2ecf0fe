//! Query type 8: a hotel's revenue over a date range.
//!
//! Revenue counts `price_per_night` once per occupied night, city tax
//! excluded. A guest checking out on a day pays nothing for it, so a
//! reservation contributes its nights in `[begin, end)`; the query's
//! own range is inclusive on both ends.
//!
//! The statistics pass collects the stay spans of every hotel any
//! instance in the partition asks about, so N revenue queries still
//! make one pass over the reservation catalog.

use std::collections::{HashMap, HashSet};

use layover_catalog::Database;
use layover_core::{ArgumentError, Date, ExecuteError, HotelId};

use crate::args::QueryArgs;
use crate::instance::QueryInstance;
use crate::registry::{QueryType, Statistics};
use crate::writer::QueryWriter;

#[derive(Clone, Copy, Debug)]
struct RevenueArgs {
    hotel: HotelId,
    begin: Date,
    end: Date,
}

/// One reservation's stay at a hotel: occupied-night span (day
/// numbers, checkout exclusive) and the nightly price.
#[derive(Clone, Copy, Debug)]
struct Stay {
    first_night: i64,
    checkout: i64,
    price_per_night: u16,
}

type StaysByHotel = HashMap<HotelId, Vec<Stay>>;

/// Hotel revenue in a date range (query type 8).
#[derive(Clone, Copy, Debug, Default)]
pub struct HotelRevenue;

impl QueryType for HotelRevenue {
    fn parse_arguments(&self, args: &[&str]) -> Result<Box<dyn QueryArgs>, ArgumentError> {
        let [hotel, begin, end] = args else {
            return Err(ArgumentError::WrongCount {
                expected: 3,
                got: args.len(),
            });
        };
        let hotel: HotelId = hotel.parse().map_err(|_| ArgumentError::Invalid {
            reason: format!("invalid hotel identifier: {hotel}"),
        })?;
        let begin: Date = begin.parse().map_err(|_| ArgumentError::Invalid {
            reason: format!("invalid begin date: {begin}"),
        })?;
        let end: Date = end.parse().map_err(|_| ArgumentError::Invalid {
            reason: format!("invalid end date: {end}"),
        })?;
        Ok(Box::new(RevenueArgs { hotel, begin, end }))
    }

    fn generate_statistics(
        &self,
        database: &Database,
        instances: &[QueryInstance],
    ) -> Option<Statistics> {
        let wanted: HashSet<HotelId> = instances
            .iter()
            .filter_map(|instance| instance.args_as::<RevenueArgs>())
            .map(|args| args.hotel)
            .collect();

        let mut stays: StaysByHotel = HashMap::new();
        for reservation in database.reservations().iter() {
            if !wanted.contains(&reservation.hotel_id()) {
                continue;
            }
            stays
                .entry(reservation.hotel_id())
                .or_default()
                .push(Stay {
                    first_night: reservation.begin_date().day_number(),
                    checkout: reservation.end_date().day_number(),
                    price_per_night: reservation.price_per_night(),
                });
        }
        Some(Box::new(stays))
    }

    fn execute(
        &self,
        _database: &Database,
        statistics: Option<&Statistics>,
        instance: &QueryInstance,
        output: &mut QueryWriter,
    ) -> Result<(), ExecuteError> {
        let args = instance
            .args_as::<RevenueArgs>()
            .ok_or(ExecuteError::ArgumentMismatch)?;
        let stays = statistics
            .and_then(|stats| stats.downcast_ref::<StaysByHotel>())
            .ok_or(ExecuteError::ArgumentMismatch)?;

        let range_first = args.begin.day_number();
        let range_last = args.end.day_number();

        let mut revenue: u64 = 0;
        for stay in stays.get(&args.hotel).map(Vec::as_slice).unwrap_or(&[]) {
            let first = stay.first_night.max(range_first);
            let last = (stay.checkout - 1).min(range_last);
            if first <= last {
                revenue += (last - first + 1) as u64 * u64::from(stay.price_per_night);
            }
        }

        output.new_object();
        output.write_field("revenue", revenue);
        Ok(())
    }
}
