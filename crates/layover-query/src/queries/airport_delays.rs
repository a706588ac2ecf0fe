//! Query type 7: top-N airports by median departure delay.
//!
//! The statistics pass visits every flight once, bucketing departure
//! delays by origin airport, then ranks airports by median delay. Each
//! instance only slices its own N off the shared ranking, so a batch
//! of type-7 queries costs a single pass regardless of size.

use std::cmp::Reverse;
use std::collections::HashMap;

use layover_catalog::Database;
use layover_core::{AirportCode, ArgumentError, ExecuteError};

use crate::args::QueryArgs;
use crate::instance::QueryInstance;
use crate::registry::{QueryType, Statistics};
use crate::writer::QueryWriter;

#[derive(Clone, Copy, Debug)]
struct TopCount(usize);

#[derive(Clone, Copy, Debug)]
struct AirportMedian {
    airport: AirportCode,
    median: i64,
}

/// Median of a sorted, non-empty slice; even lengths round the mean of
/// the middle pair to the nearest integer.
fn median_of_sorted(delays: &[i64]) -> i64 {
    let middle = delays.len() / 2;
    if delays.len() % 2 == 0 {
        ((delays[middle - 1] + delays[middle]) as f64 * 0.5).round() as i64
    } else {
        delays[middle]
    }
}

/// Airport departure-delay ranking (query type 7).
#[derive(Clone, Copy, Debug, Default)]
pub struct AirportDelays;

impl QueryType for AirportDelays {
    fn parse_arguments(&self, args: &[&str]) -> Result<Box<dyn QueryArgs>, ArgumentError> {
        let [count] = args else {
            return Err(ArgumentError::WrongCount {
                expected: 1,
                got: args.len(),
            });
        };
        let count: usize = count.parse().map_err(|_| ArgumentError::Invalid {
            reason: format!("invalid airport count: {count}"),
        })?;
        Ok(Box::new(TopCount(count)))
    }

    fn generate_statistics(
        &self,
        database: &Database,
        _instances: &[QueryInstance],
    ) -> Option<Statistics> {
        let mut delays_by_airport: HashMap<AirportCode, Vec<i64>> = HashMap::new();
        for flight in database.flights().iter() {
            delays_by_airport
                .entry(flight.origin())
                .or_default()
                .push(flight.delay_seconds());
        }

        let mut ranking: Vec<AirportMedian> = delays_by_airport
            .into_iter()
            .map(|(airport, mut delays)| {
                delays.sort_unstable();
                AirportMedian {
                    airport,
                    median: median_of_sorted(&delays),
                }
            })
            .collect();

        // Highest median first; ties resolve alphabetically so output
        // is deterministic.
        ranking.sort_unstable_by_key(|entry| (Reverse(entry.median), entry.airport));
        Some(Box::new(ranking))
    }

    fn execute(
        &self,
        _database: &Database,
        statistics: Option<&Statistics>,
        instance: &QueryInstance,
        output: &mut QueryWriter,
    ) -> Result<(), ExecuteError> {
        let TopCount(count) = instance
            .args_as::<TopCount>()
            .ok_or(ExecuteError::ArgumentMismatch)?;
        let ranking = statistics
            .and_then(|stats| stats.downcast_ref::<Vec<AirportMedian>>())
            .ok_or(ExecuteError::ArgumentMismatch)?;

        for entry in ranking.iter().take(*count) {
            output.new_object();
            output.write_field("name", entry.airport);
            output.write_field("median", entry.median);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_median_is_the_middle_value() {
        assert_eq!(median_of_sorted(&[10, 20, 90]), 20);
    }

    #[test]
    fn even_length_median_rounds_the_middle_pair_mean() {
        assert_eq!(median_of_sorted(&[10, 20]), 15);
        assert_eq!(median_of_sorted(&[10, 21]), 16); // 15.5 rounds up
        assert_eq!(median_of_sorted(&[-30, 10]), -10);
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let err = AirportDelays.parse_arguments(&["ten"]).unwrap_err();
        assert!(matches!(err, ArgumentError::Invalid { .. }));
    }
}
