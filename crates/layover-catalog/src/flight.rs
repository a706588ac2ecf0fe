//! The flight catalog.
//!
//! Flight records repeat a handful of strings millions of times (there
//! are far fewer airlines and plane models than flights), so both
//! string fields go through a deduplicating pool.

use std::collections::HashMap;

use layover_core::{AirportCode, DateTime, FlightId};
use layover_pool::{DedupStringPool, ItemRef, Pool, StrRef};

use crate::error::CatalogError;

/// Entity slots reserved per pool block.
const FLIGHT_BLOCK_CAPACITY: usize = 50_000;
/// String bytes reserved per string-pool block. Airline and plane-model
/// names dedup heavily, so the arena stays small.
const STRING_BLOCK_BYTES: usize = 1 << 16;

#[derive(Clone, Copy, Debug)]
struct Flight {
    id: FlightId,
    airline: StrRef,
    plane_model: StrRef,
    origin: AirportCode,
    destination: AirportCode,
    schedule_departure: DateTime,
    schedule_arrival: DateTime,
    real_departure: DateTime,
    total_seats: u16,
    passenger_count: u16,
    valid: bool,
}

/// Input record for [`FlightCatalog::add`].
#[derive(Clone, Copy, Debug)]
pub struct FlightRecord<'a> {
    /// Unique flight identifier.
    pub id: FlightId,
    /// Operating airline.
    pub airline: &'a str,
    /// Aircraft model.
    pub plane_model: &'a str,
    /// Departure airport.
    pub origin: AirportCode,
    /// Arrival airport.
    pub destination: AirportCode,
    /// Scheduled departure.
    pub schedule_departure: DateTime,
    /// Scheduled arrival.
    pub schedule_arrival: DateTime,
    /// Actual departure.
    pub real_departure: DateTime,
    /// Seats on the aircraft.
    pub total_seats: u16,
}

/// Borrowed view of one stored flight.
#[derive(Clone, Copy)]
pub struct FlightView<'a> {
    catalog: &'a FlightCatalog,
    flight: &'a Flight,
}

impl<'a> FlightView<'a> {
    /// Unique flight identifier.
    pub fn id(&self) -> FlightId {
        self.flight.id
    }

    /// Operating airline.
    pub fn airline(&self) -> &'a str {
        self.catalog.strings.get(self.flight.airline)
    }

    /// Aircraft model.
    pub fn plane_model(&self) -> &'a str {
        self.catalog.strings.get(self.flight.plane_model)
    }

    /// Departure airport.
    pub fn origin(&self) -> AirportCode {
        self.flight.origin
    }

    /// Arrival airport.
    pub fn destination(&self) -> AirportCode {
        self.flight.destination
    }

    /// Scheduled departure.
    pub fn schedule_departure(&self) -> DateTime {
        self.flight.schedule_departure
    }

    /// Scheduled arrival.
    pub fn schedule_arrival(&self) -> DateTime {
        self.flight.schedule_arrival
    }

    /// Actual departure.
    pub fn real_departure(&self) -> DateTime {
        self.flight.real_departure
    }

    /// Seats on the aircraft.
    pub fn total_seats(&self) -> u16 {
        self.flight.total_seats
    }

    /// Passengers linked to this flight so far.
    pub fn passenger_count(&self) -> u16 {
        self.flight.passenger_count
    }

    /// Departure delay in seconds (negative for an early departure).
    pub fn delay_seconds(&self) -> i64 {
        self.flight
            .schedule_departure
            .seconds_until(self.flight.real_departure)
    }
}

impl std::fmt::Debug for FlightView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightView")
            .field("id", &self.flight.id)
            .field("airline", &self.airline())
            .field("origin", &self.flight.origin)
            .field("destination", &self.flight.destination)
            .finish_non_exhaustive()
    }
}

/// Owns every flight entity plus the identifier index.
#[derive(Clone, Debug)]
pub struct FlightCatalog {
    flights: Pool<Flight>,
    strings: DedupStringPool,
    index: HashMap<FlightId, ItemRef>,
}

impl FlightCatalog {
    /// Create an empty catalog with default block capacities.
    pub fn new() -> Self {
        Self {
            flights: Pool::with_block_capacity(FLIGHT_BLOCK_CAPACITY),
            strings: DedupStringPool::with_block_capacity(STRING_BLOCK_BYTES),
            index: HashMap::new(),
        }
    }

    /// Copy `record` into the catalog and index it by identifier.
    ///
    /// Same contract as `UserCatalog::add`: intern failure tombstones
    /// the pooled slot, a duplicate identifier is logged and its
    /// previous entity tombstoned.
    pub fn add(&mut self, record: &FlightRecord<'_>) -> Result<(), CatalogError> {
        let slot = self.flights.put(Flight {
            id: record.id,
            airline: StrRef::EMPTY,
            plane_model: StrRef::EMPTY,
            origin: record.origin,
            destination: record.destination,
            schedule_departure: record.schedule_departure,
            schedule_arrival: record.schedule_arrival,
            real_departure: record.real_departure,
            total_seats: record.total_seats,
            passenger_count: 0,
            valid: true,
        })?;

        let airline = self.intern(slot, record.airline)?;
        let plane_model = self.intern(slot, record.plane_model)?;

        let flight = self.flights.get_mut(slot);
        flight.airline = airline;
        flight.plane_model = plane_model;

        if let Some(previous) = self.index.insert(record.id, slot) {
            tracing::warn!(id = %record.id, "duplicate flight id, replacing previous entry");
            self.flights.get_mut(previous).valid = false;
        }
        Ok(())
    }

    fn intern(&mut self, slot: ItemRef, value: &str) -> Result<StrRef, CatalogError> {
        match self.strings.put(value) {
            Ok(handle) => Ok(handle),
            Err(source) => {
                self.flights.get_mut(slot).valid = false;
                Err(source.into())
            }
        }
    }

    /// Look up a flight by identifier. Tombstoned entries are misses.
    pub fn get_by_id(&self, id: FlightId) -> Option<FlightView<'_>> {
        let flight = self.flights.get(*self.index.get(&id)?);
        flight.valid.then_some(FlightView {
            catalog: self,
            flight,
        })
    }

    /// Iterate every live flight in storage order.
    pub fn iter(&self) -> impl Iterator<Item = FlightView<'_>> {
        self.flights
            .iter()
            .filter(|flight| flight.valid)
            .map(move |flight| FlightView {
                catalog: self,
                flight,
            })
    }

    /// Record one more passenger on the flight. Unknown ids are
    /// ignored (the passenger link is dropped by the loader anyway).
    pub fn count_passenger(&mut self, id: FlightId) {
        if let Some(slot) = self.index.get(&id).copied() {
            let flight = self.flights.get_mut(slot);
            if flight.valid {
                flight.passenger_count = flight.passenger_count.saturating_add(1);
            }
        }
    }

    /// Number of live flights.
    pub fn len(&self) -> usize {
        self.index
            .values()
            .filter(|slot| self.flights.get(**slot).valid)
            .count()
    }

    /// Whether the catalog holds no live flights.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserved storage across the backing pools, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.flights.memory_bytes() + self.strings.memory_bytes()
    }
}

impl Default for FlightCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, airline: &str) -> FlightRecord<'_> {
        FlightRecord {
            id: FlightId(id),
            airline,
            plane_model: "Airbus A330",
            origin: "OPO".parse().unwrap(),
            destination: "LIS".parse().unwrap(),
            schedule_departure: "2023/10/01 08:00:00".parse().unwrap(),
            schedule_arrival: "2023/10/01 09:00:00".parse().unwrap(),
            real_departure: "2023/10/01 08:05:30".parse().unwrap(),
            total_seats: 250,
        }
    }

    #[test]
    fn add_then_get_round_trips_all_fields() {
        let mut catalog = FlightCatalog::new();
        let input = record(42, "TAP Air Portugal");
        catalog.add(&input).unwrap();

        let view = catalog.get_by_id(FlightId(42)).unwrap();
        assert_eq!(view.id(), input.id);
        assert_eq!(view.airline(), input.airline);
        assert_eq!(view.plane_model(), input.plane_model);
        assert_eq!(view.origin(), input.origin);
        assert_eq!(view.destination(), input.destination);
        assert_eq!(view.total_seats(), 250);
        assert_eq!(view.passenger_count(), 0);
    }

    #[test]
    fn delay_is_real_minus_scheduled() {
        let mut catalog = FlightCatalog::new();
        catalog.add(&record(1, "TAP Air Portugal")).unwrap();
        let view = catalog.get_by_id(FlightId(1)).unwrap();
        assert_eq!(view.delay_seconds(), 5 * 60 + 30);
    }

    #[test]
    fn repeated_airline_names_are_interned_once() {
        let mut catalog = FlightCatalog::new();
        for id in 0..100 {
            catalog.add(&record(id, "TAP Air Portugal")).unwrap();
        }
        // One airline plus one plane model.
        assert_eq!(catalog.strings.distinct_count(), 2);
    }

    #[test]
    fn duplicate_id_overwrites_and_tombstones_previous() {
        let mut catalog = FlightCatalog::new();
        catalog.add(&record(7, "First Air")).unwrap();
        catalog.add(&record(7, "Second Air")).unwrap();

        assert_eq!(catalog.get_by_id(FlightId(7)).unwrap().airline(), "Second Air");
        assert_eq!(catalog.iter().count(), 1);
    }

    #[test]
    fn passenger_counting_saturates_and_skips_unknown() {
        let mut catalog = FlightCatalog::new();
        catalog.add(&record(1, "TAP Air Portugal")).unwrap();
        catalog.count_passenger(FlightId(1));
        catalog.count_passenger(FlightId(1));
        catalog.count_passenger(FlightId(999));
        assert_eq!(catalog.get_by_id(FlightId(1)).unwrap().passenger_count(), 2);
    }
}
