//! Query type 1: look up one entity by identifier.
//!
//! The identifier's shape decides which catalog is probed: a bare
//! digit string is a flight, a `Book`-prefixed one a reservation, and
//! anything else a user. A missing entity, or an inactive user,
//! produces no output objects (not an error).

use layover_catalog::Database;
use layover_core::{ArgumentError, Date, ExecuteError, FlightId, ReservationId};

use crate::args::QueryArgs;
use crate::instance::QueryInstance;
use crate::registry::{QueryType, Statistics};
use crate::writer::QueryWriter;

/// The date the dataset treats as "today" when reporting a user's age.
const AGE_REFERENCE_DATE: Date = match Date::new(2023, 10, 1) {
    Ok(date) => date,
    Err(_) => panic!("reference date is valid"),
};

#[derive(Clone, Debug)]
enum EntityRef {
    Flight(FlightId),
    Reservation(ReservationId),
    User(String),
}

/// Entity lookup by identifier (query type 1).
#[derive(Clone, Copy, Debug)]
pub struct EntityLookup {
    reference_date: Date,
}

impl Default for EntityLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityLookup {
    /// Create a lookup using the dataset's canonical reference date
    /// for age calculations.
    pub fn new() -> Self {
        Self {
            reference_date: AGE_REFERENCE_DATE,
        }
    }

    fn write_user(&self, database: &Database, id: &str, output: &mut QueryWriter) {
        let Some(user) = database.users().get_by_id(id) else {
            return;
        };
        if !user.is_active() {
            return;
        }

        let total_spent: f64 = user
            .reservations()
            .filter_map(|id| database.reservations().get_by_id(id))
            .map(|reservation| reservation.total_price())
            .sum();

        output.new_object();
        output.write_field("name", user.name());
        output.write_field("sex", user.sex());
        output.write_field("age", user.birth_date().years_until(self.reference_date));
        output.write_field("country_code", user.country_code());
        output.write_field("passport", user.passport());
        output.write_field("number_of_flights", user.flight_count());
        output.write_field("number_of_reservations", user.reservation_count());
        output.write_field("total_spent", format!("{total_spent:.3}"));
    }

    fn write_flight(database: &Database, id: FlightId, output: &mut QueryWriter) {
        let Some(flight) = database.flights().get_by_id(id) else {
            return;
        };

        output.new_object();
        output.write_field("airline", flight.airline());
        output.write_field("plane_model", flight.plane_model());
        output.write_field("origin", flight.origin());
        output.write_field("destination", flight.destination());
        output.write_field("schedule_departure_date", flight.schedule_departure());
        output.write_field("schedule_arrival_date", flight.schedule_arrival());
        output.write_field("passengers", flight.passenger_count());
        output.write_field("delay", flight.delay_seconds());
    }

    fn write_reservation(database: &Database, id: ReservationId, output: &mut QueryWriter) {
        let Some(reservation) = database.reservations().get_by_id(id) else {
            return;
        };

        output.new_object();
        output.write_field("hotel_id", reservation.hotel_id());
        output.write_field("hotel_name", reservation.hotel_name());
        output.write_field("hotel_stars", reservation.hotel_stars());
        output.write_field("begin_date", reservation.begin_date());
        output.write_field("end_date", reservation.end_date());
        output.write_field("includes_breakfast", reservation.includes_breakfast());
        output.write_field("nights", reservation.nights());
        output.write_field("total_price", format!("{:.3}", reservation.total_price()));
    }
}

impl QueryType for EntityLookup {
    fn parse_arguments(&self, args: &[&str]) -> Result<Box<dyn QueryArgs>, ArgumentError> {
        let [id] = args else {
            return Err(ArgumentError::WrongCount {
                expected: 1,
                got: args.len(),
            });
        };

        // Flight ids and reservation ids have unambiguous textual
        // forms; everything else is a user id.
        let entity = if let Ok(flight) = id.parse::<FlightId>() {
            EntityRef::Flight(flight)
        } else if let Ok(reservation) = id.parse::<ReservationId>() {
            EntityRef::Reservation(reservation)
        } else {
            EntityRef::User((*id).to_owned())
        };
        Ok(Box::new(entity))
    }

    fn execute(
        &self,
        database: &Database,
        _statistics: Option<&Statistics>,
        instance: &QueryInstance,
        output: &mut QueryWriter,
    ) -> Result<(), ExecuteError> {
        let entity = instance
            .args_as::<EntityRef>()
            .ok_or(ExecuteError::ArgumentMismatch)?;

        match entity {
            EntityRef::Flight(id) => Self::write_flight(database, *id, output),
            EntityRef::Reservation(id) => Self::write_reservation(database, *id, output),
            EntityRef::User(id) => self.write_user(database, id, output),
        }
        Ok(())
    }
}
