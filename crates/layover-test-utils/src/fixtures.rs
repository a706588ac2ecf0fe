//! Canned dataset used across catalog and query tests.
//!
//! The numbers are chosen so derived values are easy to assert: airport
//! OPO's departure delays are 60/120/180 seconds (median 120), LIS's are
//! 300/600 (median 450), and the Grand Hotel's nightly revenue per
//! reservation works out to round sums.

use layover_catalog::{Database, FlightRecord, ReservationRecord, UserRecord};
use layover_core::{FlightId, HotelId, ReservationId};

pub const SAMPLE_USER_COUNT: usize = 3;
pub const SAMPLE_FLIGHT_COUNT: usize = 5;
pub const SAMPLE_RESERVATION_COUNT: usize = 3;

/// One of [`SAMPLE_USER_COUNT`] canned users. Index 1 is inactive.
pub fn sample_user(index: usize) -> UserRecord<'static> {
    let (id, name, passport, country, birth, sex, status) = [
        (
            "JéssiTavares910",
            "Jéssica Tavares",
            "AA000001",
            "PT",
            "1990/05/20",
            "F",
            "active",
        ),
        (
            "DGarcia429",
            "Diogo Garcia",
            "BB000002",
            "ES",
            "1985/03/14",
            "M",
            "inactive",
        ),
        (
            "MSilva123",
            "Maria Silva",
            "CC000003",
            "PT",
            "2000/12/01",
            "F",
            "active",
        ),
    ][index];

    UserRecord {
        id,
        name,
        passport,
        country_code: country.parse().unwrap(),
        birth_date: birth.parse().unwrap(),
        sex: sex.parse().unwrap(),
        account_status: status.parse().unwrap(),
        account_creation: "2015/01/01 10:00:00".parse().unwrap(),
    }
}

/// One of [`SAMPLE_FLIGHT_COUNT`] canned flights.
pub fn sample_flight(index: usize) -> FlightRecord<'static> {
    let (id, airline, origin, destination, sched, arrival, real) = [
        (1u64, "TAP Air Portugal", "OPO", "LIS", "2023/10/01 08:00:00", "2023/10/01 09:00:00", "2023/10/01 08:01:00"),
        (2, "TAP Air Portugal", "OPO", "MAD", "2023/10/01 09:00:00", "2023/10/01 10:30:00", "2023/10/01 09:02:00"),
        (3, "Ryanair", "OPO", "CDG", "2023/10/01 10:00:00", "2023/10/01 12:00:00", "2023/10/01 10:03:00"),
        (4, "TAP Air Portugal", "LIS", "OPO", "2023/10/02 08:00:00", "2023/10/02 09:00:00", "2023/10/02 08:05:00"),
        (5, "Iberia", "LIS", "MAD", "2023/10/02 09:00:00", "2023/10/02 10:15:00", "2023/10/02 09:10:00"),
    ][index];

    FlightRecord {
        id: FlightId(id),
        airline,
        plane_model: "Airbus A330",
        origin: origin.parse().unwrap(),
        destination: destination.parse().unwrap(),
        schedule_departure: sched.parse().unwrap(),
        schedule_arrival: arrival.parse().unwrap(),
        real_departure: real.parse().unwrap(),
        total_seats: 250,
    }
}

/// One of [`SAMPLE_RESERVATION_COUNT`] canned reservations.
pub fn sample_reservation(index: usize) -> ReservationRecord<'static> {
    let (id, user_id, hotel_id, hotel_name, begin, end, ppn, tax, rating) = [
        (1u64, "JéssiTavares910", 1001u64, "Grand Hotel", "2023/10/01", "2023/10/05", 100u16, 10u8, Some(5)),
        (2, "DGarcia429", 1001, "Grand Hotel", "2023/10/03", "2023/10/06", 200, 0, None),
        (3, "JéssiTavares910", 2002, "Ibis Porto", "2023/11/01", "2023/11/02", 150, 20, Some(3)),
    ][index];

    ReservationRecord {
        id: ReservationId(id),
        user_id,
        hotel_id: HotelId(hotel_id),
        hotel_name,
        hotel_stars: 4,
        begin_date: begin.parse().unwrap(),
        end_date: end.parse().unwrap(),
        includes_breakfast: "t".parse().unwrap(),
        price_per_night: ppn,
        city_tax: tax,
        rating,
    }
}

/// A database pre-populated with every sample entity and the natural
/// user associations (each flight linked to user 0, each reservation to
/// its booking user).
pub fn sample_database() -> Database {
    let mut db = Database::new();

    for i in 0..SAMPLE_USER_COUNT {
        db.users_mut().add(&sample_user(i)).unwrap();
    }
    for i in 0..SAMPLE_FLIGHT_COUNT {
        let flight = sample_flight(i);
        db.flights_mut().add(&flight).unwrap();
        db.users_mut()
            .add_flight_association(sample_user(0).id, flight.id)
            .unwrap();
    }
    for i in 0..SAMPLE_RESERVATION_COUNT {
        let reservation = sample_reservation(i);
        db.reservations_mut().add(&reservation).unwrap();
        db.users_mut()
            .add_reservation_association(reservation.user_id, reservation.id)
            .unwrap();
    }

    db
}
