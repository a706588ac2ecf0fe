//! Property tests for catalog round-trips: anything added is readable
//! back byte-for-byte, and association counts match insertion counts.

use layover_catalog::{UserCatalog, UserRecord};
use layover_core::FlightId;
use proptest::prelude::*;

fn record<'a>(id: &'a str, name: &'a str, passport: &'a str) -> UserRecord<'a> {
    UserRecord {
        id,
        name,
        passport,
        country_code: "PT".parse().unwrap(),
        birth_date: "1980/06/15".parse().unwrap(),
        sex: "F".parse().unwrap(),
        account_status: "active".parse().unwrap(),
        account_creation: "2012/02/29 23:59:59".parse().unwrap(),
    }
}

proptest! {
    #[test]
    fn added_users_read_back_byte_equal(
        users in proptest::collection::hash_map(
            "[a-zA-Z0-9]{1,20}",
            ("[a-zA-Z ]{1,40}", "[A-Z]{2}[0-9]{6}"),
            1..50,
        ),
    ) {
        let mut catalog = UserCatalog::new();
        for (id, (name, passport)) in &users {
            catalog.add(&record(id, name, passport)).unwrap();
        }

        for (id, (name, passport)) in &users {
            let view = catalog.get_by_id(id).unwrap();
            prop_assert_eq!(view.id(), id.as_str());
            prop_assert_eq!(view.name(), name.as_str());
            prop_assert_eq!(view.passport(), passport.as_str());
        }
        prop_assert_eq!(catalog.len(), users.len());
    }

    #[test]
    fn association_count_equals_insertions(
        flights in proptest::collection::vec(any::<u64>(), 0..100),
    ) {
        let mut catalog = UserCatalog::new();
        catalog.add(&record("u1", "User One", "AA111111")).unwrap();

        for raw in &flights {
            catalog.add_flight_association("u1", FlightId(*raw)).unwrap();
        }

        let seen: Vec<_> = catalog.flights_of("u1").unwrap().collect();
        let expected: Vec<_> = flights.iter().rev().map(|raw| FlightId(*raw)).collect();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(catalog.get_by_id("u1").unwrap().flight_count(), flights.len());
    }
}
