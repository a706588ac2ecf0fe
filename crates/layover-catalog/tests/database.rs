//! Database-level integration tests: cross-catalog loading, association
//! integrity and deep-clone independence.

use layover_catalog::{Database, UserRecord};
use layover_core::{AccountStatus, FlightId, Sex};
use layover_test_utils::{
    sample_database, sample_user, SAMPLE_FLIGHT_COUNT, SAMPLE_RESERVATION_COUNT,
};

fn user(id: &str) -> UserRecord<'_> {
    UserRecord {
        id,
        name: "Some Name",
        passport: "XX123456",
        country_code: "PT".parse().unwrap(),
        birth_date: "1990/01/01".parse().unwrap(),
        sex: Sex::Male,
        account_status: AccountStatus::Active,
        account_creation: "2010/06/15 12:00:00".parse().unwrap(),
    }
}

#[test]
fn sample_database_is_fully_indexed() {
    let db = sample_database();

    assert_eq!(db.users().len(), 3);
    assert_eq!(db.flights().len(), 5);
    assert_eq!(db.reservations().len(), 3);

    let booker = db.users().get_by_id(sample_user(0).id).unwrap();
    assert_eq!(booker.flight_count(), 5);
    assert_eq!(booker.reservation_count(), 2);
}

#[test]
fn association_count_matches_insertions() {
    let mut db = Database::new();
    db.users_mut().add(&user("U1")).unwrap();
    db.users_mut().add(&user("U2")).unwrap();

    let flights = [FlightId(10), FlightId(20), FlightId(30)];
    for f in flights {
        db.users_mut().add_flight_association("U1", f).unwrap();
    }

    let seen: Vec<_> = db.users().flights_of("U1").unwrap().collect();
    assert_eq!(seen, vec![FlightId(30), FlightId(20), FlightId(10)]);
    assert_eq!(db.users().flights_of("U2").unwrap().count(), 0);
}

#[test]
fn clone_sees_original_state_but_diverges_after() {
    let mut db = Database::new();
    db.users_mut().add(&user("U1")).unwrap();
    db.users_mut().add(&user("U2")).unwrap();
    for f in [FlightId(1), FlightId(2), FlightId(3)] {
        db.users_mut().add_flight_association("U1", f).unwrap();
    }

    let mut copy = db.clone();
    copy.users_mut()
        .add_flight_association("U1", FlightId(4))
        .unwrap();

    assert_eq!(db.users().get_by_id("U1").unwrap().flight_count(), 3);
    assert_eq!(copy.users().get_by_id("U1").unwrap().flight_count(), 4);
}

#[test]
fn mutating_clone_does_not_leak_into_original() {
    let db = sample_database();
    let mut copy = db.clone();

    copy.users_mut().add(&user("brand-new")).unwrap();
    let mut extra = layover_test_utils::sample_reservation(0);
    extra.id = layover_core::ReservationId(99);
    copy.reservations_mut().add(&extra).unwrap();

    assert!(db.users().get_by_id("brand-new").is_none());
    assert!(db
        .reservations()
        .get_by_id(layover_core::ReservationId(99))
        .is_none());
    assert!(copy.users().get_by_id("brand-new").is_some());
    assert_eq!(copy.reservations().len(), SAMPLE_RESERVATION_COUNT + 1);
}

#[test]
fn mutating_original_does_not_leak_into_clone() {
    let mut db = sample_database();
    let copy = db.clone();

    db.users_mut().add(&user("late-arrival")).unwrap();
    db.users_mut()
        .add_flight_association(sample_user(0).id, FlightId(77))
        .unwrap();

    assert!(copy.users().get_by_id("late-arrival").is_none());
    let booker = copy.users().get_by_id(sample_user(0).id).unwrap();
    assert_eq!(booker.flight_count(), SAMPLE_FLIGHT_COUNT);

    let booker = db.users().get_by_id(sample_user(0).id).unwrap();
    assert_eq!(booker.flight_count(), SAMPLE_FLIGHT_COUNT + 1);
}

#[test]
fn reservation_views_resolve_against_their_own_database() {
    let db = sample_database();
    let copy = db.clone();

    for (a, b) in db.reservations().iter().zip(copy.reservations().iter()) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.user_id(), b.user_id());
        assert_eq!(a.hotel_name(), b.hotel_name());
        assert_eq!(a.total_price(), b.total_price());
    }
}
