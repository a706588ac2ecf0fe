//! The user catalog.
//!
//! Users are the only entities keyed by an arbitrary string identifier,
//! and the only ones carrying association lists: every flight and
//! reservation naming a user is linked back onto that user's per-entity
//! list so "what did this user book" is answerable without a scan.

use std::collections::HashMap;

use layover_core::{AccountStatus, CountryCode, Date, DateTime, FlightId, ReservationId, Sex};
use layover_pool::{ItemRef, ListHead, ListPool, Pool, StrRef, StringPool};

use crate::error::CatalogError;

/// Entity slots reserved per pool block.
const USER_BLOCK_CAPACITY: usize = 50_000;
/// String bytes reserved per string-pool block.
const STRING_BLOCK_BYTES: usize = 1 << 20;
/// List nodes reserved per association-pool block.
const ASSOCIATION_BLOCK_CAPACITY: usize = 100_000;

/// Stored user entity. String fields are handles into the catalog's
/// string pool; association lists live in the catalog's list pools.
#[derive(Clone, Copy, Debug)]
struct User {
    id: StrRef,
    name: StrRef,
    passport: StrRef,
    country_code: CountryCode,
    birth_date: Date,
    sex: Sex,
    account_status: AccountStatus,
    account_creation: DateTime,
    flights: ListHead,
    reservations: ListHead,
    valid: bool,
}

/// Input record for [`UserCatalog::add`]. Borrows its string fields from
/// the caller; `add` copies them into pool-owned storage.
#[derive(Clone, Copy, Debug)]
pub struct UserRecord<'a> {
    /// Unique user identifier.
    pub id: &'a str,
    /// Full name.
    pub name: &'a str,
    /// Passport number.
    pub passport: &'a str,
    /// Country of residence.
    pub country_code: CountryCode,
    /// Date of birth.
    pub birth_date: Date,
    /// Declared sex.
    pub sex: Sex,
    /// Whether the account is active.
    pub account_status: AccountStatus,
    /// When the account was created.
    pub account_creation: DateTime,
}

/// Borrowed view of one stored user, resolving string handles against
/// the owning catalog's pools.
#[derive(Clone, Copy)]
pub struct UserView<'a> {
    catalog: &'a UserCatalog,
    user: &'a User,
}

impl<'a> UserView<'a> {
    /// Unique user identifier.
    pub fn id(&self) -> &'a str {
        self.catalog.strings.get(self.user.id)
    }

    /// Full name.
    pub fn name(&self) -> &'a str {
        self.catalog.strings.get(self.user.name)
    }

    /// Passport number.
    pub fn passport(&self) -> &'a str {
        self.catalog.strings.get(self.user.passport)
    }

    /// Country of residence.
    pub fn country_code(&self) -> CountryCode {
        self.user.country_code
    }

    /// Date of birth.
    pub fn birth_date(&self) -> Date {
        self.user.birth_date
    }

    /// Declared sex.
    pub fn sex(&self) -> Sex {
        self.user.sex
    }

    /// Whether the account is active.
    pub fn account_status(&self) -> AccountStatus {
        self.user.account_status
    }

    /// When the account was created.
    pub fn account_creation(&self) -> DateTime {
        self.user.account_creation
    }

    /// Shorthand for `account_status() == AccountStatus::Active`.
    pub fn is_active(&self) -> bool {
        self.user.account_status == AccountStatus::Active
    }

    /// Flights associated with this user, most recently added first.
    pub fn flights(&self) -> impl Iterator<Item = FlightId> + 'a {
        self.catalog.flight_lists.iter(self.user.flights)
    }

    /// Reservations associated with this user, most recently added
    /// first.
    pub fn reservations(&self) -> impl Iterator<Item = ReservationId> + 'a {
        self.catalog.reservation_lists.iter(self.user.reservations)
    }

    /// Number of associated flights.
    pub fn flight_count(&self) -> usize {
        self.catalog.flight_lists.len(self.user.flights)
    }

    /// Number of associated reservations.
    pub fn reservation_count(&self) -> usize {
        self.catalog.reservation_lists.len(self.user.reservations)
    }
}

impl std::fmt::Debug for UserView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserView")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("account_status", &self.user.account_status)
            .finish_non_exhaustive()
    }
}

/// Owns every user entity plus the identifier index and both
/// association-list pools.
#[derive(Clone, Debug)]
pub struct UserCatalog {
    users: Pool<User>,
    strings: StringPool,
    index: HashMap<Box<str>, ItemRef>,
    flight_lists: ListPool<FlightId>,
    reservation_lists: ListPool<ReservationId>,
}

impl UserCatalog {
    /// Create an empty catalog with default block capacities.
    pub fn new() -> Self {
        Self {
            users: Pool::with_block_capacity(USER_BLOCK_CAPACITY),
            strings: StringPool::with_block_capacity(STRING_BLOCK_BYTES),
            index: HashMap::new(),
            flight_lists: ListPool::with_block_capacity(ASSOCIATION_BLOCK_CAPACITY),
            reservation_lists: ListPool::with_block_capacity(ASSOCIATION_BLOCK_CAPACITY),
        }
    }

    /// Copy `record` into the catalog and index it by identifier.
    ///
    /// The entity struct is pooled first and its strings interned
    /// afterwards; if interning fails partway the already-pooled slot is
    /// tombstoned in place and the error returned — the slot leaks, by
    /// the pool's no-per-item-free contract. A duplicate identifier is
    /// logged and overwrites the index entry; the displaced entity is
    /// tombstoned.
    pub fn add(&mut self, record: &UserRecord<'_>) -> Result<(), CatalogError> {
        let slot = self.users.put(User {
            id: StrRef::EMPTY,
            name: StrRef::EMPTY,
            passport: StrRef::EMPTY,
            country_code: record.country_code,
            birth_date: record.birth_date,
            sex: record.sex,
            account_status: record.account_status,
            account_creation: record.account_creation,
            flights: ListHead::EMPTY,
            reservations: ListHead::EMPTY,
            valid: true,
        })?;

        let id = self.intern(slot, record.id)?;
        let name = self.intern(slot, record.name)?;
        let passport = self.intern(slot, record.passport)?;

        let user = self.users.get_mut(slot);
        user.id = id;
        user.name = name;
        user.passport = passport;

        if let Some(previous) = self.index.insert(record.id.into(), slot) {
            tracing::warn!(id = record.id, "duplicate user id, replacing previous entry");
            self.users.get_mut(previous).valid = false;
        }
        Ok(())
    }

    /// Intern one string, tombstoning `slot` on failure.
    fn intern(&mut self, slot: ItemRef, value: &str) -> Result<StrRef, CatalogError> {
        match self.strings.put(value) {
            Ok(handle) => Ok(handle),
            Err(source) => {
                self.users.get_mut(slot).valid = false;
                Err(source.into())
            }
        }
    }

    /// Look up a user by identifier. Tombstoned entries are misses.
    pub fn get_by_id(&self, id: &str) -> Option<UserView<'_>> {
        let user = self.users.get(*self.index.get(id)?);
        user.valid.then_some(UserView {
            catalog: self,
            user,
        })
    }

    /// Iterate every live user in storage order.
    pub fn iter(&self) -> impl Iterator<Item = UserView<'_>> {
        self.users
            .iter()
            .filter(|user| user.valid)
            .map(move |user| UserView {
                catalog: self,
                user,
            })
    }

    /// Prepend `flight` to the user's flight-association list.
    ///
    /// Fails with [`CatalogError::UserNotFound`] for an unknown id.
    pub fn add_flight_association(
        &mut self,
        id: &str,
        flight: FlightId,
    ) -> Result<(), CatalogError> {
        let slot = self.lookup_slot(id)?;
        let head = self.users.get(slot).flights;
        let head = self.flight_lists.prepend(head, flight)?;
        self.users.get_mut(slot).flights = head;
        Ok(())
    }

    /// Prepend `reservation` to the user's reservation-association list.
    ///
    /// Fails with [`CatalogError::UserNotFound`] for an unknown id.
    pub fn add_reservation_association(
        &mut self,
        id: &str,
        reservation: ReservationId,
    ) -> Result<(), CatalogError> {
        let slot = self.lookup_slot(id)?;
        let head = self.users.get(slot).reservations;
        let head = self.reservation_lists.prepend(head, reservation)?;
        self.users.get_mut(slot).reservations = head;
        Ok(())
    }

    fn lookup_slot(&self, id: &str) -> Result<ItemRef, CatalogError> {
        match self.index.get(id) {
            Some(slot) if self.users.get(*slot).valid => Ok(*slot),
            _ => Err(CatalogError::UserNotFound { id: id.to_owned() }),
        }
    }

    /// Flights associated with the given user, most recently added
    /// first. `None` for an unknown (or tombstoned) id.
    pub fn flights_of(&self, id: &str) -> Option<impl Iterator<Item = FlightId> + '_> {
        self.get_by_id(id).map(|view| view.flights())
    }

    /// Reservations associated with the given user, most recently added
    /// first. `None` for an unknown (or tombstoned) id.
    pub fn reservations_of(&self, id: &str) -> Option<impl Iterator<Item = ReservationId> + '_> {
        self.get_by_id(id).map(|view| view.reservations())
    }

    /// Number of live users.
    pub fn len(&self) -> usize {
        self.index
            .values()
            .filter(|slot| self.users.get(**slot).valid)
            .count()
    }

    /// Whether the catalog holds no live users.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserved storage across every backing pool, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.users.memory_bytes()
            + self.strings.memory_bytes()
            + self.flight_lists.memory_bytes()
            + self.reservation_lists.memory_bytes()
    }
}

impl Default for UserCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(id: &'a str, name: &'a str) -> UserRecord<'a> {
        UserRecord {
            id,
            name,
            passport: "ZZ000000",
            country_code: "PT".parse().unwrap(),
            birth_date: "1990/05/20".parse().unwrap(),
            sex: Sex::Female,
            account_status: AccountStatus::Active,
            account_creation: "2015/01/01 10:00:00".parse().unwrap(),
        }
    }

    #[test]
    fn add_then_get_round_trips_all_fields() {
        let mut catalog = UserCatalog::new();
        let input = record("JéssiTavares910", "Jéssica Tavares");
        catalog.add(&input).unwrap();

        let view = catalog.get_by_id("JéssiTavares910").unwrap();
        assert_eq!(view.id(), input.id);
        assert_eq!(view.name(), input.name);
        assert_eq!(view.passport(), input.passport);
        assert_eq!(view.country_code(), input.country_code);
        assert_eq!(view.birth_date(), input.birth_date);
        assert_eq!(view.sex(), input.sex);
        assert_eq!(view.account_status(), input.account_status);
        assert_eq!(view.account_creation(), input.account_creation);
        assert!(view.is_active());
    }

    #[test]
    fn unknown_id_is_a_miss_not_an_error() {
        let catalog = UserCatalog::new();
        assert!(catalog.get_by_id("nobody").is_none());
    }

    #[test]
    fn duplicate_id_overwrites_and_tombstones_previous() {
        let mut catalog = UserCatalog::new();
        catalog.add(&record("u1", "First")).unwrap();
        catalog.add(&record("u1", "Second")).unwrap();

        assert_eq!(catalog.get_by_id("u1").unwrap().name(), "Second");
        // Only the replacement is live.
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.iter().count(), 1);
    }

    #[test]
    fn associations_yield_most_recent_first() {
        let mut catalog = UserCatalog::new();
        catalog.add(&record("u1", "One")).unwrap();

        for raw in [1u64, 2, 3] {
            catalog
                .add_flight_association("u1", FlightId(raw))
                .unwrap();
        }
        let flights: Vec<_> = catalog.flights_of("u1").unwrap().collect();
        assert_eq!(
            flights,
            vec![FlightId(3), FlightId(2), FlightId(1)]
        );
        assert_eq!(catalog.get_by_id("u1").unwrap().flight_count(), 3);
    }

    #[test]
    fn association_to_unknown_user_fails() {
        let mut catalog = UserCatalog::new();
        let err = catalog
            .add_flight_association("ghost", FlightId(1))
            .unwrap_err();
        assert!(matches!(err, CatalogError::UserNotFound { .. }));
    }

    #[test]
    fn clone_is_deep() {
        let mut catalog = UserCatalog::new();
        catalog.add(&record("u1", "One")).unwrap();

        let mut copy = catalog.clone();
        copy.add(&record("u2", "Two")).unwrap();
        copy.add_flight_association("u1", FlightId(9)).unwrap();

        assert!(catalog.get_by_id("u2").is_none());
        assert_eq!(catalog.get_by_id("u1").unwrap().flight_count(), 0);
        assert_eq!(copy.get_by_id("u1").unwrap().flight_count(), 1);
    }
}
