//! The [`Database`] aggregate.

use crate::flight::FlightCatalog;
use crate::reservation::ReservationCatalog;
use crate::user::UserCatalog;

/// Owns one catalog of each entity kind.
///
/// `Clone` is deep: the clone's pools, indexes and association lists
/// are fully independent of the original's, so an interactive session
/// and a batch run can each mutate their own copy.
#[derive(Clone, Debug, Default)]
pub struct Database {
    users: UserCatalog,
    flights: FlightCatalog,
    reservations: ReservationCatalog,
}

impl Database {
    /// Create a database with three empty catalogs.
    pub fn new() -> Self {
        Self::default()
    }

    /// The user catalog.
    pub fn users(&self) -> &UserCatalog {
        &self.users
    }

    /// The user catalog, mutably.
    pub fn users_mut(&mut self) -> &mut UserCatalog {
        &mut self.users
    }

    /// The flight catalog.
    pub fn flights(&self) -> &FlightCatalog {
        &self.flights
    }

    /// The flight catalog, mutably.
    pub fn flights_mut(&mut self) -> &mut FlightCatalog {
        &mut self.flights
    }

    /// The reservation catalog.
    pub fn reservations(&self) -> &ReservationCatalog {
        &self.reservations
    }

    /// The reservation catalog, mutably.
    pub fn reservations_mut(&mut self) -> &mut ReservationCatalog {
        &mut self.reservations
    }

    /// Reserved pool storage across all three catalogs, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.users.memory_bytes() + self.flights.memory_bytes() + self.reservations.memory_bytes()
    }
}
