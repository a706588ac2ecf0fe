//! The hotel reservation catalog.
//!
//! Hotel names dedup heavily (one hotel, thousands of reservations) and
//! go through a deduplicating pool; booking-user identifiers are unique
//! per reservation and use a plain string pool.

use std::collections::HashMap;

use layover_core::{Date, HotelId, IncludesBreakfast, ReservationId};
use layover_pool::{DedupStringPool, ItemRef, Pool, StrRef, StringPool};

use crate::error::CatalogError;

/// Entity slots reserved per pool block.
const RESERVATION_BLOCK_CAPACITY: usize = 50_000;
/// String bytes reserved per user-id string-pool block.
const USER_ID_BLOCK_BYTES: usize = 1 << 20;
/// String bytes reserved per hotel-name pool block.
const HOTEL_NAME_BLOCK_BYTES: usize = 1 << 16;

#[derive(Clone, Copy, Debug)]
struct Reservation {
    id: ReservationId,
    user_id: StrRef,
    hotel_id: HotelId,
    hotel_name: StrRef,
    hotel_stars: u8,
    begin_date: Date,
    end_date: Date,
    includes_breakfast: IncludesBreakfast,
    price_per_night: u16,
    city_tax: u8,
    /// 1 to 5, or 0 when the guest left no rating.
    rating: u8,
    valid: bool,
}

/// Input record for [`ReservationCatalog::add`].
#[derive(Clone, Copy, Debug)]
pub struct ReservationRecord<'a> {
    /// Unique reservation identifier.
    pub id: ReservationId,
    /// Identifier of the booking user.
    pub user_id: &'a str,
    /// Hotel identifier.
    pub hotel_id: HotelId,
    /// Hotel name.
    pub hotel_name: &'a str,
    /// Hotel star rating, 1 to 5.
    pub hotel_stars: u8,
    /// Check-in date.
    pub begin_date: Date,
    /// Check-out date.
    pub end_date: Date,
    /// Whether breakfast is included.
    pub includes_breakfast: IncludesBreakfast,
    /// Price per occupied night.
    pub price_per_night: u16,
    /// City tax percentage applied to the nightly total.
    pub city_tax: u8,
    /// Guest rating, if any.
    pub rating: Option<u8>,
}

/// Borrowed view of one stored reservation.
#[derive(Clone, Copy)]
pub struct ReservationView<'a> {
    catalog: &'a ReservationCatalog,
    reservation: &'a Reservation,
}

impl<'a> ReservationView<'a> {
    /// Unique reservation identifier.
    pub fn id(&self) -> ReservationId {
        self.reservation.id
    }

    /// Identifier of the booking user.
    pub fn user_id(&self) -> &'a str {
        self.catalog.user_ids.get(self.reservation.user_id)
    }

    /// Hotel identifier.
    pub fn hotel_id(&self) -> HotelId {
        self.reservation.hotel_id
    }

    /// Hotel name.
    pub fn hotel_name(&self) -> &'a str {
        self.catalog.hotel_names.get(self.reservation.hotel_name)
    }

    /// Hotel star rating.
    pub fn hotel_stars(&self) -> u8 {
        self.reservation.hotel_stars
    }

    /// Check-in date.
    pub fn begin_date(&self) -> Date {
        self.reservation.begin_date
    }

    /// Check-out date.
    pub fn end_date(&self) -> Date {
        self.reservation.end_date
    }

    /// Whether breakfast is included.
    pub fn includes_breakfast(&self) -> IncludesBreakfast {
        self.reservation.includes_breakfast
    }

    /// Price per occupied night.
    pub fn price_per_night(&self) -> u16 {
        self.reservation.price_per_night
    }

    /// City tax percentage.
    pub fn city_tax(&self) -> u8 {
        self.reservation.city_tax
    }

    /// Guest rating, if one was left.
    pub fn rating(&self) -> Option<u8> {
        (self.reservation.rating != 0).then_some(self.reservation.rating)
    }

    /// Number of occupied nights (check-out day not counted).
    pub fn nights(&self) -> i64 {
        self.reservation.begin_date.days_until(self.reservation.end_date)
    }

    /// Total price: nightly revenue plus the city-tax surcharge on it.
    pub fn total_price(&self) -> f64 {
        let nightly = self.nights() as f64 * f64::from(self.reservation.price_per_night);
        nightly + nightly * f64::from(self.reservation.city_tax) / 100.0
    }
}

impl std::fmt::Debug for ReservationView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationView")
            .field("id", &self.reservation.id)
            .field("user_id", &self.user_id())
            .field("hotel_id", &self.reservation.hotel_id)
            .finish_non_exhaustive()
    }
}

/// Owns every reservation entity plus the identifier index.
#[derive(Clone, Debug)]
pub struct ReservationCatalog {
    reservations: Pool<Reservation>,
    user_ids: StringPool,
    hotel_names: DedupStringPool,
    index: HashMap<ReservationId, ItemRef>,
}

impl ReservationCatalog {
    /// Create an empty catalog with default block capacities.
    pub fn new() -> Self {
        Self {
            reservations: Pool::with_block_capacity(RESERVATION_BLOCK_CAPACITY),
            user_ids: StringPool::with_block_capacity(USER_ID_BLOCK_BYTES),
            hotel_names: DedupStringPool::with_block_capacity(HOTEL_NAME_BLOCK_BYTES),
            index: HashMap::new(),
        }
    }

    /// Copy `record` into the catalog and index it by identifier.
    ///
    /// Same contract as `UserCatalog::add`: intern failure tombstones
    /// the pooled slot, a duplicate identifier is logged and its
    /// previous entity tombstoned.
    pub fn add(&mut self, record: &ReservationRecord<'_>) -> Result<(), CatalogError> {
        let slot = self.reservations.put(Reservation {
            id: record.id,
            user_id: StrRef::EMPTY,
            hotel_id: record.hotel_id,
            hotel_name: StrRef::EMPTY,
            hotel_stars: record.hotel_stars,
            begin_date: record.begin_date,
            end_date: record.end_date,
            includes_breakfast: record.includes_breakfast,
            price_per_night: record.price_per_night,
            city_tax: record.city_tax,
            rating: record.rating.unwrap_or(0),
            valid: true,
        })?;

        let user_id = match self.user_ids.put(record.user_id) {
            Ok(handle) => handle,
            Err(source) => return Err(self.tombstone(slot, source)),
        };
        let hotel_name = match self.hotel_names.put(record.hotel_name) {
            Ok(handle) => handle,
            Err(source) => return Err(self.tombstone(slot, source)),
        };

        let reservation = self.reservations.get_mut(slot);
        reservation.user_id = user_id;
        reservation.hotel_name = hotel_name;

        if let Some(previous) = self.index.insert(record.id, slot) {
            tracing::warn!(id = %record.id, "duplicate reservation id, replacing previous entry");
            self.reservations.get_mut(previous).valid = false;
        }
        Ok(())
    }

    fn tombstone(&mut self, slot: ItemRef, source: layover_pool::PoolError) -> CatalogError {
        self.reservations.get_mut(slot).valid = false;
        source.into()
    }

    /// Look up a reservation by identifier. Tombstoned entries are
    /// misses.
    pub fn get_by_id(&self, id: ReservationId) -> Option<ReservationView<'_>> {
        let reservation = self.reservations.get(*self.index.get(&id)?);
        reservation.valid.then_some(ReservationView {
            catalog: self,
            reservation,
        })
    }

    /// Iterate every live reservation in storage order.
    pub fn iter(&self) -> impl Iterator<Item = ReservationView<'_>> {
        self.reservations
            .iter()
            .filter(|reservation| reservation.valid)
            .map(move |reservation| ReservationView {
                catalog: self,
                reservation,
            })
    }

    /// Number of live reservations.
    pub fn len(&self) -> usize {
        self.index
            .values()
            .filter(|slot| self.reservations.get(**slot).valid)
            .count()
    }

    /// Whether the catalog holds no live reservations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserved storage across the backing pools, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.reservations.memory_bytes()
            + self.user_ids.memory_bytes()
            + self.hotel_names.memory_bytes()
    }
}

impl Default for ReservationCatalog {
    fn default() -> Self {
        Self::new()
    }
}
