// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversion to domain values.
//!
//! Instants are stored as Unix milliseconds in UTC. Sub-millisecond precision
//! is dropped on write.

use diesel::prelude::*;
use shareit_domain::{
    Booking, BookingId, BookingPeriod, BookingStatus, Item, ItemId, User, UserId,
};
use time::OffsetDateTime;

use crate::diesel_schema::{bookings, items, users};
use crate::error::PersistenceError;

const NANOS_PER_MILLI: i128 = 1_000_000;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ItemRow {
    pub item_id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = items)]
pub struct NewItemRow<'a> {
    pub owner_id: i64,
    pub name: &'a str,
    pub description: &'a str,
    pub available: bool,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookingRow {
    pub booking_id: i64,
    pub item_id: i64,
    pub booker_id: i64,
    pub start_ms: i64,
    pub end_ms: i64,
    pub status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBookingRow<'a> {
    pub item_id: i64,
    pub booker_id: i64,
    pub start_ms: i64,
    pub end_ms: i64,
    pub status: &'a str,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: UserId::new(row.user_id),
            name: row.name,
            email: row.email,
        }
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            item_id: ItemId::new(row.item_id),
            owner_id: UserId::new(row.owner_id),
            name: row.name,
            description: row.description,
            available: row.available,
        }
    }
}

impl BookingRow {
    /// Combines the row with its item into a domain booking.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CorruptRow` if `item` is not the booked
    /// item, or the stored status or interval no longer satisfies the domain
    /// invariants.
    pub fn into_booking(self, item: ItemRow) -> Result<Booking, PersistenceError> {
        let booking_id: BookingId = BookingId::new(self.booking_id);
        let corrupt =
            |msg: String| PersistenceError::CorruptRow(format!("booking {booking_id}: {msg}"));

        if self.item_id != item.item_id {
            return Err(corrupt(format!(
                "joined item {} does not match item {}",
                item.item_id, self.item_id
            )));
        }

        let status: BookingStatus = self.status.parse().map_err(|e| corrupt(format!("{e}")))?;
        let start: OffsetDateTime = from_unix_millis(self.start_ms)?;
        let end: OffsetDateTime = from_unix_millis(self.end_ms)?;
        let period: BookingPeriod =
            BookingPeriod::new(start, end).map_err(|e| corrupt(format!("{e}")))?;

        Ok(Booking {
            booking_id,
            item: Item::from(item),
            booker_id: UserId::new(self.booker_id),
            period,
            status,
        })
    }
}

/// Converts an instant to whole Unix milliseconds, rounding down.
///
/// # Errors
///
/// Returns `PersistenceError::QueryFailed` if the instant is outside the
/// range representable in an `i64` of milliseconds.
pub fn to_unix_millis(instant: OffsetDateTime) -> Result<i64, PersistenceError> {
    unix_millis_bounds(instant).map(|(floor, _)| floor)
}

/// Returns the whole milliseconds at or below and at or above an instant.
///
/// Both are equal when the instant has no sub-millisecond part. Stored
/// columns hold whole milliseconds, so `column < instant` is
/// `column < ceil` and `column > instant` is `column > floor`.
///
/// # Errors
///
/// Returns `PersistenceError::QueryFailed` if the instant is outside the
/// range representable in an `i64` of milliseconds.
pub fn unix_millis_bounds(instant: OffsetDateTime) -> Result<(i64, i64), PersistenceError> {
    let nanos: i128 = instant.unix_timestamp_nanos();
    let floor: i128 = nanos.div_euclid(NANOS_PER_MILLI);
    let ceil: i128 = floor + i128::from(nanos.rem_euclid(NANOS_PER_MILLI) != 0);

    let out_of_range =
        |_| PersistenceError::QueryFailed(format!("instant {instant} is out of range"));
    Ok((
        i64::try_from(floor).map_err(out_of_range)?,
        i64::try_from(ceil).map_err(out_of_range)?,
    ))
}

/// Converts stored Unix milliseconds back to a UTC instant.
///
/// # Errors
///
/// Returns `PersistenceError::CorruptRow` if the value is out of range.
pub fn from_unix_millis(millis: i64) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * NANOS_PER_MILLI)
        .map_err(|e| PersistenceError::CorruptRow(format!("timestamp {millis}: {e}")))
}
