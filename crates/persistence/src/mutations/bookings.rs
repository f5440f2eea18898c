// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit_domain::{Booking, BookingId, BookingStatus, NewBooking};
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewBookingRow, to_unix_millis};
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use crate::queries::bookings::find_booking;

/// Inserts a booking and returns it with its item.
///
/// # Errors
///
/// Returns an error if the insert fails, including foreign key violations
/// for unknown items or bookers.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    booking: &NewBooking,
) -> Result<Booking, PersistenceError> {
    let row = NewBookingRow {
        item_id: booking.item_id.value(),
        booker_id: booking.booker_id.value(),
        start_ms: to_unix_millis(booking.period.start())?,
        end_ms: to_unix_millis(booking.period.end())?,
        status: booking.status.as_str(),
    };

    diesel::insert_into(bookings::table)
        .values(&row)
        .execute(conn)?;

    let booking_id: BookingId = BookingId::new(get_last_insert_rowid(conn)?);
    info!(
        booking_id = booking_id.value(),
        item_id = row.item_id,
        booker_id = row.booker_id,
        "Booking created"
    );

    find_booking(conn, booking_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Booking {booking_id}")))
}

/// Overwrites the status of a booking and returns the updated booking.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no booking has this ID.
pub fn update_booking_status(
    conn: &mut SqliteConnection,
    booking_id: BookingId,
    status: BookingStatus,
) -> Result<Booking, PersistenceError> {
    let updated: usize = diesel::update(bookings::table)
        .filter(bookings::booking_id.eq(booking_id.value()))
        .set(bookings::status.eq(status.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Booking {booking_id}")));
    }

    info!(
        booking_id = booking_id.value(),
        status = status.as_str(),
        "Booking status updated"
    );

    find_booking(conn, booking_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Booking {booking_id}")))
}
