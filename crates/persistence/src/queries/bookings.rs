// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.
//!
//! Every booking is loaded together with its item through an inner join, so
//! the owner is always read in the same statement as the booking.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit::QueryCategory;
use shareit_domain::{Booking, BookingId, BookingRole, BookingStatus, Page, UserId};
use tracing::debug;

use crate::data_models::{BookingRow, ItemRow, unix_millis_bounds};
use crate::diesel_schema::{bookings, items};
use crate::error::PersistenceError;

/// Retrieves a booking and its item by booking ID.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is corrupt.
pub fn find_booking(
    conn: &mut SqliteConnection,
    booking_id: BookingId,
) -> Result<Option<Booking>, PersistenceError> {
    debug!(booking_id = booking_id.value(), "Looking up booking");

    let row: Option<(BookingRow, ItemRow)> = bookings::table
        .inner_join(items::table)
        .filter(bookings::booking_id.eq(booking_id.value()))
        .select((BookingRow::as_select(), ItemRow::as_select()))
        .first(conn)
        .optional()?;

    row.map(|(booking, item)| booking.into_booking(item))
        .transpose()
}

/// Retrieves one page of bookings seen from `role` by `principal`.
///
/// Each category translates to a single `WHERE` clause; ordering is
/// `start_ms DESC, booking_id DESC`.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn find_bookings(
    conn: &mut SqliteConnection,
    role: BookingRole,
    principal: UserId,
    category: QueryCategory,
    page: Page,
) -> Result<Vec<Booking>, PersistenceError> {
    debug!(
        role = %role,
        principal = principal.value(),
        ?category,
        page = page.index(),
        size = page.size(),
        "Listing bookings"
    );

    let mut query = bookings::table
        .inner_join(items::table)
        .select((BookingRow::as_select(), ItemRow::as_select()))
        .into_boxed();

    query = match role {
        BookingRole::Booker => query.filter(bookings::booker_id.eq(principal.value())),
        BookingRole::Owner => query.filter(items::owner_id.eq(principal.value())),
    };

    query = match category {
        QueryCategory::All => query,
        QueryCategory::Current { now } => {
            let (now_floor, now_ceil) = unix_millis_bounds(now)?;
            query
                .filter(bookings::start_ms.le(now_floor))
                .filter(bookings::end_ms.ge(now_ceil))
        }
        QueryCategory::Past { now } => {
            let (_, now_ceil) = unix_millis_bounds(now)?;
            query.filter(bookings::end_ms.lt(now_ceil))
        }
        QueryCategory::Future { now } => {
            let (now_floor, _) = unix_millis_bounds(now)?;
            query.filter(bookings::start_ms.gt(now_floor))
        }
        QueryCategory::Waiting => {
            query.filter(bookings::status.eq(BookingStatus::Waiting.as_str()))
        }
        QueryCategory::Rejected => {
            query.filter(bookings::status.eq(BookingStatus::Rejected.as_str()))
        }
    };

    let rows: Vec<(BookingRow, ItemRow)> = query
        .order((bookings::start_ms.desc(), bookings::booking_id.desc()))
        .limit(page.size())
        .offset(page.offset())
        .load(conn)?;

    rows.into_iter()
        .map(|(booking, item)| booking.into_booking(item))
        .collect()
}
