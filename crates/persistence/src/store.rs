// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use shareit::{BookingRepository, CoreError, DirectoryLookup, QueryCategory};
use shareit_domain::{
    Booking, BookingId, BookingRole, BookingStatus, DomainError, Item, ItemId, NewBooking, Page,
    User, UserId,
};

use crate::error::PersistenceError;
use crate::{mutations, queries};

/// The storage ports over a connection that is inside a transaction.
///
/// Obtained through [`crate::Persistence::transaction`].
pub struct SqliteStore<'conn> {
    conn: &'conn mut SqliteConnection,
}

impl<'conn> SqliteStore<'conn> {
    pub(crate) const fn new(conn: &'conn mut SqliteConnection) -> Self {
        Self { conn }
    }
}

impl DirectoryLookup for SqliteStore<'_> {
    fn find_user(&mut self, user_id: UserId) -> Result<Option<User>, CoreError> {
        Ok(queries::directory::find_user(self.conn, user_id)?)
    }

    fn find_item(&mut self, item_id: ItemId) -> Result<Option<Item>, CoreError> {
        Ok(queries::directory::find_item(self.conn, item_id)?)
    }
}

impl BookingRepository for SqliteStore<'_> {
    fn save_booking(&mut self, booking: &NewBooking) -> Result<Booking, CoreError> {
        Ok(mutations::bookings::insert_booking(self.conn, booking)?)
    }

    fn update_booking_status(
        &mut self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, CoreError> {
        match mutations::bookings::update_booking_status(self.conn, booking_id, status) {
            Ok(booking) => Ok(booking),
            Err(PersistenceError::NotFound(_)) => Err(CoreError::DomainViolation(
                DomainError::BookingNotFound(booking_id),
            )),
            Err(err) => Err(err.into()),
        }
    }

    fn find_booking(&mut self, booking_id: BookingId) -> Result<Option<Booking>, CoreError> {
        Ok(queries::bookings::find_booking(self.conn, booking_id)?)
    }

    fn find_bookings(
        &mut self,
        role: BookingRole,
        principal: UserId,
        category: QueryCategory,
        page: Page,
    ) -> Result<Vec<Booking>, CoreError> {
        Ok(queries::bookings::find_bookings(
            self.conn, role, principal, category, page,
        )?)
    }
}
