// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage seams consumed by the booking operations.
//!
//! Absence is reported as `Ok(None)`; the operations decide which absence is
//! a `NotFound` rule violation. `Err` is reserved for storage failures.

use shareit_domain::{
    Booking, BookingId, BookingRole, BookingStatus, Item, ItemId, NewBooking, Page, User, UserId,
};

use crate::error::CoreError;
use crate::query::QueryCategory;

/// Read access to registered users and listed items.
pub trait DirectoryLookup {
    /// Looks up a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if storage cannot be read.
    fn find_user(&mut self, user_id: UserId) -> Result<Option<User>, CoreError>;

    /// Looks up an item by identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if storage cannot be read.
    fn find_item(&mut self, item_id: ItemId) -> Result<Option<Item>, CoreError>;
}

/// Persistence for bookings.
pub trait BookingRepository {
    /// Stores a new booking and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the booking cannot be written.
    fn save_booking(&mut self, booking: &NewBooking) -> Result<Booking, CoreError>;

    /// Overwrites the status of an existing booking.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the booking cannot be written, or
    /// `DomainError::BookingNotFound` if it vanished since it was read.
    fn update_booking_status(
        &mut self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, CoreError>;

    /// Looks up a booking by identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if storage cannot be read.
    fn find_booking(&mut self, booking_id: BookingId) -> Result<Option<Booking>, CoreError>;

    /// Returns one page of the bookings seen from `role` by `principal`.
    ///
    /// Results are ordered by start descending, then by identifier descending.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if storage cannot be read.
    fn find_bookings(
        &mut self,
        role: BookingRole,
        principal: UserId,
        category: QueryCategory,
        page: Page,
    ) -> Result<Vec<Booking>, CoreError>;
}
