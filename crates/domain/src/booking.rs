// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use time::OffsetDateTime;

use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use crate::types::{BookingId, Item, ItemId, UserId};

/// The time interval a booking reserves.
///
/// Invariant: `start < end`. The only constructor enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingPeriod {
    #[serde(with = "time::serde::rfc3339")]
    start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end: OffsetDateTime,
}

impl BookingPeriod {
    /// Creates a period, rejecting empty and inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingPeriod` if `start >= end`.
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidBookingPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> OffsetDateTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> OffsetDateTime {
        self.end
    }

    /// True while `now` lies within the period, both bounds inclusive.
    #[must_use]
    pub fn is_current(&self, now: OffsetDateTime) -> bool {
        self.start <= now && now <= self.end
    }

    /// True once the period ended strictly before `now`.
    #[must_use]
    pub fn is_past(&self, now: OffsetDateTime) -> bool {
        self.end < now
    }

    /// True while the period starts strictly after `now`.
    #[must_use]
    pub fn is_future(&self, now: OffsetDateTime) -> bool {
        self.start > now
    }
}

/// A booking that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    /// The item being booked.
    pub item_id: ItemId,
    /// The user requesting the booking.
    pub booker_id: UserId,
    /// The requested interval.
    pub period: BookingPeriod,
    /// Initial status, always `Waiting` when produced by the lifecycle.
    pub status: BookingStatus,
}

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    /// Assigned on creation.
    pub booking_id: BookingId,
    /// The booked item, as read at load time.
    pub item: Item,
    /// The user who requested the booking.
    pub booker_id: UserId,
    /// The reserved interval.
    pub period: BookingPeriod,
    /// Current lifecycle status.
    pub status: BookingStatus,
}

impl Booking {
    /// Returns the owner of the booked item.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.item.owner_id
    }

    /// Returns true if the user requested this booking.
    #[must_use]
    pub fn is_booked_by(&self, user_id: UserId) -> bool {
        self.booker_id == user_id
    }

    /// Returns true if the user is the booker or the item owner.
    #[must_use]
    pub fn is_participant(&self, user_id: UserId) -> bool {
        self.is_booked_by(user_id) || self.item.is_owned_by(user_id)
    }
}
