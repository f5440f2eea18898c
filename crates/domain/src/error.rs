// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

use crate::types::{BookingId, ItemId, UserId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User does not exist.
    UserNotFound(UserId),
    /// Item does not exist.
    ///
    /// Also reported when an owner tries to book their own item, so that
    /// booking attempts never reveal who owns an item.
    ItemNotFound(ItemId),
    /// Booking does not exist.
    BookingNotFound(BookingId),
    /// Item is not flagged available for booking.
    ItemUnavailable(ItemId),
    /// Booking end is not strictly after its start.
    InvalidBookingPeriod {
        /// The requested start.
        start: OffsetDateTime,
        /// The requested end.
        end: OffsetDateTime,
    },
    /// Booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was refused.
        reason: String,
    },
    /// Only the item's owner may decide on a booking.
    NotItemOwner {
        /// The acting user.
        user_id: UserId,
        /// The booking being decided.
        booking_id: BookingId,
    },
    /// Only the booker or the item's owner may view a booking.
    NotBookingParticipant {
        /// The acting user.
        user_id: UserId,
        /// The booking being viewed.
        booking_id: BookingId,
    },
    /// Only the booker may cancel a booking.
    NotBooker {
        /// The acting user.
        user_id: UserId,
        /// The booking being canceled.
        booking_id: BookingId,
    },
    /// Booking state filter token is not recognized.
    UnknownState(String),
    /// Stored booking status is not recognized.
    InvalidBookingStatus(String),
    /// Pagination parameters are out of range.
    InvalidPagination {
        /// The requested offset.
        from: i64,
        /// The requested page size.
        size: i64,
    },
    /// User name is empty or invalid.
    InvalidUserName(String),
    /// User email is empty or invalid.
    InvalidEmail(String),
    /// Item name or description is empty or invalid.
    InvalidItem(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound(user_id) => write!(f, "User {user_id} not found"),
            Self::ItemNotFound(item_id) => write!(f, "Item {item_id} not found"),
            Self::BookingNotFound(booking_id) => write!(f, "Booking {booking_id} not found"),
            Self::ItemUnavailable(item_id) => {
                write!(f, "Item {item_id} is not available for booking")
            }
            Self::InvalidBookingPeriod { start, end } => {
                write!(
                    f,
                    "Booking end {end} must be strictly after booking start {start}"
                )
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(
                    f,
                    "Cannot change booking status from {from} to {to}: {reason}"
                )
            }
            Self::NotItemOwner {
                user_id,
                booking_id,
            } => {
                write!(
                    f,
                    "User {user_id} does not own the item of booking {booking_id}"
                )
            }
            Self::NotBookingParticipant {
                user_id,
                booking_id,
            } => {
                write!(
                    f,
                    "User {user_id} is neither the booker nor the item owner of booking {booking_id}"
                )
            }
            Self::NotBooker {
                user_id,
                booking_id,
            } => {
                write!(f, "User {user_id} is not the booker of booking {booking_id}")
            }
            Self::UnknownState(state) => write!(f, "Unknown state: {state}"),
            Self::InvalidBookingStatus(status) => write!(f, "Invalid booking status: {status}"),
            Self::InvalidPagination { from, size } => {
                write!(
                    f,
                    "Invalid pagination: from={from}, size={size}. Expected from >= 0 and size >= 1"
                )
            }
            Self::InvalidUserName(msg) => write!(f, "Invalid user name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidItem(msg) => write!(f, "Invalid item: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
