// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::{BookingId, ItemId};
use time::OffsetDateTime;

/// A command represents a booking mutation requested by an actor, as data only.
///
/// The acting user is supplied alongside the command, never inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Request a booking of an item.
    CreateBooking {
        /// The item to book.
        item_id: ItemId,
        /// Requested start.
        start: OffsetDateTime,
        /// Requested end.
        end: OffsetDateTime,
    },
    /// Approve or reject a waiting booking.
    SetApproval {
        /// The booking to decide.
        booking_id: BookingId,
        /// `true` approves, `false` rejects.
        approved: bool,
    },
    /// Withdraw a booking.
    CancelBooking {
        /// The booking to withdraw.
        booking_id: BookingId,
    },
}

impl Command {
    /// Returns a stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateBooking { .. } => "CreateBooking",
            Self::SetApproval { .. } => "SetApproval",
            Self::CancelBooking { .. } => "CancelBooking",
        }
    }
}
