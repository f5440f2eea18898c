// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking;
mod booking_state;
mod booking_status;
mod error;
mod page;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking::{Booking, BookingPeriod, NewBooking};
pub use booking_state::{BookingRole, BookingState};
pub use booking_status::BookingStatus;
pub use error::DomainError;
pub use page::{DEFAULT_PAGE_SIZE, Page};
pub use types::{BookingId, Item, ItemId, User, UserId};
pub use validation::{validate_item_fields, validate_user_fields};
