// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::{
    Booking, BookingRole, BookingState, BookingStatus, DomainError, Page, UserId,
};
use time::OffsetDateTime;

use crate::error::CoreError;
use crate::ports::{BookingRepository, DirectoryLookup};

/// A resolved booking filter, ready to be handed to a repository.
///
/// Time-based categories carry the instant they are evaluated against, so a
/// single request sees one consistent "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCategory {
    /// No filtering.
    All,
    /// `start <= now <= end`.
    Current {
        /// Evaluation instant.
        now: OffsetDateTime,
    },
    /// `end < now`.
    Past {
        /// Evaluation instant.
        now: OffsetDateTime,
    },
    /// `start > now`.
    Future {
        /// Evaluation instant.
        now: OffsetDateTime,
    },
    /// Status is `Waiting`.
    Waiting,
    /// Status is `Rejected`.
    Rejected,
}

impl QueryCategory {
    /// Binds a symbolic state filter to an evaluation instant.
    #[must_use]
    pub const fn resolve(state: BookingState, now: OffsetDateTime) -> Self {
        match state {
            BookingState::All => Self::All,
            BookingState::Current => Self::Current { now },
            BookingState::Past => Self::Past { now },
            BookingState::Future => Self::Future { now },
            BookingState::Waiting => Self::Waiting,
            BookingState::Rejected => Self::Rejected,
        }
    }

    /// Returns true if the booking falls in this category.
    ///
    /// Storage adapters translate categories into their own query language;
    /// this is the reference predicate they must agree with.
    #[must_use]
    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            Self::All => true,
            Self::Current { now } => booking.period.is_current(*now),
            Self::Past { now } => booking.period.is_past(*now),
            Self::Future { now } => booking.period.is_future(*now),
            Self::Waiting => booking.status == BookingStatus::Waiting,
            Self::Rejected => booking.status == BookingStatus::Rejected,
        }
    }
}

/// Lists one page of a principal's bookings.
///
/// # Arguments
///
/// * `store` - The storage ports
/// * `principal` - The user whose bookings are listed
/// * `role` - Whether to list bookings the principal made or received
/// * `state` - The symbolic filter
/// * `page` - The page to return
/// * `now` - The instant time-based filters are evaluated against
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not a registered user
/// - A port fails
pub fn list_bookings<S>(
    store: &mut S,
    principal: UserId,
    role: BookingRole,
    state: BookingState,
    page: Page,
    now: OffsetDateTime,
) -> Result<Vec<Booking>, CoreError>
where
    S: BookingRepository + DirectoryLookup,
{
    if store.find_user(principal)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::UserNotFound(
            principal,
        )));
    }

    let category: QueryCategory = QueryCategory::resolve(state, now);
    store.find_bookings(role, principal, category, page)
}
