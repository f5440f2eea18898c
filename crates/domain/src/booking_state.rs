// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Symbolic filters for booking lists.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A category narrowing a booking list by time window or status.
///
/// Time-based filters are evaluated against the wall-clock time of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingState {
    /// Every booking regardless of status or time.
    #[default]
    All,
    /// Bookings whose interval contains now.
    Current,
    /// Bookings that ended before now.
    Past,
    /// Bookings that start after now.
    Future,
    /// Bookings awaiting the owner's decision.
    Waiting,
    /// Bookings the owner declined.
    Rejected,
}

impl BookingState {
    /// All filters, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Current,
        Self::Past,
        Self::Future,
        Self::Waiting,
        Self::Rejected,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Current => "CURRENT",
            Self::Past => "PAST",
            Self::Future => "FUTURE",
            Self::Waiting => "WAITING",
            Self::Rejected => "REJECTED",
        }
    }
}

impl FromStr for BookingState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::UnknownState(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The side of a booking a principal lists from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingRole {
    /// Bookings the principal requested.
    Booker,
    /// Bookings on items the principal owns.
    Owner,
}

impl BookingRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Booker => "booker",
            Self::Owner => "owner",
        }
    }
}

impl std::fmt::Display for BookingRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
