// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking status tracking and transition logic.
//!
//! A booking starts out `Waiting` and is decided exactly once by the item's
//! owner. Cancellation by the booker is the only way into `Canceled`.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Requested by the booker, awaiting the owner's decision
    #[default]
    Waiting,
    /// Accepted by the owner
    Approved,
    /// Declined by the owner
    Rejected,
    /// Withdrawn by the booker
    Canceled,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELED" => Ok(Self::Canceled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }

    /// Returns true once the owner has decided, or the booker has withdrawn.
    #[must_use]
    pub const fn is_decided(&self) -> bool {
        !matches!(self, Self::Waiting)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// Valid transitions are:
    /// - `Waiting` → `Approved` | `Rejected` | `Canceled`
    /// - `Approved` → `Canceled`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        let valid = matches!(
            (self, new_status),
            (
                Self::Waiting,
                Self::Approved | Self::Rejected | Self::Canceled
            ) | (Self::Approved, Self::Canceled)
        );

        if valid {
            return Ok(());
        }

        let reason = if self.is_decided() && new_status != Self::Canceled {
            "cannot change an already-decided booking"
        } else {
            "transition not permitted by booking lifecycle rules"
        };

        Err(DomainError::InvalidStatusTransition {
            from: self.as_str().to_string(),
            to: new_status.as_str().to_string(),
            reason: reason.to_string(),
        })
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
