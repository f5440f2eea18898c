// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shareit::CoreError;
use shareit_domain::DomainError;
use shareit_persistence::PersistenceError;

use crate::auth::AuthError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller could not be identified.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The write conflicts with existing data.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::AuthenticationFailed {
            reason: err.to_string(),
        }
    }
}

fn rule_violation(rule: &str, err: &DomainError) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: String::from(rule),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UserNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: err.to_string(),
        },
        DomainError::ItemNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Item"),
            message: err.to_string(),
        },
        DomainError::BookingNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: err.to_string(),
        },
        DomainError::ItemUnavailable(_) => rule_violation("item_available", &err),
        DomainError::InvalidBookingPeriod { .. } => rule_violation("booking_period", &err),
        DomainError::InvalidStatusTransition { .. } => rule_violation("status_transition", &err),
        DomainError::NotItemOwner { .. } => rule_violation("item_owner_decides", &err),
        DomainError::NotBookingParticipant { .. } => {
            rule_violation("booking_participant_reads", &err)
        }
        DomainError::NotBooker { .. } => rule_violation("booker_cancels", &err),
        DomainError::UnknownState(_) => ApiError::InvalidInput {
            field: String::from("state"),
            message: err.to_string(),
        },
        DomainError::InvalidPagination { .. } => ApiError::InvalidInput {
            field: String::from("from/size"),
            message: err.to_string(),
        },
        DomainError::InvalidUserName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg,
        },
        DomainError::InvalidItem(msg) => ApiError::InvalidInput {
            field: String::from("item"),
            message: msg,
        },
        // Only reachable through a stored row, never through request input.
        DomainError::InvalidBookingStatus(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal { message: msg },
    }
}

/// Translates a persistence error raised by a user or item operation.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(msg) => {
            let resource_type: String = msg
                .split_whitespace()
                .next()
                .unwrap_or("Resource")
                .to_string();
            ApiError::ResourceNotFound {
                resource_type,
                message: msg,
            }
        }
        PersistenceError::UniqueViolation(msg) => ApiError::Conflict { message: msg },
        PersistenceError::ForeignKeyViolation(msg) => ApiError::Conflict { message: msg },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
