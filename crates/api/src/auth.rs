// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity.
//!
//! Clients identify themselves with the `X-Sharer-User-Id` header. The value
//! is trusted as-is once it parses; whether the user exists is decided by the
//! operation being performed.

use shareit_domain::UserId;
use thiserror::Error;

/// Header carrying the acting user's identifier.
pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Identity extraction errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No identity was supplied.
    #[error("Missing X-Sharer-User-Id header")]
    MissingIdentity,

    /// The identity is not an integer.
    #[error("X-Sharer-User-Id must be an integer, got '{value}'")]
    MalformedIdentity { value: String },

    /// The identity is zero or negative.
    #[error("X-Sharer-User-Id must be positive, got {value}")]
    NonPositiveIdentity { value: i64 },
}

/// The user on whose behalf a request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The acting user.
    pub user_id: UserId,
}

impl AuthenticatedActor {
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Resolves the acting user from the raw identity header value.
///
/// # Errors
///
/// Returns an error if the header is absent, not an integer, or not positive.
pub fn authenticate(header: Option<&str>) -> Result<AuthenticatedActor, AuthError> {
    let raw: &str = header.ok_or(AuthError::MissingIdentity)?.trim();

    let value: i64 = raw.parse().map_err(|_| AuthError::MalformedIdentity {
        value: raw.to_string(),
    })?;

    if value <= 0 {
        return Err(AuthError::NonPositiveIdentity { value });
    }

    Ok(AuthenticatedActor::new(UserId::new(value)))
}
