// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates the fields of a user about to be registered.
///
/// Uniqueness of the email is enforced by storage, not here.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or blank
/// - The email is empty, or lacks a local part or a domain around `@`
pub fn validate_user_fields(name: &str, email: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidUserName(String::from(
            "Name cannot be empty",
        )));
    }

    let email = email.trim();
    if email.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot be empty",
        )));
    }

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
        _ => {
            return Err(DomainError::InvalidEmail(format!(
                "'{email}' is not a valid email address"
            )));
        }
    }

    Ok(())
}

/// Validates the fields of an item about to be listed.
///
/// # Errors
///
/// Returns an error if the name or the description is empty or blank.
pub fn validate_item_fields(name: &str, description: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidItem(String::from(
            "Name cannot be empty",
        )));
    }

    if description.trim().is_empty() {
        return Err(DomainError::InvalidItem(String::from(
            "Description cannot be empty",
        )));
    }

    Ok(())
}
