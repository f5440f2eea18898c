// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and item management.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit_domain::{Item, ItemId, User, UserId};
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewItemRow, NewUserRow};
use crate::diesel_schema::{items, users};
use crate::error::PersistenceError;
use crate::queries::directory::{find_item, find_user};

/// Registers a user.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email is taken.
pub fn create_user(
    conn: &mut SqliteConnection,
    name: &str,
    email: &str,
) -> Result<User, PersistenceError> {
    diesel::insert_into(users::table)
        .values(&NewUserRow { name, email })
        .execute(conn)?;

    let user_id: UserId = UserId::new(get_last_insert_rowid(conn)?);
    info!(user_id = user_id.value(), "User created");

    find_user(conn, user_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("User {user_id}")))
}

/// Lists an item owned by `owner_id`.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the owner is not registered.
pub fn create_item(
    conn: &mut SqliteConnection,
    owner_id: UserId,
    name: &str,
    description: &str,
    available: bool,
) -> Result<Item, PersistenceError> {
    if find_user(conn, owner_id)?.is_none() {
        return Err(PersistenceError::NotFound(format!("User {owner_id}")));
    }

    diesel::insert_into(items::table)
        .values(&NewItemRow {
            owner_id: owner_id.value(),
            name,
            description,
            available,
        })
        .execute(conn)?;

    let item_id: ItemId = ItemId::new(get_last_insert_rowid(conn)?);
    info!(
        item_id = item_id.value(),
        owner_id = owner_id.value(),
        available,
        "Item created"
    );

    find_item(conn, item_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Item {item_id}")))
}

/// Replaces a user's name and email.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the user does not exist, or
/// `PersistenceError::UniqueViolation` if another user has the email.
pub fn update_user(
    conn: &mut SqliteConnection,
    user_id: UserId,
    name: &str,
    email: &str,
) -> Result<User, PersistenceError> {
    let updated: usize = diesel::update(users::table)
        .filter(users::user_id.eq(user_id.value()))
        .set((users::name.eq(name), users::email.eq(email)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("User {user_id}")));
    }

    info!(user_id = user_id.value(), "User updated");

    find_user(conn, user_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("User {user_id}")))
}

/// Removes a user.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the user does not exist, or
/// `PersistenceError::ForeignKeyViolation` while items or bookings still
/// reference the user.
pub fn delete_user(conn: &mut SqliteConnection, user_id: UserId) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(users::table)
        .filter(users::user_id.eq(user_id.value()))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("User {user_id}")));
    }

    info!(user_id = user_id.value(), "User deleted");
    Ok(())
}

/// Replaces an item's name, description and availability.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the item does not exist.
pub fn update_item(
    conn: &mut SqliteConnection,
    item_id: ItemId,
    name: &str,
    description: &str,
    available: bool,
) -> Result<Item, PersistenceError> {
    let updated: usize = diesel::update(items::table)
        .filter(items::item_id.eq(item_id.value()))
        .set((
            items::name.eq(name),
            items::description.eq(description),
            items::available.eq(available),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Item {item_id}")));
    }

    info!(item_id = item_id.value(), available, "Item updated");

    find_item(conn, item_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Item {item_id}")))
}
