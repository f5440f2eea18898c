// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit_domain::{Item, ItemId, Page, User, UserId};
use tracing::debug;

use crate::data_models::{ItemRow, UserRow};
use crate::diesel_schema::{items, users};
use crate::error::PersistenceError;

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_user(
    conn: &mut SqliteConnection,
    user_id: UserId,
) -> Result<Option<User>, PersistenceError> {
    debug!(user_id = user_id.value(), "Looking up user");

    let row: Option<UserRow> = users::table
        .filter(users::user_id.eq(user_id.value()))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(User::from))
}

/// Retrieves an item by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_item(
    conn: &mut SqliteConnection,
    item_id: ItemId,
) -> Result<Option<Item>, PersistenceError> {
    debug!(item_id = item_id.value(), "Looking up item");

    let row: Option<ItemRow> = items::table
        .filter(items::item_id.eq(item_id.value()))
        .select(ItemRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Item::from))
}

/// Retrieves every registered user, in registration order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<User>, PersistenceError> {
    let rows: Vec<UserRow> = users::table
        .select(UserRow::as_select())
        .order(users::user_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(User::from).collect())
}

/// Retrieves one page of the items listed by `owner_id`, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_items_by_owner(
    conn: &mut SqliteConnection,
    owner_id: UserId,
    page: Page,
) -> Result<Vec<Item>, PersistenceError> {
    debug!(
        owner_id = owner_id.value(),
        page = page.index(),
        size = page.size(),
        "Listing items"
    );

    let rows: Vec<ItemRow> = items::table
        .filter(items::owner_id.eq(owner_id.value()))
        .select(ItemRow::as_select())
        .order(items::item_id.asc())
        .limit(page.size())
        .offset(page.offset())
        .load(conn)?;

    Ok(rows.into_iter().map(Item::from).collect())
}
