// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler translates a request into domain types, runs exactly one core
//! operation inside one persistence transaction and translates the outcome.

use shareit::{Command, apply, get_booking as core_get_booking, list_bookings as core_list};
use shareit_domain::{
    Booking, BookingId, BookingRole, BookingState, DEFAULT_PAGE_SIZE, Item, ItemId, Page, User,
    UserId, validate_item_fields, validate_user_fields,
};
use shareit_persistence::Persistence;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::auth::AuthenticatedActor;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    BookingResponse, CreateBookingRequest, CreateItemRequest, CreateUserRequest, ItemResponse,
    ListBookingsQuery, ListItemsQuery, UpdateItemRequest, UpdateUserRequest, UserResponse,
};

/// Drops sub-millisecond precision, matching what storage keeps.
fn truncate_to_millis(instant: OffsetDateTime) -> OffsetDateTime {
    instant - Duration::nanoseconds(i64::from(instant.nanosecond() % 1_000_000))
}

fn page_from_query(from: Option<i64>, size: Option<i64>) -> Result<Page, ApiError> {
    Page::from_offset(from.unwrap_or(0), size.unwrap_or(DEFAULT_PAGE_SIZE))
        .map_err(translate_domain_error)
}

fn load_user(persistence: &mut Persistence, user_id: i64) -> Result<User, ApiError> {
    let user_id: UserId = UserId::new(user_id);
    persistence
        .find_user(user_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User {user_id}"),
        })
}

fn load_item(persistence: &mut Persistence, item_id: i64) -> Result<Item, ApiError> {
    let item_id: ItemId = ItemId::new(item_id);
    persistence
        .find_item(item_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Item"),
            message: format!("Item {item_id}"),
        })
}

fn run_command(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    command: Command,
) -> Result<Booking, ApiError> {
    let name: &'static str = command.name();
    debug!(command = name, user_id = actor.user_id.value(), "Applying command");

    persistence
        .transaction(|store| apply(store, actor.user_id, command))
        .map_err(translate_core_error)
}

/// Requests a booking of an item on behalf of the caller.
///
/// # Errors
///
/// Returns an error if:
/// - The caller or the item does not exist, or the caller owns the item
/// - The item is unavailable
/// - The end is not strictly after the start
pub fn create_booking(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: CreateBookingRequest,
) -> Result<BookingResponse, ApiError> {
    let command: Command = Command::CreateBooking {
        item_id: ItemId::new(request.item_id),
        start: truncate_to_millis(request.start),
        end: truncate_to_millis(request.end),
    };

    let booking: Booking = run_command(persistence, actor, command)?;

    info!(
        booking_id = booking.booking_id.value(),
        item_id = booking.item.item_id.value(),
        booker_id = booking.booker_id.value(),
        "Booking requested"
    );

    Ok(BookingResponse::from(booking))
}

/// Approves or rejects a waiting booking on behalf of the item's owner.
///
/// # Errors
///
/// Returns an error if the booking does not exist, the caller does not own
/// the item, or the booking has already been decided.
pub fn set_approval(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    booking_id: i64,
    approved: bool,
) -> Result<BookingResponse, ApiError> {
    let command: Command = Command::SetApproval {
        booking_id: BookingId::new(booking_id),
        approved,
    };

    let booking: Booking = run_command(persistence, actor, command)?;

    info!(
        booking_id,
        owner_id = actor.user_id.value(),
        status = booking.status.as_str(),
        "Booking decided"
    );

    Ok(BookingResponse::from(booking))
}

/// Withdraws a booking on behalf of its booker.
///
/// # Errors
///
/// Returns an error if the booking does not exist, the caller is not the
/// booker, or the booking is rejected or already canceled.
pub fn cancel_booking(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    let command: Command = Command::CancelBooking {
        booking_id: BookingId::new(booking_id),
    };

    let booking: Booking = run_command(persistence, actor, command)?;

    info!(
        booking_id,
        booker_id = actor.user_id.value(),
        "Booking canceled"
    );

    Ok(BookingResponse::from(booking))
}

/// Reads a booking visible to the caller.
///
/// # Errors
///
/// Returns an error if the booking does not exist or the caller is neither
/// its booker nor the item's owner.
pub fn get_booking(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    let booking: Booking = persistence
        .transaction(|store| core_get_booking(store, actor.user_id, BookingId::new(booking_id)))
        .map_err(translate_core_error)?;

    Ok(BookingResponse::from(booking))
}

/// Lists one page of the caller's bookings, as booker or as owner.
///
/// The state token is checked before pagination, so an unknown state is
/// reported whatever `from` and `size` are.
///
/// # Errors
///
/// Returns an error if:
/// - The state token is unknown
/// - `from < 0` or `size < 1`
/// - The caller is not a registered user
pub fn list_bookings(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    role: BookingRole,
    query: &ListBookingsQuery,
    now: OffsetDateTime,
) -> Result<Vec<BookingResponse>, ApiError> {
    let state: BookingState = match query.state.as_deref() {
        Some(token) => token.parse().map_err(translate_domain_error)?,
        None => BookingState::default(),
    };

    let page: Page = page_from_query(query.from, query.size)?;

    debug!(
        user_id = actor.user_id.value(),
        role = %role,
        state = %state,
        page = page.index(),
        size = page.size(),
        "Listing bookings"
    );

    let bookings: Vec<Booking> = persistence
        .transaction(|store| core_list(store, actor.user_id, role, state, page, now))
        .map_err(translate_core_error)?;

    Ok(bookings.into_iter().map(BookingResponse::from).collect())
}

/// Registers a user.
///
/// # Errors
///
/// Returns an error if the name or email is invalid, or the email is taken.
pub fn create_user(
    persistence: &mut Persistence,
    request: &CreateUserRequest,
) -> Result<UserResponse, ApiError> {
    validate_user_fields(&request.name, &request.email).map_err(translate_domain_error)?;

    let user = persistence
        .create_user(request.name.trim(), request.email.trim())
        .map_err(translate_persistence_error)?;

    info!(user_id = user.user_id.value(), "User registered");
    Ok(UserResponse::from(user))
}

/// Lists an item owned by the caller.
///
/// # Errors
///
/// Returns an error if the name or description is blank, or the caller is
/// not a registered user.
pub fn create_item(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &CreateItemRequest,
) -> Result<ItemResponse, ApiError> {
    validate_item_fields(&request.name, &request.description).map_err(translate_domain_error)?;

    let item = persistence
        .create_item(
            actor.user_id,
            &request.name,
            &request.description,
            request.available,
        )
        .map_err(translate_persistence_error)?;

    info!(
        item_id = item.item_id.value(),
        owner_id = actor.user_id.value(),
        "Item listed"
    );
    Ok(ItemResponse::from(item))
}

/// Reads a user.
///
/// # Errors
///
/// Returns an error if the user does not exist.
pub fn get_user(persistence: &mut Persistence, user_id: i64) -> Result<UserResponse, ApiError> {
    load_user(persistence, user_id).map(UserResponse::from)
}

/// Lists every registered user.
///
/// # Errors
///
/// Returns an error if storage cannot be read.
pub fn list_users(persistence: &mut Persistence) -> Result<Vec<UserResponse>, ApiError> {
    let users: Vec<User> = persistence
        .list_users()
        .map_err(translate_persistence_error)?;

    Ok(users.into_iter().map(UserResponse::from).collect())
}

/// Changes a user's name and/or email, keeping absent fields.
///
/// # Errors
///
/// Returns an error if:
/// - The user does not exist
/// - The resulting name or email is invalid
/// - Another user already has the email
pub fn update_user(
    persistence: &mut Persistence,
    user_id: i64,
    request: &UpdateUserRequest,
) -> Result<UserResponse, ApiError> {
    let current: User = load_user(persistence, user_id)?;
    let name: &str = request.name.as_deref().unwrap_or(&current.name);
    let email: &str = request.email.as_deref().unwrap_or(&current.email);

    validate_user_fields(name, email).map_err(translate_domain_error)?;

    let user = persistence
        .update_user(current.user_id, name.trim(), email.trim())
        .map_err(translate_persistence_error)?;

    info!(user_id, "User updated");
    Ok(UserResponse::from(user))
}

/// Removes a user that owns no items and has made no bookings.
///
/// # Errors
///
/// Returns an error if the user does not exist or is still referenced.
pub fn delete_user(persistence: &mut Persistence, user_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_user(UserId::new(user_id))
        .map_err(translate_persistence_error)?;

    info!(user_id, "User deleted");
    Ok(())
}

/// Reads an item.
///
/// # Errors
///
/// Returns an error if the item does not exist.
pub fn get_item(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    item_id: i64,
) -> Result<ItemResponse, ApiError> {
    debug!(user_id = actor.user_id.value(), item_id, "Reading item");
    load_item(persistence, item_id).map(ItemResponse::from)
}

/// Lists one page of the caller's items, oldest first.
///
/// # Errors
///
/// Returns an error if `from < 0` or `size < 1`, or the caller is not a
/// registered user.
pub fn list_items(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    query: ListItemsQuery,
) -> Result<Vec<ItemResponse>, ApiError> {
    let page: Page = page_from_query(query.from, query.size)?;
    let owner: User = load_user(persistence, actor.user_id.value())?;

    let items: Vec<Item> = persistence
        .list_items_by_owner(owner.user_id, page)
        .map_err(translate_persistence_error)?;

    Ok(items.into_iter().map(ItemResponse::from).collect())
}

/// Changes an item on behalf of its owner, keeping absent fields.
///
/// Callers who do not own the item see it as missing.
///
/// # Errors
///
/// Returns an error if the item does not exist or belongs to someone else,
/// or the resulting name or description is blank.
pub fn update_item(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    item_id: i64,
    request: &UpdateItemRequest,
) -> Result<ItemResponse, ApiError> {
    let current: Item = load_item(persistence, item_id)?;
    if !current.is_owned_by(actor.user_id) {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Item"),
            message: format!("Item {}", current.item_id),
        });
    }

    let name: &str = request.name.as_deref().unwrap_or(&current.name);
    let description: &str = request
        .description
        .as_deref()
        .unwrap_or(&current.description);
    let available: bool = request.available.unwrap_or(current.available);

    validate_item_fields(name, description).map_err(translate_domain_error)?;

    let item = persistence
        .update_item(current.item_id, name, description, available)
        .map_err(translate_persistence_error)?;

    info!(
        item_id,
        owner_id = actor.user_id.value(),
        available,
        "Item updated"
    );
    Ok(ItemResponse::from(item))
}
