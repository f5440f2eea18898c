// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking state machine.
//!
//! Every operation reads, checks and writes through the ports it is given.
//! Callers are expected to run each operation inside one storage transaction.

use shareit_domain::{
    Booking, BookingId, BookingPeriod, BookingStatus, DomainError, Item, ItemId, NewBooking,
    UserId,
};
use time::OffsetDateTime;

use crate::error::CoreError;
use crate::ports::{BookingRepository, DirectoryLookup};

/// Requests a booking of an item.
///
/// Checks run in this order: requester exists, item exists, item available,
/// requester is not the owner, `start < end`.
///
/// # Errors
///
/// Returns an error if:
/// - The requester or the item does not exist
/// - The item is not available
/// - The requester owns the item (reported as `ItemNotFound`)
/// - The period is empty or inverted
/// - A port fails
pub fn create_booking<S>(
    store: &mut S,
    requester: UserId,
    item_id: ItemId,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<Booking, CoreError>
where
    S: BookingRepository + DirectoryLookup,
{
    if store.find_user(requester)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::UserNotFound(
            requester,
        )));
    }

    let item: Item = store
        .find_item(item_id)?
        .ok_or(DomainError::ItemNotFound(item_id))?;

    if !item.available {
        return Err(CoreError::DomainViolation(DomainError::ItemUnavailable(
            item_id,
        )));
    }

    // Owners see their own item as missing.
    if item.is_owned_by(requester) {
        return Err(CoreError::DomainViolation(DomainError::ItemNotFound(
            item_id,
        )));
    }

    let period: BookingPeriod = BookingPeriod::new(start, end)?;

    let new_booking: NewBooking = NewBooking {
        item_id,
        booker_id: requester,
        period,
        status: BookingStatus::Waiting,
    };
    store.save_booking(&new_booking)
}

/// Approves or rejects a waiting booking on behalf of the item's owner.
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist
/// - The actor does not own the booked item
/// - The booking is no longer `Waiting`
/// - A port fails
pub fn set_approval<S>(
    store: &mut S,
    actor: UserId,
    booking_id: BookingId,
    approved: bool,
) -> Result<Booking, CoreError>
where
    S: BookingRepository,
{
    let booking: Booking = load_booking(store, booking_id)?;

    if !booking.item.is_owned_by(actor) {
        return Err(CoreError::DomainViolation(DomainError::NotItemOwner {
            user_id: actor,
            booking_id,
        }));
    }

    let target: BookingStatus = if approved {
        BookingStatus::Approved
    } else {
        BookingStatus::Rejected
    };
    booking.status.validate_transition(target)?;

    store.update_booking_status(booking_id, target)
}

/// Withdraws a booking on behalf of its booker.
///
/// Only `Waiting` and `Approved` bookings can be canceled.
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist
/// - The actor is not the booker
/// - The booking is `Rejected` or already `Canceled`
/// - A port fails
pub fn cancel_booking<S>(
    store: &mut S,
    actor: UserId,
    booking_id: BookingId,
) -> Result<Booking, CoreError>
where
    S: BookingRepository,
{
    let booking: Booking = load_booking(store, booking_id)?;

    if !booking.is_booked_by(actor) {
        return Err(CoreError::DomainViolation(DomainError::NotBooker {
            user_id: actor,
            booking_id,
        }));
    }

    booking
        .status
        .validate_transition(BookingStatus::Canceled)?;

    store.update_booking_status(booking_id, BookingStatus::Canceled)
}

/// Reads a booking visible to the actor.
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist
/// - The actor is neither the booker nor the item owner
/// - A port fails
pub fn get_booking<S>(
    store: &mut S,
    actor: UserId,
    booking_id: BookingId,
) -> Result<Booking, CoreError>
where
    S: BookingRepository,
{
    let booking: Booking = load_booking(store, booking_id)?;

    if !booking.is_participant(actor) {
        return Err(CoreError::DomainViolation(
            DomainError::NotBookingParticipant {
                user_id: actor,
                booking_id,
            },
        ));
    }

    Ok(booking)
}

fn load_booking<S>(store: &mut S, booking_id: BookingId) -> Result<Booking, CoreError>
where
    S: BookingRepository,
{
    store
        .find_booking(booking_id)?
        .ok_or(CoreError::DomainViolation(DomainError::BookingNotFound(
            booking_id,
        )))
}
