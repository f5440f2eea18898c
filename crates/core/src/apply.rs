// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::{Booking, UserId};

use crate::command::Command;
use crate::error::CoreError;
use crate::lifecycle::{cancel_booking, create_booking, set_approval};
use crate::ports::{BookingRepository, DirectoryLookup};

/// Applies a booking command on behalf of an actor.
///
/// # Arguments
///
/// * `store` - The storage ports, scoped to one transaction
/// * `actor` - The authenticated user issuing the command
/// * `command` - The mutation to perform
///
/// # Returns
///
/// * `Ok(Booking)` reflecting the booking after the mutation
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates a booking rule or a port fails.
pub fn apply<S>(store: &mut S, actor: UserId, command: Command) -> Result<Booking, CoreError>
where
    S: BookingRepository + DirectoryLookup,
{
    match command {
        Command::CreateBooking {
            item_id,
            start,
            end,
        } => create_booking(store, actor, item_id, start, end),
        Command::SetApproval {
            booking_id,
            approved,
        } => set_approval(store, actor, booking_id, approved),
        Command::CancelBooking { booking_id } => cancel_booking(store, actor, booking_id),
    }
}
