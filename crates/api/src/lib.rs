// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthError, AuthenticatedActor, USER_ID_HEADER, authenticate};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    cancel_booking, create_booking, create_item, create_user, delete_user, get_booking, get_item,
    get_user, list_bookings, list_items, list_users, set_approval, update_item, update_user,
};
pub use request_response::{
    ApprovalQuery, BookedItemInfo, BookerInfo, BookingResponse, CreateBookingRequest,
    CreateItemRequest, CreateUserRequest, ItemResponse, ListBookingsQuery, ListItemsQuery,
    UpdateItemRequest, UpdateUserRequest, UserResponse,
};
