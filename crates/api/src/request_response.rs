// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire and instants are RFC 3339 strings.

use serde::{Deserialize, Serialize};
use shareit_domain::{Booking, BookingStatus, Item, User};
use time::OffsetDateTime;

/// API request to book an item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// The item to book.
    pub item_id: i64,
    /// Requested start.
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// Requested end.
    #[serde(with = "time::serde::rfc3339")]
    pub end: OffsetDateTime,
}

/// Query parameters of the approval endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ApprovalQuery {
    /// `true` approves, `false` rejects.
    pub approved: bool,
}

/// Query parameters of the list endpoints.
///
/// Absent parameters fall back to `state=ALL`, `from=0`, `size=10`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListBookingsQuery {
    /// Symbolic filter token.
    pub state: Option<String>,
    /// Offset of the first wanted row.
    pub from: Option<i64>,
    /// Page size.
    pub size: Option<i64>,
}

/// API request to register a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    /// Display name.
    pub name: String,
    /// Contact email, unique across users.
    pub email: String,
}

/// API request to list an item for the calling user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateItemRequest {
    /// Short name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Whether the item accepts booking requests.
    pub available: bool,
}

/// API request to change a user. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name.
    pub name: Option<String>,
    /// New contact email.
    pub email: Option<String>,
}

/// API request to change an item. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateItemRequest {
    /// New short name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Whether the item accepts booking requests from now on.
    pub available: Option<bool>,
}

/// Query parameters of the item list endpoint.
///
/// Absent parameters fall back to `from=0`, `size=10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ListItemsQuery {
    /// Offset of the first wanted row.
    pub from: Option<i64>,
    /// Page size.
    pub size: Option<i64>,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.value(),
            name: user.name,
            email: user.email,
        }
    }
}

/// A listed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.item_id.value(),
            owner_id: item.owner_id.value(),
            name: item.name,
            description: item.description,
            available: item.available,
        }
    }
}

/// The booker as shown inside a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookerInfo {
    pub id: i64,
}

/// The item as shown inside a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedItemInfo {
    pub id: i64,
    pub name: String,
}

/// A booking as returned by every booking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end: OffsetDateTime,
    pub status: BookingStatus,
    pub booker: BookerInfo,
    pub item: BookedItemInfo,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.booking_id.value(),
            start: booking.period.start(),
            end: booking.period.end(),
            status: booking.status,
            booker: BookerInfo {
                id: booking.booker_id.value(),
            },
            item: BookedItemInfo {
                id: booking.item.item_id.value(),
                name: booking.item.name,
            },
        }
    }
}
