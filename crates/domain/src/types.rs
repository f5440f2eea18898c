// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Declares an `i64`-backed identifier newtype.
///
/// Identifiers are assigned by storage and are never interpreted by the domain.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a registered user.
    UserId
);
entity_id!(
    /// Identifier of a listed item.
    ItemId
);
entity_id!(
    /// Identifier of a booking.
    BookingId
);

/// A registered platform user.
///
/// Bookings only ever read a user's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's identifier.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email, unique across users.
    pub email: String,
}

/// An item listed for sharing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The item's identifier.
    pub item_id: ItemId,
    /// The user who listed the item and decides on its bookings.
    pub owner_id: UserId,
    /// Short name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Whether the owner currently accepts booking requests.
    pub available: bool,
}

impl Item {
    /// Returns true if the given user listed this item.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}
