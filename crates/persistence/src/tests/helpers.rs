// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit::BookingRepository;
use shareit_domain::{Booking, BookingPeriod, BookingStatus, Item, NewBooking, User};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::Persistence;

/// A populated database: an owner with one available item, plus a booker.
pub struct Seeded {
    pub persistence: Persistence,
    pub owner: User,
    pub booker: User,
    pub item: Item,
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-06-15 12:00 UTC)
}

pub fn period_hours(start: i64, end: i64) -> BookingPeriod {
    BookingPeriod::new(
        test_now() + Duration::hours(start),
        test_now() + Duration::hours(end),
    )
    .unwrap()
}

pub fn create_seeded_persistence() -> Seeded {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let owner = persistence
        .create_user("Olivia Owner", "owner@example.com")
        .unwrap();
    let booker = persistence
        .create_user("Bob Booker", "booker@example.com")
        .unwrap();
    let item = persistence
        .create_item(owner.user_id, "Drill", "Cordless drill", true)
        .unwrap();
    Seeded {
        persistence,
        owner,
        booker,
        item,
    }
}

/// Stores a booking directly through the repository port.
pub fn insert_booking(
    seeded: &mut Seeded,
    period: BookingPeriod,
    status: BookingStatus,
) -> Booking {
    let new_booking = NewBooking {
        item_id: seeded.item.item_id,
        booker_id: seeded.booker.user_id,
        period,
        status,
    };
    seeded
        .persistence
        .transaction(|store| store.save_booking(&new_booking))
        .unwrap()
}
