// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use shareit_domain::{
    Booking, BookingId, BookingPeriod, BookingRole, BookingStatus, DomainError, Item, ItemId,
    NewBooking, Page, User, UserId,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::{BookingRepository, CoreError, DirectoryLookup, QueryCategory};

pub const OWNER: UserId = UserId::new(1);
pub const BOOKER: UserId = UserId::new(2);
pub const STRANGER: UserId = UserId::new(3);
pub const DRILL: ItemId = ItemId::new(10);
pub const LADDER: ItemId = ItemId::new(11);

/// The fixed "now" every test evaluates against.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-06-15 12:00 UTC)
}

/// Ports backed by ordered maps, with the same ordering contract as storage.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub users: BTreeMap<UserId, User>,
    pub items: BTreeMap<ItemId, Item>,
    pub bookings: BTreeMap<BookingId, (ItemId, UserId, BookingPeriod, BookingStatus)>,
    next_booking_id: i64,
}

impl InMemoryStore {
    pub fn add_user(&mut self, user_id: UserId) {
        self.users.insert(
            user_id,
            User {
                user_id,
                name: format!("user-{user_id}"),
                email: format!("user{user_id}@example.com"),
            },
        );
    }

    pub fn add_item(&mut self, item_id: ItemId, owner_id: UserId, available: bool) {
        self.items.insert(
            item_id,
            Item {
                item_id,
                owner_id,
                name: format!("item-{item_id}"),
                description: String::from("test item"),
                available,
            },
        );
    }

    /// Inserts a booking directly, bypassing the state machine.
    pub fn insert_booking(
        &mut self,
        item_id: ItemId,
        booker_id: UserId,
        period: BookingPeriod,
        status: BookingStatus,
    ) -> BookingId {
        self.save_booking(&NewBooking {
            item_id,
            booker_id,
            period,
            status,
        })
        .unwrap()
        .booking_id
    }

    fn hydrate(&self, booking_id: BookingId) -> Option<Booking> {
        let (item_id, booker_id, period, status) = self.bookings.get(&booking_id)?;
        let item: Item = self.items.get(item_id)?.clone();
        Some(Booking {
            booking_id,
            item,
            booker_id: *booker_id,
            period: *period,
            status: *status,
        })
    }
}

impl DirectoryLookup for InMemoryStore {
    fn find_user(&mut self, user_id: UserId) -> Result<Option<User>, CoreError> {
        Ok(self.users.get(&user_id).cloned())
    }

    fn find_item(&mut self, item_id: ItemId) -> Result<Option<Item>, CoreError> {
        Ok(self.items.get(&item_id).cloned())
    }
}

impl BookingRepository for InMemoryStore {
    fn save_booking(&mut self, booking: &NewBooking) -> Result<Booking, CoreError> {
        self.next_booking_id += 1;
        let booking_id: BookingId = BookingId::new(self.next_booking_id);
        self.bookings.insert(
            booking_id,
            (
                booking.item_id,
                booking.booker_id,
                booking.period,
                booking.status,
            ),
        );
        self.hydrate(booking_id)
            .ok_or_else(|| CoreError::Internal(String::from("item vanished")))
    }

    fn update_booking_status(
        &mut self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, CoreError> {
        let row = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(DomainError::BookingNotFound(booking_id))?;
        row.3 = status;
        self.hydrate(booking_id)
            .ok_or_else(|| CoreError::Internal(String::from("item vanished")))
    }

    fn find_booking(&mut self, booking_id: BookingId) -> Result<Option<Booking>, CoreError> {
        Ok(self.hydrate(booking_id))
    }

    fn find_bookings(
        &mut self,
        role: BookingRole,
        principal: UserId,
        category: QueryCategory,
        page: Page,
    ) -> Result<Vec<Booking>, CoreError> {
        let mut matching: Vec<Booking> = self
            .bookings
            .keys()
            .filter_map(|id| self.hydrate(*id))
            .filter(|booking| match role {
                BookingRole::Booker => booking.booker_id == principal,
                BookingRole::Owner => booking.owner_id() == principal,
            })
            .filter(|booking| category.matches(booking))
            .collect();

        matching.sort_by(|a, b| {
            b.period
                .start()
                .cmp(&a.period.start())
                .then(b.booking_id.cmp(&a.booking_id))
        });

        let offset = usize::try_from(page.offset()).unwrap();
        let size = usize::try_from(page.size()).unwrap();
        Ok(matching.into_iter().skip(offset).take(size).collect())
    }
}

/// Owner, booker and stranger registered; the drill is available, the ladder is not.
pub fn create_test_store() -> InMemoryStore {
    let mut store = InMemoryStore::default();
    store.add_user(OWNER);
    store.add_user(BOOKER);
    store.add_user(STRANGER);
    store.add_item(DRILL, OWNER, true);
    store.add_item(LADDER, OWNER, false);
    store
}

/// A period offset from [`test_now`] by whole hours.
pub fn period_hours(start: i64, end: i64) -> BookingPeriod {
    BookingPeriod::new(
        test_now() + Duration::hours(start),
        test_now() + Duration::hours(end),
    )
    .unwrap()
}
