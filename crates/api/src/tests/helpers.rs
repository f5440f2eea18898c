// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::UserId;
use shareit_persistence::Persistence;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::{
    AuthenticatedActor, BookingResponse, CreateBookingRequest, CreateItemRequest,
    CreateUserRequest, create_booking, create_item, create_user,
};

pub struct TestContext {
    pub persistence: Persistence,
    pub owner: AuthenticatedActor,
    pub booker: AuthenticatedActor,
    pub stranger: AuthenticatedActor,
    pub item_id: i64,
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-06-15 12:00 UTC)
}

fn register(persistence: &mut Persistence, name: &str) -> AuthenticatedActor {
    let user = create_user(
        persistence,
        &CreateUserRequest {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        },
    )
    .unwrap();
    AuthenticatedActor::new(UserId::new(user.id))
}

/// Owner, booker and stranger registered; the owner lists one available drill.
pub fn create_test_context() -> TestContext {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let owner = register(&mut persistence, "Owner");
    let booker = register(&mut persistence, "Booker");
    let stranger = register(&mut persistence, "Stranger");
    let item = create_item(
        &mut persistence,
        &owner,
        &CreateItemRequest {
            name: String::from("Drill"),
            description: String::from("Cordless drill"),
            available: true,
        },
    )
    .unwrap();

    TestContext {
        persistence,
        owner,
        booker,
        stranger,
        item_id: item.id,
    }
}

pub fn booking_request(item_id: i64, start_hours: i64, end_hours: i64) -> CreateBookingRequest {
    CreateBookingRequest {
        item_id,
        start: test_now() + Duration::hours(start_hours),
        end: test_now() + Duration::hours(end_hours),
    }
}

pub fn book(ctx: &mut TestContext, start_hours: i64, end_hours: i64) -> BookingResponse {
    let request = booking_request(ctx.item_id, start_hours, end_hours);
    create_booking(&mut ctx.persistence, &ctx.booker, request).unwrap()
}
