// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{BookingId, DomainError, ItemId, UserId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::UserNotFound(UserId::new(7));
    assert_eq!(format!("{err}"), "User 7 not found");

    let err: DomainError = DomainError::ItemNotFound(ItemId::new(3));
    assert_eq!(format!("{err}"), "Item 3 not found");

    let err: DomainError = DomainError::BookingNotFound(BookingId::new(11));
    assert_eq!(format!("{err}"), "Booking 11 not found");

    let err: DomainError = DomainError::ItemUnavailable(ItemId::new(3));
    assert_eq!(format!("{err}"), "Item 3 is not available for booking");

    let err: DomainError = DomainError::UnknownState(String::from("UNSUPPORTED_STATUS"));
    assert_eq!(format!("{err}"), "Unknown state: UNSUPPORTED_STATUS");

    let err: DomainError = DomainError::InvalidBookingStatus(String::from("LOST"));
    assert_eq!(format!("{err}"), "Invalid booking status: LOST");

    let err: DomainError = DomainError::InvalidUserName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid user name: test");

    let err: DomainError = DomainError::InvalidEmail(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid email: test");

    let err: DomainError = DomainError::InvalidItem(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid item: test");
}

#[test]
fn test_participant_error_display() {
    let err: DomainError = DomainError::NotItemOwner {
        user_id: UserId::new(2),
        booking_id: BookingId::new(5),
    };
    assert_eq!(
        format!("{err}"),
        "User 2 does not own the item of booking 5"
    );

    let err: DomainError = DomainError::NotBookingParticipant {
        user_id: UserId::new(2),
        booking_id: BookingId::new(5),
    };
    assert_eq!(
        format!("{err}"),
        "User 2 is neither the booker nor the item owner of booking 5"
    );

    let err: DomainError = DomainError::NotBooker {
        user_id: UserId::new(2),
        booking_id: BookingId::new(5),
    };
    assert_eq!(format!("{err}"), "User 2 is not the booker of booking 5");
}

#[test]
fn test_transition_and_pagination_error_display() {
    let err: DomainError = DomainError::InvalidStatusTransition {
        from: String::from("APPROVED"),
        to: String::from("REJECTED"),
        reason: String::from("cannot change an already-decided booking"),
    };
    assert_eq!(
        format!("{err}"),
        "Cannot change booking status from APPROVED to REJECTED: cannot change an already-decided booking"
    );

    let err: DomainError = DomainError::InvalidPagination { from: -1, size: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid pagination: from=-1, size=0. Expected from >= 0 and size >= 1"
    );
}

#[test]
fn test_invalid_period_display_names_both_bounds() {
    let start = datetime!(2026-03-01 10:00 UTC);
    let end = datetime!(2026-03-01 09:00 UTC);
    let err: DomainError = DomainError::InvalidBookingPeriod { start, end };
    let rendered = format!("{err}");
    assert!(rendered.starts_with("Booking end "));
    assert!(rendered.contains("must be strictly after booking start"));
}
