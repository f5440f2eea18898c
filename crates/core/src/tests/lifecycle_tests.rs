// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::{BookingId, BookingStatus, DomainError, ItemId, UserId};
use time::Duration;

use super::helpers::{
    BOOKER, DRILL, LADDER, OWNER, STRANGER, create_test_store, period_hours, test_now,
};
use crate::{CoreError, cancel_booking, create_booking, get_booking, set_approval};

#[test]
fn test_create_booking_starts_waiting() {
    let mut store = create_test_store();
    let start = test_now() + Duration::seconds(10);
    let end = test_now() + Duration::seconds(20);

    let booking = create_booking(&mut store, BOOKER, DRILL, start, end).unwrap();

    assert_eq!(booking.status, BookingStatus::Waiting);
    assert_eq!(booking.booker_id, BOOKER);
    assert_eq!(booking.item.item_id, DRILL);
    assert_eq!(booking.owner_id(), OWNER);
    assert!(booking.period.start() < booking.period.end());
    assert_eq!(store.bookings.len(), 1);
}

#[test]
fn test_create_booking_rejects_equal_and_inverted_periods() {
    let mut store = create_test_store();
    let instant = test_now() + Duration::hours(1);

    let result = create_booking(&mut store, BOOKER, DRILL, instant, instant);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidBookingPeriod { .. }
        ))
    ));

    let result = create_booking(
        &mut store,
        BOOKER,
        DRILL,
        instant,
        instant - Duration::minutes(1),
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidBookingPeriod { .. }
        ))
    ));
    assert!(store.bookings.is_empty());
}

#[test]
fn test_owner_booking_own_item_reports_item_not_found() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);

    let result = create_booking(&mut store, OWNER, DRILL, period.start(), period.end());

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::ItemNotFound(DRILL)))
    );
    assert!(store.bookings.is_empty());
}

#[test]
fn test_create_booking_rejects_unavailable_item() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);

    let result = create_booking(&mut store, BOOKER, LADDER, period.start(), period.end());

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::ItemUnavailable(
            LADDER
        )))
    );
}

#[test]
fn test_unavailable_item_is_reported_before_ownership() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);

    let result = create_booking(&mut store, OWNER, LADDER, period.start(), period.end());

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::ItemUnavailable(
            LADDER
        )))
    );
}

#[test]
fn test_create_booking_rejects_unknown_item_and_user() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);

    let result = create_booking(
        &mut store,
        BOOKER,
        ItemId::new(999),
        period.start(),
        period.end(),
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::ItemNotFound(
            ItemId::new(999)
        )))
    );

    let result = create_booking(
        &mut store,
        UserId::new(999),
        DRILL,
        period.start(),
        period.end(),
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::UserNotFound(
            UserId::new(999)
        )))
    );
}

#[test]
fn test_owner_approves_then_cannot_reject() {
    let mut store = create_test_store();
    let start = test_now() + Duration::seconds(10);
    let end = test_now() + Duration::seconds(20);
    let booking = create_booking(&mut store, BOOKER, DRILL, start, end).unwrap();

    let approved = set_approval(&mut store, OWNER, booking.booking_id, true).unwrap();
    assert_eq!(approved.status, BookingStatus::Approved);

    let result = set_approval(&mut store, OWNER, booking.booking_id, false);
    match result {
        Err(CoreError::DomainViolation(DomainError::InvalidStatusTransition {
            reason, ..
        })) => assert_eq!(reason, "cannot change an already-decided booking"),
        other => panic!("unexpected result: {other:?}"),
    }

    let stored = get_booking(&mut store, OWNER, booking.booking_id).unwrap();
    assert_eq!(stored.status, BookingStatus::Approved);
}

#[test]
fn test_owner_rejects_waiting_booking() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);
    let booking =
        create_booking(&mut store, BOOKER, DRILL, period.start(), period.end()).unwrap();

    let rejected = set_approval(&mut store, OWNER, booking.booking_id, false).unwrap();
    assert_eq!(rejected.status, BookingStatus::Rejected);

    assert!(set_approval(&mut store, OWNER, booking.booking_id, true).is_err());
}

#[test]
fn test_only_owner_may_decide() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);
    let booking =
        create_booking(&mut store, BOOKER, DRILL, period.start(), period.end()).unwrap();

    for actor in [BOOKER, STRANGER] {
        let result = set_approval(&mut store, actor, booking.booking_id, true);
        assert_eq!(
            result,
            Err(CoreError::DomainViolation(DomainError::NotItemOwner {
                user_id: actor,
                booking_id: booking.booking_id,
            }))
        );
    }

    let stored = get_booking(&mut store, BOOKER, booking.booking_id).unwrap();
    assert_eq!(stored.status, BookingStatus::Waiting);
}

#[test]
fn test_set_approval_on_missing_booking() {
    let mut store = create_test_store();

    let result = set_approval(&mut store, OWNER, BookingId::new(42), true);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::BookingNotFound(
            BookingId::new(42)
        )))
    );
}

#[test]
fn test_get_booking_visible_to_participants_only() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);
    let booking =
        create_booking(&mut store, BOOKER, DRILL, period.start(), period.end()).unwrap();

    assert_eq!(
        get_booking(&mut store, BOOKER, booking.booking_id).unwrap(),
        booking
    );
    assert_eq!(
        get_booking(&mut store, OWNER, booking.booking_id).unwrap(),
        booking
    );

    let result = get_booking(&mut store, STRANGER, booking.booking_id);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::NotBookingParticipant {
                user_id: STRANGER,
                booking_id: booking.booking_id,
            }
        ))
    );
}

#[test]
fn test_get_missing_booking_is_not_found() {
    let mut store = create_test_store();

    let result = get_booking(&mut store, BOOKER, BookingId::new(7));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::BookingNotFound(
            BookingId::new(7)
        )))
    );
}

#[test]
fn test_booker_cancels_waiting_and_approved_bookings() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);

    let waiting =
        create_booking(&mut store, BOOKER, DRILL, period.start(), period.end()).unwrap();
    let canceled = cancel_booking(&mut store, BOOKER, waiting.booking_id).unwrap();
    assert_eq!(canceled.status, BookingStatus::Canceled);

    let approved =
        create_booking(&mut store, BOOKER, DRILL, period.start(), period.end()).unwrap();
    set_approval(&mut store, OWNER, approved.booking_id, true).unwrap();
    let canceled = cancel_booking(&mut store, BOOKER, approved.booking_id).unwrap();
    assert_eq!(canceled.status, BookingStatus::Canceled);

    // Terminal: neither a second cancel nor a decision applies.
    assert!(cancel_booking(&mut store, BOOKER, approved.booking_id).is_err());
    assert!(set_approval(&mut store, OWNER, approved.booking_id, true).is_err());
}

#[test]
fn test_cancel_rules() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);
    let booking =
        create_booking(&mut store, BOOKER, DRILL, period.start(), period.end()).unwrap();

    let result = cancel_booking(&mut store, OWNER, booking.booking_id);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NotBooker {
            user_id: OWNER,
            booking_id: booking.booking_id,
        }))
    );

    set_approval(&mut store, OWNER, booking.booking_id, false).unwrap();
    let result = cancel_booking(&mut store, BOOKER, booking.booking_id);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition { .. }
        ))
    ));
}
