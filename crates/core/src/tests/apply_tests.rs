// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::{BookingStatus, DomainError};

use super::helpers::{BOOKER, DRILL, OWNER, create_test_store, period_hours};
use crate::{Command, CoreError, apply};

#[test]
fn test_apply_runs_full_lifecycle() {
    let mut store = create_test_store();
    let period = period_hours(24, 48);

    let created = apply(
        &mut store,
        BOOKER,
        Command::CreateBooking {
            item_id: DRILL,
            start: period.start(),
            end: period.end(),
        },
    )
    .unwrap();
    assert_eq!(created.status, BookingStatus::Waiting);

    let approved = apply(
        &mut store,
        OWNER,
        Command::SetApproval {
            booking_id: created.booking_id,
            approved: true,
        },
    )
    .unwrap();
    assert_eq!(approved.status, BookingStatus::Approved);

    let canceled = apply(
        &mut store,
        BOOKER,
        Command::CancelBooking {
            booking_id: created.booking_id,
        },
    )
    .unwrap();
    assert_eq!(canceled.status, BookingStatus::Canceled);
    assert_eq!(canceled.booking_id, created.booking_id);
}

#[test]
fn test_apply_propagates_rule_violations() {
    let mut store = create_test_store();
    let period = period_hours(1, 2);

    let result = apply(
        &mut store,
        OWNER,
        Command::CreateBooking {
            item_id: DRILL,
            start: period.start(),
            end: period.end(),
        },
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::ItemNotFound(DRILL)))
    );
}

#[test]
fn test_command_names() {
    let command = Command::CancelBooking {
        booking_id: shareit_domain::BookingId::new(1),
    };
    assert_eq!(command.name(), "CancelBooking");
}
