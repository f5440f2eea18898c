// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::UserId;
use shareit_persistence::Persistence;

use crate::{
    ApiError, AuthenticatedActor, CreateItemRequest, CreateUserRequest, create_item, create_user,
};

fn user_request(name: &str, email: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[test]
fn test_create_user_returns_assigned_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let user = create_user(&mut persistence, &user_request("Ann", "ann@example.com")).unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "ann@example.com");
}

#[test]
fn test_create_user_rejects_invalid_fields() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let err = create_user(&mut persistence, &user_request("", "ann@example.com")).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "name"));

    let err = create_user(&mut persistence, &user_request("Ann", "not-an-email")).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "email"));
}

#[test]
fn test_duplicate_email_conflicts() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    create_user(&mut persistence, &user_request("Ann", "ann@example.com")).unwrap();

    let err = create_user(&mut persistence, &user_request("Other", "ann@example.com")).unwrap_err();

    assert!(matches!(err, ApiError::Conflict { .. }));
}

#[test]
fn test_create_item_for_registered_owner() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let owner = create_user(&mut persistence, &user_request("Ann", "ann@example.com")).unwrap();
    let actor = AuthenticatedActor::new(UserId::new(owner.id));

    let item = create_item(
        &mut persistence,
        &actor,
        &CreateItemRequest {
            name: String::from("Tent"),
            description: String::from("Two person tent"),
            available: false,
        },
    )
    .unwrap();

    assert_eq!(item.owner_id, owner.id);
    assert!(!item.available);
}

#[test]
fn test_create_item_for_unknown_owner_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let actor = AuthenticatedActor::new(UserId::new(8));

    let err = create_item(
        &mut persistence,
        &actor,
        &CreateItemRequest {
            name: String::from("Tent"),
            description: String::from("Two person tent"),
            available: true,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: String::from("User 8"),
        }
    );
}

#[test]
fn test_create_item_rejects_blank_description() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let owner = create_user(&mut persistence, &user_request("Ann", "ann@example.com")).unwrap();
    let actor = AuthenticatedActor::new(UserId::new(owner.id));

    let err = create_item(
        &mut persistence,
        &actor,
        &CreateItemRequest {
            name: String::from("Tent"),
            description: String::from("  "),
            available: true,
        },
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "item"));
}
