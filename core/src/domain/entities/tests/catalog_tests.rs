//! Unit tests for chain, branch, room and review entities

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    Branch, BranchFilter, BranchPatch, Chain, ChainPatch, NewBranch, NewChain, NewReview,
    NewRoom, RatingScope, Review, Room, RoomPatch, RoomStatus,
};
use crate::domain::value_objects::Stay;

fn room(price: f64) -> Room {
    Room::new(NewRoom {
        branch_id: Uuid::new_v4(),
        room_number: "101".to_string(),
        room_type: "DELUXE".to_string(),
        status: None,
        price,
        description: None,
    })
}

#[test]
fn test_room_price_for_fractional_stay() {
    let start = Utc::now();
    let stay = Stay::new(start, start + Duration::minutes(150));
    assert_eq!(room(100.0).price_for(&stay), 250.0);
}

#[test]
fn test_room_defaults_to_available() {
    assert_eq!(room(10.0).status, RoomStatus::Available);
}

#[test]
fn test_room_serializes_type_field() {
    let value = serde_json::to_value(room(10.0)).unwrap();
    assert_eq!(value["type"], "DELUXE");
    assert_eq!(value["roomNumber"], "101");
    assert_eq!(value["status"], "AVAILABLE");
}

#[test]
fn test_blank_strings_do_not_overwrite() {
    let mut chain = Chain::new(NewChain {
        name: "Seaside".to_string(),
        description: Some("Coastal stays".to_string()),
    });
    chain.apply(ChainPatch {
        name: Some("  ".to_string()),
        description: Some(String::new()),
    });
    assert_eq!(chain.name, "Seaside");
    assert_eq!(chain.description.as_deref(), Some("Coastal stays"));

    let mut r = room(10.0);
    r.apply(RoomPatch {
        room_number: Some(String::new()),
        status: Some(RoomStatus::Maintenance),
        ..Default::default()
    });
    assert_eq!(r.room_number, "101");
    assert_eq!(r.status, RoomStatus::Maintenance);
}

#[test]
fn test_branch_filter_and_semantics() {
    let chain_id = Uuid::new_v4();
    let mut branch = Branch::new(NewBranch {
        chain_id,
        name: "Old Town".to_string(),
        address: "1 Main St".to_string(),
        phone: "0123".to_string(),
        manager_id: None,
    });

    assert!(BranchFilter::default().matches(&branch));
    assert!(BranchFilter { chain_id: Some(chain_id), branch_id: Some(branch.id) }.matches(&branch));
    let other_branch = BranchFilter {
        chain_id: Some(chain_id),
        branch_id: Some(Uuid::new_v4()),
    };
    assert!(!other_branch.matches(&branch));

    branch.apply(BranchPatch {
        address: Some("2 Side St".to_string()),
        ..Default::default()
    });
    assert_eq!(branch.address, "2 Side St");
    assert_eq!(branch.summary().name, "Old Town");
}

#[test]
fn test_rating_scope_matching() {
    let room_a = Uuid::new_v4();
    let branch = Uuid::new_v4();
    let review = Review::new(NewReview {
        user_id: Uuid::new_v4(),
        branch_id: None,
        room_id: Some(room_a),
        rating: 4,
        comment: None,
    });

    assert!(RatingScope::Room(room_a).matches(&review));
    assert!(RatingScope::Rooms(vec![Uuid::new_v4(), room_a]).matches(&review));
    assert!(!RatingScope::Rooms(Vec::new()).matches(&review));
    assert!(!RatingScope::Branch(branch).matches(&review));
}
