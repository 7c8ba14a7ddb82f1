//! Tests for chain, branch and room services.

use std::sync::Arc;

use hs_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::branch::{BranchFilter, BranchPatch, NewBranch};
use crate::domain::entities::chain::{ChainPatch, NewChain};
use crate::domain::entities::room::{NewRoom, RoomFilter, RoomPatch, RoomStatus};
use crate::errors::DomainError;
use crate::repositories::{MockBranchRepository, MockChainRepository, MockRoomRepository};
use crate::services::catalog::{BranchService, ChainService, RoomService};

struct Catalog {
    chains: ChainService,
    branches: BranchService,
    rooms: RoomService,
}

fn catalog() -> Catalog {
    let chain_repo = Arc::new(MockChainRepository::new());
    let branch_repo = Arc::new(MockBranchRepository::new());
    let room_repo = Arc::new(MockRoomRepository::new());

    Catalog {
        chains: ChainService::new(chain_repo.clone()),
        branches: BranchService::new(branch_repo.clone(), chain_repo),
        rooms: RoomService::new(room_repo, branch_repo),
    }
}

fn new_chain(name: &str) -> NewChain {
    NewChain {
        name: name.to_string(),
        description: None,
    }
}

fn new_branch(chain_id: Uuid) -> NewBranch {
    NewBranch {
        chain_id,
        name: "Harbour View".to_string(),
        address: "9 Pier St".to_string(),
        phone: "555-0199".to_string(),
        manager_id: None,
    }
}

fn new_room(branch_id: Uuid, price: f64) -> NewRoom {
    NewRoom {
        branch_id,
        room_number: "301".to_string(),
        room_type: "SUITE".to_string(),
        status: None,
        price,
        description: None,
    }
}

#[tokio::test]
async fn test_chain_requires_name() {
    let c = catalog();
    let err = c.chains.create_chain(new_chain("   ")).await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationErr(_)));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_chain_listing_skips_deleted() {
    let c = catalog();
    let keep = c.chains.create_chain(new_chain("Keep")).await.unwrap();
    let gone = c.chains.create_chain(new_chain("Gone")).await.unwrap();
    c.chains.delete_chain(gone.id).await.unwrap();

    let page = c.chains.get_chains(Pagination::default()).await.unwrap();
    assert_eq!(page.info.total, 1);
    assert_eq!(page.items[0].id, keep.id);
}

#[tokio::test]
async fn test_deleted_chain_is_not_revived_by_update() {
    let c = catalog();
    let chain = c.chains.create_chain(new_chain("Old")).await.unwrap();
    c.chains.delete_chain(chain.id).await.unwrap();

    let err = c
        .chains
        .update_chain(
            chain.id,
            ChainPatch {
                name: Some("New".to_string()),
                description: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_branch_needs_live_chain() {
    let c = catalog();
    let err = c.branches.create_branch(new_branch(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(err.to_string(), "Chain not found");

    let chain = c.chains.create_chain(new_chain("Coastal")).await.unwrap();
    let branch = c.branches.create_branch(new_branch(chain.id)).await.unwrap();
    assert_eq!(c.branches.get_branch(branch.id).await.unwrap().chain_id, chain.id);

    let err = c
        .branches
        .update_branch(
            branch.id,
            BranchPatch {
                chain_id: Some(Uuid::new_v4()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_branch_filters() {
    let c = catalog();
    let a = c.chains.create_chain(new_chain("A")).await.unwrap();
    let b = c.chains.create_chain(new_chain("B")).await.unwrap();
    c.branches.create_branch(new_branch(a.id)).await.unwrap();
    c.branches.create_branch(new_branch(a.id)).await.unwrap();
    let other = c.branches.create_branch(new_branch(b.id)).await.unwrap();

    let by_chain = c
        .branches
        .get_branches(
            BranchFilter {
                chain_id: Some(a.id),
                branch_id: None,
            },
            Pagination::default(),
        )
        .await
        .unwrap();
    assert_eq!(by_chain.info.total, 2);

    c.branches.delete_branch(other.id).await.unwrap();
    assert_eq!(c.branches.get_branch(other.id).await.unwrap_err().status_code(), 404);
    let all = c
        .branches
        .get_branches(BranchFilter::default(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(all.info.total, 2);
}

#[tokio::test]
async fn test_room_lifecycle() {
    let c = catalog();
    let chain = c.chains.create_chain(new_chain("Inland")).await.unwrap();
    let branch = c.branches.create_branch(new_branch(chain.id)).await.unwrap();

    let err = c.rooms.create_room(new_room(branch.id, 0.0)).await.unwrap_err();
    assert_eq!(err.to_string(), "Price must be greater than 0");
    let err = c.rooms.create_room(new_room(Uuid::new_v4(), 10.0)).await.unwrap_err();
    assert_eq!(err.to_string(), "Branch not found");

    let room = c.rooms.create_room(new_room(branch.id, 80.0)).await.unwrap();
    assert_eq!(room.status, RoomStatus::Available);

    let updated = c
        .rooms
        .update_room(
            room.id,
            RoomPatch {
                status: Some(RoomStatus::Occupied),
                price: Some(95.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, RoomStatus::Occupied);
    assert_eq!(updated.price, 95.0);

    let err = c
        .rooms
        .update_room(
            room.id,
            RoomPatch {
                price: Some(-1.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    let listed = c
        .rooms
        .get_rooms(
            RoomFilter {
                branch_id: Some(branch.id),
            },
            Pagination::default(),
        )
        .await
        .unwrap();
    assert_eq!(listed.info.total, 1);

    c.rooms.delete_room(room.id).await.unwrap();
    let listed = c
        .rooms
        .get_rooms(RoomFilter::default(), Pagination::default())
        .await
        .unwrap();
    assert!(listed.items.is_empty());
}
