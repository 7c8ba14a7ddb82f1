//! Room CRUD.

use std::sync::Arc;

use hs_shared::{Page, Pagination};
use uuid::Uuid;

use crate::domain::entities::room::{NewRoom, Room, RoomFilter, RoomPatch};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BranchRepository, RoomRepository};

use super::require;

/// Service for the rooms of a branch
pub struct RoomService {
    rooms: Arc<dyn RoomRepository>,
    branches: Arc<dyn BranchRepository>,
}

impl RoomService {
    pub fn new(rooms: Arc<dyn RoomRepository>, branches: Arc<dyn BranchRepository>) -> Self {
        Self { rooms, branches }
    }

    /// Create a room in an existing, non-deleted branch
    pub async fn create_room(&self, input: NewRoom) -> DomainResult<Room> {
        require("roomNumber", &input.room_number)?;
        require("type", &input.room_type)?;
        validate_price(input.price)?;

        self.branches
            .find_by_id(input.branch_id)
            .await?
            .filter(|b| !b.is_deleted)
            .ok_or_else(|| DomainError::not_found("Branch"))?;

        let room = self.rooms.create(Room::new(input)).await?;
        tracing::info!(
            room_id = %room.id,
            branch_id = %room.branch_id,
            price = room.price,
            event = "room_created",
            "Room created"
        );
        Ok(room)
    }

    pub async fn get_rooms(
        &self,
        filter: RoomFilter,
        pagination: Pagination,
    ) -> DomainResult<Page<Room>> {
        let (items, total) = tokio::try_join!(
            self.rooms.list(filter, pagination),
            self.rooms.count(filter),
        )?;
        Ok(Page::new(items, pagination, total))
    }

    pub async fn update_room(&self, id: Uuid, patch: RoomPatch) -> DomainResult<Room> {
        if let Some(price) = patch.price {
            validate_price(price)?;
        }

        let mut room = self
            .rooms
            .find_by_id(id)
            .await?
            .filter(|r| !r.is_deleted)
            .ok_or_else(|| DomainError::not_found("Room"))?;

        room.apply(patch);
        self.rooms.update(room).await
    }

    pub async fn delete_room(&self, id: Uuid) -> DomainResult<Room> {
        let mut room = self
            .rooms
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room"))?;

        room.mark_deleted();
        let room = self.rooms.update(room).await?;
        tracing::info!(room_id = %room.id, event = "room_deleted", "Room soft-deleted");
        Ok(room)
    }
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !(price > 0.0) {
        return Err(DomainError::validation("Price must be greater than 0"));
    }
    Ok(())
}
