//! Mock implementation of RoomRepository for testing

use async_trait::async_trait;
use hs_shared::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::room::{Room, RoomFilter};
use crate::errors::DomainError;

use super::trait_::RoomRepository;

/// Mock room repository for testing
pub struct MockRoomRepository {
    rooms: Arc<RwLock<HashMap<Uuid, Room>>>,
}

impl MockRoomRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn matching(&self, filter: RoomFilter) -> Vec<Room> {
        let rooms = self.rooms.read().await;
        let mut found: Vec<Room> = rooms
            .values()
            .filter(|r| !r.is_deleted && filter.matches(r))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }
}

impl Default for MockRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for MockRoomRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, DomainError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: RoomFilter,
        pagination: Pagination,
    ) -> Result<Vec<Room>, DomainError> {
        Ok(self
            .matching(filter)
            .await
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect())
    }

    async fn count(&self, filter: RoomFilter) -> Result<u64, DomainError> {
        Ok(self.matching(filter).await.len() as u64)
    }

    async fn list_ids_by_branch(&self, branch_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let rooms = self.rooms.read().await;
        Ok(rooms
            .values()
            .filter(|r| !r.is_deleted && r.branch_id == branch_id)
            .map(|r| r.id)
            .collect())
    }

    async fn create(&self, room: Room) -> Result<Room, DomainError> {
        let mut rooms = self.rooms.write().await;
        rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn update(&self, room: Room) -> Result<Room, DomainError> {
        let mut rooms = self.rooms.write().await;
        
        if !rooms.contains_key(&room.id) {
            return Err(DomainError::not_found("Room"));
        }
        
        rooms.insert(room.id, room.clone());
        Ok(room)
    }
}
