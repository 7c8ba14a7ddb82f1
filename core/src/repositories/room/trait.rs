//! Room repository trait defining the interface for room persistence.

use async_trait::async_trait;
use hs_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::room::{Room, RoomFilter};
use crate::errors::DomainError;

/// Repository trait for Room entity persistence operations
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by its unique identifier, deleted or not
    ///
    /// The booking engine needs deleted rooms back so it can report
    /// "Room is deleted" instead of a plain not-found.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, DomainError>;

    /// Non-deleted rooms matching `filter`, newest first, for one page
    async fn list(&self, filter: RoomFilter, pagination: Pagination)
        -> Result<Vec<Room>, DomainError>;

    /// Number of non-deleted rooms matching `filter`
    async fn count(&self, filter: RoomFilter) -> Result<u64, DomainError>;

    /// Ids of every non-deleted room of a branch
    async fn list_ids_by_branch(&self, branch_id: Uuid) -> Result<Vec<Uuid>, DomainError>;

    /// Persist a new room
    async fn create(&self, room: Room) -> Result<Room, DomainError>;

    /// Overwrite an existing room with the given record
    async fn update(&self, room: Room) -> Result<Room, DomainError>;
}
