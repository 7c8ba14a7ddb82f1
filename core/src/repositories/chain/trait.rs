//! Chain repository trait defining the interface for chain persistence.

use async_trait::async_trait;
use hs_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::chain::Chain;
use crate::errors::DomainError;

/// Repository trait for Chain entity persistence operations
///
/// Listings and counts only see chains that are not soft-deleted;
/// point lookups return deleted chains too so callers can decide.
#[async_trait]
pub trait ChainRepository: Send + Sync {
    /// Find a chain by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chain>, DomainError>;

    /// Non-deleted chains, newest first, for one page
    async fn list(&self, pagination: Pagination) -> Result<Vec<Chain>, DomainError>;

    /// Number of non-deleted chains
    async fn count(&self) -> Result<u64, DomainError>;

    /// Persist a new chain
    async fn create(&self, chain: Chain) -> Result<Chain, DomainError>;

    /// Overwrite an existing chain with the given record
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No chain with this id
    async fn update(&self, chain: Chain) -> Result<Chain, DomainError>;
}
