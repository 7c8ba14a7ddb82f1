//! Branch repository trait defining the interface for branch persistence.

use async_trait::async_trait;
use hs_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::branch::{Branch, BranchFilter};
use crate::errors::DomainError;

/// Repository trait for Branch entity persistence operations
#[async_trait]
pub trait BranchRepository: Send + Sync {
    /// Find a branch by its unique identifier, deleted or not
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Branch>, DomainError>;

    /// Non-deleted branches matching `filter`, newest first, for one page
    async fn list(
        &self,
        filter: BranchFilter,
        pagination: Pagination,
    ) -> Result<Vec<Branch>, DomainError>;

    /// Number of non-deleted branches matching `filter`
    async fn count(&self, filter: BranchFilter) -> Result<u64, DomainError>;

    /// Persist a new branch
    async fn create(&self, branch: Branch) -> Result<Branch, DomainError>;

    /// Overwrite an existing branch with the given record
    async fn update(&self, branch: Branch) -> Result<Branch, DomainError>;
}
