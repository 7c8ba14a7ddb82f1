//! Mock implementation of BranchRepository for testing

use async_trait::async_trait;
use hs_shared::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::branch::{Branch, BranchFilter};
use crate::errors::DomainError;

use super::trait_::BranchRepository;

/// Mock branch repository for testing
pub struct MockBranchRepository {
    branches: Arc<RwLock<HashMap<Uuid, Branch>>>,
}

impl MockBranchRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            branches: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn matching(&self, filter: BranchFilter) -> Vec<Branch> {
        let branches = self.branches.read().await;
        let mut found: Vec<Branch> = branches
            .values()
            .filter(|b| !b.is_deleted && filter.matches(b))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }
}

impl Default for MockBranchRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BranchRepository for MockBranchRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Branch>, DomainError> {
        let branches = self.branches.read().await;
        Ok(branches.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: BranchFilter,
        pagination: Pagination,
    ) -> Result<Vec<Branch>, DomainError> {
        Ok(self
            .matching(filter)
            .await
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect())
    }

    async fn count(&self, filter: BranchFilter) -> Result<u64, DomainError> {
        Ok(self.matching(filter).await.len() as u64)
    }

    async fn create(&self, branch: Branch) -> Result<Branch, DomainError> {
        let mut branches = self.branches.write().await;
        branches.insert(branch.id, branch.clone());
        Ok(branch)
    }

    async fn update(&self, branch: Branch) -> Result<Branch, DomainError> {
        let mut branches = self.branches.write().await;
        
        if !branches.contains_key(&branch.id) {
            return Err(DomainError::not_found("Branch"));
        }
        
        branches.insert(branch.id, branch.clone());
        Ok(branch)
    }
}
