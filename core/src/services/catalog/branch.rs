//! Branch CRUD.

use std::sync::Arc;

use hs_shared::{Page, Pagination};
use uuid::Uuid;

use crate::domain::entities::branch::{Branch, BranchFilter, BranchPatch, NewBranch};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BranchRepository, ChainRepository};

use super::require;

/// Service for the branches of a chain
pub struct BranchService {
    branches: Arc<dyn BranchRepository>,
    chains: Arc<dyn ChainRepository>,
}

impl BranchService {
    pub fn new(branches: Arc<dyn BranchRepository>, chains: Arc<dyn ChainRepository>) -> Self {
        Self { branches, chains }
    }

    /// Create a branch under an existing, non-deleted chain
    pub async fn create_branch(&self, input: NewBranch) -> DomainResult<Branch> {
        require("name", &input.name)?;
        require("address", &input.address)?;
        require("phone", &input.phone)?;
        self.ensure_chain(input.chain_id).await?;

        let branch = self.branches.create(Branch::new(input)).await?;
        tracing::info!(
            branch_id = %branch.id,
            chain_id = %branch.chain_id,
            event = "branch_created",
            "Branch created"
        );
        Ok(branch)
    }

    pub async fn get_branches(
        &self,
        filter: BranchFilter,
        pagination: Pagination,
    ) -> DomainResult<Page<Branch>> {
        let (items, total) = tokio::try_join!(
            self.branches.list(filter, pagination),
            self.branches.count(filter),
        )?;
        Ok(Page::new(items, pagination, total))
    }

    pub async fn get_branch(&self, id: Uuid) -> DomainResult<Branch> {
        self.find_active(id).await
    }

    /// Partial update; moving the branch requires the target chain to exist
    pub async fn update_branch(&self, id: Uuid, patch: BranchPatch) -> DomainResult<Branch> {
        let mut branch = self.find_active(id).await?;
        if let Some(chain_id) = patch.chain_id {
            self.ensure_chain(chain_id).await?;
        }

        branch.apply(patch);
        self.branches.update(branch).await
    }

    pub async fn delete_branch(&self, id: Uuid) -> DomainResult<Branch> {
        let mut branch = self
            .branches
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Branch"))?;

        branch.mark_deleted();
        let branch = self.branches.update(branch).await?;
        tracing::info!(branch_id = %branch.id, event = "branch_deleted", "Branch soft-deleted");
        Ok(branch)
    }

    async fn find_active(&self, id: Uuid) -> DomainResult<Branch> {
        self.branches
            .find_by_id(id)
            .await?
            .filter(|b| !b.is_deleted)
            .ok_or_else(|| DomainError::not_found("Branch"))
    }

    async fn ensure_chain(&self, chain_id: Uuid) -> DomainResult<()> {
        self.chains
            .find_by_id(chain_id)
            .await?
            .filter(|c| !c.is_deleted)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Chain"))
    }
}
