//! Chain CRUD.

use std::sync::Arc;

use hs_shared::{Page, Pagination};
use uuid::Uuid;

use crate::domain::entities::chain::{Chain, ChainPatch, NewChain};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ChainRepository;

use super::require;

/// Service for hotel chains
pub struct ChainService {
    chains: Arc<dyn ChainRepository>,
}

impl ChainService {
    pub fn new(chains: Arc<dyn ChainRepository>) -> Self {
        Self { chains }
    }

    pub async fn create_chain(&self, input: NewChain) -> DomainResult<Chain> {
        require("name", &input.name)?;

        let chain = self.chains.create(Chain::new(input)).await?;
        tracing::info!(chain_id = %chain.id, event = "chain_created", "Chain created");
        Ok(chain)
    }

    pub async fn get_chains(&self, pagination: Pagination) -> DomainResult<Page<Chain>> {
        let (items, total) =
            tokio::try_join!(self.chains.list(pagination), self.chains.count())?;
        Ok(Page::new(items, pagination, total))
    }

    /// Partial update. Deleted chains stay deleted and report not found.
    pub async fn update_chain(&self, id: Uuid, patch: ChainPatch) -> DomainResult<Chain> {
        let mut chain = self.find_active(id).await?;
        chain.apply(patch);
        self.chains.update(chain).await
    }

    pub async fn delete_chain(&self, id: Uuid) -> DomainResult<Chain> {
        let mut chain = self
            .chains
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Chain"))?;

        chain.mark_deleted();
        let chain = self.chains.update(chain).await?;
        tracing::info!(chain_id = %chain.id, event = "chain_deleted", "Chain soft-deleted");
        Ok(chain)
    }

    async fn find_active(&self, id: Uuid) -> DomainResult<Chain> {
        self.chains
            .find_by_id(id)
            .await?
            .filter(|c| !c.is_deleted)
            .ok_or_else(|| DomainError::not_found("Chain"))
    }
}
