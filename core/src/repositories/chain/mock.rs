//! Mock implementation of ChainRepository for testing

use async_trait::async_trait;
use hs_shared::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::chain::Chain;
use crate::errors::DomainError;

use super::trait_::ChainRepository;

/// Mock chain repository for testing
pub struct MockChainRepository {
    chains: Arc<RwLock<HashMap<Uuid, Chain>>>,
}

impl MockChainRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            chains: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockChainRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainRepository for MockChainRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chain>, DomainError> {
        let chains = self.chains.read().await;
        Ok(chains.get(&id).cloned())
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Chain>, DomainError> {
        let chains = self.chains.read().await;
        let mut active: Vec<Chain> = chains.values().filter(|c| !c.is_deleted).cloned().collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let chains = self.chains.read().await;
        Ok(chains.values().filter(|c| !c.is_deleted).count() as u64)
    }

    async fn create(&self, chain: Chain) -> Result<Chain, DomainError> {
        let mut chains = self.chains.write().await;
        chains.insert(chain.id, chain.clone());
        Ok(chain)
    }

    async fn update(&self, chain: Chain) -> Result<Chain, DomainError> {
        let mut chains = self.chains.write().await;
        
        if !chains.contains_key(&chain.id) {
            return Err(DomainError::not_found("Chain"));
        }
        
        chains.insert(chain.id, chain.clone());
        Ok(chain)
    }
}
