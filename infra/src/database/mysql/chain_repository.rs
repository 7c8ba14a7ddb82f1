//! MySQL implementation of the ChainRepository trait.

use async_trait::async_trait;
use hs_shared::Pagination;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hs_core::domain::entities::Chain;
use hs_core::errors::DomainError;
use hs_core::repositories::ChainRepository;

use super::{column, db_error, uuid_column};

const CHAIN_COLUMNS: &str = "id, name, description, is_deleted, created_at, updated_at";

/// MySQL implementation of ChainRepository
pub struct MySqlChainRepository {
    pool: MySqlPool,
}

impl MySqlChainRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_chain(row: &MySqlRow) -> Result<Chain, DomainError> {
        Ok(Chain {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            description: column(row, "description")?,
            is_deleted: column(row, "is_deleted")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl ChainRepository for MySqlChainRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chain>, DomainError> {
        let query = format!("SELECT {} FROM chains WHERE id = ? LIMIT 1", CHAIN_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find chain"))?;

        row.as_ref().map(Self::row_to_chain).transpose()
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Chain>, DomainError> {
        let query = format!(
            "SELECT {} FROM chains WHERE is_deleted = FALSE \
             ORDER BY created_at DESC LIMIT ? OFFSET ?",
            CHAIN_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list chains"))?;

        rows.iter().map(Self::row_to_chain).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chains WHERE is_deleted = FALSE")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count chains"))?;

        Ok(total as u64)
    }

    async fn create(&self, chain: Chain) -> Result<Chain, DomainError> {
        let query = r#"
            INSERT INTO chains (id, name, description, is_deleted, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(chain.id.to_string())
            .bind(&chain.name)
            .bind(&chain.description)
            .bind(chain.is_deleted)
            .bind(chain.created_at)
            .bind(chain.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create chain"))?;

        Ok(chain)
    }

    async fn update(&self, chain: Chain) -> Result<Chain, DomainError> {
        let query = r#"
            UPDATE chains
            SET name = ?, description = ?, is_deleted = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&chain.name)
            .bind(&chain.description)
            .bind(chain.is_deleted)
            .bind(chain.updated_at)
            .bind(chain.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update chain"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Chain"));
        }

        Ok(chain)
    }
}
