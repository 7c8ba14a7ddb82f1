//! MySQL implementation of the BranchRepository trait.

use async_trait::async_trait;
use hs_shared::Pagination;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use hs_core::domain::entities::{Branch, BranchFilter};
use hs_core::errors::DomainError;
use hs_core::repositories::BranchRepository;

use super::{column, db_error, optional_uuid_column, uuid_column};

const BRANCH_COLUMNS: &str =
    "id, chain_id, name, address, phone, manager_id, is_deleted, created_at, updated_at";

/// MySQL implementation of BranchRepository
pub struct MySqlBranchRepository {
    pool: MySqlPool,
}

impl MySqlBranchRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_branch(row: &MySqlRow) -> Result<Branch, DomainError> {
        Ok(Branch {
            id: uuid_column(row, "id")?,
            chain_id: uuid_column(row, "chain_id")?,
            name: column(row, "name")?,
            address: column(row, "address")?,
            phone: column(row, "phone")?,
            manager_id: optional_uuid_column(row, "manager_id")?,
            is_deleted: column(row, "is_deleted")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: BranchFilter) {
        builder.push(" WHERE is_deleted = FALSE");
        if let Some(chain_id) = filter.chain_id {
            builder.push(" AND chain_id = ").push_bind(chain_id.to_string());
        }
        if let Some(branch_id) = filter.branch_id {
            builder.push(" AND id = ").push_bind(branch_id.to_string());
        }
    }
}

#[async_trait]
impl BranchRepository for MySqlBranchRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Branch>, DomainError> {
        let query = format!("SELECT {} FROM branches WHERE id = ? LIMIT 1", BRANCH_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find branch"))?;

        row.as_ref().map(Self::row_to_branch).transpose()
    }

    async fn list(
        &self,
        filter: BranchFilter,
        pagination: Pagination,
    ) -> Result<Vec<Branch>, DomainError> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM branches", BRANCH_COLUMNS));
        Self::push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(pagination.limit())
            .push(" OFFSET ")
            .push_bind(pagination.offset());

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list branches"))?;

        rows.iter().map(Self::row_to_branch).collect()
    }

    async fn count(&self, filter: BranchFilter) -> Result<u64, DomainError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM branches");
        Self::push_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count branches"))?;

        Ok(total as u64)
    }

    async fn create(&self, branch: Branch) -> Result<Branch, DomainError> {
        let query = r#"
            INSERT INTO branches (
                id, chain_id, name, address, phone, manager_id, is_deleted, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(branch.id.to_string())
            .bind(branch.chain_id.to_string())
            .bind(&branch.name)
            .bind(&branch.address)
            .bind(&branch.phone)
            .bind(branch.manager_id.map(|id| id.to_string()))
            .bind(branch.is_deleted)
            .bind(branch.created_at)
            .bind(branch.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create branch"))?;

        Ok(branch)
    }

    async fn update(&self, branch: Branch) -> Result<Branch, DomainError> {
        let query = r#"
            UPDATE branches
            SET chain_id = ?, name = ?, address = ?, phone = ?, manager_id = ?,
                is_deleted = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(branch.chain_id.to_string())
            .bind(&branch.name)
            .bind(&branch.address)
            .bind(&branch.phone)
            .bind(branch.manager_id.map(|id| id.to_string()))
            .bind(branch.is_deleted)
            .bind(branch.updated_at)
            .bind(branch.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update branch"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Branch"));
        }

        Ok(branch)
    }
}
