//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use hs_shared::Pagination;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hs_core::domain::entities::User;
use hs_core::errors::DomainError;
use hs_core::repositories::UserRepository;

use super::{column, db_error, enum_column, uuid_column};

const USER_COLUMNS: &str =
    "id, name, email, phone_number, role, active, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            phone_number: column(row, "phone_number")?,
            role: enum_column(row, "role")?,
            active: column(row, "active")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    async fn find_one(&self, filter: &str, value: String) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE {} = ? LIMIT 1", USER_COLUMNS, filter);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_one("id", id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email.to_string()).await
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE active = TRUE ORDER BY created_at DESC LIMIT ? OFFSET ?",
            USER_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list users"))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE active = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count users"))?;

        Ok(total as u64)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, name, email, phone_number, role, active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone_number)
            .bind(user.role.as_str())
            .bind(user.active)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create user"))?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET name = ?, phone_number = ?, role = ?, active = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.phone_number)
            .bind(user.role.as_str())
            .bind(user.active)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }

        Ok(user)
    }
}
