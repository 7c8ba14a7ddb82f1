//! MySQL implementation of the RoomRepository trait.

use async_trait::async_trait;
use hs_shared::Pagination;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use hs_core::domain::entities::{Room, RoomFilter};
use hs_core::errors::DomainError;
use hs_core::repositories::RoomRepository;

use super::{column, db_error, enum_column, uuid_column};

const ROOM_COLUMNS: &str = "id, branch_id, room_number, room_type, status, price, description, \
                            is_deleted, created_at, updated_at";

/// MySQL implementation of RoomRepository
pub struct MySqlRoomRepository {
    pool: MySqlPool,
}

impl MySqlRoomRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_room(row: &MySqlRow) -> Result<Room, DomainError> {
        Ok(Room {
            id: uuid_column(row, "id")?,
            branch_id: uuid_column(row, "branch_id")?,
            room_number: column(row, "room_number")?,
            room_type: column(row, "room_type")?,
            status: enum_column(row, "status")?,
            price: column(row, "price")?,
            description: column(row, "description")?,
            is_deleted: column(row, "is_deleted")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: RoomFilter) {
        builder.push(" WHERE is_deleted = FALSE");
        if let Some(branch_id) = filter.branch_id {
            builder.push(" AND branch_id = ").push_bind(branch_id.to_string());
        }
    }
}

#[async_trait]
impl RoomRepository for MySqlRoomRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, DomainError> {
        let query = format!("SELECT {} FROM rooms WHERE id = ? LIMIT 1", ROOM_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find room"))?;

        row.as_ref().map(Self::row_to_room).transpose()
    }

    async fn list(
        &self,
        filter: RoomFilter,
        pagination: Pagination,
    ) -> Result<Vec<Room>, DomainError> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM rooms", ROOM_COLUMNS));
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
            .map_err(db_error("Failed to list rooms"))?;

        rows.iter().map(Self::row_to_room).collect()
    }

    async fn count(&self, filter: RoomFilter) -> Result<u64, DomainError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM rooms");
        Self::push_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count rooms"))?;

        Ok(total as u64)
    }

    async fn list_ids_by_branch(&self, branch_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let ids: Vec<String> =
            sqlx::query_scalar("SELECT id FROM rooms WHERE branch_id = ? AND is_deleted = FALSE")
                .bind(branch_id.to_string())
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("Failed to list branch rooms"))?;

        ids.iter()
            .map(|id| {
                Uuid::parse_str(id).map_err(|e| DomainError::Internal {
                    message: format!("Invalid room UUID: {}", e),
                })
            })
            .collect()
    }

    async fn create(&self, room: Room) -> Result<Room, DomainError> {
        let query = r#"
            INSERT INTO rooms (
                id, branch_id, room_number, room_type, status, price, description,
                is_deleted, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(room.id.to_string())
            .bind(room.branch_id.to_string())
            .bind(&room.room_number)
            .bind(&room.room_type)
            .bind(room.status.as_str())
            .bind(room.price)
            .bind(&room.description)
            .bind(room.is_deleted)
            .bind(room.created_at)
            .bind(room.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create room"))?;

        Ok(room)
    }

    async fn update(&self, room: Room) -> Result<Room, DomainError> {
        let query = r#"
            UPDATE rooms
            SET room_number = ?, room_type = ?, status = ?, price = ?, description = ?,
                is_deleted = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&room.room_number)
            .bind(&room.room_type)
            .bind(room.status.as_str())
            .bind(room.price)
            .bind(&room.description)
            .bind(room.is_deleted)
            .bind(room.updated_at)
            .bind(room.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update room"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Room"));
        }

        Ok(room)
    }
}
