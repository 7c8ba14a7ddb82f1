//! MySQL implementation of the ReviewRepository trait.

use async_trait::async_trait;
use hs_shared::Pagination;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use hs_core::domain::entities::{RatingScope, Review, ReviewDetails, ReviewFilter};
use hs_core::errors::DomainError;
use hs_core::repositories::ReviewRepository;

use super::{
    branch_summary, column, db_error, optional_uuid_column, room_summary, user_summary,
    uuid_column,
};

const REVIEW_COLUMNS: &str = "rv.id, rv.user_id, rv.branch_id, rv.room_id, rv.rating, rv.comment, \
                              rv.is_deleted, rv.created_at, rv.updated_at";

/// MySQL implementation of ReviewRepository
pub struct MySqlReviewRepository {
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_review(row: &MySqlRow) -> Result<Review, DomainError> {
        Ok(Review {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            branch_id: optional_uuid_column(row, "branch_id")?,
            room_id: optional_uuid_column(row, "room_id")?,
            rating: column(row, "rating")?,
            comment: column(row, "comment")?,
            is_deleted: column(row, "is_deleted")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn row_to_details(row: &MySqlRow) -> Result<ReviewDetails, DomainError> {
        Ok(ReviewDetails {
            review: Self::row_to_review(row)?,
            user: user_summary(row)?,
            branch: branch_summary(row)?,
            room: room_summary(row)?,
        })
    }

    fn push_filter(builder: &mut QueryBuilder<'_, MySql>, filter: ReviewFilter) {
        builder.push(" WHERE rv.is_deleted = FALSE");
        if let Some(user_id) = filter.user_id {
            builder.push(" AND rv.user_id = ").push_bind(user_id.to_string());
        }
        if let Some(branch_id) = filter.branch_id {
            builder.push(" AND rv.branch_id = ").push_bind(branch_id.to_string());
        }
        if let Some(room_id) = filter.room_id {
            builder.push(" AND rv.room_id = ").push_bind(room_id.to_string());
        }
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let query = format!("SELECT {} FROM reviews rv WHERE rv.id = ? LIMIT 1", REVIEW_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find review"))?;

        row.as_ref().map(Self::row_to_review).transpose()
    }

    async fn list(
        &self,
        filter: ReviewFilter,
        pagination: Pagination,
    ) -> Result<Vec<ReviewDetails>, DomainError> {
        let mut builder = QueryBuilder::new(format!(
            r#"
            SELECT {},
                u.id AS u_id, u.name AS u_name, u.email AS u_email,
                u.phone_number AS u_phone_number,
                br.id AS br_id, br.name AS br_name, br.address AS br_address,
                r.id AS r_id, r.room_number AS r_room_number, r.room_type AS r_room_type,
                r.price AS r_price
            FROM reviews rv
            LEFT JOIN users u ON u.id = rv.user_id
            LEFT JOIN branches br ON br.id = rv.branch_id
            LEFT JOIN rooms r ON r.id = rv.room_id
            "#,
            REVIEW_COLUMNS
        ));
        Self::push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY rv.created_at DESC LIMIT ")
            .push_bind(pagination.limit())
            .push(" OFFSET ")
            .push_bind(pagination.offset());

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list reviews"))?;

        rows.iter().map(Self::row_to_details).collect()
    }

    async fn count(&self, filter: ReviewFilter) -> Result<u64, DomainError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM reviews rv");
        Self::push_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count reviews"))?;

        Ok(total as u64)
    }

    async fn average_rating(&self, scope: RatingScope) -> Result<f64, DomainError> {
        let mut builder = QueryBuilder::<MySql>::new(
            "SELECT CAST(AVG(rating) AS DOUBLE) FROM reviews WHERE is_deleted = FALSE AND ",
        );

        match scope {
            RatingScope::Room(room_id) => {
                builder.push("room_id = ").push_bind(room_id.to_string());
            }
            RatingScope::Branch(branch_id) => {
                builder.push("branch_id = ").push_bind(branch_id.to_string());
            }
            RatingScope::Rooms(room_ids) => {
                if room_ids.is_empty() {
                    return Ok(0.0);
                }
                builder.push("room_id IN (");
                let mut ids = builder.separated(", ");
                for room_id in room_ids {
                    ids.push_bind(room_id.to_string());
                }
                ids.push_unseparated(")");
            }
        }

        let average: Option<f64> = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to compute average rating"))?;

        Ok(average.unwrap_or(0.0))
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let query = r#"
            INSERT INTO reviews (
                id, user_id, branch_id, room_id, rating, comment, is_deleted, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(review.id.to_string())
            .bind(review.user_id.to_string())
            .bind(review.branch_id.map(|id| id.to_string()))
            .bind(review.room_id.map(|id| id.to_string()))
            .bind(review.rating)
            .bind(&review.comment)
            .bind(review.is_deleted)
            .bind(review.created_at)
            .bind(review.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create review"))?;

        Ok(review)
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let query = r#"
            UPDATE reviews
            SET rating = ?, comment = ?, is_deleted = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(review.rating)
            .bind(&review.comment)
            .bind(review.is_deleted)
            .bind(review.updated_at)
            .bind(review.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update review"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Review"));
        }

        Ok(review)
    }
}
