//! MySQL implementation of the BookingRepository trait.
//!
//! `create_exclusive` and `update_exclusive` serialise bookings per room: they
//! lock the room row with `SELECT ... FOR UPDATE` inside a transaction, look
//! for a conflicting booking other than the one being written, and write only
//! when none exists. A concurrent request for the same room waits on the lock
//! and then sees the committed booking.

use async_trait::async_trait;
use hs_shared::{OverlapPolicy, Pagination};
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool, Transaction};
use uuid::Uuid;

use hs_core::domain::entities::{Booking, BookingDetails};
use hs_core::errors::DomainError;
use hs_core::repositories::BookingRepository;

use super::{
    branch_summary, column, db_error, enum_column, room_summary, user_summary, uuid_column,
};

const BOOKING_COLUMNS: &str = "b.id, b.user_id, b.room_id, b.check_in, b.check_out, \
                               b.actual_check_in, b.actual_check_out, b.status, b.total_price, \
                               b.is_deleted, b.created_at, b.updated_at";

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &MySqlRow) -> Result<Booking, DomainError> {
        Ok(Booking {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            room_id: uuid_column(row, "room_id")?,
            check_in: column(row, "check_in")?,
            check_out: column(row, "check_out")?,
            actual_check_in: column(row, "actual_check_in")?,
            actual_check_out: column(row, "actual_check_out")?,
            status: enum_column(row, "status")?,
            total_price: column(row, "total_price")?,
            is_deleted: column(row, "is_deleted")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn row_to_details(row: &MySqlRow) -> Result<BookingDetails, DomainError> {
        let room = room_summary(row)?.map(|mut room| -> Result<_, DomainError> {
            room.branch = branch_summary(row)?;
            Ok(room)
        });

        Ok(BookingDetails {
            booking: Self::row_to_booking(row)?,
            user: user_summary(row)?,
            room: room.transpose()?,
        })
    }

    /// Conflict predicate over `existing` columns, binding the requested
    /// check-in then check-out
    fn conflict_clause(policy: OverlapPolicy) -> &'static str {
        match policy {
            OverlapPolicy::Containment => "check_in <= ? AND check_out >= ?",
            OverlapPolicy::Intersect => "check_out > ? AND check_in < ?",
        }
    }

    /// Lock the booking's room row for the rest of the transaction, then
    /// fail with the first other live booking whose stay conflicts
    async fn lock_room_and_check(
        tx: &mut Transaction<'_, MySql>,
        booking: &Booking,
        policy: OverlapPolicy,
    ) -> Result<(), DomainError> {
        let locked: Option<String> =
            sqlx::query_scalar("SELECT id FROM rooms WHERE id = ? FOR UPDATE")
                .bind(booking.room_id.to_string())
                .fetch_optional(&mut **tx)
                .await
                .map_err(db_error("Failed to lock room"))?;

        if locked.is_none() {
            return Err(DomainError::not_found("Room"));
        }

        let conflict_query = format!(
            "SELECT id FROM bookings \
             WHERE room_id = ? AND id <> ? AND is_deleted = FALSE AND {} LIMIT 1",
            Self::conflict_clause(policy)
        );
        let conflicting: Option<String> = sqlx::query_scalar(&conflict_query)
            .bind(booking.room_id.to_string())
            .bind(booking.id.to_string())
            .bind(booking.check_in)
            .bind(booking.check_out)
            .fetch_optional(&mut **tx)
            .await
            .map_err(db_error("Failed to check booking conflicts"))?;

        let Some(existing) = conflicting else {
            return Ok(());
        };

        let booking_id = Uuid::parse_str(&existing).map_err(|e| DomainError::Internal {
            message: format!("Invalid booking UUID: {}", e),
        })?;
        tracing::debug!(
            room_id = %booking.room_id,
            booking_id = %booking.id,
            conflicting_booking_id = %booking_id,
            policy = policy.as_str(),
            event = "booking_conflict",
            "Rejected conflicting booking"
        );
        Err(DomainError::BookingConflict { booking_id })
    }

    fn update_query(booking: &Booking) -> Query<'static, MySql, MySqlArguments> {
        sqlx::query(
            r#"
            UPDATE bookings
            SET check_in = ?, check_out = ?, actual_check_in = ?, actual_check_out = ?,
                status = ?, total_price = ?, is_deleted = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.actual_check_in)
        .bind(booking.actual_check_out)
        .bind(booking.status.as_str())
        .bind(booking.total_price)
        .bind(booking.is_deleted)
        .bind(booking.updated_at)
        .bind(booking.id.to_string())
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!("SELECT {} FROM bookings b WHERE b.id = ? LIMIT 1", BOOKING_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find booking"))?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn list_active(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<BookingDetails>, DomainError> {
        let query = format!(
            r#"
            SELECT {},
                u.id AS u_id, u.name AS u_name, u.email AS u_email,
                u.phone_number AS u_phone_number,
                r.id AS r_id, r.room_number AS r_room_number, r.room_type AS r_room_type,
                r.price AS r_price,
                br.id AS br_id, br.name AS br_name, br.address AS br_address
            FROM bookings b
            LEFT JOIN users u ON u.id = b.user_id
            LEFT JOIN rooms r ON r.id = b.room_id
            LEFT JOIN branches br ON br.id = r.branch_id
            WHERE b.is_deleted = FALSE
            ORDER BY b.created_at DESC
            LIMIT ? OFFSET ?
            "#,
            BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list bookings"))?;

        rows.iter().map(Self::row_to_details).collect()
    }

    async fn count_active(&self) -> Result<u64, DomainError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE is_deleted = FALSE")
                .fetch_one(&self.pool)
                .await
                .map_err(db_error("Failed to count bookings"))?;

        Ok(total as u64)
    }

    async fn create_exclusive(
        &self,
        booking: Booking,
        policy: OverlapPolicy,
    ) -> Result<Booking, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin booking transaction"))?;

        Self::lock_room_and_check(&mut tx, &booking, policy).await?;

        let insert = r#"
            INSERT INTO bookings (
                id, user_id, room_id, check_in, check_out, actual_check_in, actual_check_out,
                status, total_price, is_deleted, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(insert)
            .bind(booking.id.to_string())
            .bind(booking.user_id.to_string())
            .bind(booking.room_id.to_string())
            .bind(booking.check_in)
            .bind(booking.check_out)
            .bind(booking.actual_check_in)
            .bind(booking.actual_check_out)
            .bind(booking.status.as_str())
            .bind(booking.total_price)
            .bind(booking.is_deleted)
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to create booking"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit booking transaction"))?;

        Ok(booking)
    }

    async fn update_exclusive(
        &self,
        booking: Booking,
        policy: OverlapPolicy,
    ) -> Result<Booking, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin booking transaction"))?;

        Self::lock_room_and_check(&mut tx, &booking, policy).await?;

        let result = Self::update_query(&booking)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to update booking"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Booking"));
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit booking transaction"))?;

        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let result = Self::update_query(&booking)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update booking"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Booking"));
        }

        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_clause_binds_requested_range_in_order() {
        assert_eq!(
            MySqlBookingRepository::conflict_clause(OverlapPolicy::Containment),
            "check_in <= ? AND check_out >= ?"
        );
        assert_eq!(
            MySqlBookingRepository::conflict_clause(OverlapPolicy::Intersect),
            "check_out > ? AND check_in < ?"
        );
    }
}
