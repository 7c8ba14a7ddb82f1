//! MySQL database implementations
//!
//! Row decoding helpers shared by the repositories live here. Identifiers are
//! stored as `CHAR(36)` strings and enums as their upper-case names.

mod booking_repository;
mod branch_repository;
mod chain_repository;
mod review_repository;
mod room_repository;
mod user_repository;

pub use booking_repository::MySqlBookingRepository;
pub use branch_repository::MySqlBranchRepository;
pub use chain_repository::MySqlChainRepository;
pub use review_repository::MySqlReviewRepository;
pub use room_repository::MySqlRoomRepository;
pub use user_repository::MySqlUserRepository;

use std::str::FromStr;

use sqlx::mysql::MySqlRow;
use sqlx::{Decode, MySql, Row, Type};
use uuid::Uuid;

use hs_core::domain::entities::{BranchSummary, RoomSummary, UserSummary};
use hs_core::errors::DomainError;

/// Map a SQLx error to an internal domain error with context
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

/// Read a typed column
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    parse_uuid(name, &raw)
}

pub(crate) fn optional_uuid_column(
    row: &MySqlRow,
    name: &str,
) -> Result<Option<Uuid>, DomainError> {
    let raw: Option<String> = column(row, name)?;
    raw.map(|value| parse_uuid(name, &value)).transpose()
}

/// Read an enum stored by its upper-case name
pub(crate) fn enum_column<T>(row: &MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = String>,
{
    let raw: String = column(row, name)?;
    raw.parse().map_err(|e| DomainError::Internal {
        message: format!("Invalid {}: {}", name, e),
    })
}

fn parse_uuid(name: &str, raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", name, e),
    })
}

/// `u_*` columns of a LEFT JOIN on `users`
pub(crate) fn user_summary(row: &MySqlRow) -> Result<Option<UserSummary>, DomainError> {
    let Some(id) = optional_uuid_column(row, "u_id")? else {
        return Ok(None);
    };

    Ok(Some(UserSummary {
        id,
        name: column(row, "u_name")?,
        email: column(row, "u_email")?,
        phone_number: column(row, "u_phone_number")?,
    }))
}

/// `br_*` columns of a LEFT JOIN on `branches`
pub(crate) fn branch_summary(row: &MySqlRow) -> Result<Option<BranchSummary>, DomainError> {
    let Some(id) = optional_uuid_column(row, "br_id")? else {
        return Ok(None);
    };

    Ok(Some(BranchSummary {
        id,
        name: column(row, "br_name")?,
        address: column(row, "br_address")?,
    }))
}

/// `r_*` columns of a LEFT JOIN on `rooms`; the branch is left unset
pub(crate) fn room_summary(row: &MySqlRow) -> Result<Option<RoomSummary>, DomainError> {
    let Some(id) = optional_uuid_column(row, "r_id")? else {
        return Ok(None);
    };

    Ok(Some(RoomSummary {
        id,
        room_number: column(row, "r_room_number")?,
        room_type: column(row, "r_room_type")?,
        price: column(row, "r_price")?,
        branch: None,
    }))
}
