//! Booking entity and its lifecycle status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::room::RoomSummary;
use super::user::UserSummary;
use crate::domain::value_objects::Stay;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Booked,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "BOOKED",
            BookingStatus::CheckedIn => "CHECKED_IN",
            BookingStatus::CheckedOut => "CHECKED_OUT",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
    
    /// Reason a booking in this status can no longer be modified.
    ///
    /// Returns `None` while the booking is still editable.
    pub fn lock_message(&self) -> Option<&'static str> {
        match self {
            BookingStatus::Booked => None,
            BookingStatus::CheckedIn => Some("Booking is checked in"),
            BookingStatus::CheckedOut => Some("Booking is checked out"),
            BookingStatus::Cancelled => Some("Booking is cancelled"),
        }
    }
    
    pub fn is_locked(&self) -> bool {
        self.lock_message().is_some()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOOKED" => Ok(BookingStatus::Booked),
            "CHECKED_IN" => Ok(BookingStatus::CheckedIn),
            "CHECKED_OUT" => Ok(BookingStatus::CheckedOut),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            other => Err(format!("Unknown booking status: {}", other)),
        }
    }
}

/// A reservation of one room by one user for a time range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,
    
    /// Guest who made the booking
    pub user_id: Uuid,
    
    /// Booked room
    pub room_id: Uuid,
    
    /// Planned arrival
    pub check_in: DateTime<Utc>,
    
    /// Planned departure
    pub check_out: DateTime<Utc>,
    
    /// Recorded arrival
    pub actual_check_in: Option<DateTime<Utc>>,
    
    /// Recorded departure
    pub actual_check_out: Option<DateTime<Utc>>,
    
    /// Lifecycle status
    pub status: BookingStatus,
    
    /// Price for the whole stay
    pub total_price: f64,
    
    /// Soft-delete flag
    pub is_deleted: bool,
    
    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,
    
    /// Timestamp when the booking was last updated
    pub updated_at: DateTime<Utc>,
}

/// Incoming booking request before validation and pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub status: BookingStatus,
    /// Client-side estimate; replaced by the computed price
    pub total_price: f64,
    pub is_deleted: Option<bool>,
}

impl BookingRequest {
    pub fn stay(&self) -> Stay {
        Stay::new(self.check_in, self.check_out)
    }
}

/// Partial update for a booking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub actual_check_in: Option<DateTime<Utc>>,
    pub actual_check_out: Option<DateTime<Utc>>,
    pub status: Option<BookingStatus>,
    pub total_price: Option<f64>,
}

/// Booking joined with its guest and room summaries for listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    #[serde(flatten)]
    pub booking: Booking,
    pub user: Option<UserSummary>,
    pub room: Option<RoomSummary>,
}

impl Booking {
    /// Creates a booking from a validated request and its computed price
    pub fn new(request: BookingRequest, total_price: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            room_id: request.room_id,
            check_in: request.check_in,
            check_out: request.check_out,
            actual_check_in: None,
            actual_check_out: None,
            status: request.status,
            total_price,
            is_deleted: request.is_deleted.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }
    
    /// Planned stay of this booking
    pub fn stay(&self) -> Stay {
        Stay::new(self.check_in, self.check_out)
    }
    
    /// Merges the provided fields onto this booking
    pub fn apply(&mut self, patch: BookingPatch) {
        if let Some(check_in) = patch.check_in {
            self.check_in = check_in;
        }
        if let Some(check_out) = patch.check_out {
            self.check_out = check_out;
        }
        if let Some(actual_check_in) = patch.actual_check_in {
            self.actual_check_in = Some(actual_check_in);
        }
        if let Some(actual_check_out) = patch.actual_check_out {
            self.actual_check_out = Some(actual_check_out);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(total_price) = patch.total_price {
            self.total_price = total_price;
        }
        self.updated_at = Utc::now();
    }
    
    /// Marks the booking as deleted
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
}
