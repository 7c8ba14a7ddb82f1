//! Room entity and its occupancy status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::branch::BranchSummary;
use super::non_blank;
use crate::domain::value_objects::Stay;

/// Occupancy status of a room
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "AVAILABLE",
            RoomStatus::Occupied => "OCCUPIED",
            RoomStatus::Maintenance => "MAINTENANCE",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(RoomStatus::Available),
            "OCCUPIED" => Ok(RoomStatus::Occupied),
            "MAINTENANCE" => Ok(RoomStatus::Maintenance),
            other => Err(format!("Unknown room status: {}", other)),
        }
    }
}

/// A bookable room within a branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique identifier for the room
    pub id: Uuid,
    
    /// Branch the room belongs to
    pub branch_id: Uuid,
    
    /// Room number as shown to guests
    pub room_number: String,
    
    /// Room category (e.g. "SINGLE", "DELUXE")
    #[serde(rename = "type")]
    pub room_type: String,
    
    /// Current occupancy status
    pub status: RoomStatus,
    
    /// Price per hour
    pub price: f64,
    
    /// Free-form description
    pub description: Option<String>,
    
    /// Soft-delete flag
    pub is_deleted: bool,
    
    /// Timestamp when the room was created
    pub created_at: DateTime<Utc>,
    
    /// Timestamp when the room was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub branch_id: Uuid,
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub status: Option<RoomStatus>,
    pub price: f64,
    pub description: Option<String>,
}

/// Partial update for a room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPatch {
    pub room_number: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub status: Option<RoomStatus>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// Optional filters for room listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub branch_id: Option<Uuid>,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        self.branch_id.map_or(true, |id| room.branch_id == id)
    }
}

/// Room fields embedded in booking listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: Uuid,
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
    pub branch: Option<BranchSummary>,
}

impl Room {
    /// Creates a new, non-deleted room
    pub fn new(input: NewRoom) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            branch_id: input.branch_id,
            room_number: input.room_number,
            room_type: input.room_type,
            status: input.status.unwrap_or_default(),
            price: input.price,
            description: input.description,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
    
    /// Hourly price multiplied by the stay length
    pub fn price_for(&self, stay: &Stay) -> f64 {
        self.price * stay.hours()
    }
    
    /// Merges the provided fields; blank strings leave the field unchanged
    pub fn apply(&mut self, patch: RoomPatch) {
        if let Some(room_number) = non_blank(patch.room_number) {
            self.room_number = room_number;
        }
        if let Some(room_type) = non_blank(patch.room_type) {
            self.room_type = room_type;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = non_blank(patch.description) {
            self.description = Some(description);
        }
        self.updated_at = Utc::now();
    }
    
    /// Marks the room as deleted
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
    
    pub fn summary(&self, branch: Option<BranchSummary>) -> RoomSummary {
        RoomSummary {
            id: self.id,
            room_number: self.room_number.clone(),
            room_type: self.room_type.clone(),
            price: self.price,
            branch,
        }
    }
}
