//! Guest review of a branch or a room.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::branch::BranchSummary;
use super::non_blank;
use super::room::RoomSummary;
use super::user::UserSummary;

/// Lowest accepted rating
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating
pub const MAX_RATING: i32 = 5;

/// A rating left by a user for a branch, a room, or both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique identifier for the review
    pub id: Uuid,
    
    /// Author
    pub user_id: Uuid,
    
    /// Reviewed branch
    pub branch_id: Option<Uuid>,
    
    /// Reviewed room
    pub room_id: Option<Uuid>,
    
    /// Rating between 1 and 5
    pub rating: i32,
    
    /// Free-form comment
    pub comment: Option<String>,
    
    /// Soft-delete flag
    pub is_deleted: bool,
    
    /// Timestamp when the review was created
    pub created_at: DateTime<Utc>,
    
    /// Timestamp when the review was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub room_id: Option<Uuid>,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Partial update for a review
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// Optional filters for review listings (AND semantics)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub user_id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    pub room_id: Option<Uuid>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        self.user_id.map_or(true, |id| review.user_id == id)
            && self.branch_id.map_or(true, |id| review.branch_id == Some(id))
            && self.room_id.map_or(true, |id| review.room_id == Some(id))
    }
}

/// Set of non-deleted reviews an average rating is computed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingScope {
    /// Reviews attached to one room
    Room(Uuid),
    /// Reviews attached directly to a branch
    Branch(Uuid),
    /// Reviews attached to any of the given rooms
    Rooms(Vec<Uuid>),
}

impl RatingScope {
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            RatingScope::Room(id) => review.room_id == Some(*id),
            RatingScope::Branch(id) => review.branch_id == Some(*id),
            RatingScope::Rooms(ids) => review.room_id.map_or(false, |id| ids.contains(&id)),
        }
    }
}

/// Review joined with author, branch and room summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDetails {
    #[serde(flatten)]
    pub review: Review,
    pub user: Option<UserSummary>,
    pub branch: Option<BranchSummary>,
    pub room: Option<RoomSummary>,
}

impl Review {
    /// Creates a new, non-deleted review
    pub fn new(input: NewReview) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            branch_id: input.branch_id,
            room_id: input.room_id,
            rating: input.rating,
            comment: input.comment,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
    
    /// Merges the provided fields; a blank comment leaves it unchanged
    pub fn apply(&mut self, patch: ReviewPatch) {
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(comment) = non_blank(patch.comment) {
            self.comment = Some(comment);
        }
        self.updated_at = Utc::now();
    }
    
    /// Marks the review as deleted
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
}
