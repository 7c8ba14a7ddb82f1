//! Hotel chain entity, the top of the catalog hierarchy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::non_blank;

/// A homestay or hotel chain owning one or more branches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// Unique identifier for the chain
    pub id: Uuid,
    
    /// Chain name
    pub name: String,
    
    /// Free-form description
    pub description: Option<String>,
    
    /// Soft-delete flag
    pub is_deleted: bool,
    
    /// Timestamp when the chain was created
    pub created_at: DateTime<Utc>,
    
    /// Timestamp when the chain was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChain {
    pub name: String,
    pub description: Option<String>,
}

/// Partial update for a chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Chain {
    /// Creates a new, non-deleted chain
    pub fn new(input: NewChain) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
    
    /// Merges the provided fields; blank strings leave the field unchanged
    pub fn apply(&mut self, patch: ChainPatch) {
        if let Some(name) = non_blank(patch.name) {
            self.name = name;
        }
        if let Some(description) = non_blank(patch.description) {
            self.description = Some(description);
        }
        self.updated_at = Utc::now();
    }
    
    /// Marks the chain as deleted
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
}
