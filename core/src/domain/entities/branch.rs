//! Branch entity: one physical property belonging to a chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::non_blank;

/// A physical location of a chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Unique identifier for the branch
    pub id: Uuid,
    
    /// Owning chain
    pub chain_id: Uuid,
    
    /// Branch name
    pub name: String,
    
    /// Street address
    pub address: String,
    
    /// Front desk phone number
    pub phone: String,
    
    /// Managing user, if assigned
    pub manager_id: Option<Uuid>,
    
    /// Soft-delete flag
    pub is_deleted: bool,
    
    /// Timestamp when the branch was created
    pub created_at: DateTime<Utc>,
    
    /// Timestamp when the branch was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBranch {
    pub chain_id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub manager_id: Option<Uuid>,
}

/// Partial update for a branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPatch {
    pub chain_id: Option<Uuid>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_id: Option<Uuid>,
}

/// Optional filters for branch listings (AND semantics)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchFilter {
    pub chain_id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
}

impl BranchFilter {
    pub fn matches(&self, branch: &Branch) -> bool {
        self.chain_id.map_or(true, |id| branch.chain_id == id)
            && self.branch_id.map_or(true, |id| branch.id == id)
    }
}

/// Branch fields embedded in room summaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchSummary {
    pub id: Uuid,
    pub name: String,
    pub address: String,
}

impl Branch {
    /// Creates a new, non-deleted branch
    pub fn new(input: NewBranch) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            chain_id: input.chain_id,
            name: input.name,
            address: input.address,
            phone: input.phone,
            manager_id: input.manager_id,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
    
    /// Merges the provided fields; blank strings leave the field unchanged
    pub fn apply(&mut self, patch: BranchPatch) {
        if let Some(chain_id) = patch.chain_id {
            self.chain_id = chain_id;
        }
        if let Some(name) = non_blank(patch.name) {
            self.name = name;
        }
        if let Some(address) = non_blank(patch.address) {
            self.address = address;
        }
        if let Some(phone) = non_blank(patch.phone) {
            self.phone = phone;
        }
        if let Some(manager_id) = patch.manager_id {
            self.manager_id = Some(manager_id);
        }
        self.updated_at = Utc::now();
    }
    
    /// Marks the branch as deleted
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
    
    pub fn summary(&self) -> BranchSummary {
        BranchSummary {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
        }
    }
}
