//! Catalog services: chains, their branches, and the rooms of each branch.

mod branch;
mod chain;
mod room;

pub use branch::BranchService;
pub use chain::ChainService;
pub use room::RoomService;

use crate::errors::{DomainResult, ValidationError};

fn require(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests;
