//! Domain entities representing core business objects.

pub mod booking;
pub mod branch;
pub mod chain;
pub mod review;
pub mod room;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use booking::{Booking, BookingDetails, BookingPatch, BookingRequest, BookingStatus};
pub use branch::{Branch, BranchFilter, BranchPatch, BranchSummary, NewBranch};
pub use chain::{Chain, ChainPatch, NewChain};
pub use review::{NewReview, RatingScope, Review, ReviewDetails, ReviewFilter, ReviewPatch};
pub use room::{NewRoom, Room, RoomFilter, RoomPatch, RoomStatus, RoomSummary};
pub use user::{NewUser, User, UserPatch, UserRole, UserSummary};

/// Treat blank strings in partial updates as "not provided"
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
