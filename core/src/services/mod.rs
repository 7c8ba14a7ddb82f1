//! Business services containing domain logic and use cases.

pub mod booking;
pub mod catalog;
pub mod review;
pub mod user;

// Re-export commonly used types
pub use booking::{BookingService, BookingServiceConfig};
pub use catalog::{BranchService, ChainService, RoomService};
pub use review::{combine_branch_rating, ReviewListing, ReviewQuery, ReviewService};
pub use user::UserService;
