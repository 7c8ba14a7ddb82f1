//! Review service module with branch/room rating aggregation.

mod service;

pub use service::{combine_branch_rating, ReviewListing, ReviewQuery, ReviewService};
