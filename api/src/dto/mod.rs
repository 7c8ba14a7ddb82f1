//! Request bodies and query strings accepted by the HTTP layer.
//!
//! Each DTO converts into the matching `hs_core` input type. Checks that
//! belong to the business rules stay in the services; DTOs only enforce
//! storage limits such as column lengths.

pub mod booking;
pub mod branch;
pub mod chain;
pub mod review;
pub mod room;
pub mod user;

use hs_shared::{PageQuery, Pagination};

pub use booking::{BookingListQuery, CreateBookingRequest, UpdateBookingRequest};
pub use branch::{BranchListQuery, CreateBranchRequest, UpdateBranchRequest};
pub use chain::{ChainListQuery, CreateChainRequest, UpdateChainRequest};
pub use review::{CreateReviewRequest, ReviewListQuery, UpdateReviewRequest};
pub use room::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, UserListQuery};

/// Lenient `limit`/`page` parsing: anything that is not a number counts as unset
pub(crate) fn pagination(limit: Option<&str>, page: Option<&str>) -> Pagination {
    let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<i64>().ok());
    PageQuery::new(parse(limit), parse(page)).pagination()
}
