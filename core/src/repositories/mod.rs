//! Repository interfaces for persistence, with in-memory mocks for tests.

pub mod booking;
pub mod branch;
pub mod chain;
pub mod review;
pub mod room;
pub mod user;

pub use booking::BookingRepository;
pub use branch::BranchRepository;
pub use chain::ChainRepository;
pub use review::ReviewRepository;
pub use room::RoomRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "testing"))]
pub use booking::MockBookingRepository;
#[cfg(any(test, feature = "testing"))]
pub use branch::MockBranchRepository;
#[cfg(any(test, feature = "testing"))]
pub use chain::MockChainRepository;
#[cfg(any(test, feature = "testing"))]
pub use review::MockReviewRepository;
#[cfg(any(test, feature = "testing"))]
pub use room::MockRoomRepository;
#[cfg(any(test, feature = "testing"))]
pub use user::MockUserRepository;
