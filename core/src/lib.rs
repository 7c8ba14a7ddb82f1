//! # Homestay Core
//!
//! Core business logic and domain layer for the Homestay backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Booking, BookingDetails, BookingPatch, BookingRequest, BookingStatus, Branch, BranchFilter,
    BranchPatch, BranchSummary, Chain, ChainPatch, NewBranch, NewChain, NewReview, NewRoom,
    RatingScope, Review, ReviewDetails, ReviewFilter, ReviewPatch, Room, RoomFilter, RoomPatch,
    RoomStatus, RoomSummary, NewUser, User, UserPatch, UserRole, UserSummary,
};
pub use domain::value_objects::Stay;
pub use errors::{DomainError, DomainResult, ValidationError};
pub use repositories::{
    BookingRepository, BranchRepository, ChainRepository, ReviewRepository, RoomRepository,
    UserRepository,
};
pub use services::{
    BookingService, BookingServiceConfig, BranchService, ChainService, ReviewListing,
    ReviewQuery, ReviewService, RoomService, UserService,
};
