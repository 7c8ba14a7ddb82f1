//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management and migrations
//! - Repository trait implementations for every aggregate

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlBookingRepository, MySqlBranchRepository, MySqlChainRepository, MySqlReviewRepository,
    MySqlRoomRepository, MySqlUserRepository,
};
