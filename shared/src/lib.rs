//! Shared configuration and common types for the Homestay server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON response envelope returned by every endpoint
//! - Offset pagination parameters and metadata

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, BookingConfig, DatabaseConfig, Environment, OverlapPolicy,
    ServerConfig,
};
pub use types::{BaseResponse, Page, PageInfo, PageQuery, Pagination};
