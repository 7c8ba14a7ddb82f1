//! Booking availability and pricing engine.

mod config;
mod service;

pub use config::BookingServiceConfig;
pub use service::BookingService;
