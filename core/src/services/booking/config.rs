//! Configuration for the booking service

use hs_shared::{BookingConfig, OverlapPolicy};

/// Configuration for the booking service
#[derive(Debug, Clone, Default)]
pub struct BookingServiceConfig {
    /// Predicate deciding when two stays on the same room clash
    pub overlap_policy: OverlapPolicy,
}

impl From<&BookingConfig> for BookingServiceConfig {
    fn from(config: &BookingConfig) -> Self {
        Self {
            overlap_policy: config.overlap_policy,
        }
    }
}
