//! Half-open time range a guest occupies a room for.

use chrono::{DateTime, Utc};
use hs_shared::config::OverlapPolicy;
use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// `[check_in, check_out)` for one booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

impl Stay {
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Check-in strictly precedes check-out
    pub fn is_ordered(&self) -> bool {
        self.check_in < self.check_out
    }

    /// Duration in hours, fractional hours included
    pub fn hours(&self) -> f64 {
        (self.check_out - self.check_in).num_milliseconds() as f64 / MILLIS_PER_HOUR
    }

    /// `other` lies entirely inside this stay (bounds inclusive)
    pub fn contains(&self, other: &Stay) -> bool {
        self.check_in <= other.check_in && self.check_out >= other.check_out
    }

    /// The two half-open ranges share at least one instant
    pub fn intersects(&self, other: &Stay) -> bool {
        other.check_in < self.check_out && self.check_in < other.check_out
    }

    /// Whether `requested` may not be booked alongside this existing stay
    pub fn conflicts_with(&self, requested: &Stay, policy: OverlapPolicy) -> bool {
        match policy {
            OverlapPolicy::Containment => self.contains(requested),
            OverlapPolicy::Intersect => self.intersects(requested),
        }
    }
}
