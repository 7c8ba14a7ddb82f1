//! Booking rule configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Predicate used to decide whether two stays on the same room conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Only reject a stay that lies entirely inside an existing one.
    /// Partial overlaps are accepted.
    Containment,
    /// Reject any stay whose half-open range intersects an existing one
    #[default]
    Intersect,
}

impl OverlapPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapPolicy::Containment => "containment",
            OverlapPolicy::Intersect => "intersect",
        }
    }
}

impl FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "containment" | "contain" => Ok(OverlapPolicy::Containment),
            "intersect" | "overlap" => Ok(OverlapPolicy::Intersect),
            other => Err(format!("Unknown overlap policy: {}", other)),
        }
    }
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking engine configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BookingConfig {
    /// Conflict predicate for stays on the same room
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,
}

impl BookingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let overlap_policy = std::env::var("BOOKING_OVERLAP_POLICY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self { overlap_policy }
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("containment".parse::<OverlapPolicy>(), Ok(OverlapPolicy::Containment));
        assert_eq!(" Intersect ".parse::<OverlapPolicy>(), Ok(OverlapPolicy::Intersect));
        assert!("sometimes".parse::<OverlapPolicy>().is_err());
    }

    #[test]
    fn test_policy_serialization() {
        let json = serde_json::to_string(&OverlapPolicy::Containment).unwrap();
        assert_eq!(json, "\"containment\"");
        assert_eq!(BookingConfig::default().overlap_policy, OverlapPolicy::Intersect);
    }
}
