//! Authentication configuration
//!
//! Tokens are issued elsewhere; this service only verifies them.

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Shared HS256 secret used to verify access tokens
    pub jwt_secret: String,

    /// Allowed clock skew in seconds when checking `exp`
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_SECRET),
            leeway_seconds: default_leeway(),
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let jwt_secret =
            std::env::var("JWT_ACCESS_SECRET").unwrap_or_else(|_| String::from(DEFAULT_SECRET));
        let leeway_seconds = std::env::var("JWT_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_leeway);

        Self {
            jwt_secret,
            leeway_seconds,
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}

fn default_leeway() -> u64 {
    30
}
