//! Platform location provider trait and raw platform types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options for a single location request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOptions {
    /// Ask the platform for its most accurate fix
    pub high_accuracy: bool,
    /// Maximum time to wait for a fix (milliseconds)
    pub timeout_ms: u64,
    /// Accept a cached fix no older than this (milliseconds, 0 = always fresh)
    pub max_cache_age_ms: u64,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            max_cache_age_ms: 0,
        }
    }
}

impl LocationOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn max_cache_age(&self) -> Duration {
        Duration::from_millis(self.max_cache_age_ms)
    }
}

/// Position fix as reported by the platform, not yet validated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy (meters)
    pub accuracy_m: f64,
    /// Fix time (milliseconds since epoch)
    pub timestamp_ms: u64,
}

/// Raw platform error, numbered like the W3C Geolocation API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    pub code: u16,
    pub message: String,
}

impl PlatformError {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn permission_denied() -> Self {
        Self::new(Self::PERMISSION_DENIED, "User denied Geolocation")
    }

    pub fn position_unavailable(message: impl Into<String>) -> Self {
        Self::new(Self::POSITION_UNAVAILABLE, message)
    }

    pub fn timeout() -> Self {
        Self::new(Self::TIMEOUT, "Timeout expired")
    }
}

/// Platform location capability
///
/// Implementations resolve once per call. They may return a cached fix when
/// `options.max_cache_age_ms` allows it and should not retry internally.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Request the current position
    async fn current_position(&self, options: &LocationOptions) -> Result<PlatformFix, PlatformError>;

    /// Name for log output
    fn name(&self) -> &str;
}
