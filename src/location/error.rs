//! Classified location acquisition failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for location acquisition
pub type LocationResult<T> = Result<T, LocationError>;

/// Location acquisition failure, normalized from platform error codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The platform offers no location capability
    #[error("location capability unavailable")]
    CapabilityUnavailable,
    /// The user declined to share location
    #[error("location permission denied")]
    PermissionDenied,
    /// The platform could not determine a position
    #[error("position unavailable: {detail}")]
    PositionUnavailable { detail: String },
    /// No result within the requested timeout
    #[error("location request timed out after {timeout_ms}ms")]
    TimedOut { timeout_ms: u64 },
}

/// Discriminant of [`LocationError`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationErrorKind {
    CapabilityUnavailable,
    PermissionDenied,
    PositionUnavailable,
    TimedOut,
}

impl LocationError {
    pub fn kind(&self) -> LocationErrorKind {
        match self {
            LocationError::CapabilityUnavailable => LocationErrorKind::CapabilityUnavailable,
            LocationError::PermissionDenied => LocationErrorKind::PermissionDenied,
            LocationError::PositionUnavailable { .. } => LocationErrorKind::PositionUnavailable,
            LocationError::TimedOut { .. } => LocationErrorKind::TimedOut,
        }
    }

    /// Message shown to the person trying to clock in
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::CapabilityUnavailable => {
                "This device or browser does not support location services. Use a device with location support to clock in."
            }
            LocationError::PermissionDenied => {
                "Location access was denied. Enable location permission for this site in your settings and try again."
            }
            LocationError::PositionUnavailable { .. } => {
                "Your position could not be determined. Move to an area with better signal and try again."
            }
            LocationError::TimedOut { .. } => {
                "Getting your location took too long. Please try again."
            }
        }
    }

    /// Whether asking again without user action can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LocationError::PositionUnavailable { .. } | LocationError::TimedOut { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_errors() -> Vec<LocationError> {
        vec![
            LocationError::CapabilityUnavailable,
            LocationError::PermissionDenied,
            LocationError::PositionUnavailable { detail: "no fix".to_string() },
            LocationError::TimedOut { timeout_ms: 5000 },
        ]
    }

    #[test]
    fn test_each_kind_has_distinct_message() {
        let messages: HashSet<_> = all_errors().iter().map(|e| e.user_message()).collect();
        assert_eq!(messages.len(), 4);

        let kinds: HashSet<_> = all_errors().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds.len(), 4);
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(!LocationError::CapabilityUnavailable.is_retryable());
        assert!(!LocationError::PermissionDenied.is_retryable());
        assert!(LocationError::TimedOut { timeout_ms: 1 }.is_retryable());
        assert!(LocationError::PositionUnavailable { detail: String::new() }.is_retryable());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            LocationError::TimedOut { timeout_ms: 250 }.to_string(),
            "location request timed out after 250ms"
        );
    }
}
