//! Timeout-bounded location acquisition with error classification

use crate::core::{GeoPoint, LocationSample};
use crate::location::error::{LocationError, LocationResult};
use crate::location::provider::{LocationOptions, LocationProvider, PlatformError, PlatformFix};
use crate::validation::error::GeoError;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Acquires location samples from an optional platform provider
#[derive(Clone)]
pub struct LocationAdapter {
    provider: Option<Arc<dyn LocationProvider>>,
}

impl fmt::Debug for LocationAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationAdapter")
            .field("provider", &self.provider.as_ref().map(|provider| provider.name()))
            .finish()
    }
}

impl LocationAdapter {
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Adapter for a platform without location support
    pub fn unavailable() -> Self {
        Self { provider: None }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Request one location sample
    ///
    /// Resolves with exactly one sample or one classified error. The wait is
    /// bounded by `options.timeout_ms`; no retries are made.
    pub async fn acquire_location(&self, options: &LocationOptions) -> LocationResult<LocationSample> {
        let Some(provider) = &self.provider else {
            let error = LocationError::CapabilityUnavailable;
            warn!(kind = ?error.kind(), error = %error, "location_failed");
            return Err(error);
        };

        debug!(
            provider = provider.name(),
            high_accuracy = options.high_accuracy,
            timeout_ms = options.timeout_ms,
            max_cache_age_ms = options.max_cache_age_ms,
            "location_requested"
        );

        let outcome = tokio::time::timeout(options.timeout(), provider.current_position(options)).await;

        let result = match outcome {
            Err(_elapsed) => Err(LocationError::TimedOut {
                timeout_ms: options.timeout_ms,
            }),
            Ok(Err(platform_error)) => Err(classify(platform_error, options)),
            Ok(Ok(fix)) => sample_from_fix(fix),
        };

        match &result {
            Ok(sample) => info!(
                provider = provider.name(),
                latitude = sample.point.latitude,
                longitude = sample.point.longitude,
                accuracy_m = sample.accuracy_meters,
                "location_acquired"
            ),
            Err(error) => warn!(
                provider = provider.name(),
                kind = ?error.kind(),
                error = %error,
                "location_failed"
            ),
        }

        result
    }
}

/// Map a raw platform error code onto the closed error set
fn classify(error: PlatformError, options: &LocationOptions) -> LocationError {
    match error.code {
        PlatformError::PERMISSION_DENIED => LocationError::PermissionDenied,
        PlatformError::TIMEOUT => LocationError::TimedOut {
            timeout_ms: options.timeout_ms,
        },
        PlatformError::POSITION_UNAVAILABLE => LocationError::PositionUnavailable {
            detail: error.message,
        },
        code => LocationError::PositionUnavailable {
            detail: format!("platform error {}: {}", code, error.message),
        },
    }
}

/// Validate a platform fix into a sample
fn sample_from_fix(fix: PlatformFix) -> LocationResult<LocationSample> {
    let invalid = |e: GeoError| LocationError::PositionUnavailable {
        detail: format!("platform returned an invalid fix: {}", e),
    };
    let point = GeoPoint::new(fix.latitude, fix.longitude).map_err(invalid)?;
    LocationSample::new(point, fix.accuracy_m, fix.timestamp_ms).map_err(invalid)
}
