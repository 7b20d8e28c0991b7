//! Site presence check demonstration
//!
//! Configures a site, scripts a mock location provider with a few platform
//! outcomes, and runs a presence check for each one.

use attendance_geofence::{
    destination_point, ConfigurationManager, GeofenceSettings, LocationAdapter, MockLocationProvider,
    MockResponse, OutputFormat, PlatformError, PlatformFix, ReportFormatter, SitePresenceChecker,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    println!("=== Attendance Geofence - Site Check Demo ===\n");

    let mut config = ConfigurationManager::new();
    config.set_location_timeout(500)?;
    let fence = config.set_site(GeofenceSettings::new(14.2486, 121.1258, 100.0))?;
    info!(center = %fence.center, radius_m = fence.radius_meters, "site_configured");

    let provider = Arc::new(MockLocationProvider::new());
    for (bearing, distance) in [(0.0, 80.0), (0.0, 150.0), (90.0, 99.6)] {
        let point = destination_point(&fence.center, bearing, distance);
        provider.push(MockResponse::Fix(PlatformFix {
            latitude: point.latitude,
            longitude: point.longitude,
            accuracy_m: 12.0,
            timestamp_ms: 1_700_000_000_000,
        }));
    }
    provider.push(MockResponse::Error(PlatformError::permission_denied()));
    provider.push(MockResponse::Hang);

    let checker = SitePresenceChecker::new(LocationAdapter::new(provider), fence)
        .with_options(config.location_options());
    let formatter = ReportFormatter::new();

    for attempt in 1..=5 {
        match checker.check().await {
            Ok(report) => {
                println!("#{} {}", attempt, formatter.format(&report, OutputFormat::Text)?);
                println!("   {}", formatter.format(&report, OutputFormat::Json)?);
            }
            Err(error) => println!("#{} {} ({})", attempt, error.user_message(), error),
        }
    }

    let unsupported = SitePresenceChecker::new(LocationAdapter::unavailable(), fence);
    if let Err(error) = unsupported.check().await {
        println!("unsupported platform: {}", error.user_message());
    }

    Ok(())
}
