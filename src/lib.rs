//! Attendance Geofence
//!
//! Geofence membership for on-site attendance: haversine distance on a
//! spherical Earth, inclusive circular geofence checks, and a timeout-bounded
//! location acquisition adapter with classified failures.

pub mod core;
pub mod algorithms;
pub mod location;
pub mod validation;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{GeoPoint, Geofence, LocationSample, MembershipResult, EARTH_RADIUS_METERS};
pub use algorithms::{
    destination_point, distance_meters, evaluate_membership, evaluate_sample, haversine_distance,
    initial_bearing_degrees,
};
pub use location::{
    LocationAdapter, LocationError, LocationErrorKind, LocationOptions, LocationProvider, LocationResult,
    MockLocationProvider, MockResponse, PlatformError, PlatformFix,
};
pub use validation::{geofence_from_value, parse_geofence_settings, GeoError, GeoResult, GeofenceSettings};
pub use api::{
    FormattedReport, OutputFormat, PresenceError, PresenceReport, PresenceStatus, ReportFormatter,
    SitePresenceChecker,
};
pub use utils::{ConfigError, ConfigurationManager, GeofenceConfig};
