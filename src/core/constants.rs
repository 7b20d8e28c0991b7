//! Physical constants and coordinate bounds

/// Earth mean radius used by the haversine model (meters)
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Valid latitude range (degrees)
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Valid longitude range (degrees)
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
