//! Core data types for geofence evaluation

use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::validation::error::{GeoError, GeoResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting non-finite or out-of-range coordinates
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        let point = Self { latitude, longitude };
        point.validate()?;
        Ok(point)
    }

    /// Check that both coordinates are finite
    pub fn ensure_finite(&self) -> GeoResult<()> {
        if !self.latitude.is_finite() {
            return Err(GeoError::invalid("latitude", format!("{} is not finite", self.latitude)));
        }
        if !self.longitude.is_finite() {
            return Err(GeoError::invalid("longitude", format!("{} is not finite", self.longitude)));
        }
        Ok(())
    }

    /// Check finiteness and the latitude/longitude ranges
    pub fn validate(&self) -> GeoResult<()> {
        self.ensure_finite()?;

        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            return Err(GeoError::invalid(
                "latitude",
                format!("{} outside [{}, {}]", self.latitude, MIN_LATITUDE, MAX_LATITUDE),
            ));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude) {
            return Err(GeoError::invalid(
                "longitude",
                format!("{} outside [{}, {}]", self.longitude, MIN_LONGITUDE, MAX_LONGITUDE),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawGeoPoint) -> GeoResult<Self> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// One timestamped reading of device position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocationSample")]
pub struct LocationSample {
    pub point: GeoPoint,
    /// Estimated horizontal accuracy (meters)
    pub accuracy_meters: f64,
    /// Capture time (milliseconds since epoch)
    pub captured_at_epoch_millis: u64,
}

impl LocationSample {
    /// Create a sample, rejecting an invalid point or a negative/non-finite accuracy
    pub fn new(point: GeoPoint, accuracy_meters: f64, captured_at_epoch_millis: u64) -> GeoResult<Self> {
        point.validate()?;
        if !accuracy_meters.is_finite() || accuracy_meters < 0.0 {
            return Err(GeoError::invalid(
                "accuracy_meters",
                format!("{} is not a non-negative finite accuracy", accuracy_meters),
            ));
        }
        Ok(Self {
            point,
            accuracy_meters,
            captured_at_epoch_millis,
        })
    }
}

#[derive(Deserialize)]
struct RawLocationSample {
    point: GeoPoint,
    accuracy_meters: f64,
    captured_at_epoch_millis: u64,
}

impl TryFrom<RawLocationSample> for LocationSample {
    type Error = GeoError;

    fn try_from(raw: RawLocationSample) -> GeoResult<Self> {
        LocationSample::new(raw.point, raw.accuracy_meters, raw.captured_at_epoch_millis)
    }
}

/// Circular site boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeofence")]
pub struct Geofence {
    pub center: GeoPoint,
    pub radius_meters: f64,
}

impl Geofence {
    /// Create a fence around a validated center with a positive radius
    pub fn new(center: GeoPoint, radius_meters: f64) -> GeoResult<Self> {
        center.validate()?;
        let fence = Self { center, radius_meters };
        fence.ensure_radius()?;
        Ok(fence)
    }

    pub(crate) fn ensure_radius(&self) -> GeoResult<()> {
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(GeoError::invalid(
                "radius_meters",
                format!("{} is not a positive finite radius", self.radius_meters),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawGeofence {
    center: GeoPoint,
    radius_meters: f64,
}

impl TryFrom<RawGeofence> for Geofence {
    type Error = GeoError;

    fn try_from(raw: RawGeofence) -> GeoResult<Self> {
        Geofence::new(raw.center, raw.radius_meters)
    }
}

/// Outcome of a membership check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MembershipResult {
    pub is_within: bool,
    /// Distance to the fence center, rounded to whole meters (display only)
    pub distance_meters: f64,
    pub fence: Geofence,
}

impl fmt::Display for MembershipResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_within { "inside" } else { "outside" };
        write!(
            f,
            "{} geofence: {:.0} m from {} (radius {:.0} m)",
            verdict, self.distance_meters, self.fence.center, self.fence.radius_meters
        )
    }
}
