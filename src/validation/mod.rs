//! Input validation and the backend payload boundary

pub mod error;
pub mod boundary;

pub use error::{GeoError, GeoResult};
pub use boundary::{geofence_from_value, parse_geofence_settings, GeofenceSettings};
