//! Core value types and constants for geofence evaluation

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
