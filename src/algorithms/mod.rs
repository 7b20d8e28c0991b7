//! Geospatial algorithms

pub mod haversine;
pub mod membership;

pub use haversine::{destination_point, distance_meters, haversine_distance, initial_bearing_degrees};
pub use membership::{evaluate_membership, evaluate_sample};
