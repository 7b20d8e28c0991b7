//! Geofence membership evaluation
//!
//! The inclusion decision compares the unrounded distance against the radius.
//! The reported `distance_meters` is rounded to whole meters separately, so a
//! point 99.6 m away from a 99.9 m fence is inside even though it displays as
//! 100 m.

use crate::algorithms::haversine::distance_meters;
use crate::core::{GeoPoint, Geofence, LocationSample, MembershipResult};
use crate::validation::error::GeoResult;
use tracing::debug;

/// Decide whether `sample` lies within `fence` (boundary inclusive)
pub fn evaluate_membership(sample: &GeoPoint, fence: &Geofence) -> GeoResult<MembershipResult> {
    fence.ensure_radius()?;
    let raw_distance = distance_meters(sample, &fence.center)?;

    let is_within = raw_distance <= fence.radius_meters;
    let distance_meters = raw_distance.round();

    debug!(
        raw_distance_m = raw_distance,
        distance_m = distance_meters,
        radius_m = fence.radius_meters,
        is_within,
        "geofence_evaluated"
    );

    Ok(MembershipResult {
        is_within,
        distance_meters,
        fence: *fence,
    })
}

/// Evaluate the point of a location sample
pub fn evaluate_sample(sample: &LocationSample, fence: &Geofence) -> GeoResult<MembershipResult> {
    evaluate_membership(&sample.point, fence)
}
