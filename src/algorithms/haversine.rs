//! Great-circle distance on a spherical Earth
//!
//! All functions work on a sphere of radius [`EARTH_RADIUS_METERS`]. Range
//! checking of coordinates is the caller's job; out-of-range input produces
//! numbers, not errors.

use crate::core::{GeoPoint, EARTH_RADIUS_METERS};
use crate::validation::error::GeoResult;

/// Haversine distance between two points (meters), without input checks
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lng = (b.longitude - a.longitude).to_radians();

    let sin_half_lat = (d_lat / 2.0).sin();
    let sin_half_lng = (d_lng / 2.0).sin();
    let h = sin_half_lat * sin_half_lat + lat1.cos() * lat2.cos() * sin_half_lng * sin_half_lng;

    // Rounding can push h a hair past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Distance between two points (meters)
///
/// Fails with `InvalidArgument` if any coordinate is NaN or infinite.
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> GeoResult<f64> {
    a.ensure_finite()?;
    b.ensure_finite()?;
    Ok(haversine_distance(a, b))
}

/// Initial bearing from `a` towards `b`, in degrees clockwise from north, in [0, 360)
pub fn initial_bearing_degrees(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid may return exactly 360.0 for tiny negative inputs
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

/// Point reached by travelling `distance_m` along a great circle from `origin`
/// with initial bearing `bearing_deg`
///
/// Longitude is normalized to [-180, 180).
pub fn destination_point(origin: &GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let lat1 = origin.latitude.to_radians();
    let lng1 = origin.longitude.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_m / EARTH_RADIUS_METERS;

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lng2 = lng1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * sin_lat2);

    let longitude = (lng2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;

    GeoPoint {
        latitude: lat2.to_degrees(),
        longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::error::GeoError;
    use proptest::prelude::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint { latitude, longitude }
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let distance = haversine_distance(&point(0.0, 0.0), &point(0.0, 1.0));
        assert!((distance - 111_195.0).abs() < 50.0, "got {}", distance);
    }

    #[test]
    fn test_identical_points() {
        let site = point(14.2486, 121.1258);
        assert_eq!(haversine_distance(&site, &site), 0.0);
    }

    #[test]
    fn test_antimeridian_crossing() {
        // 0.2 degrees apart across the dateline, not 359.8
        let distance = haversine_distance(&point(0.0, 179.9), &point(0.0, -179.9));
        assert!((distance - 22_239.0).abs() < 5.0, "got {}", distance);
    }

    #[test]
    fn test_antipodal_points() {
        let distance = haversine_distance(&point(0.0, 0.0), &point(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_METERS;
        assert!((distance - half_circumference).abs() < 1e-3);
    }

    #[test]
    fn test_distance_rejects_non_finite() {
        let ok = point(0.0, 0.0);
        assert!(matches!(
            distance_meters(&point(f64::NAN, 0.0), &ok),
            Err(GeoError::InvalidArgument { .. })
        ));
        assert!(matches!(
            distance_meters(&ok, &point(0.0, f64::NEG_INFINITY)),
            Err(GeoError::InvalidArgument { .. })
        ));
        assert!(distance_meters(&ok, &point(1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = point(0.0, 0.0);
        assert!((initial_bearing_degrees(&origin, &point(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((initial_bearing_degrees(&origin, &point(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((initial_bearing_degrees(&origin, &point(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((initial_bearing_degrees(&origin, &point(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_destination_due_north() {
        let site = point(14.2486, 121.1258);
        let north = destination_point(&site, 0.0, 80.0);
        assert!((north.longitude - site.longitude).abs() < 1e-12);
        assert!(north.latitude > site.latitude);
        assert!((haversine_distance(&site, &north) - 80.0).abs() < 1e-6);
    }

    #[test]
    fn test_destination_wraps_longitude() {
        let east = destination_point(&point(0.0, 179.95), 90.0, 11_119.5);
        assert!(east.longitude < -179.0, "got {}", east.longitude);
    }

    fn valid_point() -> impl Strategy<Value = GeoPoint> {
        (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(latitude, longitude)| point(latitude, longitude))
    }

    proptest! {
        #[test]
        fn test_distance_to_self_is_zero(a in valid_point()) {
            prop_assert_eq!(haversine_distance(&a, &a), 0.0);
        }

        #[test]
        fn test_distance_is_symmetric(a in valid_point(), b in valid_point()) {
            let ab = haversine_distance(&a, &b);
            let ba = haversine_distance(&b, &a);
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn test_distance_grows_along_equator(
            origin_lng in -180.0..=180.0f64,
            s1 in 0.0..=180.0f64,
            s2 in 0.0..=180.0f64,
        ) {
            let (near, far) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
            let origin = point(0.0, origin_lng);
            let d_near = haversine_distance(&origin, &point(0.0, origin_lng + near));
            let d_far = haversine_distance(&origin, &point(0.0, origin_lng + far));
            prop_assert!(d_near <= d_far, "{} > {}", d_near, d_far);
        }

        #[test]
        fn test_distance_grows_along_meridian(
            origin_lat in -90.0..=0.0f64,
            lng in -180.0..=180.0f64,
            s1 in 0.0..=90.0f64,
            s2 in 0.0..=90.0f64,
        ) {
            let (near, far) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
            let origin = point(origin_lat, lng);
            let d_near = haversine_distance(&origin, &point(origin_lat + near, lng));
            let d_far = haversine_distance(&origin, &point(origin_lat + far, lng));
            prop_assert!(d_near <= d_far, "{} > {}", d_near, d_far);
        }

        #[test]
        fn test_triangle_inequality(a in valid_point(), b in valid_point(), c in valid_point()) {
            let direct = haversine_distance(&a, &c);
            let detour = haversine_distance(&a, &b) + haversine_distance(&b, &c);
            prop_assert!(direct <= detour + 0.5, "{} > {}", direct, detour);
        }

        #[test]
        fn test_destination_distance_matches(
            origin in (-80.0..=80.0f64, -180.0..=180.0f64),
            bearing in 0.0..360.0f64,
            distance in 0.0..10_000.0f64,
        ) {
            let origin = point(origin.0, origin.1);
            let target = destination_point(&origin, bearing, distance);
            prop_assert!((haversine_distance(&origin, &target) - distance).abs() < 1e-3);
        }
    }
}
