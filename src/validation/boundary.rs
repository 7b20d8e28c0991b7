//! Conversion of backend settings payloads into validated geofences
//!
//! The settings service hands out loosely typed JSON: coordinates may arrive
//! as numbers or as numeric strings, and field names differ between endpoints.
//! Everything is converted into [`Geofence`] here, before any distance is
//! computed.

use crate::core::{GeoPoint, Geofence};
use crate::validation::error::{GeoError, GeoResult};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Site settings as received from the settings endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeofenceSettings {
    #[serde(
        default,
        alias = "lat",
        alias = "geofence_lat",
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<f64>,
    #[serde(
        default,
        alias = "lng",
        alias = "lon",
        alias = "geofence_lng",
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,
    #[serde(
        default,
        alias = "radius",
        alias = "geofence_radius",
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub radius_meters: Option<f64>,
}

impl GeofenceSettings {
    pub fn new(latitude: f64, longitude: f64, radius_meters: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            radius_meters: Some(radius_meters),
        }
    }

    /// Validate the settings and build the fence they describe
    pub fn into_geofence(self) -> GeoResult<Geofence> {
        let latitude = required(self.latitude, "latitude")?;
        let longitude = required(self.longitude, "longitude")?;
        let radius_meters = required(self.radius_meters, "radius_meters")?;

        let center = GeoPoint::new(latitude, longitude)?;
        Geofence::new(center, radius_meters)
    }
}

fn required(value: Option<f64>, parameter: &str) -> GeoResult<f64> {
    value.ok_or_else(|| GeoError::invalid(parameter, "missing"))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map(Some)
                .map_err(|e| de::Error::custom(format!("`{}` is not a number: {}", text, e)))
        }
    }
}

/// Parse a JSON settings document into a geofence
pub fn parse_geofence_settings(json: &str) -> GeoResult<Geofence> {
    let settings: GeofenceSettings = serde_json::from_str(json)?;
    settings.into_geofence()
}

/// Convert an already decoded JSON value into a geofence
pub fn geofence_from_value(value: serde_json::Value) -> GeoResult<Geofence> {
    if !value.is_object() {
        return Err(GeoError::MalformedPayload {
            message: format!("expected a JSON object, got {}", value),
        });
    }
    let settings: GeofenceSettings = serde_json::from_value(value)?;
    settings.into_geofence()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_numeric_settings() {
        let fence = parse_geofence_settings(
            r#"{"latitude": 14.2486, "longitude": 121.1258, "radius_meters": 100}"#,
        )
        .unwrap();
        assert_eq!(fence.center.latitude, 14.2486);
        assert_eq!(fence.center.longitude, 121.1258);
        assert_eq!(fence.radius_meters, 100.0);
    }

    #[test]
    fn test_parse_aliases_and_string_numbers() {
        let fence = geofence_from_value(json!({
            "geofence_lat": "14.2486",
            "geofence_lng": " 121.1258 ",
            "geofence_radius": "150"
        }))
        .unwrap();
        assert_eq!(fence.center.latitude, 14.2486);
        assert_eq!(fence.center.longitude, 121.1258);
        assert_eq!(fence.radius_meters, 150.0);

        let fence = geofence_from_value(json!({"lat": 1.0, "lng": 2.0, "radius": 30})).unwrap();
        assert_eq!(fence.radius_meters, 30.0);
    }

    #[test]
    fn test_missing_field_is_invalid_argument() {
        let result = geofence_from_value(json!({"latitude": 14.0, "longitude": 121.0}));
        assert_eq!(result, Err(GeoError::invalid("radius_meters", "missing")));

        let result = geofence_from_value(json!({"latitude": null, "longitude": 121.0, "radius": 5}));
        assert_eq!(result, Err(GeoError::invalid("latitude", "missing")));
    }

    #[test]
    fn test_out_of_range_and_bad_radius() {
        let result = geofence_from_value(json!({"latitude": 95.0, "longitude": 0.0, "radius": 10}));
        assert!(matches!(result, Err(GeoError::InvalidArgument { ref parameter, .. }) if parameter == "latitude"));

        let result = geofence_from_value(json!({"latitude": 0.0, "longitude": 0.0, "radius": 0}));
        assert!(matches!(result, Err(GeoError::InvalidArgument { ref parameter, .. }) if parameter == "radius_meters"));

        let result = geofence_from_value(json!({"latitude": "NaN", "longitude": 0.0, "radius": 10}));
        assert!(matches!(result, Err(GeoError::InvalidArgument { .. })));
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(matches!(
            parse_geofence_settings("not json"),
            Err(GeoError::MalformedPayload { .. })
        ));
        assert!(matches!(
            geofence_from_value(json!({"latitude": "north", "longitude": 0.0, "radius": 10})),
            Err(GeoError::MalformedPayload { .. })
        ));
        assert!(matches!(
            geofence_from_value(json!([1, 2, 3])),
            Err(GeoError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_settings_serialize_with_canonical_names() {
        let settings = GeofenceSettings::new(14.2486, 121.1258, 100.0);
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value, json!({"latitude": 14.2486, "longitude": 121.1258, "radius_meters": 100.0}));
    }
}
