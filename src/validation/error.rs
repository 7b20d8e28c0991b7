//! Errors raised by the geospatial computations and their input checks

use thiserror::Error;

/// Result type for geospatial operations
pub type GeoResult<T> = Result<T, GeoError>;

/// Invalid input to distance, membership or boundary conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Non-finite, missing or out-of-range numeric input
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument { parameter: String, reason: String },
    /// Payload could not be decoded at all
    #[error("malformed payload: {message}")]
    MalformedPayload { message: String },
}

impl GeoError {
    pub fn invalid(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(error: serde_json::Error) -> Self {
        GeoError::MalformedPayload {
            message: error.to_string(),
        }
    }
}
