use crate::core::Geofence;
use crate::location::LocationOptions;
use crate::validation::boundary::GeofenceSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Longest location timeout accepted (milliseconds)
pub const MAX_LOCATION_TIMEOUT_MS: u64 = 120_000;

/// Oldest cached fix that may be accepted (milliseconds)
pub const MAX_CACHE_AGE_MS: u64 = 86_400_000;

/// Persisted geofence configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeofenceConfig {
    /// Options for every location request
    #[serde(default)]
    pub location: LocationOptions,
    /// Configured site, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<GeofenceSettings>,
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    #[error("no site configured")]
    MissingSite,
    #[error("{message}")]
    IoError { message: String },
    #[error("{message}")]
    SerializationError { message: String },
}

/// Outcome of validating a configuration
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ConfigError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ConfigError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    fn into_result(self) -> Result<(), ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Loads, validates, edits and saves [`GeofenceConfig`]
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: GeofenceConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl ConfigurationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager and load from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &GeofenceConfig {
        &self.config
    }

    pub fn location_options(&self) -> LocationOptions {
        self.config.location
    }

    /// Replace the whole configuration after validation
    pub fn update_config(&mut self, config: GeofenceConfig) -> Result<(), ConfigError> {
        Self::validate(&config).into_result()?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: GeofenceConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        Self::validate(&config).into_result()?;

        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the file the configuration was last loaded from or saved to
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::IoError {
                message: "No file path set for saving configuration".to_string(),
            }),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Set the location timeout, returning the previous value
    pub fn set_location_timeout(&mut self, timeout_ms: u64) -> Result<u64, ConfigError> {
        check_timeout(timeout_ms)?;
        let old = self.config.location.timeout_ms;
        self.config.location.timeout_ms = timeout_ms;
        self.is_modified = true;
        Ok(old)
    }

    /// Set the cached-fix age limit, returning the previous value
    pub fn set_max_cache_age(&mut self, max_cache_age_ms: u64) -> Result<u64, ConfigError> {
        check_cache_age(max_cache_age_ms)?;
        let old = self.config.location.max_cache_age_ms;
        self.config.location.max_cache_age_ms = max_cache_age_ms;
        self.is_modified = true;
        Ok(old)
    }

    /// Toggle high-accuracy requests, returning the previous value
    pub fn set_high_accuracy(&mut self, high_accuracy: bool) -> bool {
        let old = self.config.location.high_accuracy;
        self.config.location.high_accuracy = high_accuracy;
        self.is_modified = true;
        old
    }

    /// Configure the site; the settings must describe a valid geofence
    pub fn set_site(&mut self, site: GeofenceSettings) -> Result<Geofence, ConfigError> {
        let fence = site_to_geofence(&site)?;
        self.config.site = Some(site);
        self.is_modified = true;
        Ok(fence)
    }

    /// The configured site as a validated geofence
    pub fn site_geofence(&self) -> Result<Geofence, ConfigError> {
        let site = self.config.site.as_ref().ok_or(ConfigError::MissingSite)?;
        site_to_geofence(site)
    }

    /// Collect every problem with a configuration
    pub fn validate(config: &GeofenceConfig) -> ValidationResult {
        let mut errors = Vec::new();

        if let Err(e) = check_timeout(config.location.timeout_ms) {
            errors.push(e);
        }
        if let Err(e) = check_cache_age(config.location.max_cache_age_ms) {
            errors.push(e);
        }
        if let Some(site) = &config.site {
            if let Err(e) = site_to_geofence(site) {
                errors.push(e);
            }
        }

        ValidationResult::from_errors(errors)
    }
}

fn check_timeout(timeout_ms: u64) -> Result<(), ConfigError> {
    if timeout_ms == 0 || timeout_ms > MAX_LOCATION_TIMEOUT_MS {
        return Err(ConfigError::InvalidParameter {
            parameter: "location.timeout_ms".to_string(),
            value: timeout_ms.to_string(),
            reason: format!("must be between 1 and {}", MAX_LOCATION_TIMEOUT_MS),
        });
    }
    Ok(())
}

fn check_cache_age(max_cache_age_ms: u64) -> Result<(), ConfigError> {
    if max_cache_age_ms > MAX_CACHE_AGE_MS {
        return Err(ConfigError::InvalidParameter {
            parameter: "location.max_cache_age_ms".to_string(),
            value: max_cache_age_ms.to_string(),
            reason: format!("must not exceed {}", MAX_CACHE_AGE_MS),
        });
    }
    Ok(())
}

fn site_to_geofence(site: &GeofenceSettings) -> Result<Geofence, ConfigError> {
    site.clone()
        .into_geofence()
        .map_err(|e| ConfigError::InvalidParameter {
            parameter: "site".to_string(),
            value: format!("{:?}", site),
            reason: e.to_string(),
        })
}
