//! On-site presence check for clock-in
//!
//! Acquires one location sample and evaluates it against the site geofence.

use crate::algorithms::membership::evaluate_sample;
use crate::core::{Geofence, LocationSample, MembershipResult};
use crate::location::{LocationAdapter, LocationError, LocationOptions};
use crate::validation::error::GeoError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Result type for presence checks
pub type PresenceResult<T> = Result<T, PresenceError>;

/// Presence check failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresenceError {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Geo(#[from] GeoError),
}

impl PresenceError {
    /// Message shown to the person trying to clock in
    pub fn user_message(&self) -> &'static str {
        match self {
            PresenceError::Location(error) => error.user_message(),
            PresenceError::Geo(_) => "The site location is not configured correctly. Contact your administrator.",
        }
    }
}

/// Whether the sample counts as on-site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceStatus {
    OnSite,
    OffSite,
}

/// Sample together with its membership result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresenceReport {
    pub sample: LocationSample,
    pub membership: MembershipResult,
}

impl PresenceReport {
    pub fn status(&self) -> PresenceStatus {
        if self.membership.is_within {
            PresenceStatus::OnSite
        } else {
            PresenceStatus::OffSite
        }
    }

    pub fn status_message(&self) -> String {
        match self.status() {
            PresenceStatus::OnSite => format!(
                "You are within the site area ({:.0} m from the site).",
                self.membership.distance_meters
            ),
            PresenceStatus::OffSite => format!(
                "You are {:.0} m from the site. Move within {:.0} m to clock in.",
                self.membership.distance_meters, self.membership.fence.radius_meters
            ),
        }
    }
}

/// Checks presence at one site
#[derive(Debug, Clone)]
pub struct SitePresenceChecker {
    adapter: LocationAdapter,
    fence: Geofence,
    options: LocationOptions,
}

impl SitePresenceChecker {
    pub fn new(adapter: LocationAdapter, fence: Geofence) -> Self {
        Self {
            adapter,
            fence,
            options: LocationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LocationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn fence(&self) -> &Geofence {
        &self.fence
    }

    /// Acquire one sample and evaluate it
    pub async fn check(&self) -> PresenceResult<PresenceReport> {
        let sample = self.adapter.acquire_location(&self.options).await?;
        let membership = evaluate_sample(&sample, &self.fence)?;

        info!(
            distance_m = membership.distance_meters,
            radius_m = self.fence.radius_meters,
            accuracy_m = sample.accuracy_meters,
            on_site = membership.is_within,
            "presence_checked"
        );

        Ok(PresenceReport { sample, membership })
    }
}
