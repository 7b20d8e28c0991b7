//! Presence report output formatting
//!
//! Converts a [`PresenceReport`] into a flat, serializable record and renders
//! it as a one-line text summary or a JSON document.

use crate::api::presence::{PresenceReport, PresenceStatus};
use serde::{Deserialize, Serialize};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Single human-readable line
    Text,
    /// JSON document
    Json,
}

/// Flattened presence report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedReport {
    pub status: PresenceStatus,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub accuracy_m: f64,
    pub captured_at_ms: u64,
    /// Rounded distance to the site center
    pub distance_m: f64,
    pub radius_m: f64,
    pub message: String,
}

/// Builds [`FormattedReport`]s and renders them
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    /// Decimal places for coordinates
    pub precision: u8,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self {
            precision: 6,
            pretty: false,
        }
    }
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Flatten a report, rounding coordinates to the configured precision
    pub fn flatten(&self, report: &PresenceReport) -> FormattedReport {
        FormattedReport {
            status: report.status(),
            latitude_deg: self.round_to_precision(report.sample.point.latitude),
            longitude_deg: self.round_to_precision(report.sample.point.longitude),
            accuracy_m: report.sample.accuracy_meters,
            captured_at_ms: report.sample.captured_at_epoch_millis,
            distance_m: report.membership.distance_meters,
            radius_m: report.membership.fence.radius_meters,
            message: report.status_message(),
        }
    }

    /// Render a report in the requested format
    pub fn format(&self, report: &PresenceReport, format: OutputFormat) -> Result<String, serde_json::Error> {
        let formatted = self.flatten(report);
        match format {
            OutputFormat::Text => Ok(self.format_text(&formatted)),
            OutputFormat::Json => self.format_json(&formatted),
        }
    }

    fn format_text(&self, formatted: &FormattedReport) -> String {
        let status = match formatted.status {
            PresenceStatus::OnSite => "ON SITE",
            PresenceStatus::OffSite => "OFF SITE",
        };
        let precision = self.precision as usize;
        format!(
            "[{}] {:.*}, {:.*} (±{:.0} m) | {:.0} m / {:.0} m | {}",
            status,
            precision,
            formatted.latitude_deg,
            precision,
            formatted.longitude_deg,
            formatted.accuracy_m,
            formatted.distance_m,
            formatted.radius_m,
            formatted.message
        )
    }

    fn format_json(&self, formatted: &FormattedReport) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(formatted)
        } else {
            serde_json::to_string(formatted)
        }
    }

    fn round_to_precision(&self, value: f64) -> f64 {
        let factor = 10_f64.powi(self.precision as i32);
        (value * factor).round() / factor
    }
}
