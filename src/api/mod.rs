//! Caller-facing presence checks and report formatting

pub mod presence;
pub mod formatting;

pub use presence::{PresenceError, PresenceReport, PresenceResult, PresenceStatus, SitePresenceChecker};
pub use formatting::{FormattedReport, OutputFormat, ReportFormatter};
