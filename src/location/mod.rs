//! Location acquisition behind a platform-agnostic provider seam
//!
//! A [`LocationProvider`] speaks the platform's raw vocabulary (numeric error
//! codes, loosely checked fixes). [`LocationAdapter`] turns one provider call
//! into exactly one [`LocationSample`](crate::core::LocationSample) or one
//! [`LocationError`], bounded by the requested timeout.

pub mod provider;
pub mod adapter;
pub mod mock;
pub mod error;

pub use provider::{LocationOptions, LocationProvider, PlatformError, PlatformFix};
pub use adapter::LocationAdapter;
pub use mock::{MockLocationProvider, MockResponse};
pub use error::{LocationError, LocationErrorKind, LocationResult};
