//! # Boilerplate Telemetry
//!
//! Turns a validated [`ObservabilityConfig`](boilerplate_config::ObservabilityConfig)
//! into a running `tracing` subscriber and reports slow queries against the
//! configured threshold.

pub mod error;
pub mod logging;
pub mod slow_query;

pub use error::TelemetryError;
pub use logging::{EventLogger, LogFormat};
pub use slow_query::SlowQueryDetector;
