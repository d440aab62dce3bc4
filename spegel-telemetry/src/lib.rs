//! # spegel telemetry
//!
//! Crate for logging and metrics of the export pipeline.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
