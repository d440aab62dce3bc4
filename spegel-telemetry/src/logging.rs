//! ## spegel-telemetry::logging
//! Structured logging with tracing. Every queue event leaves a local log
//! line; only admissions additionally cross the process boundary.

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber. `RUST_LOG` overrides the default
    /// `info` filter. Calling this twice is a caller bug.
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init()
    }

    /// Local informational record for one queue event.
    pub fn log_queue_event(
        kind: &str,
        source: &str,
        destination: &str,
        wire_size: usize,
        at_secs: f64,
    ) {
        info!(
            source,
            destination,
            wire_size,
            at_secs,
            "Packet {kind}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn queue_events_are_logged() {
        EventLogger::log_queue_event("admitted", "10.1.1.1", "10.1.1.2", 512, 2.0);
        assert!(logs_contain("Packet admitted"));
    }
}
