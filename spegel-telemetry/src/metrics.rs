//! ## spegel-telemetry::metrics
//! Prometheus counters for the export pipeline. Gathered as text at the end
//! of a run; there is no push or scrape endpoint.

use prometheus::{Counter, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub exported_records: Counter,
    pub decode_failures: Counter,
    pub removal_events: Counter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let exported_records = Counter::new(
            "spegel_exported_records_total",
            "Telemetry records sent to the consumer",
        )
        .unwrap();
        let decode_failures = Counter::new(
            "spegel_decode_failures_total",
            "Queue events dropped because header decoding failed",
        )
        .unwrap();
        let removal_events = Counter::new(
            "spegel_removal_events_total",
            "Queue removal events observed (never exported)",
        )
        .unwrap();

        registry.register(Box::new(exported_records.clone())).unwrap();
        registry.register(Box::new(decode_failures.clone())).unwrap();
        registry.register(Box::new(removal_events.clone())).unwrap();

        Self {
            registry,
            exported_records,
            decode_failures,
            removal_events,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let metrics = MetricsRecorder::new();
        assert_eq!(metrics.exported_records.get(), 0.0);
        assert_eq!(metrics.decode_failures.get(), 0.0);
        assert_eq!(metrics.removal_events.get(), 0.0);
    }

    #[test]
    fn gather_includes_all_counters() {
        let metrics = MetricsRecorder::new();
        metrics.exported_records.inc();
        let dump = metrics.gather_metrics().unwrap();
        assert!(dump.contains("spegel_exported_records_total"));
        assert!(dump.contains("spegel_decode_failures_total"));
        assert!(dump.contains("spegel_removal_events_total"));
    }
}
