//! ## spegel-export::session
//! Session lifecycle for the transport channel: established exactly once
//! before any event is processed, held for the process lifetime, never
//! reassigned or pooled. The send-failure policy is applied here, in one
//! place, rather than at every call site.

use tracing::warn;

use spegel_config::{ExportConfig, SendFailurePolicy};

use crate::channel::{ExportError, RecordSink, UnixChannel};
use crate::record::TelemetryRecord;

/// Owns the single connection to the consumer.
pub struct ExportSession {
    sink: Box<dyn RecordSink>,
    policy: SendFailurePolicy,
    records_sent: u64,
    sends_skipped: u64,
}

impl ExportSession {
    /// Establishes the channel to the configured rendezvous endpoint.
    ///
    /// Connect failure is startup-fatal for the caller: the telemetry pipe
    /// is load-bearing for downstream observers, so there is no silent
    /// no-op mode.
    pub fn connect(config: &ExportConfig) -> Result<Self, ExportError> {
        let channel = UnixChannel::connect(&config.socket_path)?;
        Ok(Self::with_sink(
            Box::new(channel),
            config.on_send_failure,
        ))
    }

    /// Builds a session over an arbitrary sink. This is the test seam: a
    /// `MemorySink` substitutes for the socket without a listener process.
    pub fn with_sink(sink: Box<dyn RecordSink>, policy: SendFailurePolicy) -> Self {
        Self {
            sink,
            policy,
            records_sent: 0,
            sends_skipped: 0,
        }
    }

    /// Encodes and sends one record, applying the send-failure policy.
    ///
    /// With `Abort` the first failure propagates and the run stops; with
    /// `LogAndSkip` the failure is logged and counted and the call
    /// succeeds.
    pub fn export(&mut self, record: &TelemetryRecord) -> Result<(), ExportError> {
        match self.sink.send(&record.encode()) {
            Ok(()) => {
                self.records_sent += 1;
                Ok(())
            }
            Err(e) => match self.policy {
                SendFailurePolicy::Abort => Err(e),
                SendFailurePolicy::LogAndSkip => {
                    self.sends_skipped += 1;
                    warn!(error = %e, "Dropping telemetry record, consumer unreachable");
                    Ok(())
                }
            },
        }
    }

    pub fn records_sent(&self) -> u64 {
        self.records_sent
    }

    pub fn sends_skipped(&self) -> u64 {
        self.sends_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MemorySink;
    use spegel_protocols::PacketSummary;
    use std::net::Ipv4Addr;

    fn record(size: usize) -> TelemetryRecord {
        TelemetryRecord::new(
            PacketSummary {
                source: Ipv4Addr::new(10, 1, 1, 1),
                destination: Ipv4Addr::new(10, 1, 1, 2),
                wire_size: size,
            },
            0,
        )
    }

    #[test]
    fn abort_policy_propagates_first_failure() {
        let mut session =
            ExportSession::with_sink(Box::new(MemorySink::failing_after(1)), SendFailurePolicy::Abort);
        session.export(&record(512)).unwrap();
        assert!(session.export(&record(128)).is_err());
        assert_eq!(session.records_sent(), 1);
    }

    #[test]
    fn log_and_skip_policy_keeps_running() {
        let mut session = ExportSession::with_sink(
            Box::new(MemorySink::failing_after(0)),
            SendFailurePolicy::LogAndSkip,
        );
        session.export(&record(512)).unwrap();
        session.export(&record(128)).unwrap();
        assert_eq!(session.records_sent(), 0);
        assert_eq!(session.sends_skipped(), 2);
    }

    #[test]
    fn exported_records_are_encoded() {
        let sink = MemorySink::new();
        let mut session =
            ExportSession::with_sink(Box::new(sink.clone()), SendFailurePolicy::Abort);
        session.export(&record(512)).unwrap();
        assert_eq!(sink.records(), ["10.1.1.1\t10.1.1.2\t512"]);
        assert_eq!(session.records_sent(), 1);
    }
}
