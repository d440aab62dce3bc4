//! ## spegel-capture::tap
//! The queue tap owns the export session and subscribes to the admission
//! and removal hooks of one transmission queue. Each invocation is
//! independent; the session handle and the metric counters are the only
//! state shared across events.

use tracing::warn;

use spegel_core::{EngineError, TxQueueHooks, VirtualClock};
use spegel_export::{ExportSession, TelemetryRecord};
use spegel_protocols::{summarize, DecodeError};
use spegel_telemetry::{EventLogger, MetricsRecorder};

/// Telemetry tap for one device transmission queue.
pub struct QueueTap {
    session: ExportSession,
    clock: VirtualClock,
    metrics: MetricsRecorder,
}

impl QueueTap {
    /// The session is an explicit handle established by the caller before
    /// any event can fire, not ambient state.
    pub fn new(session: ExportSession, clock: VirtualClock, metrics: MetricsRecorder) -> Self {
        Self {
            session,
            clock,
            metrics,
        }
    }

    /// Registers both handlers on the queue's hooks, consuming the tap.
    ///
    /// Admission: decode, build a record stamped with the virtual clock,
    /// encode, send. Removal: decode and log locally; no transport call is
    /// ever made on this path.
    pub fn attach(self, hooks: &mut TxQueueHooks) {
        let QueueTap {
            mut session,
            clock,
            metrics,
        } = self;

        let admit_clock = clock.clone();
        let admit_metrics = metrics.clone();
        hooks.on_admit(Box::new(move |packet| {
            let summary = match summarize(packet) {
                Ok(summary) => summary,
                Err(e) => {
                    skip_undecodable("admission", e, &admit_metrics);
                    return Ok(());
                }
            };

            let record = TelemetryRecord::new(summary, admit_clock.now_ns());
            EventLogger::log_queue_event(
                "admitted",
                &summary.source.to_string(),
                &summary.destination.to_string(),
                summary.wire_size,
                admit_clock.now_secs(),
            );

            let sent_before = session.records_sent();
            session
                .export(&record)
                .map_err(|e| EngineError::Export(e.to_string()))?;
            if session.records_sent() > sent_before {
                admit_metrics.exported_records.inc();
            }
            Ok(())
        }));

        hooks.on_remove(Box::new(move |packet| {
            let summary = match summarize(packet) {
                Ok(summary) => summary,
                Err(e) => {
                    skip_undecodable("removal", e, &metrics);
                    return Ok(());
                }
            };

            EventLogger::log_queue_event(
                "removed",
                &summary.source.to_string(),
                &summary.destination.to_string(),
                summary.wire_size,
                clock.now_secs(),
            );
            metrics.removal_events.inc();
            Ok(())
        }));
    }
}

/// Decode failures never abort the run: count, log, drop the event.
fn skip_undecodable(kind: &str, error: DecodeError, metrics: &MetricsRecorder) {
    warn!(%error, "Dropping undecodable {kind} event");
    metrics.decode_failures.inc();
}
