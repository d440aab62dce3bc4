//! # spegel-export
//!
//! The outbound half of the pipeline: the telemetry record and its literal
//! wire encoding, the record sink abstraction over the rendezvous socket,
//! and the session that owns the single long-lived connection.

pub mod channel;
pub mod record;
pub mod session;

pub use channel::{ExportError, MemorySink, RecordSink, UnixChannel};
pub use record::TelemetryRecord;
pub use session::ExportSession;
