//! ## spegel-export::record
//! The per-event telemetry record and its wire encoding. Records are
//! ephemeral: built from one queue event, serialized immediately, never
//! buffered.

use std::net::Ipv4Addr;

use spegel_protocols::PacketSummary;

/// Structured summary of one packet transfer event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TelemetryRecord {
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
    pub wire_size: usize,
    /// Simulated time of the event; kept for local logs, not on the wire.
    pub timestamp_ns: u64,
}

impl TelemetryRecord {
    pub fn new(summary: PacketSummary, timestamp_ns: u64) -> Self {
        Self {
            source: summary.source,
            destination: summary.destination,
            wire_size: summary.wire_size,
            timestamp_ns,
        }
    }

    /// Literal wire encoding: tab-separated, no trailing terminator, no
    /// escaping. The values are dotted quads and a decimal size, so the
    /// delimiter cannot appear in them.
    pub fn encode(&self) -> String {
        format!("{}\t{}\t{}", self.source, self.destination, self.wire_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TelemetryRecord {
        TelemetryRecord {
            source: Ipv4Addr::new(10, 1, 1, 1),
            destination: Ipv4Addr::new(10, 1, 1, 2),
            wire_size: 512,
            timestamp_ns: 2_000_000_000,
        }
    }

    #[test]
    fn encode_is_tab_separated() {
        assert_eq!(record().encode(), "10.1.1.1\t10.1.1.2\t512");
    }

    #[test]
    fn encode_has_no_trailing_terminator() {
        let encoded = record().encode();
        assert!(!encoded.ends_with('\n'));
        assert!(!encoded.ends_with('\0'));
    }

    #[test]
    fn timestamp_stays_off_the_wire() {
        let mut other = record();
        other.timestamp_ns = 0;
        assert_eq!(other.encode(), record().encode());
    }
}
