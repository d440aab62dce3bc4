/*!
# Spegel Simulator

A deterministic, single-threaded discrete-event stand-in for the external
simulation engine. It owns the virtual clock and the transmission-queue
hooks, and replays a scenario of packet transfers against them: every event
fires strictly in simulated-time order, one at a time, with no preemption,
and each handler runs to completion before the next event executes.

Sends made from inside a handler therefore serialize naturally; the export
session needs no locking in this model.
*/

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, info};

use spegel_config::SimulatorConfig;
use spegel_core::time::NANOS_PER_SEC;
use spegel_core::{EngineError, Packet, TxQueueHooks, VirtualClock};
use spegel_protocols::{build_packet, MIN_PACKET_LEN};

pub mod scenario;

pub use scenario::{Scenario, ScenarioError, Transfer};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum QueueEventKind {
    Admit,
    Remove,
}

struct Scheduled {
    at_ns: u64,
    /// Tie-breaker keeping equal-time events in schedule order.
    seq: u64,
    kind: QueueEventKind,
    packet: Packet,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        (self.at_ns, self.seq) == (other.at_ns, other.seq)
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.at_ns, self.seq).cmp(&(other.at_ns, other.seq))
    }
}

/// The deterministic event loop driving one tapped transmission queue.
pub struct Simulator {
    clock: VirtualClock,
    hooks: TxQueueHooks,
    pending: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
    data_rate_bps: u64,
    link_delay_ns: u64,
    stop_at_ns: u64,
}

impl Simulator {
    pub fn new(config: &SimulatorConfig) -> Self {
        Self {
            clock: VirtualClock::new(0),
            hooks: TxQueueHooks::new(),
            pending: BinaryHeap::new(),
            next_seq: 0,
            data_rate_bps: config.data_rate_bps,
            link_delay_ns: config.link_delay_ms * 1_000_000,
            stop_at_ns: (config.stop_time_s * NANOS_PER_SEC as f64) as u64,
        }
    }

    /// Shared handle to the simulated clock, for timestamping events.
    pub fn clock(&self) -> VirtualClock {
        self.clock.clone()
    }

    /// The queue's subscription point, used by the tap to register its
    /// admission/removal handlers before the run starts.
    pub fn hooks_mut(&mut self) -> &mut TxQueueHooks {
        &mut self.hooks
    }

    /// Schedules one transfer: the packet is admitted to the queue at the
    /// transfer time and removed once the device has clocked it out
    /// (serialization time plus link delay).
    pub fn schedule_transfer(&mut self, transfer: &Transfer) -> Result<(), EngineError> {
        if transfer.size < MIN_PACKET_LEN {
            return Err(EngineError::Scenario(format!(
                "transfer size {} below minimum packet size {}",
                transfer.size, MIN_PACKET_LEN
            )));
        }
        if transfer.at_s < 0.0 {
            return Err(EngineError::Scenario(format!(
                "transfer time {} is negative",
                transfer.at_s
            )));
        }

        let admit_ns = (transfer.at_s * NANOS_PER_SEC as f64) as u64;
        let serialization_ns =
            (transfer.size as u64 * 8).saturating_mul(NANOS_PER_SEC) / self.data_rate_bps;
        let remove_ns = admit_ns + serialization_ns + self.link_delay_ns;

        let packet = build_packet(transfer.source, transfer.destination, transfer.size);
        self.push(admit_ns, QueueEventKind::Admit, packet.clone());
        self.push(remove_ns, QueueEventKind::Remove, packet);
        Ok(())
    }

    /// Schedules every transfer of a scenario.
    pub fn load_scenario(&mut self, scenario: &Scenario) -> Result<(), EngineError> {
        for transfer in &scenario.transfers {
            self.schedule_transfer(transfer)?;
        }
        Ok(())
    }

    fn push(&mut self, at_ns: u64, kind: QueueEventKind, packet: Packet) {
        self.pending.push(Reverse(Scheduled {
            at_ns,
            seq: self.next_seq,
            kind,
            packet,
        }));
        self.next_seq += 1;
    }

    /// Runs every scheduled event up to the stop time, in simulated-time
    /// order. The first handler error aborts the run and propagates.
    pub fn run(&mut self) -> Result<(), EngineError> {
        info!(
            events = self.pending.len(),
            stop_at_s = self.stop_at_ns as f64 / NANOS_PER_SEC as f64,
            "Starting simulation"
        );

        while let Some(Reverse(event)) = self.pending.pop() {
            if event.at_ns > self.stop_at_ns {
                debug!("Stop time reached, discarding remaining events");
                break;
            }
            self.clock.advance_to(event.at_ns);
            match event.kind {
                QueueEventKind::Admit => self.hooks.admit(&event.packet)?,
                QueueEventKind::Remove => self.hooks.remove(&event.packet)?,
            }
        }

        info!(final_time_s = self.clock.now_secs(), "Simulation finished");
        Ok(())
    }
}
