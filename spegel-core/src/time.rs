//! ## spegel-core::time
//! **Virtual clock for the deterministic event loop**
//!
//! Simulated time with nanosecond precision. The scheduler advances the
//! clock to each event's timestamp before dispatching it, so handlers read
//! the exact simulated time of the event they are processing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// A simple virtual clock that advances in nanoseconds.
#[derive(Clone)]
pub struct VirtualClock {
    // Shared atomic counter representing current simulation time in ns.
    offset: Arc<AtomicU64>,
}

impl VirtualClock {
    /// Creates a new virtual clock starting at the given time.
    pub fn new(start_ns: u64) -> Self {
        Self {
            offset: Arc::new(AtomicU64::new(start_ns)),
        }
    }

    /// Returns the current virtual time in nanoseconds.
    #[inline]
    pub fn now_ns(&self) -> u64 {
        self.offset.load(Ordering::Acquire)
    }

    /// Current virtual time in seconds, for human-facing logs.
    #[inline]
    pub fn now_secs(&self) -> f64 {
        self.now_ns() as f64 / NANOS_PER_SEC as f64
    }

    /// Advances the virtual clock by the given number of nanoseconds.
    #[inline]
    pub fn advance(&self, ns: u64) {
        self.offset.fetch_add(ns, Ordering::Release);
    }

    /// Advances the clock to an absolute timestamp. Time never moves
    /// backwards: earlier timestamps leave the clock untouched.
    pub fn advance_to(&self, ns: u64) {
        let now = self.now_ns();
        if ns > now {
            self.advance(ns - now);
        }
    }
}
