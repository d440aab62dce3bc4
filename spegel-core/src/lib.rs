//! # spegel-core
//!
//! Foundation layer for the queue telemetry pipeline: the packet buffer
//! type, the virtual clock, and the transmission-queue event hooks that the
//! capture layer subscribes to.
//!
//! ### Key Submodules:
//! - `packet`: `Bytes`-backed immutable packet buffers
//! - `time`: `VirtualClock` using atomic counters
//! - `queue`: admission/removal hook registration and dispatch

pub mod error;
pub mod packet;
pub mod queue;
pub mod time;

pub use error::EngineError;
pub use packet::Packet;
pub use queue::TxQueueHooks;
pub use time::VirtualClock;
