//! ## spegel-core::queue
//! **Transmission-queue event hooks**
//!
//! Subscription point between the event source (the simulation engine) and
//! the capture layer. Handlers run synchronously, in strict simulated-time
//! order, on the single simulation thread, in registration order. A handler
//! never blocks the engine except through calls it makes itself.

use crate::error::EngineError;
use crate::packet::Packet;

/// Callback invoked for one queue event. Returning an error aborts the run.
pub type QueueHandler = Box<dyn FnMut(&Packet) -> Result<(), EngineError>>;

/// Admission/removal hook registry for one device transmission queue.
#[derive(Default)]
pub struct TxQueueHooks {
    on_admit: Vec<QueueHandler>,
    on_remove: Vec<QueueHandler>,
}

impl TxQueueHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler fired when a packet enters the queue.
    pub fn on_admit(&mut self, handler: QueueHandler) {
        self.on_admit.push(handler);
    }

    /// Registers a handler fired when a packet leaves the queue.
    pub fn on_remove(&mut self, handler: QueueHandler) {
        self.on_remove.push(handler);
    }

    /// Dispatches an admission event to every registered handler.
    pub fn admit(&mut self, packet: &Packet) -> Result<(), EngineError> {
        for handler in &mut self.on_admit {
            handler(packet)?;
        }
        Ok(())
    }

    /// Dispatches a removal event to every registered handler.
    pub fn remove(&mut self, packet: &Packet) -> Result<(), EngineError> {
        for handler in &mut self.on_remove {
            handler(packet)?;
        }
        Ok(())
    }
}
