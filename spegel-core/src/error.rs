use thiserror::Error;

/// Errors surfaced by queue event handlers and the simulation loop.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Export channel failure: {0}")]
    Export(String),

    #[error("Event processing error: {0}")]
    Processing(String),

    #[error("Scenario error: {0}")]
    Scenario(String),
}
