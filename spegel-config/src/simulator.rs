//! Simulation link parameters.
//!
//! The point-to-point link whose transmission queue is being tapped. These
//! only affect when removal events fire relative to their admission.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Simulated link configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct SimulatorConfig {
    /// Link data rate in bits per second.
    #[validate(range(min = 1))]
    #[serde(default = "default_data_rate_bps")]
    pub data_rate_bps: u64,

    /// One-way propagation delay in milliseconds.
    #[serde(default = "default_link_delay_ms")]
    pub link_delay_ms: u64,

    /// Simulated time at which the run stops, in seconds.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_stop_time_s")]
    pub stop_time_s: f64,
}

fn default_data_rate_bps() -> u64 {
    5_000_000
}

fn default_link_delay_ms() -> u64 {
    2
}

fn default_stop_time_s() -> f64 {
    60.0
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            data_rate_bps: default_data_rate_bps(),
            link_delay_ms: default_link_delay_ms(),
            stop_time_s: default_stop_time_s(),
        }
    }
}
