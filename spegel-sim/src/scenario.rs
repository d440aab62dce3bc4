//! ## spegel-sim::scenario
//! Declarative traffic scenarios: which packets cross the tapped link, and
//! when. Loaded from YAML; the default is the two-node acceptance scenario.

use std::net::Ipv4Addr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One packet crossing the tapped link.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Transfer {
    /// Simulated time of the queue admission, in seconds.
    pub at_s: f64,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
    /// Total on-the-wire packet size in bytes, headers included.
    pub size: usize,
}

/// A full simulation scenario.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Scenario {
    pub transfers: Vec<Transfer>,
}

impl Default for Scenario {
    /// Two-node point-to-point link, one 512-byte packet from 10.1.1.1 to
    /// 10.1.1.2 enqueued at simulated time 2.0 s.
    fn default() -> Self {
        Self {
            transfers: vec![Transfer {
                at_s: 2.0,
                source: Ipv4Addr::new(10, 1, 1, 1),
                destination: Ipv4Addr::new(10, 1, 1, 2),
                size: 512,
            }],
        }
    }
}

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Scenario file not found: {0}")]
    FileNotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Deserialization error: {0}")]
    Serde(#[from] serde_yaml::Error),
}

impl Scenario {
    /// Loads a scenario from a YAML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(format!(
                "{} does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let scenario: Scenario = serde_yaml::from_str(&content)?;
        Ok(scenario)
    }
}
