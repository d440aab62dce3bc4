//! # Spegel Configuration System
//!
//! Hierarchical configuration for the queue telemetry exporter.
//!
//! ## Features
//! - **Unified Configuration**: Single source of truth across all components
//! - **Validation**: Runtime validation of critical parameters
//! - **Environment Awareness**: `SPEGEL_*` variables override file settings

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod export;
mod simulator;
mod validation;

pub use error::ConfigError;
pub use export::ExportConfig;
pub use export::SendFailurePolicy;
pub use simulator::SimulatorConfig;

/// Top-level configuration container for all spegel components.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct SpegelConfig {
    /// Export channel parameters (rendezvous path, failure policy).
    #[validate(nested)]
    pub export: ExportConfig,

    /// Simulated link parameters.
    #[validate(nested)]
    pub simulator: SimulatorConfig,
}

impl SpegelConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/spegel.yaml` - Base settings. If missing, defaults are used.
    /// 3. `SPEGEL_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(SpegelConfig::default()));

        if Path::new("config/spegel.yaml").exists() {
            figment = figment.merge(Yaml::file("config/spegel.yaml"));
        }

        figment
            .merge(Env::prefixed("SPEGEL_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Figment::from(Serialized::defaults(SpegelConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("SPEGEL_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
