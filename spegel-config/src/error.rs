//! Error type for assembling the spegel configuration.
//!
//! File reads and merging are figment's job; everything it reports funnels
//! through `Parsing`. Validation failures are flattened to one line per
//! offending field so a bad `export`/`simulator` section reads at a glance.

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The merged configuration failed a validation rule.
    #[error("Invalid configuration:\n{}", render_field_errors(.0))]
    Validation(#[source] ValidationErrors),

    /// Figment could not read or merge a configuration source.
    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

fn render_field_errors(errors: &ValidationErrors) -> String {
    let mut lines = Vec::new();
    for (field, errors) in errors.field_errors() {
        for error in errors.iter() {
            let message = match &error.message {
                Some(msg) => msg.to_string(),
                None => error.code.to_string(),
            };
            lines.push(format!("  {field}: {message}"));
        }
    }
    lines.join("\n")
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Validation(errors)
    }
}
