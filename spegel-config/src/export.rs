//! Export channel configuration.
//!
//! Parameters for the rendezvous endpoint shared in advance with the
//! consumer process, and the policy applied when a send fails mid-run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// What to do when a send to the consumer fails after startup.
///
/// Connect failures are always fatal; this policy only covers failures once
/// traffic is flowing (e.g. the consumer disconnects mid-run).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SendFailurePolicy {
    /// Stop the run on the first failed send instead of stalling against a
    /// dead peer.
    #[default]
    Abort,
    /// Log, count, and keep running without the consumer.
    LogAndSkip,
}

/// Export channel configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ExportConfig {
    /// Rendezvous endpoint the consumer must already be listening on.
    #[validate(custom(function = validation::validate_socket_path))]
    #[serde(default = "default_socket_path")]
    pub socket_path: PathBuf,

    /// Policy for send failures after the session is established.
    #[serde(default)]
    pub on_send_failure: SendFailurePolicy,
}

fn default_socket_path() -> PathBuf {
    PathBuf::from("/tmp/ns-3.sock")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            on_send_failure: SendFailurePolicy::default(),
        }
    }
}
