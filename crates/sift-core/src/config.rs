//! Orchestrator configuration.
//!
//! Every scoring constant that drives aggregation lives here explicitly
//! rather than as a literal buried in the request path, so behavior is
//! inspectable and testable per deployment.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the analysis orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Fixed confidence score attributed to the text domain when text
    /// analysis succeeds. A standing placeholder until the text analyzer
    /// produces its own calibrated confidence.
    #[serde(default = "default_text_confidence")]
    pub text_confidence_score: f64,

    /// Post count assumed when the request does not supply one.
    #[serde(default = "default_post_count")]
    pub default_post_count: u32,

    /// Transaction frequency assumed when the request does not supply one.
    #[serde(default = "default_tx_frequency")]
    pub default_tx_frequency: u32,

    /// Whether behavioral scoring assumes repeated phrasing was detected.
    /// An acknowledged simplification carried from the upstream heuristics.
    #[serde(default = "default_true")]
    pub assume_repeated_phrasing: bool,

    /// Frames examined per video when the request does not supply a limit.
    #[serde(default = "default_max_frames")]
    pub default_max_frames: u32,

    /// Independent per-domain analysis timeout, in seconds. A domain that
    /// exceeds it is treated as failed; siblings are unaffected.
    #[serde(default = "default_domain_timeout")]
    pub domain_timeout_secs: u64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            text_confidence_score: default_text_confidence(),
            default_post_count: default_post_count(),
            default_tx_frequency: default_tx_frequency(),
            assume_repeated_phrasing: true,
            default_max_frames: default_max_frames(),
            domain_timeout_secs: default_domain_timeout(),
        }
    }
}

impl OrchestratorConfig {
    pub fn domain_timeout(&self) -> Duration {
        Duration::from_secs(self.domain_timeout_secs)
    }
}

fn default_text_confidence() -> f64 {
    60.0
}

fn default_post_count() -> u32 {
    1
}

fn default_tx_frequency() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_max_frames() -> u32 {
    5
}

fn default_domain_timeout() -> u64 {
    30
}
