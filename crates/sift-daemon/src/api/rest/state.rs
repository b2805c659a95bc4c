//! Application state for API handlers.

use chrono::{DateTime, Utc};
use sift_core::Orchestrator;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Analysis orchestrator
    pub orchestrator: Arc<Orchestrator>,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self {
            orchestrator,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// Uptime since start, as minutes and seconds.
    pub fn uptime(&self) -> String {
        let secs = (Utc::now() - self.started_at).num_seconds().max(0);
        format!("{}m{}s", secs / 60, secs % 60)
    }
}
