//! Trait seams for the per-domain analyzers.
//!
//! Analyzers are opaque scoring functions supplied by other subsystems.
//! Each may fail with an [`AnalyzerError`]; the orchestrator treats any
//! failure as "domain unavailable", never as fatal to the request.

use crate::error::AnalyzerResult;
use crate::types::DomainFinding;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Text content analysis (slang, coded language, intent).
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    /// Analyze a public text post and return a structured finding.
    async fn analyze(&self, text: &str) -> AnalyzerResult<DomainFinding>;
}

/// Image content analysis.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    /// Analyze raw uploaded image bytes and return a structured finding.
    async fn analyze(&self, bytes: &[u8]) -> AnalyzerResult<DomainFinding>;
}

/// Video content analysis over a staged file.
#[async_trait]
pub trait VideoAnalyzer: Send + Sync {
    /// Analyze a staged video file, examining at most `max_frames` frames.
    ///
    /// `max_frames == 0` is legal and must yield an empty finding set, not
    /// an error.
    async fn analyze(&self, path: &Path, max_frames: u32) -> AnalyzerResult<DomainFinding>;
}

/// Behavioral pattern scoring.
#[async_trait]
pub trait BehaviorAnalyzer: Send + Sync {
    /// Score posting behavior into `[0, 100]`.
    async fn score(&self, post_count: u32, repeated_phrasing: bool) -> AnalyzerResult<f64>;
}

/// Cryptocurrency transaction pattern scoring.
#[async_trait]
pub trait CryptoAnalyzer: Send + Sync {
    /// Score transaction frequency into `[0, 100]`.
    async fn score(&self, tx_frequency: u32) -> AnalyzerResult<f64>;
}

/// The full set of analyzers the orchestrator dispatches to.
#[derive(Clone)]
pub struct Analyzers {
    pub text: Arc<dyn TextAnalyzer>,
    pub image: Arc<dyn ImageAnalyzer>,
    pub video: Arc<dyn VideoAnalyzer>,
    pub behavior: Arc<dyn BehaviorAnalyzer>,
    pub crypto: Arc<dyn CryptoAnalyzer>,
}
