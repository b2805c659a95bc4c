//! Deterministic failing analyzer useful for chaos testing.

use async_trait::async_trait;
use sift_core::{
    AnalyzerError, AnalyzerResult, BehaviorAnalyzer, CryptoAnalyzer, DomainFinding, ImageAnalyzer,
    TextAnalyzer, VideoAnalyzer,
};
use std::path::Path;

/// Fails every analysis with a fixed reason. Implements all five domain
/// traits so it can stand in for any analyzer in partial-failure tests.
#[derive(Debug, Clone)]
pub struct AlwaysFailAnalyzer {
    reason: String,
}

impl AlwaysFailAnalyzer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> AnalyzerError {
        AnalyzerError::backend(self.reason.clone())
    }
}

#[async_trait]
impl TextAnalyzer for AlwaysFailAnalyzer {
    async fn analyze(&self, _text: &str) -> AnalyzerResult<DomainFinding> {
        Err(self.error())
    }
}

#[async_trait]
impl ImageAnalyzer for AlwaysFailAnalyzer {
    async fn analyze(&self, _bytes: &[u8]) -> AnalyzerResult<DomainFinding> {
        Err(self.error())
    }
}

#[async_trait]
impl VideoAnalyzer for AlwaysFailAnalyzer {
    async fn analyze(&self, _path: &Path, _max_frames: u32) -> AnalyzerResult<DomainFinding> {
        Err(self.error())
    }
}

#[async_trait]
impl BehaviorAnalyzer for AlwaysFailAnalyzer {
    async fn score(&self, _post_count: u32, _repeated_phrasing: bool) -> AnalyzerResult<f64> {
        Err(self.error())
    }
}

#[async_trait]
impl CryptoAnalyzer for AlwaysFailAnalyzer {
    async fn score(&self, _tx_frequency: u32) -> AnalyzerResult<f64> {
        Err(self.error())
    }
}
