//! Analysis orchestrator: per-request domain selection, isolated analyzer
//! execution, and score aggregation.
//!
//! Single-input and comprehensive requests are two configurations of the
//! same selection-and-aggregation policy; there is exactly one code path
//! from request to verdict.

use crate::analyzer::Analyzers;
use crate::config::OrchestratorConfig;
use crate::correlation::correlate;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::types::{
    AnalysisRequest, Domain, DomainOutcome, DomainOutcomes, DomainScore, RiskVerdict,
};
use std::future::Future;
use std::io::Write;
use tempfile::NamedTempFile;

/// Which domains an endpoint wants analyzed.
///
/// Selection gates applicability: a domain runs iff it is selected and its
/// input is present. Behavior and crypto need no input beyond defaults, so
/// selecting them is sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSelection {
    pub text: bool,
    pub image: bool,
    pub video: bool,
    pub behavior: bool,
    pub crypto: bool,
}

impl DomainSelection {
    /// Every domain; the comprehensive endpoint's selection.
    pub fn all() -> Self {
        Self {
            text: true,
            image: true,
            video: true,
            behavior: true,
            crypto: true,
        }
    }

    /// Text plus the always-applicable scoring domains.
    pub fn text_report() -> Self {
        Self {
            text: true,
            image: false,
            video: false,
            behavior: true,
            crypto: true,
        }
    }

    /// Image domain alone.
    pub fn image_only() -> Self {
        Self {
            text: false,
            image: true,
            video: false,
            behavior: false,
            crypto: false,
        }
    }

    /// Video domain alone.
    pub fn video_only() -> Self {
        Self {
            text: false,
            image: false,
            video: true,
            behavior: false,
            crypto: false,
        }
    }
}

/// Orchestrates one analysis request across the domain analyzers.
///
/// Owns all per-request domain outputs; the correlation engine borrows
/// only the surviving numeric scores.
pub struct Orchestrator {
    analyzers: Analyzers,
    config: OrchestratorConfig,
}

impl Orchestrator {
    pub fn new(analyzers: Analyzers, config: OrchestratorConfig) -> Self {
        Self { analyzers, config }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run every selected-and-applicable domain, then aggregate.
    ///
    /// Domains run concurrently and are individually bounded by the
    /// configured timeout. A failed domain contributes no score and blocks
    /// nothing; aggregation waits for all domains to settle before the
    /// correlation engine runs.
    pub async fn analyze(&self, request: AnalysisRequest, selection: DomainSelection) -> RiskVerdict {
        let AnalysisRequest {
            text,
            image,
            video,
            posts,
            tx_frequency,
            max_frames,
        } = request;

        let (text, image, video, behavior, crypto) = tokio::join!(
            self.run_text(selection.text, text),
            self.run_image(selection.image, image),
            self.run_video(selection.video, video, max_frames),
            self.run_behavior(selection.behavior, posts),
            self.run_crypto(selection.crypto, tx_frequency),
        );

        let outcomes = DomainOutcomes {
            text,
            image,
            video,
            behavior,
            crypto,
        };

        let scores = outcomes.score_values();
        let risk_score = correlate(&scores);
        tracing::debug!(
            score_count = scores.len(),
            risk_score,
            "aggregated domain scores"
        );

        RiskVerdict::new(outcomes, risk_score)
    }

    async fn run_text(&self, selected: bool, text: Option<String>) -> DomainOutcome {
        if !selected {
            return DomainOutcome::Skipped;
        }
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return DomainOutcome::Skipped;
        };

        match self.bounded(self.analyzers.text.analyze(&text)).await {
            Ok(finding) => {
                match DomainScore::new(Domain::Text, self.config.text_confidence_score) {
                    Ok(score) => DomainOutcome::analyzed(Some(score), Some(finding)),
                    Err(err) => failed_outcome(Domain::Text, err),
                }
            }
            Err(err) => failed_outcome(Domain::Text, err),
        }
    }

    async fn run_image(&self, selected: bool, image: Option<Vec<u8>>) -> DomainOutcome {
        if !selected {
            return DomainOutcome::Skipped;
        }
        let Some(bytes) = image else {
            return DomainOutcome::Skipped;
        };

        match self.bounded(self.analyzers.image.analyze(&bytes)).await {
            Ok(finding) => DomainOutcome::analyzed(None, Some(finding)),
            Err(err) => failed_outcome(Domain::Image, err),
        }
    }

    async fn run_video(
        &self,
        selected: bool,
        video: Option<Vec<u8>>,
        max_frames: Option<u32>,
    ) -> DomainOutcome {
        if !selected {
            return DomainOutcome::Skipped;
        }
        let Some(bytes) = video else {
            return DomainOutcome::Skipped;
        };
        let max_frames = max_frames.unwrap_or(self.config.default_max_frames);

        // The staged file is owned by this call; the tempfile guard removes
        // it on every exit path, including analyzer panics unwinding.
        let staged = match stage_upload(&bytes) {
            Ok(staged) => staged,
            Err(err) => return failed_outcome(Domain::Video, err.into()),
        };

        let outcome = match self
            .bounded(self.analyzers.video.analyze(staged.path(), max_frames))
            .await
        {
            Ok(finding) => DomainOutcome::analyzed(None, Some(finding)),
            Err(err) => failed_outcome(Domain::Video, err),
        };

        // A cleanup failure must not mask the computed analysis outcome;
        // report it on its own channel.
        if let Err(err) = staged.close() {
            tracing::warn!(error = %err, "failed to remove staged video file");
        }

        outcome
    }

    async fn run_behavior(&self, selected: bool, posts: Option<u32>) -> DomainOutcome {
        if !selected {
            return DomainOutcome::Skipped;
        }
        let post_count = posts.unwrap_or(self.config.default_post_count);
        let repeated = self.config.assume_repeated_phrasing;

        let result = self
            .bounded(self.analyzers.behavior.score(post_count, repeated))
            .await;
        score_outcome(Domain::Behavior, result)
    }

    async fn run_crypto(&self, selected: bool, tx_frequency: Option<u32>) -> DomainOutcome {
        if !selected {
            return DomainOutcome::Skipped;
        }
        let frequency = tx_frequency.unwrap_or(self.config.default_tx_frequency);

        let result = self.bounded(self.analyzers.crypto.score(frequency)).await;
        score_outcome(Domain::Crypto, result)
    }

    /// Bound one domain's analysis by the configured timeout.
    async fn bounded<T, F>(&self, fut: F) -> AnalyzerResult<T>
    where
        F: Future<Output = AnalyzerResult<T>>,
    {
        let limit = self.config.domain_timeout();
        match tokio::time::timeout(limit, fut).await {
            Ok(result) => result,
            Err(_) => Err(AnalyzerError::Timeout(limit)),
        }
    }
}

/// Validate a raw analyzer score into a domain outcome.
fn score_outcome(domain: Domain, result: AnalyzerResult<f64>) -> DomainOutcome {
    match result.and_then(|value| DomainScore::new(domain, value)) {
        Ok(score) => DomainOutcome::analyzed(Some(score), None),
        Err(err) => failed_outcome(domain, err),
    }
}

fn failed_outcome(domain: Domain, err: AnalyzerError) -> DomainOutcome {
    tracing::warn!(domain = %domain, error = %err, "domain analysis failed");
    DomainOutcome::failed(err.to_string())
}

/// Stage uploaded bytes into a scoped temporary file for frame extraction.
fn stage_upload(bytes: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut staged = NamedTempFile::new()?;
    staged.write_all(bytes)?;
    staged.flush()?;
    Ok(staged)
}
