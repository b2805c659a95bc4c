//! Result assembler: shapes a [`RiskVerdict`] into endpoint response
//! structures.
//!
//! Skipped domains serialize to nothing; failed domains surface their
//! reason verbatim next to whatever the surviving domains produced.
//! Partial results are never discarded because a sibling failed.

use crate::types::{DomainFinding, DomainOutcome, RiskVerdict};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Merged analysis response for the text and comprehensive endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_analysis: Option<DomainFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<DomainFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_analysis: Option<DomainFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior_error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_error: Option<String>,

    pub final_risk_score: f64,
    pub analysis_id: Uuid,
    pub completed_at: DateTime<Utc>,
}

/// Outcome marker for the single-upload media endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Success,
    Failed,
}

/// Response for the single-upload image/video endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MediaAnalysisResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<DomainFinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_analysis: Option<DomainFinding>,
    pub filename: String,
    pub status: AnalysisStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Shape a verdict into the merged analysis response.
pub fn assemble_analysis(verdict: &RiskVerdict) -> AnalysisResponse {
    let (text_analysis, text_error) = split_finding(&verdict.outcomes.text);
    let (image_analysis, image_error) = split_finding(&verdict.outcomes.image);
    let (video_analysis, video_error) = split_finding(&verdict.outcomes.video);
    let (behavior_score, behavior_error) = split_score(&verdict.outcomes.behavior);
    let (crypto_score, crypto_error) = split_score(&verdict.outcomes.crypto);

    AnalysisResponse {
        text_analysis,
        text_error,
        image_analysis,
        image_error,
        video_analysis,
        video_error,
        behavior_score,
        behavior_error,
        crypto_score,
        crypto_error,
        final_risk_score: verdict.risk_score,
        analysis_id: verdict.analysis_id,
        completed_at: verdict.completed_at,
    }
}

/// Shape a verdict from an image-only request.
pub fn assemble_image(verdict: &RiskVerdict, filename: impl Into<String>) -> MediaAnalysisResponse {
    let (finding, error) = media_parts(&verdict.outcomes.image, "image was not analyzed");
    MediaAnalysisResponse {
        image_analysis: finding,
        video_analysis: None,
        filename: filename.into(),
        status: media_status(&error),
        error,
    }
}

/// Shape a verdict from a video-only request.
pub fn assemble_video(verdict: &RiskVerdict, filename: impl Into<String>) -> MediaAnalysisResponse {
    let (finding, error) = media_parts(&verdict.outcomes.video, "video was not analyzed");
    MediaAnalysisResponse {
        image_analysis: None,
        video_analysis: finding,
        filename: filename.into(),
        status: media_status(&error),
        error,
    }
}

fn split_finding(outcome: &DomainOutcome) -> (Option<DomainFinding>, Option<String>) {
    match outcome {
        DomainOutcome::Analyzed { finding, .. } => (finding.clone(), None),
        DomainOutcome::Failed { reason } => (None, Some(reason.clone())),
        DomainOutcome::Skipped => (None, None),
    }
}

fn split_score(outcome: &DomainOutcome) -> (Option<f64>, Option<String>) {
    match outcome {
        DomainOutcome::Analyzed { score, .. } => (score.map(|s| s.value()), None),
        DomainOutcome::Failed { reason } => (None, Some(reason.clone())),
        DomainOutcome::Skipped => (None, None),
    }
}

fn media_parts(
    outcome: &DomainOutcome,
    skipped_reason: &str,
) -> (Option<DomainFinding>, Option<String>) {
    match outcome {
        DomainOutcome::Analyzed { finding, .. } => (finding.clone(), None),
        DomainOutcome::Failed { reason } => (None, Some(reason.clone())),
        DomainOutcome::Skipped => (None, Some(skipped_reason.to_string())),
    }
}

fn media_status(error: &Option<String>) -> AnalysisStatus {
    if error.is_none() {
        AnalysisStatus::Success
    } else {
        AnalysisStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Domain, DomainOutcomes, DomainScore};

    fn verdict_with(outcomes: DomainOutcomes, risk_score: f64) -> RiskVerdict {
        RiskVerdict::new(outcomes, risk_score)
    }

    #[test]
    fn skipped_domains_leave_no_keys_in_serialized_response() {
        let mut outcomes = DomainOutcomes::skipped();
        outcomes.behavior = DomainOutcome::analyzed(
            Some(DomainScore::new(Domain::Behavior, 61.0).unwrap()),
            None,
        );
        outcomes.crypto = DomainOutcome::analyzed(
            Some(DomainScore::new(Domain::Crypto, 45.0).unwrap()),
            None,
        );
        let verdict = verdict_with(outcomes, 53.0);

        let response = assemble_analysis(&verdict);
        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("text_analysis"));
        assert!(!object.contains_key("text_error"));
        assert!(!object.contains_key("image_analysis"));
        assert!(!object.contains_key("video_analysis"));
        assert_eq!(json["behavior_score"], 61.0);
        assert_eq!(json["crypto_score"], 45.0);
        assert_eq!(json["final_risk_score"], 53.0);
    }

    #[test]
    fn failed_domain_reason_is_preserved_verbatim() {
        let mut outcomes = DomainOutcomes::skipped();
        outcomes.image = DomainOutcome::failed("decode error: not an image");
        outcomes.text = DomainOutcome::analyzed(
            Some(DomainScore::new(Domain::Text, 60.0).unwrap()),
            Some(DomainFinding::new().with("intent", "neutral")),
        );
        let verdict = verdict_with(outcomes, 60.0);

        let response = assemble_analysis(&verdict);
        assert_eq!(
            response.image_error.as_deref(),
            Some("decode error: not an image")
        );
        // Sibling success is kept alongside the failure.
        assert!(response.text_analysis.is_some());
    }

    #[test]
    fn media_response_marks_failure_with_error_message() {
        let mut outcomes = DomainOutcomes::skipped();
        outcomes.image = DomainOutcome::failed("decode error: unrecognized image container");
        let verdict = verdict_with(outcomes, 0.0);

        let response = assemble_image(&verdict, "payload.bin");
        assert_eq!(response.status, AnalysisStatus::Failed);
        assert_eq!(response.filename, "payload.bin");
        assert!(response.error.is_some());
        assert!(response.image_analysis.is_none());
    }

    #[test]
    fn media_response_marks_success_with_finding() {
        let mut outcomes = DomainOutcomes::skipped();
        outcomes.video =
            DomainOutcome::analyzed(None, Some(DomainFinding::new().with("frames_examined", 5)));
        let verdict = verdict_with(outcomes, 0.0);

        let response = assemble_video(&verdict, "clip.mp4");
        assert_eq!(response.status, AnalysisStatus::Success);
        assert!(response.video_analysis.is_some());
        assert!(response.error.is_none());
    }
}
