//! Data model for multi-domain risk analysis.

use crate::error::AnalyzerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Analysis domain tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Text,
    Image,
    Video,
    Behavior,
    Crypto,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Text => "text",
            Domain::Image => "image",
            Domain::Video => "video",
            Domain::Behavior => "behavior",
            Domain::Crypto => "crypto",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bounded risk contribution from one domain.
///
/// The value invariant (finite, within `[MIN, MAX]`) is enforced at
/// construction; a `DomainScore` is immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainScore {
    domain: Domain,
    value: f64,
}

impl DomainScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(domain: Domain, value: f64) -> Result<Self, AnalyzerError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(AnalyzerError::ScoreOutOfRange { domain, value });
        }
        Ok(Self { domain, value })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Free-form structured detail accompanying a domain's analysis.
///
/// Findings pass through to the final response unmodified; the correlation
/// engine never reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainFinding(Map<String, Value>);

impl DomainFinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for assembling findings inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for DomainFinding {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// The set of inputs provided for one analysis invocation.
///
/// Every field is optional; an all-absent request is legal and produces a
/// degenerate verdict rather than an error.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub text: Option<String>,
    pub image: Option<Vec<u8>>,
    pub video: Option<Vec<u8>>,
    pub posts: Option<u32>,
    pub tx_frequency: Option<u32>,
    pub max_frames: Option<u32>,
}

/// Tagged per-domain result.
///
/// Distinguishes "no data because the domain was not requested" (`Skipped`)
/// from "the domain was invoked and failed" (`Failed`), so downstream
/// consumers never have to infer intent from missing keys.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DomainOutcome {
    Analyzed {
        #[serde(skip_serializing_if = "Option::is_none")]
        score: Option<DomainScore>,
        #[serde(skip_serializing_if = "Option::is_none")]
        finding: Option<DomainFinding>,
    },
    Failed {
        reason: String,
    },
    Skipped,
}

impl DomainOutcome {
    pub fn analyzed(score: Option<DomainScore>, finding: Option<DomainFinding>) -> Self {
        Self::Analyzed { score, finding }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub fn score(&self) -> Option<&DomainScore> {
        match self {
            Self::Analyzed { score, .. } => score.as_ref(),
            _ => None,
        }
    }

    pub fn finding(&self) -> Option<&DomainFinding> {
        match self {
            Self::Analyzed { finding, .. } => finding.as_ref(),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Per-domain outcomes for one request, in fixed domain order.
#[derive(Debug, Clone, Serialize)]
pub struct DomainOutcomes {
    pub text: DomainOutcome,
    pub image: DomainOutcome,
    pub video: DomainOutcome,
    pub behavior: DomainOutcome,
    pub crypto: DomainOutcome,
}

impl DomainOutcomes {
    /// All domains skipped; the starting point for any request.
    pub fn skipped() -> Self {
        Self {
            text: DomainOutcome::Skipped,
            image: DomainOutcome::Skipped,
            video: DomainOutcome::Skipped,
            behavior: DomainOutcome::Skipped,
            crypto: DomainOutcome::Skipped,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Domain, &DomainOutcome)> {
        [
            (Domain::Text, &self.text),
            (Domain::Image, &self.image),
            (Domain::Video, &self.video),
            (Domain::Behavior, &self.behavior),
            (Domain::Crypto, &self.crypto),
        ]
        .into_iter()
    }

    /// Well-defined score values from domains that produced one.
    ///
    /// Failed and skipped domains contribute nothing; this is exactly the
    /// correlation engine's input set.
    pub fn score_values(&self) -> Vec<f64> {
        self.iter()
            .filter_map(|(_, outcome)| outcome.score())
            .map(|score| score.value())
            .collect()
    }
}

/// The final output of one analysis: a bounded aggregated risk score plus
/// the per-domain outcomes that fed it.
///
/// Constructed fresh per request; never persisted or mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RiskVerdict {
    pub analysis_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub outcomes: DomainOutcomes,
    pub risk_score: f64,
}

impl RiskVerdict {
    pub fn new(outcomes: DomainOutcomes, risk_score: f64) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            completed_at: Utc::now(),
            outcomes,
            risk_score,
        }
    }
}
