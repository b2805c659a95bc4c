//! SIFT core: multi-domain risk signal fusion.
//!
//! This crate holds the intelligence of the system: the correlation engine
//! that reduces a variable-length set of bounded domain scores to one risk
//! value, and the orchestrator that decides which domains apply to a
//! request, isolates their failures, and feeds the survivors to the engine.

#![deny(unsafe_code)]

pub mod analyzer;
pub mod assembler;
pub mod config;
pub mod correlation;
pub mod error;
pub mod orchestrator;
pub mod types;

pub use analyzer::{
    Analyzers, BehaviorAnalyzer, CryptoAnalyzer, ImageAnalyzer, TextAnalyzer, VideoAnalyzer,
};
pub use assembler::{
    assemble_analysis, assemble_image, assemble_video, AnalysisResponse, AnalysisStatus,
    MediaAnalysisResponse,
};
pub use config::OrchestratorConfig;
pub use correlation::{correlate, EMPTY_CORRELATION_SCORE};
pub use error::{AnalyzerError, AnalyzerResult};
pub use orchestrator::{DomainSelection, Orchestrator};
pub use types::{
    AnalysisRequest, Domain, DomainFinding, DomainOutcome, DomainOutcomes, DomainScore,
    RiskVerdict,
};
