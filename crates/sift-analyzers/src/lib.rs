//! Built-in domain analyzers for SIFT.
//!
//! Deterministic implementations of the `sift-core` analyzer seams:
//! lexicon-driven text analysis, container-signature image inspection,
//! frame-sampling video inspection, and the behavior/crypto heuristics.
//! Any other implementation of the traits can be swapped in per domain.

#![deny(unsafe_code)]

pub mod behavior;
pub mod crypto;
pub mod fixtures;
pub mod image;
pub mod text;
pub mod video;

pub use behavior::HeuristicBehaviorAnalyzer;
pub use crypto::FrequencyCryptoAnalyzer;
pub use fixtures::AlwaysFailAnalyzer;
pub use image::SignatureImageAnalyzer;
pub use text::LexiconTextAnalyzer;
pub use video::FrameSampleVideoAnalyzer;

use sift_core::Analyzers;
use std::sync::Arc;

/// The default analyzer set: every domain backed by its built-in.
pub fn builtin_analyzers() -> Analyzers {
    Analyzers {
        text: Arc::new(LexiconTextAnalyzer::default()),
        image: Arc::new(SignatureImageAnalyzer),
        video: Arc::new(FrameSampleVideoAnalyzer),
        behavior: Arc::new(HeuristicBehaviorAnalyzer),
        crypto: Arc::new(FrequencyCryptoAnalyzer),
    }
}
