//! Behavioral posting-pattern scoring.

use async_trait::async_trait;
use sift_core::{AnalyzerResult, BehaviorAnalyzer};

/// Weight per observed post, capped so volume alone never saturates the
/// scale.
const POST_VOLUME_WEIGHT: f64 = 12.0;
const POST_VOLUME_CEILING: f64 = 75.0;

/// Flat contribution when repeated phrasing was detected across posts.
const REPEATED_PHRASING_WEIGHT: f64 = 25.0;

/// Built-in [`BehaviorAnalyzer`]: monotone bounded map from posting volume
/// and phrasing repetition to `[0, 100]`.
#[derive(Debug, Clone, Default)]
pub struct HeuristicBehaviorAnalyzer;

#[async_trait]
impl BehaviorAnalyzer for HeuristicBehaviorAnalyzer {
    async fn score(&self, post_count: u32, repeated_phrasing: bool) -> AnalyzerResult<f64> {
        let volume = (f64::from(post_count) * POST_VOLUME_WEIGHT).min(POST_VOLUME_CEILING);
        let phrasing = if repeated_phrasing {
            REPEATED_PHRASING_WEIGHT
        } else {
            0.0
        };
        Ok(volume + phrasing)
    }
}
