//! Cryptocurrency transaction-pattern scoring.

use async_trait::async_trait;
use sift_core::{AnalyzerResult, CryptoAnalyzer};

/// Weight per observed transaction per period.
const TX_FREQUENCY_WEIGHT: f64 = 9.0;

/// Built-in [`CryptoAnalyzer`]: monotone bounded map from transaction
/// frequency to `[0, 100]`.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCryptoAnalyzer;

#[async_trait]
impl CryptoAnalyzer for FrequencyCryptoAnalyzer {
    async fn score(&self, tx_frequency: u32) -> AnalyzerResult<f64> {
        Ok((f64::from(tx_frequency) * TX_FREQUENCY_WEIGHT).min(100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_frequency_maps_below_midscale() {
        let score = FrequencyCryptoAnalyzer.score(2).await.unwrap();
        assert_eq!(score, 18.0);
    }

    #[tokio::test]
    async fn high_frequency_saturates_at_ceiling() {
        let score = FrequencyCryptoAnalyzer.score(1_000_000).await.unwrap();
        assert_eq!(score, 100.0);
    }
}
