//! Lexicon-driven text analysis.
//!
//! Scans a public post for trade slang, coded emoji, funnel indicators
//! (moves from public to private channels), and pricing patterns, then
//! classifies intent and assigns a confidence in `[0, 100]`.

use async_trait::async_trait;
use regex::Regex;
use sift_core::{AnalyzerError, AnalyzerResult, DomainFinding, TextAnalyzer};

/// Street/trade slang worth flagging on its own.
const SLANG_TERMS: &[&str] = &[
    "plug", "gas", "loud", "snow", "molly", "percs", "xans", "addy", "zaza", "fire", "stash",
    "re-up", "gear", "party favors",
];

/// Emoji commonly used as coded product or payment references.
const TRADE_EMOJI: &[char] = &['\u{1F48A}', '\u{1F489}', '\u{1F33F}', '\u{1F4B0}', '\u{1F341}', '\u{2744}', '\u{1F50C}', '\u{1F525}'];

/// Markers of moving the conversation off the public surface.
const FUNNEL_MARKERS: &[&str] = &[
    "dm me", "dm for", "telegram", "signal", "whatsapp", "snap me", "wickr", "inbox me",
    "hit my line",
];

/// Phrases that signal an offer rather than a search.
const SELLING_MARKERS: &[&str] = &["menu", "for sale", "selling", "prices", "in stock", "delivery"];

/// Phrases that signal demand.
const BUYING_MARKERS: &[&str] = &["looking for", "need a", "need some", "where can i", "anyone got"];

/// Built-in [`TextAnalyzer`] backed by static lexicons and a price regex.
#[derive(Debug)]
pub struct LexiconTextAnalyzer {
    price_pattern: Regex,
}

impl Default for LexiconTextAnalyzer {
    fn default() -> Self {
        Self {
            price_pattern: Regex::new(r"(?i)(\$\s?\d+|\d+\s?(?:each|apiece|per)|\d+\s?for\s?\d+)")
                .expect("static price pattern compiles"),
        }
    }
}

impl LexiconTextAnalyzer {
    fn confidence(
        slang_hits: usize,
        emoji_hits: usize,
        funnel: bool,
        pricing_hits: usize,
    ) -> u64 {
        let raw = slang_hits as u64 * 15
            + emoji_hits as u64 * 10
            + if funnel { 20 } else { 0 }
            + pricing_hits as u64 * 15;
        raw.min(100)
    }

    fn risk_level(confidence: u64) -> &'static str {
        match confidence {
            0..=29 => "low",
            30..=64 => "medium",
            _ => "high",
        }
    }
}

#[async_trait]
impl TextAnalyzer for LexiconTextAnalyzer {
    async fn analyze(&self, text: &str) -> AnalyzerResult<DomainFinding> {
        if text.trim().is_empty() {
            return Err(AnalyzerError::invalid_input("empty text"));
        }
        let lowered = text.to_lowercase();

        let slang: Vec<String> = SLANG_TERMS
            .iter()
            .filter(|term| lowered.contains(*term))
            .map(|term| term.to_string())
            .collect();

        let emojis: Vec<String> = TRADE_EMOJI
            .iter()
            .filter(|emoji| text.contains(**emoji))
            .map(|emoji| emoji.to_string())
            .collect();

        let funnel_indicator = FUNNEL_MARKERS.iter().any(|marker| lowered.contains(marker));

        let pricing_indicators: Vec<String> = self
            .price_pattern
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .collect();

        let selling = SELLING_MARKERS.iter().any(|m| lowered.contains(m))
            || (!pricing_indicators.is_empty() && !slang.is_empty());
        let buying = BUYING_MARKERS.iter().any(|m| lowered.contains(m));

        let intent = if selling {
            "selling"
        } else if buying {
            "buying"
        } else if funnel_indicator {
            "promoting"
        } else if !slang.is_empty() || !emojis.is_empty() {
            "discussing"
        } else {
            "neutral"
        };

        let confidence = Self::confidence(
            slang.len(),
            emojis.len(),
            funnel_indicator,
            pricing_indicators.len(),
        );
        tracing::debug!(intent, confidence, "text lexicon scan complete");

        Ok(DomainFinding::new()
            .with("slang", slang)
            .with("emojis", emojis)
            .with("intent", intent)
            .with("funnel_indicator", funnel_indicator)
            .with("pricing_indicators", pricing_indicators)
            .with("confidence", confidence)
            .with("risk_level", Self::risk_level(confidence)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn scan(text: &str) -> Value {
        let finding = LexiconTextAnalyzer::default().analyze(text).await.unwrap();
        serde_json::to_value(&finding).unwrap()
    }

    #[tokio::test]
    async fn flags_slang_funnel_and_pricing() {
        let json = scan("Best plug in town, $50 each, DM for menu \u{1F48A}\u{1F4B0}").await;

        assert_eq!(json["intent"], "selling");
        assert_eq!(json["funnel_indicator"], true);
        assert!(json["slang"].as_array().unwrap().iter().any(|v| v == "plug"));
        assert!(!json["pricing_indicators"].as_array().unwrap().is_empty());
        assert_eq!(json["risk_level"], "high");
    }

    #[tokio::test]
    async fn plain_text_reads_neutral() {
        let json = scan("Just sharing my recovery journey").await;

        assert_eq!(json["intent"], "neutral");
        assert_eq!(json["confidence"], 0);
        assert_eq!(json["risk_level"], "low");
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let analyzer = LexiconTextAnalyzer::default();
        let err = analyzer.analyze("   ").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn confidence_is_clamped_to_score_range() {
        let json = scan(
            "plug gas loud snow molly percs xans addy zaza stash, $50 each, 2 for 80, DM for menu \u{1F48A}\u{1F489}\u{1F33F}\u{1F4B0}",
        )
        .await;

        assert_eq!(json["confidence"], 100);
    }
}
