//! Container-signature image inspection.
//!
//! Validates that an upload is a recognizable image container before any
//! deeper classification. A payload with no known signature is a decode
//! failure, which the orchestrator reports as a domain-local error.

use async_trait::async_trait;
use sift_core::{AnalyzerError, AnalyzerResult, DomainFinding, ImageAnalyzer};

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Built-in [`ImageAnalyzer`] that inspects container signatures only.
#[derive(Debug, Clone, Default)]
pub struct SignatureImageAnalyzer;

fn sniff_format(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(PNG_MAGIC) {
        Some("png")
    } else if bytes.starts_with(JPEG_MAGIC) {
        Some("jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("gif")
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Some("webp")
    } else if bytes.starts_with(b"BM") {
        Some("bmp")
    } else {
        None
    }
}

#[async_trait]
impl ImageAnalyzer for SignatureImageAnalyzer {
    async fn analyze(&self, bytes: &[u8]) -> AnalyzerResult<DomainFinding> {
        if bytes.is_empty() {
            return Err(AnalyzerError::invalid_input("empty image payload"));
        }
        let format = sniff_format(bytes)
            .ok_or_else(|| AnalyzerError::decode("unrecognized image container"))?;

        tracing::debug!(format, byte_len = bytes.len(), "image container recognized");

        Ok(DomainFinding::new()
            .with("format", format)
            .with("byte_len", bytes.len() as u64)
            .with("items_found", Vec::<String>::new())
            .with("confidence", 10)
            .with("risk_level", "low")
            .with(
                "description",
                format!("recognized {format} container; no flagged items"),
            ))
    }
}
