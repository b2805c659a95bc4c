//! Analysis endpoint handlers.
//!
//! Each endpoint builds an [`AnalysisRequest`] plus a [`DomainSelection`]
//! and hands both to the one orchestrator entry point; no endpoint carries
//! its own aggregation logic.

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use sift_core::{
    assemble_analysis, assemble_image, assemble_video, AnalysisRequest, AnalysisResponse,
    DomainSelection, MediaAnalysisResponse,
};

/// Body for the text analysis endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
    #[serde(default)]
    pub posts: Option<u32>,
    #[serde(default)]
    pub tx: Option<u32>,
}

/// `POST /analyze` — text plus the always-applicable scoring domains.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> ApiResult<Json<AnalysisResponse>> {
    let analysis = AnalysisRequest {
        text: Some(request.text),
        posts: request.posts,
        tx_frequency: request.tx,
        ..Default::default()
    };

    let verdict = state
        .orchestrator
        .analyze(analysis, DomainSelection::text_report())
        .await;

    tracing::info!(
        analysis_id = %verdict.analysis_id,
        risk_score = verdict.risk_score,
        "text analysis complete"
    );

    Ok(Json(assemble_analysis(&verdict)))
}

/// `POST /analyze/image` — single image upload.
pub async fn analyze_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<MediaAnalysisResponse>> {
    let upload = read_upload(multipart).await?;

    let analysis = AnalysisRequest {
        image: Some(upload.bytes),
        ..Default::default()
    };
    let verdict = state
        .orchestrator
        .analyze(analysis, DomainSelection::image_only())
        .await;

    Ok(Json(assemble_image(&verdict, upload.filename)))
}

/// `POST /analyze/video` — single video upload with an optional frame
/// budget.
pub async fn analyze_video(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<MediaAnalysisResponse>> {
    let upload = read_upload(multipart).await?;

    let analysis = AnalysisRequest {
        video: Some(upload.bytes),
        max_frames: upload.max_frames,
        ..Default::default()
    };
    let verdict = state
        .orchestrator
        .analyze(analysis, DomainSelection::video_only())
        .await;

    Ok(Json(assemble_video(&verdict, upload.filename)))
}

/// `POST /analyze/comprehensive` — any subset of inputs, all domains
/// selected.
pub async fn analyze_comprehensive(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<AnalysisResponse>> {
    let mut analysis = AnalysisRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("text") => analysis.text = Some(field.text().await.map_err(multipart_error)?),
            Some("image") => {
                analysis.image = Some(field.bytes().await.map_err(multipart_error)?.to_vec())
            }
            Some("video") => {
                analysis.video = Some(field.bytes().await.map_err(multipart_error)?.to_vec())
            }
            Some("posts") => {
                let value = field.text().await.map_err(multipart_error)?;
                analysis.posts = Some(parse_count(&value, "posts")?);
            }
            Some("tx") => {
                let value = field.text().await.map_err(multipart_error)?;
                analysis.tx_frequency = Some(parse_count(&value, "tx")?);
            }
            Some("max_frames") => {
                let value = field.text().await.map_err(multipart_error)?;
                analysis.max_frames = Some(parse_count(&value, "max_frames")?);
            }
            _ => {}
        }
    }

    let verdict = state
        .orchestrator
        .analyze(analysis, DomainSelection::all())
        .await;

    tracing::info!(
        analysis_id = %verdict.analysis_id,
        risk_score = verdict.risk_score,
        "comprehensive analysis complete"
    );

    Ok(Json(assemble_analysis(&verdict)))
}

/// One file upload plus its optional side fields.
struct Upload {
    filename: String,
    bytes: Vec<u8>,
    max_frames: Option<u32>,
}

/// Pull the `file` field (and an optional `max_frames` field) out of a
/// multipart body.
async fn read_upload(mut multipart: Multipart) -> ApiResult<Upload> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut max_frames = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?.to_vec();
                file = Some((filename, bytes));
            }
            Some("max_frames") => {
                let value = field.text().await.map_err(multipart_error)?;
                max_frames = Some(parse_count(&value, "max_frames")?);
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| ApiError::BadRequest("missing 'file' upload field".to_string()))?;

    Ok(Upload {
        filename,
        bytes,
        max_frames,
    })
}

fn parse_count(value: &str, name: &str) -> ApiResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid integer for '{name}': {value}")))
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::BadRequest(format!("malformed multipart body: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_accepts_plain_integers() {
        assert_eq!(parse_count("5", "max_frames").unwrap(), 5);
        assert_eq!(parse_count(" 12 ", "posts").unwrap(), 12);
    }

    #[test]
    fn parse_count_rejects_garbage() {
        assert!(parse_count("five", "max_frames").is_err());
        assert!(parse_count("-1", "posts").is_err());
        assert!(parse_count("", "tx").is_err());
    }
}
