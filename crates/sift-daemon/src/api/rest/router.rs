//! API Router configuration.

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/analyze", post(handlers::analyze_text))
        .route("/analyze/image", post(handlers::analyze_image))
        .route("/analyze/video", post(handlers::analyze_video))
        .route(
            "/analyze/comprehensive",
            post(handlers::analyze_comprehensive),
        );

    let mut router = Router::new()
        .route("/", get(handlers::service_info))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.max_upload_bytes));

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use sift_analyzers::{builtin_analyzers, AlwaysFailAnalyzer};
    use sift_core::{Analyzers, Orchestrator, OrchestratorConfig};
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "sift-test-boundary";

    fn router_with(analyzers: Analyzers) -> Router {
        let orchestrator = Arc::new(Orchestrator::new(analyzers, OrchestratorConfig::default()));
        create_router(AppState::new(orchestrator), &ServerConfig::default())
    }

    fn test_router() -> Router {
        router_with(builtin_analyzers())
    }

    /// Build a multipart/form-data body from (name, filename, bytes) parts.
    fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, filename, bytes) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match filename {
                Some(filename) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(uri: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    #[tokio::test]
    async fn root_reports_operational() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "operational");
    }

    #[tokio::test]
    async fn health_endpoint_reports_healthy() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn analyze_matches_three_domain_correlation_contract() {
        let payload = serde_json::json!({"text": "test", "posts": 1, "tx": 2});
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;

        let behavior = body["behavior_score"].as_f64().unwrap();
        let crypto = body["crypto_score"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&behavior));
        assert!((0.0..=100.0).contains(&crypto));

        let expected = round2((60.0 + behavior + crypto) / 3.0);
        assert_eq!(body["final_risk_score"].as_f64().unwrap(), expected);
        assert!(body["text_analysis"].is_object());
    }

    #[tokio::test]
    async fn comprehensive_without_media_omits_media_keys() {
        let response = test_router()
            .oneshot(multipart_request(
                "/api/v1/analyze/comprehensive",
                &[("posts", None, b"3"), ("tx", None, b"5")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let object = body.as_object().unwrap();

        for absent in [
            "text_analysis",
            "text_error",
            "image_analysis",
            "image_error",
            "video_analysis",
            "video_error",
        ] {
            assert!(!object.contains_key(absent), "unexpected key {absent}");
        }

        let behavior = body["behavior_score"].as_f64().unwrap();
        let crypto = body["crypto_score"].as_f64().unwrap();
        let expected = round2((behavior + crypto) / 2.0);
        assert_eq!(body["final_risk_score"].as_f64().unwrap(), expected);
    }

    #[tokio::test]
    async fn image_endpoint_reports_failure_for_non_image_payload() {
        let response = test_router()
            .oneshot(multipart_request(
                "/api/v1/analyze/image",
                &[("file", Some("payload.bin"), b"this is not an image")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "failed");
        assert_eq!(body["filename"], "payload.bin");
        assert!(body["error"].as_str().unwrap().contains("decode error"));
    }

    #[tokio::test]
    async fn image_endpoint_accepts_png_payload() {
        let mut png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        png.extend_from_slice(&[0u8; 16]);

        let response = test_router()
            .oneshot(multipart_request(
                "/api/v1/analyze/image",
                &[("file", Some("pic.png"), &png)],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["image_analysis"]["format"], "png");
    }

    #[tokio::test]
    async fn video_endpoint_accepts_zero_frame_budget() {
        let response = test_router()
            .oneshot(multipart_request(
                "/api/v1/analyze/video",
                &[
                    ("file", Some("clip.mp4"), &[7u8; 256]),
                    ("max_frames", None, b"0"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["video_analysis"]["frames_examined"], 0);
    }

    #[tokio::test]
    async fn missing_upload_field_is_a_bad_request() {
        let response = test_router()
            .oneshot(multipart_request(
                "/api/v1/analyze/image",
                &[("unrelated", None, b"x")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn comprehensive_keeps_siblings_when_image_analyzer_is_down() {
        let mut analyzers = builtin_analyzers();
        analyzers.image = Arc::new(AlwaysFailAnalyzer::new("image model offline"));

        let response = router_with(analyzers)
            .oneshot(multipart_request(
                "/api/v1/analyze/comprehensive",
                &[
                    ("text", None, b"test"),
                    ("image", Some("pic.png"), b"irrelevant"),
                    ("posts", None, b"1"),
                    ("tx", None, b"2"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;

        assert!(body["image_error"]
            .as_str()
            .unwrap()
            .contains("image model offline"));
        assert!(body["text_analysis"].is_object());

        let behavior = body["behavior_score"].as_f64().unwrap();
        let crypto = body["crypto_score"].as_f64().unwrap();
        let expected = round2((60.0 + behavior + crypto) / 3.0);
        assert_eq!(body["final_risk_score"].as_f64().unwrap(), expected);
    }
}
