pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::analysis::handlers as analysis;
use crate::intake::handlers as intake;
use crate::intake::validator::MAX_UPLOAD_BYTES;
use crate::latex::handlers as latex;
use crate::state::AppState;

/// Uploads up to the validator's ceiling plus multipart framing reach the
/// validator, which reports the size error itself.
const BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        // Resume analysis
        .route("/analyze-resume", post(analysis::handle_analyze_resume))
        .route("/extract-text", post(intake::handle_extract_text))
        .route("/validate-file", post(intake::handle_validate_file))
        // Templates
        .route("/templates", get(latex::handle_list_templates))
        .route("/templates/:id", get(latex::handle_get_template))
        .route("/templates/:id/preview", get(latex::handle_preview_template))
        // LaTeX editor
        .route("/latex/validate", post(latex::handle_validate))
        .route("/latex/compile", post(latex::handle_compile))
        .route("/latex/generate", post(latex::handle_generate))
        .route("/latex/starter", get(latex::handle_starter))
        .route("/latex/format", post(latex::handle_format))
        .route("/latex/sections", post(latex::handle_sections))
        // AI-assisted editing
        .route("/latex/ai/improve", post(latex::handle_ai_improve))
        .route("/latex/ai/bullets", post(latex::handle_ai_bullets))
        .route("/latex/ai/ats-check", post(latex::handle_ai_ats_check))
        .route("/latex/ai/suggest-skills", post(latex::handle_ai_suggest_skills))
        .route("/latex/ai/improve-section", post(latex::handle_ai_improve_section))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

/// CORS for the configured origins. A `*` entry allows any origin (without credentials).
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::orchestrator::tests::ScriptedGenerator;
    use crate::config::{Config, GenerationConfig};
    use crate::extraction::test_fixtures::pdf_with_pages;
    use crate::latex::compiler::{CompileError, LatexCompiler, TypesetRunner};

    const BOUNDARY: &str = "X-RESUME-TEST-BOUNDARY";
    const GOOD_REPLY: &str = r#"{"ats_score": 81, "fit_analysis": "Solid backend profile.", "improvement_tips": ["Quantify results"]}"#;

    struct NeverRunner;

    #[async_trait::async_trait]
    impl TypesetRunner for NeverRunner {
        async fn run_pass(&self, _workdir: &std::path::Path) -> Result<(), CompileError> {
            panic!("typesetter must not run in router tests");
        }
    }

    fn test_config() -> Config {
        Config {
            gemini_api_key: "test-key".into(),
            gemini_model: "scripted".into(),
            generation: GenerationConfig::default(),
            allowed_origins: vec!["http://localhost:3000".into()],
            debug: false,
            max_retries: 3,
            pdflatex_bin: "pdflatex".into(),
            latex_timeout: Duration::from_secs(60),
            port: 0,
            rust_log: "info".into(),
        }
    }

    fn app(generator: Arc<ScriptedGenerator>) -> Router {
        let compiler = LatexCompiler::new(Arc::new(NeverRunner), false, Duration::from_secs(60));
        build_router(AppState::new(test_config(), generator, compiler))
    }

    fn multipart_body(file: Option<(&str, &[u8])>, job_description: Option<&str>) -> Vec<u8> {
        let mut body = Vec::new();
        if let Some((filename, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        if let Some(jd) = job_description {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"job_description\"\r\n\r\n{jd}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn resume_pdf() -> Vec<u8> {
        pdf_with_pages(&[
            &[
                "Jane Doe - Backend Engineer",
                "Experience: Acme Corp, building Rust services for five years",
            ],
            &[
                "Education: BSc Computer Science, State University",
                "Skills: Rust, Tokio, PostgreSQL, Kubernetes",
            ],
        ])
    }

    #[tokio::test]
    async fn test_analyze_resume_end_to_end() {
        let generator = ScriptedGenerator::new(vec![Ok(GOOD_REPLY)]);
        let response = app(generator.clone())
            .oneshot(multipart_request(
                "/analyze-resume",
                multipart_body(Some(("resume.pdf", resume_pdf().as_slice())), None),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        let score = body["analysis"]["ats_score"].as_u64().unwrap();
        assert!(score <= 100);
        assert_eq!(body["metadata"]["analysis_mode"], "general");
        assert_eq!(body["metadata"]["page_count"], 2);
        assert_eq!(body["metadata"]["has_job_description"], false);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_analyze_resume_with_job_description() {
        let generator = ScriptedGenerator::new(vec![Ok(GOOD_REPLY)]);
        let response = app(generator.clone())
            .oneshot(multipart_request(
                "/analyze-resume",
                multipart_body(
                    Some(("resume.pdf", resume_pdf().as_slice())),
                    Some("Senior Rust engineer for a payments platform"),
                ),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["metadata"]["analysis_mode"], "job_match");
        assert_eq!(body["metadata"]["has_job_description"], true);
        assert!(generator.prompts.lock().unwrap()[0].contains("payments platform"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_pdf_without_calling_model() {
        let generator = ScriptedGenerator::new(vec![Ok(GOOD_REPLY)]);
        let response = app(generator.clone())
            .oneshot(multipart_request(
                "/analyze-resume",
                multipart_body(Some(("resume.docx", &b"PK\x03\x04"[..])), None),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_resume_pdf() {
        let generator = ScriptedGenerator::new(vec![Ok(GOOD_REPLY)]);
        let pdf = pdf_with_pages(&[&["Quarterly sales figures for the northern region"]]);
        let response = app(generator.clone())
            .oneshot(multipart_request(
                "/analyze-resume",
                multipart_body(Some(("report.pdf", pdf.as_slice())), None),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "EXTRACTION_ERROR");
        assert_eq!(body["details"]["reason"], "NOT_A_RESUME");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_validate_file_rejects_wrong_extension() {
        let response = app(ScriptedGenerator::new(vec![]))
            .oneshot(multipart_request(
                "/validate-file",
                multipart_body(Some(("notes.txt", &b"hello"[..])), None),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["valid"], false);
        assert!(body["message"].as_str().unwrap().contains("PDF"));
    }

    #[tokio::test]
    async fn test_validate_file_accepts_pdf() {
        let response = app(ScriptedGenerator::new(vec![]))
            .oneshot(multipart_request(
                "/validate-file",
                multipart_body(Some(("../My Resume.pdf", resume_pdf().as_slice())), None),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["valid"], true);
        assert_eq!(body["filename"], "My_Resume.pdf");
    }

    #[tokio::test]
    async fn test_validate_file_without_file() {
        let response = app(ScriptedGenerator::new(vec![]))
            .oneshot(multipart_request("/validate-file", multipart_body(None, None)))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["errors"][0], "No file provided");
    }

    #[tokio::test]
    async fn test_extract_text_returns_stats() {
        let response = app(ScriptedGenerator::new(vec![]))
            .oneshot(multipart_request(
                "/extract-text",
                multipart_body(Some(("resume.pdf", resume_pdf().as_slice())), None),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["extracted_text"].as_str().unwrap().contains("Experience"));
        assert!(body["metadata"]["word_count"].as_u64().unwrap() > 10);
        assert_eq!(body["metadata"]["has_education"], true);
        assert_eq!(body["metadata"]["file_name"], "resume.pdf");
    }

    #[tokio::test]
    async fn test_health_reports_latex_availability() {
        let response = app(ScriptedGenerator::new(vec![]))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["latex_available"], false);
    }

    #[tokio::test]
    async fn test_templates_and_unknown_template() {
        let router = app(ScriptedGenerator::new(vec![]));

        let response = router
            .clone()
            .oneshot(Request::get("/templates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["count"], 3);

        let response = router
            .clone()
            .oneshot(Request::get("/templates/minimal/preview").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["latex_code"].as_str().unwrap().contains("John Doe"));

        let response = router
            .oneshot(Request::get("/templates/fancy").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_latex_validate_and_generate() {
        let router = app(ScriptedGenerator::new(vec![]));

        let response = router
            .clone()
            .oneshot(json_request("/latex/validate", r#"{"latex_code": "\\begin{document}"}"#))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["is_valid"], false);
        assert!(!body["errors"].as_array().unwrap().is_empty());

        let response = router
            .clone()
            .oneshot(json_request(
                "/latex/generate",
                r#"{"data": {"name": "Ada Lovelace", "skills": ["Analysis"]}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["template"], "modern");
        assert!(body["latex_code"].as_str().unwrap().contains("Ada Lovelace"));

        let response = router
            .oneshot(json_request(
                "/latex/generate",
                r#"{"data": {}, "template": "baroque"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_latex_missing_field_is_bad_request() {
        let response = app(ScriptedGenerator::new(vec![]))
            .oneshot(json_request("/latex/format", r#"{"code": "x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_compile_when_unavailable() {
        let response = app(ScriptedGenerator::new(vec![]))
            .oneshot(json_request(
                "/latex/compile",
                r#"{"latex_code": "\\documentclass{article}\\begin{document}x\\end{document}"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_ai_bullets_route() {
        let generator = ScriptedGenerator::new(vec![Ok(r#"["Shipped X", "Scaled Y"]"#)]);
        let response = app(generator)
            .oneshot(json_request(
                "/latex/ai/bullets",
                r#"{"role": "Engineer", "company": "Acme", "responsibilities": "APIs"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["bullets"][1], "Scaled Y");
    }
}
