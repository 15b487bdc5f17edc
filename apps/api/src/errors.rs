use std::sync::OnceLock;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::analysis::classify::terminal_error;
use crate::analysis::AnalysisError;
use crate::extraction::ExtractionError;
use crate::latex::assist::AssistError;
use crate::latex::compiler::CompileError;

static EXPOSE_INTERNAL_DETAILS: OnceLock<bool> = OnceLock::new();

/// Set once at startup from `DEBUG`. Until then internal details stay hidden.
pub fn expose_internal_details(enabled: bool) {
    let _ = EXPOSE_INTERNAL_DETAILS.set(enabled);
}

fn internal_details_exposed() -> bool {
    EXPOSE_INTERNAL_DETAILS.get().copied().unwrap_or(false)
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("File validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Compilation(#[from] CompileError),

    #[error("AI service error: {0}")]
    AiService(String),

    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<AssistError> for AppError {
    fn from(err: AssistError) -> Self {
        match err {
            // Same vocabulary as the analysis path, with no retries left. An
            // unrecognized failure keeps the upstream text without the analysis wording.
            AssistError::Generation(e) => {
                let message = e.to_string();
                match terminal_error(&message) {
                    AnalysisError::Unknown(_) => {
                        AppError::AiService(format!("AI request failed: {message}"))
                    }
                    kind => AppError::Analysis(kind),
                }
            }
            AssistError::Unparseable(what) => AppError::AiService(what.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                errors
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "File validation failed".to_string()),
                Some(json!({ "errors": errors })),
            ),
            AppError::Extraction(e) => {
                if let ExtractionError::Corrupted(detail) = e {
                    tracing::warn!("PDF parse failure: {detail}");
                }
                (
                    StatusCode::BAD_REQUEST,
                    "EXTRACTION_ERROR",
                    e.to_string(),
                    Some(json!({ "reason": e.code() })),
                )
            }
            AppError::Analysis(e) => {
                let status = if e.is_client_error() {
                    StatusCode::BAD_REQUEST
                } else {
                    tracing::error!("AI service error: {e}");
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                (
                    status,
                    "AI_SERVICE_ERROR",
                    e.to_string(),
                    Some(json!({ "reason": e.code() })),
                )
            }
            AppError::Compilation(e) => compilation_parts(e),
            AppError::AiService(msg) => {
                tracing::error!("AI service error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI_SERVICE_ERROR",
                    msg.clone(),
                    None,
                )
            }
            AppError::TemplateNotFound(id) => (
                StatusCode::NOT_FOUND,
                "TEMPLATE_NOT_FOUND",
                format!("Template '{id}' not found. Available: modern, minimal, academic"),
                None,
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    internal_details_exposed().then(|| json!({ "detail": format!("{e:#}") })),
                )
            }
        };

        let mut body = json!({
            "success": false,
            "error": code,
            "message": message,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

fn compilation_parts(e: &CompileError) -> (StatusCode, &'static str, String, Option<Value>) {
    match e {
        CompileError::Unavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            "COMPILER_UNAVAILABLE",
            e.to_string(),
            None,
        ),
        CompileError::Invalid(issues) => (
            StatusCode::BAD_REQUEST,
            "COMPILATION_ERROR",
            "LaTeX validation failed".to_string(),
            Some(json!({ "errors": issues })),
        ),
        CompileError::Timeout(_) | CompileError::Failed(_) => (
            StatusCode::BAD_REQUEST,
            "COMPILATION_ERROR",
            e.to_string(),
            None,
        ),
        CompileError::Io(io) => {
            tracing::error!("LaTeX compilation I/O error: {io}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
                internal_details_exposed().then(|| json!({ "detail": io.to_string() })),
            )
        }
    }
}
