//! Axum route handlers for upload validation and text extraction.

use axum::{
    extract::Multipart,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_in_background, text_stats, ExtractedDocument, TextStats};
use crate::intake::{parse_upload_form, sanitize_filename, validate, UploadCandidate};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ValidateFileResponse {
    pub success: bool,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub success: bool,
    pub extracted_text: String,
    pub metadata: ExtractMetadata,
}

#[derive(Debug, Serialize)]
pub struct ExtractMetadata {
    #[serde(flatten)]
    pub stats: TextStats,
    pub file_name: String,
    pub page_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared upload pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the Content Validator and hands back the upload only if it passed.
pub fn accepted_upload(file: Option<UploadCandidate>) -> Result<UploadCandidate, AppError> {
    let report = validate(file.as_ref());
    if !report.accepted {
        info!(errors = ?report.errors, "Upload rejected");
        return Err(AppError::Validation(report.errors));
    }
    file.ok_or_else(|| AppError::Validation(vec!["No file provided".to_string()]))
}

/// Validate, then extract. Extraction never sees a rejected upload.
pub async fn validated_extraction(
    file: Option<UploadCandidate>,
) -> Result<(UploadCandidate, ExtractedDocument), AppError> {
    let upload = accepted_upload(file)?;
    let document = extract_in_background(upload.data.clone()).await??;
    info!(
        pages = document.page_count,
        pages_failed = document.pages_failed,
        chars = document.text.len(),
        "Extracted resume text"
    );
    Ok((upload, document))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /validate-file
///
/// Runs only the Content Validator. Rejections are reported as `valid: false`
/// with every error, not as the generic error body.
pub async fn handle_validate_file(multipart: Multipart) -> Result<Response, AppError> {
    let form = parse_upload_form(multipart).await?;
    let report = validate(form.file.as_ref());

    if report.accepted {
        let filename = form
            .file
            .as_ref()
            .map(|f| sanitize_filename(f.file_name()));
        return Ok(Json(ValidateFileResponse {
            success: true,
            valid: true,
            error: None,
            message: "File is valid".to_string(),
            filename,
            errors: Vec::new(),
        })
        .into_response());
    }

    let message = report
        .errors
        .first()
        .cloned()
        .unwrap_or_else(|| "File validation failed".to_string());
    Ok((
        StatusCode::BAD_REQUEST,
        Json(ValidateFileResponse {
            success: false,
            valid: false,
            error: Some("File validation failed"),
            message,
            filename: None,
            errors: report.errors,
        }),
    )
        .into_response())
}

/// POST /extract-text
///
/// Validates the upload and returns its normalized text without calling the model.
pub async fn handle_extract_text(multipart: Multipart) -> Result<Json<ExtractTextResponse>, AppError> {
    let request_id = Uuid::new_v4();

    async move {
        let form = parse_upload_form(multipart).await?;
        let (upload, document) = validated_extraction(form.file).await?;

        Ok(Json(ExtractTextResponse {
            success: true,
            metadata: ExtractMetadata {
                stats: text_stats(&document.text),
                file_name: sanitize_filename(upload.file_name()),
                page_count: document.page_count,
            },
            extracted_text: document.text,
        }))
    }
    .instrument(info_span!("extract_text", %request_id))
    .await
}
