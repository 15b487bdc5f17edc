//! Axum route handler for resume analysis.

use axum::{extract::Multipart, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::prompt_builder::PromptMode;
use crate::analysis::Analysis;
use crate::errors::AppError;
use crate::extraction::{text_stats, TextStats};
use crate::intake::handlers::validated_extraction;
use crate::intake::{parse_upload_form, sanitize_filename};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: Analysis,
    pub metadata: AnalysisMetadata,
}

#[derive(Debug, Serialize)]
pub struct AnalysisMetadata {
    pub request_id: Uuid,
    pub file_name: String,
    pub page_count: usize,
    pub text_stats: TextStats,
    pub has_job_description: bool,
    pub job_description_length: usize,
    pub analysis_mode: PromptMode,
    /// The model reply could not be parsed; `analysis` holds the raw reply.
    pub parse_degraded: bool,
    pub attempts: u32,
    pub model: String,
    pub analyzed_at: DateTime<Utc>,
}

/// POST /analyze-resume
///
/// Full pipeline: validate upload → extract text → build prompt → call the model
/// with retries → normalize the reply.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let request_id = Uuid::new_v4();

    async move {
        let form = parse_upload_form(multipart).await?;
        let (upload, document) = validated_extraction(form.file).await?;

        let job_description = form.job_description;
        let outcome = state
            .analyzer
            .analyze(&document.text, &job_description)
            .await?;

        info!(
            ats_score = outcome.analysis.ats_score,
            attempts = outcome.attempts,
            degraded = outcome.degraded,
            "Resume analysis complete"
        );

        Ok(Json(AnalyzeResponse {
            success: true,
            metadata: AnalysisMetadata {
                request_id,
                file_name: sanitize_filename(upload.file_name()),
                page_count: document.page_count,
                text_stats: text_stats(&document.text),
                has_job_description: !job_description.is_empty(),
                job_description_length: job_description.chars().count(),
                analysis_mode: outcome.mode,
                parse_degraded: outcome.degraded,
                attempts: outcome.attempts,
                model: state.analyzer.model().to_string(),
                analyzed_at: Utc::now(),
            },
            analysis: outcome.analysis,
        }))
    }
    .instrument(info_span!("analyze_resume", %request_id))
    .await
}
