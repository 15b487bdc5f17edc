//! Axum route handlers for templates, the LaTeX editor utilities and
//! AI-assisted editing.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::latex::assist::{self, AtsReport, ImprovementReport};
use crate::latex::document::ResumeDocument;
use crate::latex::format::{extract_sections, format_latex_code, SourceSection};
use crate::latex::starter::STARTER_TEMPLATE;
use crate::latex::templates::{catalogue, TemplateInfo, TemplateKind};
use crate::latex::validation::validate_latex;
use crate::state::AppState;

type JsonBody<T> = Result<Json<T>, JsonRejection>;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LatexCodeRequest {
    pub latex_code: String,
}

#[derive(Debug, Serialize)]
pub struct LatexCodeResponse {
    pub latex_code: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateInfo>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub latex_code: String,
    pub template: TemplateInfo,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub data: ResumeDocument,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub latex_code: String,
    pub template: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub formatted_code: String,
}

#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub sections: Vec<SourceSection>,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub latex_code: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct BulletsRequest {
    pub role: String,
    pub company: String,
    pub responsibilities: String,
}

#[derive(Debug, Serialize)]
pub struct BulletsResponse {
    pub bullets: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestSkillsRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    pub suggested_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImproveSectionRequest {
    pub section_name: String,
    pub section_content: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveSectionResponse {
    pub improved_content: String,
}

fn template_by_id(id: &str) -> Result<TemplateKind, AppError> {
    TemplateKind::from_id(id).ok_or_else(|| AppError::TemplateNotFound(id.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

/// GET /templates
pub async fn handle_list_templates() -> Json<TemplateListResponse> {
    let templates = catalogue();
    Json(TemplateListResponse {
        count: templates.len(),
        templates,
    })
}

/// GET /templates/:id
pub async fn handle_get_template(Path(id): Path<String>) -> Result<Json<TemplateInfo>, AppError> {
    Ok(Json(template_by_id(&id)?.info()))
}

/// GET /templates/:id/preview
///
/// Renders the template against the built-in sample resume.
pub async fn handle_preview_template(
    Path(id): Path<String>,
) -> Result<Json<PreviewResponse>, AppError> {
    let kind = template_by_id(&id)?;
    Ok(Json(PreviewResponse {
        latex_code: kind.render(&ResumeDocument::sample()),
        template: kind.info(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// LaTeX editor
// ────────────────────────────────────────────────────────────────────────────

/// POST /latex/validate
pub async fn handle_validate(
    payload: JsonBody<LatexCodeRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    let Json(request) = payload?;
    let errors = validate_latex(&request.latex_code);
    Ok(Json(ValidateResponse {
        is_valid: errors.is_empty(),
        errors,
    }))
}

/// POST /latex/compile
///
/// Returns the PDF as an attachment, or a JSON error. The compilation runs on its
/// own task, so a client disconnect does not cut a pass short; the pass timeout does.
pub async fn handle_compile(
    State(state): State<AppState>,
    payload: JsonBody<LatexCodeRequest>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let compiler = state.compiler.clone();
    let pdf = tokio::spawn(async move { compiler.compile(&request.latex_code).await })
        .await
        .context("LaTeX compilation task failed")??;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response())
}

/// POST /latex/generate
///
/// Renders structured resume data with the requested template (default: modern).
pub async fn handle_generate(
    payload: JsonBody<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;
    let kind = match request.template.as_deref() {
        None | Some("") => TemplateKind::Modern,
        Some(id) => template_by_id(id)?,
    };
    info!(template = kind.id(), "Generating LaTeX from resume data");
    Ok(Json(GenerateResponse {
        latex_code: kind.render(&request.data),
        template: kind.id(),
    }))
}

/// GET /latex/starter
pub async fn handle_starter() -> Json<LatexCodeResponse> {
    Json(LatexCodeResponse {
        latex_code: STARTER_TEMPLATE.to_string(),
    })
}

/// POST /latex/format
pub async fn handle_format(
    payload: JsonBody<LatexCodeRequest>,
) -> Result<Json<FormatResponse>, AppError> {
    let Json(request) = payload?;
    Ok(Json(FormatResponse {
        formatted_code: format_latex_code(&request.latex_code),
    }))
}

/// POST /latex/sections
pub async fn handle_sections(
    payload: JsonBody<LatexCodeRequest>,
) -> Result<Json<SectionsResponse>, AppError> {
    let Json(request) = payload?;
    Ok(Json(SectionsResponse {
        sections: extract_sections(&request.latex_code),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// AI-assisted editing
// ────────────────────────────────────────────────────────────────────────────

/// POST /latex/ai/improve
pub async fn handle_ai_improve(
    State(state): State<AppState>,
    payload: JsonBody<ImproveRequest>,
) -> Result<Json<ImprovementReport>, AppError> {
    let Json(request) = payload?;
    let report = assist::improve_resume(
        state.llm.as_ref(),
        &request.latex_code,
        &request.job_description,
    )
    .await?;
    Ok(Json(report))
}

/// POST /latex/ai/bullets
pub async fn handle_ai_bullets(
    State(state): State<AppState>,
    payload: JsonBody<BulletsRequest>,
) -> Result<Json<BulletsResponse>, AppError> {
    let Json(request) = payload?;
    let bullets = assist::generate_bullets(
        state.llm.as_ref(),
        &request.role,
        &request.company,
        &request.responsibilities,
    )
    .await?;
    Ok(Json(BulletsResponse { bullets }))
}

/// POST /latex/ai/ats-check
pub async fn handle_ai_ats_check(
    State(state): State<AppState>,
    payload: JsonBody<LatexCodeRequest>,
) -> Result<Json<AtsReport>, AppError> {
    let Json(request) = payload?;
    Ok(Json(
        assist::check_ats(state.llm.as_ref(), &request.latex_code).await?,
    ))
}

/// POST /latex/ai/suggest-skills
pub async fn handle_ai_suggest_skills(
    State(state): State<AppState>,
    payload: JsonBody<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    let Json(request) = payload?;
    let suggested_skills = assist::suggest_skills(
        state.llm.as_ref(),
        &request.current_skills,
        &request.job_description,
    )
    .await?;
    Ok(Json(SuggestSkillsResponse { suggested_skills }))
}

/// POST /latex/ai/improve-section
pub async fn handle_ai_improve_section(
    State(state): State<AppState>,
    payload: JsonBody<ImproveSectionRequest>,
) -> Result<Json<ImproveSectionResponse>, AppError> {
    let Json(request) = payload?;
    let improved_content = assist::improve_section(
        state.llm.as_ref(),
        &request.section_name,
        &request.section_content,
    )
    .await?;
    Ok(Json(ImproveSectionResponse { improved_content }))
}
