use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

const FEATURES: &[&str] = &[
    "resume-analysis",
    "job-matching",
    "text-extraction",
    "latex-editor",
    "latex-templates",
    "ai-suggestions",
];

/// GET / and GET /health
/// Returns service status, version, the configured model and whether PDF
/// compilation is available.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "features": FEATURES,
        "model": state.config.gemini_model,
        "latex_available": state.compiler.is_available(),
    }))
}
