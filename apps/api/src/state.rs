use std::sync::Arc;

use crate::analysis::AnalysisOrchestrator;
use crate::config::Config;
use crate::latex::compiler::LatexCompiler;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Text generation for single-shot calls (the AI LaTeX endpoints).
    pub llm: Arc<dyn TextGenerator>,
    /// Resume analysis with the retry policy applied.
    pub analyzer: AnalysisOrchestrator,
    /// Typesetter availability was checked once at startup.
    pub compiler: LatexCompiler,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn TextGenerator>, compiler: LatexCompiler) -> Self {
        let analyzer = AnalysisOrchestrator::new(llm.clone(), config.max_retries);
        Self {
            config,
            llm,
            analyzer,
            compiler,
        }
    }
}
