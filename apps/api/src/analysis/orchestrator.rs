//! Analysis Orchestrator: one prompt, bounded retries, one normalized result.
//!
//! Attempt `n` (0-based) that fails with a retryable error waits `(n + 1) * 2`
//! seconds before the next call. The total number of generator calls never
//! exceeds `max_retries`.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::analysis::classify::{classify, FailureClass};
use crate::analysis::prompt_builder::{build_prompt, select_mode, PromptMode};
use crate::analysis::response::{parse_analysis, Analysis};
use crate::analysis::AnalysisError;
use crate::llm_client::TextGenerator;

/// Resume text shorter than this (trimmed, in chars) is rejected before any call.
pub const MIN_RESUME_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis: Analysis,
    /// The reply could not be parsed; `analysis` carries the raw text.
    pub degraded: bool,
    pub mode: PromptMode,
    pub attempts: u32,
}

#[derive(Debug, Clone, Copy)]
struct RetryState {
    attempt: u32,
    max_attempts: u32,
}

impl RetryState {
    fn has_remaining(&self) -> bool {
        self.attempt + 1 < self.max_attempts
    }

    fn backoff(&self) -> Duration {
        Duration::from_secs(u64::from(self.attempt + 1) * 2)
    }
}

#[derive(Clone)]
pub struct AnalysisOrchestrator {
    generator: Arc<dyn TextGenerator>,
    max_retries: u32,
}

impl AnalysisOrchestrator {
    pub fn new(generator: Arc<dyn TextGenerator>, max_retries: u32) -> Self {
        Self {
            generator,
            max_retries,
        }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    pub async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        if resume_text.trim().chars().count() < MIN_RESUME_CHARS {
            return Err(AnalysisError::InputTooShort);
        }
        if self.max_retries == 0 {
            return Err(AnalysisError::Unknown(
                "retry budget is zero; no analysis attempted".to_string(),
            ));
        }

        let mode = select_mode(job_description);
        let prompt = build_prompt(resume_text, job_description);
        let mut state = RetryState {
            attempt: 0,
            max_attempts: self.max_retries,
        };

        loop {
            info!(
                attempt = state.attempt + 1,
                max_attempts = state.max_attempts,
                mode = ?mode,
                model = self.generator.model(),
                "Requesting resume analysis"
            );

            let error = match self.generator.generate(&prompt).await {
                Ok(reply) => {
                    let (analysis, degraded) = parse_analysis(&reply);
                    if degraded {
                        warn!("Model reply was not a structured analysis; returning degraded result");
                    }
                    return Ok(AnalysisOutcome {
                        analysis,
                        degraded,
                        mode,
                        attempts: state.attempt + 1,
                    });
                }
                Err(e) => e.to_string(),
            };

            match classify(&error, state.has_remaining()) {
                FailureClass::Retryable => {
                    let wait = state.backoff();
                    warn!(
                        attempt = state.attempt + 1,
                        wait_secs = wait.as_secs(),
                        error = %error,
                        "Analysis attempt failed, retrying"
                    );
                    tokio::time::sleep(wait).await;
                    state.attempt += 1;
                }
                FailureClass::Terminal(kind) => {
                    warn!(
                        attempt = state.attempt + 1,
                        error = %error,
                        "Analysis failed: {kind}"
                    );
                    return Err(kind);
                }
            }
        }
    }
}
