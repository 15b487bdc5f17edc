// Resume analysis: prompt building, the retry loop around the model call,
// and normalization of the reply. All model calls go through llm_client.

pub mod classify;
pub mod handlers;
pub mod orchestrator;
pub mod prompt_builder;
pub mod prompts;
pub mod response;

use thiserror::Error;

pub use orchestrator::AnalysisOrchestrator;
pub use response::Analysis;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Resume content is too short to analyze. Please upload a complete resume.")]
    InputTooShort,

    #[error("AI service quota exceeded. Please try again in a few minutes.")]
    QuotaExceeded,

    #[error("AI service configuration issue. Please contact support.")]
    Configuration,

    #[error("AI service is experiencing high demand. Please try again in a few moments.")]
    HighDemand,

    #[error("Unable to analyze resume: {0}")]
    Unknown(String),
}

impl AnalysisError {
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::InputTooShort => "INPUT_TOO_SHORT",
            AnalysisError::QuotaExceeded => "QUOTA_EXCEEDED",
            AnalysisError::Configuration => "CONFIGURATION_ERROR",
            AnalysisError::HighDemand => "HIGH_DEMAND",
            AnalysisError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// The caller can fix this one; everything else is on our side.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalysisError::InputTooShort)
    }
}
