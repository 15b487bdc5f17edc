//! Failure classification for analysis calls.
//!
//! Classification runs on the error's display text, lowercased with underscores
//! removed, so `RESOURCE_EXHAUSTED`, `ResourceExhausted` and "resource exhausted"
//! style strings all reduce to the same vocabulary.

use crate::analysis::AnalysisError;

/// Transient upstream conditions worth another attempt.
const RETRYABLE_MARKERS: &[&str] = &["504", "timeout", "deadline", "resourceexhausted", "quota"];
/// Markers of a rate/usage limit.
const QUOTA_MARKERS: &[&str] = &["quota", "limit", "resourceexhausted"];

#[derive(Debug, PartialEq)]
pub enum FailureClass {
    /// Sleep and try again.
    Retryable,
    /// Stop and report this error.
    Terminal(AnalysisError),
}

/// Decides what to do with a failed generation call.
///
/// `attempts_remain` is whether another call is still allowed under the retry budget.
pub fn classify(message: &str, attempts_remain: bool) -> FailureClass {
    // A bad or missing key never heals on retry; anything else gets the full budget.
    if attempts_remain && !mentions_api_key(&normalize(message)) {
        FailureClass::Retryable
    } else {
        FailureClass::Terminal(terminal_error(message))
    }
}

/// The error to report once no further attempt will be made.
pub fn terminal_error(message: &str) -> AnalysisError {
    let normalized = normalize(message);
    let mentions = |markers: &[&str]| markers.iter().any(|m| normalized.contains(m));

    if mentions_api_key(&normalized) {
        AnalysisError::Configuration
    } else if mentions(QUOTA_MARKERS) {
        AnalysisError::QuotaExceeded
    } else if mentions(RETRYABLE_MARKERS) {
        AnalysisError::HighDemand
    } else {
        AnalysisError::Unknown(message.to_string())
    }
}

fn normalize(message: &str) -> String {
    message.to_lowercase().replace('_', "")
}

fn mentions_api_key(normalized: &str) -> bool {
    normalized.contains("api") && normalized.contains("key")
}
