//! Normalizing a free-text model reply into an `Analysis`.
//!
//! An unparseable reply is still a successful call: the caller gets a degraded
//! analysis carrying the raw text instead of an error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::llm_client::json::locate_json_object;

pub const PARSE_FAILURE_NOTICE: &str =
    "The AI response could not be parsed into a structured analysis. Raw response:";
pub const DEGRADED_TIP: &str = "Could not parse specific improvements.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Always within 0..=100.
    pub ats_score: u8,
    pub fit_analysis: String,
    pub improvement_tips: Vec<String>,
}

impl Analysis {
    pub fn degraded(raw_reply: &str) -> Self {
        Self {
            ats_score: 0,
            fit_analysis: format!("{PARSE_FAILURE_NOTICE}\n\n{raw_reply}"),
            improvement_tips: vec![DEGRADED_TIP.to_string()],
        }
    }
}

/// Loosely typed reply; models are not consistent about field types.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    ats_score: Option<Value>,
    #[serde(default)]
    fit_analysis: Value,
    #[serde(default)]
    improvement_tips: Value,
}

/// Returns the analysis and whether it is degraded.
pub fn parse_analysis(reply: &str) -> (Analysis, bool) {
    let payload = locate_json_object(reply);
    let Ok(raw) = serde_json::from_str::<RawAnalysis>(payload) else {
        return (Analysis::degraded(reply), true);
    };
    let Some(ats_score) = raw.ats_score.as_ref().and_then(score_from_value) else {
        return (Analysis::degraded(reply), true);
    };

    let analysis = Analysis {
        ats_score,
        fit_analysis: text_from_value(&raw.fit_analysis),
        improvement_tips: tips_from_value(&raw.improvement_tips),
    };
    (analysis, false)
}

/// `deserialize_with` adapter for score fields in other model replies.
pub fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    score_from_value(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid score: {value}")))
}

/// Accepts `78`, `78.4`, `"78"` or `"78/100"`; clamps into 0..=100.
fn score_from_value(value: &Value) -> Option<u8> {
    let score = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let head = s.split('/').next().unwrap_or_default().trim();
            head.trim_end_matches('%').trim().parse::<f64>().ok()?
        }
        _ => return None,
    };
    if !score.is_finite() {
        return None;
    }
    Some(score.round().clamp(0.0, 100.0) as u8)
}

fn text_from_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .map(text_from_value)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
        other => other.to_string(),
    }
}

fn tips_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(text_from_value)
            .filter(|s| !s.is_empty())
            .collect(),
        Value::Null => Vec::new(),
        other => {
            let single = text_from_value(other);
            if single.is_empty() {
                Vec::new()
            } else {
                vec![single]
            }
        }
    }
}
