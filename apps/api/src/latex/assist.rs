//! AI-assisted LaTeX editing. One model call per operation, no retry loop.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::analysis::response::deserialize_score;
use crate::llm_client::json::{locate_json_array, locate_json_object};
use crate::llm_client::prompts::{fill_template, truncate_chars, JSON_ARRAY_ONLY, JSON_OBJECT_ONLY};
use crate::llm_client::{LlmError, TextGenerator};
use crate::latex::prompts::{
    ATS_CHECK_TEMPLATE, BULLETS_TEMPLATE, IMPROVE_JOB_SECTION, IMPROVE_SECTION_TEMPLATE,
    IMPROVE_TEMPLATE, SUGGEST_SKILLS_TEMPLATE,
};

const IMPROVE_SOURCE_LIMIT: usize = 4000;
const ATS_SOURCE_LIMIT: usize = 3000;
const JOB_DESCRIPTION_LIMIT: usize = 1500;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error(transparent)]
    Generation(#[from] LlmError),

    #[error("{0}")]
    Unparseable(&'static str),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordAnalysis {
    pub found_keywords: Vec<String>,
    pub missing_common_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    #[serde(deserialize_with = "deserialize_score")]
    pub ats_score: u8,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub keyword_analysis: KeywordAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub improvement: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    "medium".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementReport {
    #[serde(deserialize_with = "deserialize_score")]
    pub overall_score: u8,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub improved_sections: BTreeMap<String, String>,
}

/// Suggestions (and rewritten sections) for a whole LaTeX resume.
pub async fn improve_resume(
    generator: &dyn TextGenerator,
    latex_code: &str,
    job_description: &str,
) -> Result<ImprovementReport, AssistError> {
    let jd = truncate_chars(job_description.trim(), JOB_DESCRIPTION_LIMIT);
    let job_section = if jd.is_empty() {
        String::new()
    } else {
        fill_template(IMPROVE_JOB_SECTION, &[("job_description", jd)])
    };
    let prompt = fill_template(
        IMPROVE_TEMPLATE,
        &[
            ("latex_code", truncate_chars(latex_code, IMPROVE_SOURCE_LIMIT)),
            ("job_section", job_section.as_str()),
            ("json_instruction", JSON_OBJECT_ONLY),
        ],
    );

    let reply = generator.generate(&prompt).await?;
    serde_json::from_str(locate_json_object(&reply)).map_err(|e| {
        warn!("Could not parse improvement reply: {e}");
        AssistError::Unparseable("Could not parse improvement suggestions")
    })
}

/// 3-5 achievement bullets for a role. An unusable reply yields no bullets.
pub async fn generate_bullets(
    generator: &dyn TextGenerator,
    role: &str,
    company: &str,
    responsibilities: &str,
) -> Result<Vec<String>, AssistError> {
    let prompt = fill_template(
        BULLETS_TEMPLATE,
        &[
            ("role", role),
            ("company", company),
            ("responsibilities", responsibilities),
            ("json_instruction", JSON_ARRAY_ONLY),
        ],
    );
    let reply = generator.generate(&prompt).await?;
    Ok(parse_string_array(&reply))
}

/// Rewritten section content; falls back to the original when the model returns nothing.
pub async fn improve_section(
    generator: &dyn TextGenerator,
    section_name: &str,
    section_content: &str,
) -> Result<String, AssistError> {
    let prompt = fill_template(
        IMPROVE_SECTION_TEMPLATE,
        &[
            ("section_name", section_name),
            ("section_content", section_content),
        ],
    );
    match generator.generate(&prompt).await {
        Ok(reply) if !reply.trim().is_empty() => Ok(strip_code_fence(&reply).to_string()),
        Ok(_) | Err(LlmError::EmptyContent) => Ok(section_content.to_string()),
        Err(e) => Err(e.into()),
    }
}

pub async fn check_ats(
    generator: &dyn TextGenerator,
    latex_code: &str,
) -> Result<AtsReport, AssistError> {
    let prompt = fill_template(
        ATS_CHECK_TEMPLATE,
        &[
            ("latex_code", truncate_chars(latex_code, ATS_SOURCE_LIMIT)),
            ("json_instruction", JSON_OBJECT_ONLY),
        ],
    );
    let reply = generator.generate(&prompt).await?;
    serde_json::from_str(locate_json_object(&reply)).map_err(|e| {
        warn!("Could not parse ATS reply: {e}");
        AssistError::Unparseable("Could not parse ATS analysis")
    })
}

/// Skills worth adding for a job description. An unusable reply yields no skills.
pub async fn suggest_skills(
    generator: &dyn TextGenerator,
    current_skills: &[String],
    job_description: &str,
) -> Result<Vec<String>, AssistError> {
    let current = current_skills.join(", ");
    let prompt = fill_template(
        SUGGEST_SKILLS_TEMPLATE,
        &[
            ("current_skills", current.as_str()),
            (
                "job_description",
                truncate_chars(job_description, JOB_DESCRIPTION_LIMIT),
            ),
            ("json_instruction", JSON_ARRAY_ONLY),
        ],
    );
    let reply = generator.generate(&prompt).await?;
    Ok(parse_string_array(&reply))
}

fn parse_string_array(reply: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(locate_json_array(reply)) {
        Ok(items) => items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(e) => {
            warn!("Model reply was not a JSON string array: {e}");
            Vec::new()
        }
    }
}

/// Unwraps a reply that arrived inside a single ``` fence.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::orchestrator::tests::ScriptedGenerator;

    #[tokio::test]
    async fn test_check_ats_parses_report() {
        let generator = ScriptedGenerator::new(vec![Ok(
            r#"```json
{"ats_score": "85", "issues": ["Tables"], "recommendations": ["Use plain bullets"],
 "keyword_analysis": {"found_keywords": ["Rust"], "missing_common_keywords": ["CI"]}}
```"#,
        )]);
        let report = check_ats(generator.as_ref(), r"\documentclass{article}")
            .await
            .unwrap();
        assert_eq!(report.ats_score, 85);
        assert_eq!(report.issues, vec!["Tables"]);
        assert_eq!(report.keyword_analysis.missing_common_keywords, vec!["CI"]);
    }

    #[tokio::test]
    async fn test_check_ats_truncates_source() {
        let generator = ScriptedGenerator::new(vec![Ok(r#"{"ats_score": 10}"#)]);
        let source = format!("{}{}", "a".repeat(ATS_SOURCE_LIMIT), "TAIL");
        check_ats(generator.as_ref(), &source).await.unwrap();
        assert!(!generator.prompts.lock().unwrap()[0].contains("TAIL"));
    }

    #[tokio::test]
    async fn test_check_ats_unparseable_is_error() {
        let generator = ScriptedGenerator::new(vec![Ok("looks fine to me")]);
        let err = check_ats(generator.as_ref(), "x").await.unwrap_err();
        assert!(matches!(err, AssistError::Unparseable(_)));
    }

    #[tokio::test]
    async fn test_bullets_degrade_to_empty() {
        let generator = ScriptedGenerator::new(vec![Ok("Sorry, no bullets today")]);
        let bullets = generate_bullets(generator.as_ref(), "Engineer", "Acme", "APIs")
            .await
            .unwrap();
        assert!(bullets.is_empty());
    }

    #[tokio::test]
    async fn test_bullets_parsed_from_chatter() {
        let generator = ScriptedGenerator::new(vec![Ok(
            "Here you go: [\"Cut latency 40% by caching\", \"Shipped v2\"]",
        )]);
        let bullets = generate_bullets(generator.as_ref(), "Engineer", "Acme", "APIs")
            .await
            .unwrap();
        assert_eq!(bullets, vec!["Cut latency 40% by caching", "Shipped v2"]);
    }

    #[tokio::test]
    async fn test_suggest_skills_truncates_job_description() {
        let generator = ScriptedGenerator::new(vec![Ok(r#"["Kubernetes"]"#)]);
        let jd = format!("{}{}", "j".repeat(JOB_DESCRIPTION_LIMIT), "OVERFLOW");
        let skills = suggest_skills(generator.as_ref(), &["Rust".to_string()], &jd)
            .await
            .unwrap();
        assert_eq!(skills, vec!["Kubernetes"]);
        let prompt = generator.prompts.lock().unwrap()[0].clone();
        assert!(prompt.contains("Current skills: Rust"));
        assert!(!prompt.contains("OVERFLOW"));
    }

    #[tokio::test]
    async fn test_improve_section_strips_fence() {
        let generator =
            ScriptedGenerator::new(vec![Ok("```latex\n\\item Led a team of 5\n```")]);
        let improved = improve_section(generator.as_ref(), "Experience", "\\item Led team")
            .await
            .unwrap();
        assert_eq!(improved, "\\item Led a team of 5");
    }

    #[tokio::test]
    async fn test_improve_section_falls_back_on_empty_reply() {
        let generator = ScriptedGenerator::new(vec![Ok("   ")]);
        let improved = improve_section(generator.as_ref(), "Skills", "Rust, Go")
            .await
            .unwrap();
        assert_eq!(improved, "Rust, Go");
    }

    #[tokio::test]
    async fn test_improve_resume_with_job_description() {
        let generator = ScriptedGenerator::new(vec![Ok(
            r#"{"overall_score": 70, "summary": "Decent", "suggestions": [{"section": "Skills", "issue": "Sparse", "improvement": "Add tools"}], "improved_sections": {"Skills": "Rust, Tokio"}}"#,
        )]);
        let report = improve_resume(generator.as_ref(), "\\section{Skills}", "Platform engineer role")
            .await
            .unwrap();
        assert_eq!(report.overall_score, 70);
        assert_eq!(report.suggestions[0].priority, "medium");
        assert_eq!(report.improved_sections["Skills"], "Rust, Tokio");
        let prompt = generator.prompts.lock().unwrap()[0].clone();
        assert!(prompt.contains("Target Job Description:\nPlatform engineer role"));
    }

    #[tokio::test]
    async fn test_improve_resume_without_job_description() {
        let generator = ScriptedGenerator::new(vec![Ok(r#"{"overall_score": 55}"#)]);
        improve_resume(generator.as_ref(), "source", "  ").await.unwrap();
        let prompt = generator.prompts.lock().unwrap()[0].clone();
        assert!(!prompt.contains("Target Job Description"));
    }

    #[tokio::test]
    async fn test_generation_errors_propagate() {
        let generator = ScriptedGenerator::new(vec![Err("503 UNAVAILABLE: overloaded")]);
        let err = suggest_skills(generator.as_ref(), &[], "jd").await.unwrap_err();
        assert!(matches!(err, AssistError::Generation(_)));
    }
}
