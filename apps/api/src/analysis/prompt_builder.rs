//! Prompt Builder: pure, deterministic rendering of analysis prompts.
//!
//! Truncation is enforced here, not by callers: no more than
//! `RESUME_TEXT_LIMIT` / `JOB_DESCRIPTION_LIMIT` characters of caller text can
//! reach the model, whatever the caller passes in.

use serde::Serialize;

use crate::analysis::prompts::{ANALYSIS_SCHEMA, GENERAL_TEMPLATE, JOB_MATCH_TEMPLATE};
use crate::llm_client::prompts::{fill_template, truncate_chars, JSON_OBJECT_ONLY};

/// Max characters of resume text embedded in a prompt.
pub const RESUME_TEXT_LIMIT: usize = 4000;
/// Max characters of job description embedded in a prompt.
pub const JOB_DESCRIPTION_LIMIT: usize = 1500;
/// A job description must be longer than this (after trimming) to select job matching.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptMode {
    JobMatch,
    General,
}

pub fn select_mode(job_description: &str) -> PromptMode {
    let jd = truncate_chars(job_description, JOB_DESCRIPTION_LIMIT).trim();
    if jd.chars().count() > MIN_JOB_DESCRIPTION_CHARS {
        PromptMode::JobMatch
    } else {
        PromptMode::General
    }
}

/// Renders the analysis prompt for `(resume_text, job_description)`.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    let resume = truncate_chars(resume_text, RESUME_TEXT_LIMIT);
    let jd = truncate_chars(job_description, JOB_DESCRIPTION_LIMIT);

    match select_mode(job_description) {
        PromptMode::JobMatch => fill_template(
            JOB_MATCH_TEMPLATE,
            &[
                ("resume_text", resume),
                ("job_description", jd.trim()),
                ("schema", ANALYSIS_SCHEMA),
                ("json_instruction", JSON_OBJECT_ONLY),
            ],
        ),
        PromptMode::General => fill_template(
            GENERAL_TEMPLATE,
            &[
                ("resume_text", resume),
                ("schema", ANALYSIS_SCHEMA),
                ("json_instruction", JSON_OBJECT_ONLY),
            ],
        ),
    }
}
