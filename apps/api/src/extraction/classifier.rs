//! Coarse "does this look like a resume" gate.
//!
//! Counts how many distinct vocabulary words occur anywhere in the text
//! (case-insensitive substring match). This is a heuristic with no tunable precision:
//! substrings match inside longer words ("work" in "network"), and a resume written
//! in another language will usually fail. It filters obviously wrong uploads and
//! makes no stronger claim than that.

/// Resume-domain vocabulary.
pub const RESUME_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "work",
    "employment",
    "university",
    "college",
    "degree",
    "bachelor",
    "master",
    "project",
    "achievement",
    "responsibility",
    "job",
    "career",
    "professional",
    "technical",
    "qualification",
    "certificate",
];

/// Minimum distinct keywords for a document to pass.
pub const MIN_RESUME_KEYWORDS: usize = 3;

/// Vocabulary words present in `text`, in vocabulary order.
pub fn matched_keywords(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    RESUME_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lower.contains(kw))
        .collect()
}
