use serde::Serialize;

const CONTACT_MARKERS: &[&str] = &["email", "@", "phone", "linkedin"];
const EXPERIENCE_MARKERS: &[&str] = &["experience", "work", "employment", "job"];
const EDUCATION_MARKERS: &[&str] = &["education", "degree", "university", "college"];
const SKILL_MARKERS: &[&str] = &["skills", "technical", "programming", "software"];

/// Summary statistics reported alongside extracted text.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TextStats {
    pub character_count: usize,
    pub word_count: usize,
    pub line_count: usize,
    pub has_contact_info: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
}

pub fn text_stats(text: &str) -> TextStats {
    if text.is_empty() {
        return TextStats::default();
    }

    let lower = text.to_lowercase();
    let any = |markers: &[&str]| markers.iter().any(|m| lower.contains(m));

    TextStats {
        character_count: text.chars().count(),
        word_count: text.split_whitespace().count(),
        line_count: text.split('\n').count(),
        has_contact_info: any(CONTACT_MARKERS),
        has_experience: any(EXPERIENCE_MARKERS),
        has_education: any(EDUCATION_MARKERS),
        has_skills: any(SKILL_MARKERS),
    }
}
