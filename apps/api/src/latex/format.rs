use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SECTION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\section\*?\{([^}]+)\}").expect("valid section regex"));

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSection {
    pub name: String,
    pub content: String,
    pub order: usize,
}

/// Collapses runs of blank lines into a single blank line.
pub fn format_latex_code(source: &str) -> String {
    let mut lines = Vec::new();
    let mut prev_blank = false;
    for line in source.split('\n') {
        let blank = line.trim().is_empty();
        if !(blank && prev_blank) {
            lines.push(line);
        }
        prev_blank = blank;
    }
    lines.join("\n")
}

/// Splits source into `\section{..}` / `\section*{..}` blocks.
///
/// Each block runs until the next `\section` command or the end of input.
pub fn extract_sections(source: &str) -> Vec<SourceSection> {
    let headings: Vec<_> = SECTION_HEADING.captures_iter(source).collect();
    let mut sections = Vec::with_capacity(headings.len());

    for (order, caps) in headings.iter().enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = source[whole.end()..]
            .find(r"\section")
            .map(|i| whole.end() + i)
            .unwrap_or(source.len());
        sections.push(SourceSection {
            name: name.as_str().trim().to_string(),
            content: source[whole.end()..end].trim().to_string(),
            order,
        });
    }
    sections
}
