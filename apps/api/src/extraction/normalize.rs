/// Byte sequences left behind by font-encoding quirks in common PDF producers.
const EXTRACTION_ARTIFACTS: &[&str] = &[
    "/ne+",
    "/♀nednd",
    "/gtb",
    "\u{FFFD}\u{FFFD}",
    "\u{FEFF}", // byte-order mark
    "\u{200B}", // zero-width space
    "\u{200C}", // zero-width non-joiner
    "\u{200D}", // zero-width joiner
    "\u{2060}", // word joiner
];

/// Strips extraction artifacts and control characters, collapses whitespace runs
/// inside each line, and drops blank lines.
///
/// Returns an empty string when nothing printable survives.
pub fn normalize_text(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for artifact in EXTRACTION_ARTIFACTS {
        if cleaned.contains(artifact) {
            cleaned = cleaned.replace(artifact, "");
        }
    }

    cleaned
        .lines()
        .map(collapse_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_line(line: &str) -> String {
    line.split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
