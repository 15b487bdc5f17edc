// Shared prompt fragments. Each feature keeps its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// Appended to every prompt that expects a single JSON object back.
pub const JSON_OBJECT_ONLY: &str = "Respond with a single valid JSON object only. \
Do NOT include any text outside the JSON object. \
Do NOT include explanations or apologies.";

/// Appended to every prompt that expects a JSON array of strings back.
pub const JSON_ARRAY_ONLY: &str = "Respond with a single JSON array of strings only. \
Do NOT include any text outside the JSON array.";

/// Truncates to at most `limit` characters (not bytes).
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Single-pass `{placeholder}` substitution.
///
/// Values are inserted verbatim and never re-scanned, so user text that happens to
/// contain `{resume_text}` cannot pull another field into the prompt twice.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>(),
    );
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
