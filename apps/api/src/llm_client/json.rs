//! Locating a JSON payload inside free-form model output.
//!
//! Order: a fenced code block whose body starts like JSON, then the first balanced
//! top-level span, then the whole (trimmed) reply.

/// Best-effort JSON object payload.
pub fn locate_json_object(text: &str) -> &str {
    locate(text, '{', '}')
}

/// Best-effort JSON array payload.
pub fn locate_json_array(text: &str) -> &str {
    locate(text, '[', ']')
}

fn locate(text: &str, open: char, close: char) -> &str {
    let text = text.trim();
    if let Some(block) = fenced_block(text, open) {
        return block;
    }
    if let Some(span) = first_balanced_span(text, open, close) {
        return span;
    }
    text
}

/// Body of the first ``` fence (language tag skipped) that starts with `open`.
fn fenced_block(text: &str, open: char) -> Option<&str> {
    let mut rest = text;
    while let Some(start) = rest.find("```") {
        let after_fence = &rest[start + 3..];
        let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after_fence[body_start..];
        let end = body.find("```")?;
        let inner = body[..end].trim();
        if inner.starts_with(open) {
            return Some(inner);
        }
        rest = &body[end + 3..];
    }
    None
}

/// First `open ... close` span with balanced nesting, ignoring delimiters in strings.
fn first_balanced_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_block() {
        let reply = "Here you go:\n```json\n{\"ats_score\": 80}\n```\nThanks!";
        assert_eq!(locate_json_object(reply), "{\"ats_score\": 80}");
    }

    #[test]
    fn test_fence_without_language_tag() {
        let reply = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(locate_json_object(reply), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_non_json_fence_skipped() {
        let reply = "```text\nnot json\n```\n{\"a\": 1}";
        assert_eq!(locate_json_object(reply), "{\"a\": 1}");
    }

    #[test]
    fn test_first_balanced_span() {
        let reply = "Result: {\"a\": {\"b\": 2}} and then {\"c\": 3}";
        assert_eq!(locate_json_object(reply), "{\"a\": {\"b\": 2}}");
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let reply = r#"x {"tip": "use } carefully \" {"} y"#;
        assert_eq!(locate_json_object(reply), r#"{"tip": "use } carefully \" {"}"#);
    }

    #[test]
    fn test_no_json_returns_whole_text() {
        assert_eq!(locate_json_object("  plain text  "), "plain text");
    }

    #[test]
    fn test_unbalanced_returns_whole_text() {
        assert_eq!(locate_json_object("{\"a\": 1"), "{\"a\": 1");
    }

    #[test]
    fn test_array_span() {
        assert_eq!(
            locate_json_array("Skills: [\"Rust\", \"Go\"] done"),
            "[\"Rust\", \"Go\"]"
        );
    }
}
