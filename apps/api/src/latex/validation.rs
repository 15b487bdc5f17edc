//! Structural pre-checks run before the typesetter is ever invoked.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

static ENVIRONMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\(begin|end)\{([A-Za-z0-9*@]+)\}").expect("valid environment regex")
});

/// Source with comments removed, plus the brace counts outside escapes and comments.
struct Scan {
    code: String,
    open_braces: usize,
    close_braces: usize,
}

fn scan(source: &str) -> Scan {
    let mut code = String::with_capacity(source.len());
    let mut open_braces = 0;
    let mut close_braces = 0;
    let mut chars = source.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                code.push(c);
                // `\{`, `\}`, `\%` and `\\` are literals, not syntax.
                if let Some(next) = chars.next() {
                    code.push(next);
                }
            }
            '%' => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        code.push('\n');
                        break;
                    }
                }
            }
            '{' => {
                open_braces += 1;
                code.push(c);
            }
            '}' => {
                close_braces += 1;
                code.push(c);
            }
            _ => code.push(c),
        }
    }

    Scan {
        code,
        open_braces,
        close_braces,
    }
}

/// Returns every structural problem found; an empty list means the source may be compiled.
pub fn validate_latex(source: &str) -> Vec<String> {
    let scan = scan(source);
    let mut errors = Vec::new();

    if !scan.code.contains(r"\documentclass") {
        errors.push(r"Missing \documentclass declaration".to_string());
    }
    if !scan.code.contains(r"\begin{document}") {
        errors.push(r"Missing \begin{document}".to_string());
    }
    if !scan.code.contains(r"\end{document}") {
        errors.push(r"Missing \end{document}".to_string());
    }

    if scan.open_braces != scan.close_braces {
        errors.push(format!(
            "Unbalanced braces: {} opening, {} closing",
            scan.open_braces, scan.close_braces
        ));
    }

    // (begins, ends) per environment name; BTreeMap keeps the report order stable.
    let mut environments: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for caps in ENVIRONMENT.captures_iter(&scan.code) {
        let (Some(kind), Some(name)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let counts = environments.entry(name.as_str()).or_default();
        if kind.as_str() == "begin" {
            counts.0 += 1;
        } else {
            counts.1 += 1;
        }
    }
    for (name, (begins, ends)) in environments {
        if begins != ends {
            errors.push(format!(
                "Unbalanced environment: {name} ({begins} begin, {ends} end)"
            ));
        }
    }

    errors
}
