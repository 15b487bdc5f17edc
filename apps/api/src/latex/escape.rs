/// Escapes LaTeX special characters in free text.
///
/// Works one character at a time, so replacements are never escaped again.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a URL for the first argument of `\href`.
///
/// hyperref reads the argument verbatim except for `%` and `#`.
pub fn escape_url(url: &str) -> String {
    url.replace('%', r"\%").replace('#', r"\#")
}
