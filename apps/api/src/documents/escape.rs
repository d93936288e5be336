//! HTML escaping and paragraph splitting for user-typed section text.
//!
//! Blank-line runs (two or more newlines) separate `<p>` elements; a single
//! newline inside a paragraph becomes `<br />`. Text is escaped exactly once,
//! before any markup is added.

use once_cell::sync::Lazy;
use regex::Regex;

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("paragraph break pattern is valid"));

/// Replaces `& < > " '` with HTML entities. All other characters pass through.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes `text` and splits it into `<p>` elements.
pub fn paragraphs_html(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let escaped = escape_html(&normalized);

    PARAGRAPH_BREAK
        .split(&escaped)
        .map(|block| format!("<p>{}</p>", block.replace('\n', "<br />")))
        .collect()
}
