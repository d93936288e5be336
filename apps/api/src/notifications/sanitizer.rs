//! Sanitizer for notification bodies delivered by the backend.
//!
//! Content without angle brackets is plain text with backslash escapes and
//! never reaches the HTML parser. Anything else is parsed as an HTML
//! fragment: tags outside `ALLOWED_TAGS` are unwrapped to their text,
//! every attribute is dropped and anchors lose their link target, keeping
//! only the `notification-link` class.

use std::collections::{HashMap, HashSet};
use std::panic::{catch_unwind, AssertUnwindSafe};

use ammonia::Builder;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::warn;

pub const ALLOWED_TAGS: &[&str] = &["a", "b", "strong", "i", "em", "u", "br", "span"];

/// Class applied to every surviving anchor.
pub const LINK_CLASS: &str = "notification-link";

/// Sanitized notification content, tagged with how it must be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "content_kind", content = "content", rename_all = "lowercase")]
pub enum SanitizedContent {
    /// Render literally; never inject as markup.
    Text(String),
    /// Safe to inject as markup.
    Html(String),
}

impl SanitizedContent {
    pub fn as_str(&self) -> &str {
        match self {
            SanitizedContent::Text(s) | SanitizedContent::Html(s) => s,
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, SanitizedContent::Html(_))
    }
}

pub struct NotificationSanitizer {
    cleaner: Builder<'static>,
    text_cleaner: Builder<'static>,
}

impl NotificationSanitizer {
    pub fn new() -> Self {
        let mut cleaner = Builder::default();
        cleaner
            .tags(ALLOWED_TAGS.iter().copied().collect())
            .clean_content_tags(HashSet::new())
            .tag_attributes(HashMap::new())
            .generic_attributes(HashSet::new())
            .link_rel(None)
            .strip_comments(true)
            .set_tag_attribute_value("a", "class", LINK_CLASS);

        let mut text_cleaner = Builder::empty();
        text_cleaner
            .clean_content_tags(["script", "style"].into_iter().collect())
            .strip_comments(true);

        Self {
            cleaner,
            text_cleaner,
        }
    }

    pub fn sanitize(&self, raw: &str) -> SanitizedContent {
        if !has_markup(raw) {
            return SanitizedContent::Text(unescape_backslashes(raw));
        }

        match catch_unwind(AssertUnwindSafe(|| self.cleaner.clean(raw).to_string())) {
            Ok(html) => SanitizedContent::Html(html),
            Err(_) => {
                warn!("HTML sanitizer panicked, falling back to literal text");
                SanitizedContent::Text(raw.to_string())
            }
        }
    }

    pub fn to_plain_text(&self, raw: &str) -> String {
        if !has_markup(raw) {
            return unescape_backslashes(raw).trim().to_string();
        }

        match catch_unwind(AssertUnwindSafe(|| {
            self.text_cleaner.clean(raw).to_string()
        })) {
            Ok(text) => decode_text_entities(&text).trim().to_string(),
            Err(_) => {
                warn!("HTML text extraction panicked, returning empty preview");
                String::new()
            }
        }
    }
}

impl Default for NotificationSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

static SANITIZER: Lazy<NotificationSanitizer> = Lazy::new(NotificationSanitizer::new);

/// Sanitizes a notification body for display.
pub fn sanitize_notification_content(raw: &str) -> SanitizedContent {
    SANITIZER.sanitize(raw)
}

/// Strips all markup and returns only the visible text.
pub fn html_to_plain_text(raw: &str) -> String {
    SANITIZER.to_plain_text(raw)
}

fn has_markup(raw: &str) -> bool {
    raw.contains(['<', '>'])
}

/// Reverses `\"`, `\'`, `\\`, `\n`, `\r` and `\t`. Other backslashes are kept.
fn unescape_backslashes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let replacement = match chars.peek() {
            Some('"') => '"',
            Some('\'') => '\'',
            Some('\\') => '\\',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            _ => {
                out.push(c);
                continue;
            }
        };
        chars.next();
        out.push(replacement);
    }
    out
}

// The serializer only emits these in text nodes. `&amp;` goes last so an
// escaped entity is decoded exactly once.
fn decode_text_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(raw: &str) -> String {
        match sanitize_notification_content(raw) {
            SanitizedContent::Html(s) => s,
            other => panic!("expected html, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_text_skips_parser_and_unescapes() {
        let out = sanitize_notification_content(r#"Say \"hi\"\nTab:\there \\ done"#);
        assert_eq!(
            out,
            SanitizedContent::Text("Say \"hi\"\nTab:\there \\ done".to_string())
        );
    }

    #[test]
    fn test_plain_text_keeps_unknown_escapes_and_entities() {
        let out = sanitize_notification_content(r"C:\path &amp; \x");
        assert_eq!(out, SanitizedContent::Text(r"C:\path &amp; \x".to_string()));
    }

    #[test]
    fn test_empty_content_is_text() {
        assert_eq!(
            sanitize_notification_content(""),
            SanitizedContent::Text(String::new())
        );
    }

    #[test]
    fn test_script_is_flattened_to_inert_text() {
        let out = html("<script>alert(1)</script>hello");
        assert!(out.contains("hello"));
        assert!(!out.contains("<script"));
        assert!(!out.contains("</script"));
    }

    #[test]
    fn test_script_body_markup_is_not_reparsed() {
        let out = html("<script><b>x</b></script>ok");
        assert!(!out.contains("<b>"));
        assert!(out.contains("ok"));
    }

    #[test]
    fn test_anchor_loses_href_and_gets_class() {
        let out = html(r#"<a href="http://evil.example" onclick="steal()">click</a>"#);
        assert!(!out.contains("href"));
        assert!(!out.contains("evil.example"));
        assert!(!out.contains("onclick"));
        assert!(out.contains(r#"class="notification-link""#));
        assert!(out.contains(">click</a>"));
    }

    #[test]
    fn test_allowed_tags_survive() {
        let out = html("<b>bold</b> <strong>s</strong> <i>i</i> <em>e</em> <u>u</u> <span>sp</span><br>");
        for tag in ["<b>", "<strong>", "<i>", "<em>", "<u>", "<span>", "<br>"] {
            assert!(out.contains(tag), "missing {tag} in {out}");
        }
    }

    #[test]
    fn test_disallowed_tags_are_flattened_recursively() {
        let out = html("<div><p>Dear <b>student</b>, <table><tr><td>cell</td></tr></table></p></div>");
        assert!(!out.contains("<div"));
        assert!(!out.contains("<p>"));
        assert!(!out.contains("<table"));
        assert!(!out.contains("<td"));
        assert!(out.contains("<b>student</b>"));
        assert!(out.contains("cell"));
    }

    #[test]
    fn test_nested_disallowed_inside_allowed_is_flattened() {
        let out = html("<b>x<img src=x onerror=alert(1)><iframe src=y></iframe>y</b>");
        assert!(out.starts_with("<b>"));
        assert!(!out.contains("<img"));
        assert!(!out.contains("<iframe"));
        assert!(!out.contains("onerror"));
    }

    #[test]
    fn test_unterminated_markup_does_not_panic() {
        let out = sanitize_notification_content("<b>bold <a href='x'>link <div");
        assert!(out.is_html());
        assert!(!out.as_str().contains("href"));
        assert!(!out.as_str().contains("<div"));
    }

    #[test]
    fn test_attributes_on_allowed_tags_are_dropped() {
        let out = html(r#"<span style="color:red" onmouseover="x()">hi</span>"#);
        assert_eq!(out, "<span>hi</span>");
    }

    #[test]
    fn test_comments_are_removed() {
        let out = html("a<!-- secret -->b<br>");
        assert!(!out.contains("secret"));
    }

    #[test]
    fn test_plain_text_strips_everything() {
        let text = html_to_plain_text(
            "<p>Your <b>application</b> to <a href=\"/x\">MIT</a> was received &amp; logged.</p><script>evil()</script>",
        );
        assert_eq!(text, "Your application to MIT was received & logged.");
    }

    #[test]
    fn test_plain_text_decodes_angle_entities() {
        assert_eq!(html_to_plain_text("<i>5 &lt; 6 &amp;&amp; 7 &gt; 3</i>"), "5 < 6 && 7 > 3");
    }

    #[test]
    fn test_plain_text_of_plain_input() {
        assert_eq!(html_to_plain_text("  already plain\\n "), "already plain");
    }
}
