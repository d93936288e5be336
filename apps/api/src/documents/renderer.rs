//! Standalone HTML document rendering for previews and export hand-off.
//!
//! The two themes share one template; only the palette values differ.

use serde::{Deserialize, Serialize};

use crate::documents::blocks::build_html_blocks;
use crate::documents::sections::{to_structured_sections, SectionsMap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }

    /// Parses a theme name, case-insensitively. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub ink: &'static str,
    pub muted: &'static str,
    pub line: &'static str,
}

pub const LIGHT_PALETTE: Palette = Palette {
    background: "#ffffff",
    ink: "#111827",
    muted: "#6b7280",
    line: "#e5e7eb",
};

pub const DARK_PALETTE: Palette = Palette {
    background: "#0b1220",
    ink: "#e5e7eb",
    muted: "#9ca3af",
    line: "#1f2937",
};

/// Wraps pre-built block markup in a complete HTML document.
///
/// `blocks` is inserted verbatim; callers must pass markup produced by
/// `build_html_blocks`.
pub fn render_document(blocks: &str, theme: Theme) -> String {
    let p = theme.palette();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Document Preview</title>
<style>
:root {{ --bg: {bg}; --ink: {ink}; --muted: {muted}; --line: {line}; }}
* {{ box-sizing: border-box; }}
html, body {{ margin: 0; padding: 0; background: var(--bg); color: var(--ink); }}
body {{ font-family: Georgia, "Times New Roman", serif; font-size: 12pt; line-height: 1.6; }}
.doc {{ max-width: 48rem; margin: 0 auto; padding: 2.5rem 2rem; }}
.doc-section {{ padding: 1rem 0; border-bottom: 1px solid var(--line); }}
.doc-section:last-child {{ border-bottom: none; }}
.doc-section__title {{ margin: 0 0 0.5rem; font-size: 1.1rem; letter-spacing: 0.02em; }}
.doc-section__body p {{ margin: 0 0 0.75rem; }}
.doc-section__body p:empty::before {{ content: "\2014"; color: var(--muted); }}
@media print {{ body {{ font-size: 11pt; }} .doc {{ padding: 0; }} }}
</style>
</head>
<body>
<article class="doc">
{blocks}
</article>
</body>
</html>
"#,
        bg = p.background,
        ink = p.ink,
        muted = p.muted,
        line = p.line,
        blocks = blocks,
    )
}

/// Renders a sections map straight to a themed document.
pub fn render_sections_document(sections: &SectionsMap, theme: Theme) -> String {
    let blocks = build_html_blocks(&to_structured_sections(sections));
    render_document(&blocks, theme)
}
