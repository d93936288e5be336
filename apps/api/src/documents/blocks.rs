use crate::documents::escape::{escape_html, paragraphs_html};
use crate::documents::sections::StructuredSection;

const UNTITLED: &str = "Untitled";

/// Builds one `<section>` block per input section, in input order.
pub fn build_html_blocks(sections: &[StructuredSection]) -> String {
    sections
        .iter()
        .map(build_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_block(section: &StructuredSection) -> String {
    let title = if section.title.trim().is_empty() {
        UNTITLED
    } else {
        section.title.as_str()
    };

    format!(
        r#"<section class="doc-section" data-key="{key}"><h2 class="doc-section__title">{title}</h2><div class="doc-section__body">{body}</div></section>"#,
        key = section.key.as_str(),
        title = escape_html(title),
        body = paragraphs_html(&section.content),
    )
}
