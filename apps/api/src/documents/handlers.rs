use axum::{response::Html, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::documents::plain_text::assemble_plain_text;
use crate::documents::renderer::{render_sections_document, Theme};
use crate::documents::sections::{to_structured_sections, SectionsMap, StructuredSection};
use crate::session::Session;

#[derive(Debug, Deserialize)]
pub struct DocumentRequest {
    #[serde(default)]
    pub sections: SectionsMap,
    /// Overrides the session theme for this render only.
    #[serde(default)]
    pub theme: Option<Theme>,
}

#[derive(Debug, Serialize)]
pub struct PlainTextResponse {
    pub text: String,
}

/// POST /api/v1/documents/plain
pub async fn handle_plain_text(Json(req): Json<DocumentRequest>) -> Json<PlainTextResponse> {
    Json(PlainTextResponse {
        text: assemble_plain_text(&req.sections),
    })
}

/// POST /api/v1/documents/sections
pub async fn handle_structured_sections(
    Json(req): Json<DocumentRequest>,
) -> Json<Vec<StructuredSection>> {
    Json(to_structured_sections(&req.sections))
}

/// POST /api/v1/documents/preview
pub async fn handle_preview(
    session: Session,
    Json(req): Json<DocumentRequest>,
) -> Html<String> {
    let theme = req.theme.unwrap_or(session.theme);
    debug!("Rendering document preview with {:?} theme", theme);
    Html(render_sections_document(&req.sections, theme))
}
