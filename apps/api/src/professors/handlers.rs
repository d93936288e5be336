use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::professors::models::Professor;
use crate::professors::pagination::{paginate, Page, PageQuery};
use crate::routes::validate_resource_id;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NotesUpdate {
    pub notes: String,
}

/// GET /api/v1/professors?page=&per_page=
pub async fn handle_list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Professor>>, AppError> {
    session.require_token()?;
    let professors = state.professors.list(&session).await?;
    Ok(Json(paginate(professors, query)))
}

/// PUT /api/v1/professors/:id/notes
///
/// Returns 202 immediately; the save is debounced per professor.
pub async fn handle_update_notes(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(req): Json<NotesUpdate>,
) -> Result<StatusCode, AppError> {
    session.require_token()?;
    validate_resource_id(&id)?;

    debug!("Scheduling note autosave for professor {id}");
    state.autosaver.schedule(session, id, req.notes).await;
    Ok(StatusCode::ACCEPTED)
}
