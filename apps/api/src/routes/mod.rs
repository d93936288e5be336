pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::documents::handlers as documents;
use crate::errors::AppError;
use crate::notifications::handlers as notifications;
use crate::professors::handlers as professors;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Documents
        .route("/api/v1/documents/plain", post(documents::handle_plain_text))
        .route(
            "/api/v1/documents/sections",
            post(documents::handle_structured_sections),
        )
        .route("/api/v1/documents/preview", post(documents::handle_preview))
        // Notifications
        .route("/api/v1/notifications", get(notifications::handle_list))
        .route(
            "/api/v1/notifications/sanitize",
            post(notifications::handle_sanitize),
        )
        .route("/api/v1/notifications/:id", get(notifications::handle_detail))
        // Professors
        .route("/api/v1/professors", get(professors::handle_list))
        .route(
            "/api/v1/professors/:id/notes",
            put(professors::handle_update_notes),
        )
        .with_state(state)
}

/// Path ids are forwarded into backend URLs, so only plain id characters pass.
pub fn validate_resource_id(id: &str) -> Result<(), AppError> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Invalid id '{id}'")))
    }
}
