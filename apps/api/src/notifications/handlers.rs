use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::notifications::models::{Notification, NotificationKind, NotificationStatus};
use crate::notifications::sanitizer::{
    html_to_plain_text, sanitize_notification_content, SanitizedContent,
};
use crate::routes::validate_resource_id;
use crate::session::Session;
use crate::state::AppState;

const PREVIEW_CHARS: usize = 160;

#[derive(Debug, Serialize)]
pub struct NotificationSummary {
    pub id: String,
    pub subject: String,
    pub preview: String,
    pub kind: NotificationKind,
    pub status: NotificationStatus,
    pub creator_is_automatic: bool,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationSummary>,
    pub unread_count: usize,
}

#[derive(Debug, Serialize)]
pub struct NotificationDetailResponse {
    pub id: String,
    pub subject: String,
    #[serde(flatten)]
    pub body: SanitizedContent,
    pub kind: NotificationKind,
    pub status: NotificationStatus,
    pub creator_is_automatic: bool,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct SanitizeRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SanitizeResponse {
    #[serde(flatten)]
    pub body: SanitizedContent,
    pub plain_text: String,
}

/// GET /api/v1/notifications
pub async fn handle_list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<NotificationListResponse>, AppError> {
    session.require_token()?;
    let notifications = state.notifications.list(&session).await?;
    let unread_count = notifications.iter().filter(|n| n.is_unread()).count();

    Ok(Json(NotificationListResponse {
        notifications: notifications.into_iter().map(summarize).collect(),
        unread_count,
    }))
}

/// GET /api/v1/notifications/:id
///
/// Opening an unread notification marks it read. A failed mark-read is
/// logged and does not fail the request.
pub async fn handle_detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<NotificationDetailResponse>, AppError> {
    session.require_token()?;
    validate_resource_id(&id)?;

    let mut notification = state.notifications.get(&session, &id).await?;

    if notification.is_unread() {
        match state.notifications.mark_read(&session, &id).await {
            Ok(()) => {
                info!("Marked notification {id} read");
                notification.status = NotificationStatus::Read;
            }
            Err(e) => warn!("Failed to mark notification {id} read: {e}"),
        }
    }

    Ok(Json(NotificationDetailResponse {
        body: sanitize_notification_content(&notification.content),
        id: notification.id,
        subject: notification.subject,
        kind: notification.kind,
        status: notification.status,
        creator_is_automatic: notification.creator_is_automatic,
        date: notification.date,
    }))
}

/// POST /api/v1/notifications/sanitize
pub async fn handle_sanitize(Json(req): Json<SanitizeRequest>) -> Json<SanitizeResponse> {
    Json(SanitizeResponse {
        body: sanitize_notification_content(&req.content),
        plain_text: html_to_plain_text(&req.content),
    })
}

fn summarize(notification: Notification) -> NotificationSummary {
    NotificationSummary {
        preview: truncate_preview(&html_to_plain_text(&notification.content)),
        id: notification.id,
        subject: notification.subject,
        kind: notification.kind,
        status: notification.status,
        creator_is_automatic: notification.creator_is_automatic,
        date: notification.date,
    }
}

fn truncate_preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}
