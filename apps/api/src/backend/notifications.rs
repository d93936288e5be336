use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::backend::{BackendClient, BackendError};
use crate::notifications::models::{normalize_notification, Notification, RawNotification};
use crate::session::Session;

/// Read access to a user's notifications plus the one mutation the UI
/// performs. Carried in `AppState` as `Arc<dyn NotificationStore>`.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn list(&self, session: &Session) -> Result<Vec<Notification>, BackendError>;

    async fn get(&self, session: &Session, id: &str) -> Result<Notification, BackendError>;

    async fn mark_read(&self, session: &Session, id: &str) -> Result<(), BackendError>;
}

/// List endpoints are either a bare array or a paginated envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload {
    Plain(Vec<RawNotification>),
    Envelope { results: Vec<RawNotification> },
}

#[async_trait]
impl NotificationStore for BackendClient {
    async fn list(&self, session: &Session) -> Result<Vec<Notification>, BackendError> {
        let payload: ListPayload = self.get_json(session, "notifications/").await?;
        let raw = match payload {
            ListPayload::Plain(items) | ListPayload::Envelope { results: items } => items,
        };
        Ok(raw.into_iter().map(normalize_notification).collect())
    }

    async fn get(&self, session: &Session, id: &str) -> Result<Notification, BackendError> {
        let raw: RawNotification = self
            .get_json(session, &format!("notifications/{id}/"))
            .await?;
        Ok(normalize_notification(raw))
    }

    async fn mark_read(&self, session: &Session, id: &str) -> Result<(), BackendError> {
        self.send_json(
            session,
            Method::POST,
            &format!("notifications/{id}/mark-read/"),
            &json!({}),
        )
        .await
    }
}
