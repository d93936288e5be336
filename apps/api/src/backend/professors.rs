use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::backend::{BackendClient, BackendError};
use crate::professors::models::{normalize_professor, Professor, RawProfessor};
use crate::session::Session;

/// Professor-tracking resource. Carried in `AppState` as `Arc<dyn ProfessorStore>`.
#[async_trait]
pub trait ProfessorStore: Send + Sync {
    async fn list(&self, session: &Session) -> Result<Vec<Professor>, BackendError>;

    async fn save_notes(
        &self,
        session: &Session,
        professor_id: &str,
        notes: &str,
    ) -> Result<(), BackendError>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload {
    Plain(Vec<RawProfessor>),
    Envelope { results: Vec<RawProfessor> },
}

#[async_trait]
impl ProfessorStore for BackendClient {
    async fn list(&self, session: &Session) -> Result<Vec<Professor>, BackendError> {
        let payload: ListPayload = self.get_json(session, "professors/").await?;
        let raw = match payload {
            ListPayload::Plain(items) | ListPayload::Envelope { results: items } => items,
        };
        Ok(raw.into_iter().map(normalize_professor).collect())
    }

    async fn save_notes(
        &self,
        session: &Session,
        professor_id: &str,
        notes: &str,
    ) -> Result<(), BackendError> {
        self.send_json(
            session,
            Method::PATCH,
            &format!("professors/{professor_id}/"),
            &json!({ "notes": notes }),
        )
        .await
    }
}
