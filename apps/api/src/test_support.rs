//! In-memory stores and state builders shared by unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::backend::notifications::NotificationStore;
use crate::backend::professors::ProfessorStore;
use crate::backend::BackendError;
use crate::config::Config;
use crate::documents::renderer::Theme;
use crate::notifications::models::{Notification, NotificationKind, NotificationStatus};
use crate::professors::autosave::Autosaver;
use crate::professors::models::Professor;
use crate::session::Session;
use crate::state::AppState;

pub const TEST_TOKEN: &str = "test-token";

#[derive(Default)]
pub struct MemoryNotificationStore {
    pub notifications: Mutex<Vec<Notification>>,
    pub marked_read: Mutex<Vec<String>>,
    pub fail_mark_read: bool,
}

impl MemoryNotificationStore {
    pub fn with(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: Mutex::new(notifications),
            ..Default::default()
        }
    }

    pub fn marked_read(&self) -> Vec<String> {
        self.marked_read.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn list(&self, _session: &Session) -> Result<Vec<Notification>, BackendError> {
        Ok(self.notifications.lock().unwrap().clone())
    }

    async fn get(&self, _session: &Session, id: &str) -> Result<Notification, BackendError> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(format!("notifications/{id}/")))
    }

    async fn mark_read(&self, _session: &Session, id: &str) -> Result<(), BackendError> {
        if self.fail_mark_read {
            return Err(BackendError::Api {
                status: 500,
                message: "boom".to_string(),
            });
        }
        self.marked_read.lock().unwrap().push(id.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryProfessorStore {
    pub professors: Mutex<Vec<Professor>>,
    pub saved: Mutex<Vec<(String, String)>>,
}

impl MemoryProfessorStore {
    pub fn saved(&self) -> Vec<(String, String)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfessorStore for MemoryProfessorStore {
    async fn list(&self, _session: &Session) -> Result<Vec<Professor>, BackendError> {
        Ok(self.professors.lock().unwrap().clone())
    }

    async fn save_notes(
        &self,
        _session: &Session,
        professor_id: &str,
        notes: &str,
    ) -> Result<(), BackendError> {
        self.saved
            .lock()
            .unwrap()
            .push((professor_id.to_string(), notes.to_string()));
        Ok(())
    }
}

pub fn notification(id: &str, content: &str, status: NotificationStatus) -> Notification {
    Notification {
        id: id.to_string(),
        subject: format!("Subject {id}"),
        content: content.to_string(),
        kind: NotificationKind::Info,
        status,
        creator_is_automatic: false,
        date: None,
    }
}

pub fn test_config() -> Config {
    Config {
        backend_base_url: "http://backend.invalid/api".to_string(),
        backend_timeout_secs: 5,
        autosave_debounce_ms: 800,
        default_theme: Theme::Light,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(
    notifications: Arc<MemoryNotificationStore>,
    professors: Arc<MemoryProfessorStore>,
) -> AppState {
    let config = test_config();
    let autosaver = Arc::new(Autosaver::new(
        professors.clone(),
        Duration::from_millis(config.autosave_debounce_ms),
    ));
    AppState {
        config,
        notifications,
        professors,
        autosaver,
    }
}
