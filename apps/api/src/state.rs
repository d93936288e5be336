use std::sync::Arc;

use crate::backend::notifications::NotificationStore;
use crate::backend::professors::ProfessorStore;
use crate::config::Config;
use crate::professors::autosave::Autosaver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Notification resource. Default: `BackendClient`; tests swap in memory stores.
    pub notifications: Arc<dyn NotificationStore>,
    pub professors: Arc<dyn ProfessorStore>,
    /// Debounces professor note saves before they reach `professors`.
    pub autosaver: Arc<Autosaver>,
}
