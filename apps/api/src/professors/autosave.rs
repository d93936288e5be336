//! Debounced autosave for professor notes.
//!
//! Each professor id has at most one pending save. Scheduling again within
//! the quiet period cancels the pending save and restarts the timer, so only
//! the latest text is written. Different ids never affect each other.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::backend::professors::ProfessorStore;
use crate::session::Session;

struct PendingSave {
    ticket: u64,
    handle: JoinHandle<()>,
}

pub struct Autosaver {
    store: Arc<dyn ProfessorStore>,
    delay: Duration,
    pending: Arc<Mutex<HashMap<String, PendingSave>>>,
    next_ticket: AtomicU64,
}

impl Autosaver {
    pub fn new(store: Arc<dyn ProfessorStore>, delay: Duration) -> Self {
        Self {
            store,
            delay,
            pending: Arc::new(Mutex::new(HashMap::new())),
            next_ticket: AtomicU64::new(0),
        }
    }

    /// Schedules `notes` to be saved for `professor_id` after the quiet period,
    /// replacing any save still pending for that id.
    pub async fn schedule(&self, session: Session, professor_id: String, notes: String) {
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        let mut pending = self.pending.lock().await;

        if let Some(previous) = pending.remove(&professor_id) {
            previous.handle.abort();
            debug!("Superseded pending note save for professor {professor_id}");
        }

        let store = Arc::clone(&self.store);
        let registry = Arc::clone(&self.pending);
        let delay = self.delay;
        let key = professor_id.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            {
                let mut registry = registry.lock().await;
                // Replaced after the timer fired but before the abort landed.
                if !registry.get(&key).is_some_and(|p| p.ticket == ticket) {
                    return;
                }
                registry.remove(&key);
            }

            match store.save_notes(&session, &key, &notes).await {
                Ok(()) => info!("Saved notes for professor {key}"),
                Err(e) => warn!("Autosave for professor {key} failed: {e}"),
            }
        });

        pending.insert(professor_id, PendingSave { ticket, handle });
    }

    /// Number of saves waiting for their quiet period to elapse.
    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}
