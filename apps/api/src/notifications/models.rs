use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::RawId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Important,
    Warning,
    Success,
    #[default]
    Info,
}

impl NotificationKind {
    /// Unknown or missing kinds render as `Info`.
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "important" | "error" | "danger" => NotificationKind::Important,
            "warning" | "warn" => NotificationKind::Warning,
            "success" => NotificationKind::Success,
            _ => NotificationKind::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Unread,
    Read,
}

/// Canonical notification shape used everywhere past the backend boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: String,
    pub subject: String,
    /// Raw body as delivered; may be plain text or untrusted HTML.
    pub content: String,
    pub kind: NotificationKind,
    pub status: NotificationStatus,
    pub creator_is_automatic: bool,
    pub date: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }
}

/// Notification payload as the backend sends it, across old and new field names.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNotification {
    pub id: RawId,
    #[serde(default, alias = "title")]
    pub subject: Option<String>,
    #[serde(default, alias = "body", alias = "message")]
    pub content: Option<String>,
    #[serde(default, alias = "type", alias = "notification_type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_read: Option<bool>,
    #[serde(default, alias = "creatorIsAutomatic", alias = "is_automatic")]
    pub creator_is_automatic: Option<bool>,
    #[serde(default, alias = "created_at", alias = "createdAt")]
    pub date: Option<String>,
}

pub fn normalize_notification(raw: RawNotification) -> Notification {
    let status = match (raw.status.as_deref(), raw.is_read) {
        (Some(s), _) if s.eq_ignore_ascii_case("read") => NotificationStatus::Read,
        (Some(_), _) => NotificationStatus::Unread,
        (None, Some(true)) => NotificationStatus::Read,
        (None, _) => NotificationStatus::Unread,
    };

    Notification {
        id: raw.id.to_string(),
        subject: raw.subject.unwrap_or_default(),
        content: raw.content.unwrap_or_default(),
        kind: raw
            .kind
            .as_deref()
            .map(NotificationKind::from_wire)
            .unwrap_or_default(),
        status,
        creator_is_automatic: raw.creator_is_automatic.unwrap_or(false),
        date: raw.date.as_deref().and_then(parse_date),
    }
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    debug!("Unparseable notification date: {value}");
    None
}
