// Notifications: boundary normalization, sanitized detail view, plain previews.

pub mod handlers;
pub mod models;
pub mod sanitizer;
