use anyhow::{Context, Result};

use crate::documents::renderer::Theme;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_base_url: String,
    pub backend_timeout_secs: u64,
    pub autosave_debounce_ms: u64,
    /// Theme used when a request carries no `X-Theme` header.
    pub default_theme: Theme,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_theme = match std::env::var("DEFAULT_THEME") {
            Ok(value) => Theme::parse(&value)
                .with_context(|| format!("DEFAULT_THEME must be 'light' or 'dark', got '{value}'"))?,
            Err(_) => Theme::Light,
        };

        Ok(Config {
            backend_base_url: require_env("BACKEND_BASE_URL")?,
            backend_timeout_secs: parse_env_or("BACKEND_TIMEOUT_SECS", 30)?,
            autosave_debounce_ms: parse_env_or("AUTOSAVE_DEBOUNCE_MS", 800)?,
            default_theme,
            port: parse_env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{value}'")),
        Err(_) => Ok(default),
    }
}
