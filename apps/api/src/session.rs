//! Per-request session context.
//!
//! The bearer token and display theme travel explicitly with each request
//! and are handed to whatever needs them.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::documents::renderer::Theme;
use crate::errors::AppError;
use crate::state::AppState;

pub const THEME_HEADER: &str = "x-theme";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub theme: Theme,
}

impl Session {
    pub fn new(token: Option<String>, theme: Theme) -> Self {
        Self { token, theme }
    }

    /// Fails with `Unauthorized` when the request carried no bearer token.
    pub fn require_token(&self) -> Result<&str, AppError> {
        self.token.as_deref().ok_or(AppError::Unauthorized)
    }

    fn from_parts(parts: &Parts, default_theme: Theme) -> Self {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let theme = parts
            .headers
            .get(THEME_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(Theme::parse)
            .unwrap_or(default_theme);

        Self::new(token, theme)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        Ok(Session::from_parts(parts, state.config.default_theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (k, v) in headers {
            builder = builder.header(*k, *v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_reads_bearer_token_and_theme() {
        let session = Session::from_parts(
            &parts(&[("authorization", "Bearer abc123"), ("x-theme", "dark")]),
            Theme::Light,
        );
        assert_eq!(session.token.as_deref(), Some("abc123"));
        assert_eq!(session.theme, Theme::Dark);
    }

    #[test]
    fn test_defaults_when_headers_missing() {
        let session = Session::from_parts(&parts(&[]), Theme::Dark);
        assert!(session.token.is_none());
        assert_eq!(session.theme, Theme::Dark);
        assert!(matches!(session.require_token(), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_ignores_non_bearer_and_unknown_theme() {
        let session = Session::from_parts(
            &parts(&[("authorization", "Basic dXNlcjpwYXNz"), ("x-theme", "neon")]),
            Theme::Light,
        );
        assert!(session.token.is_none());
        assert_eq!(session.theme, Theme::Light);
    }
}
