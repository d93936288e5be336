/// Backend client — the single transport for every call to the QuestApply REST backend.
///
/// Resource modules (`notifications`, `professors`) build on `BackendClient`
/// and never construct headers or interpret error bodies themselves.
/// Auth comes from the request's `Session`, never from ambient state.
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::session::Session;

pub mod notifications;
pub mod professors;

const MAX_RETRIES: u32 = 3;
const RETRY_BASE_DELAY_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend rejected the session credentials")]
    Unauthorized,

    #[error("Backend resource not found: {0}")]
    NotFound(String),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// Identifier as sent by the backend: older endpoints use integers, newer ones strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Int(n) => write!(f, "{n}"),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: format!("{}/", base_url.trim_end_matches('/')),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, session: &Session, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header("accept", "application/json");
        match session.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GETs `path` and decodes the JSON body.
    /// Retries on 429 and 5xx with exponential backoff.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
    ) -> Result<T, BackendError> {
        let mut last_error: Option<BackendError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = Duration::from_millis(RETRY_BASE_DELAY_MS * (1 << (attempt - 1)));
                warn!(
                    "Backend GET {} attempt {} failed, retrying after {}ms...",
                    path,
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.request(session, Method::GET, path).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(BackendError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                last_error = Some(BackendError::Api {
                    status: status.as_u16(),
                    message: extract_message(&body),
                });
                continue;
            }

            let response = check_status(response, path).await?;
            let body = response.text().await?;
            debug!("Backend GET {} succeeded ({} bytes)", path, body.len());
            return serde_json::from_str(&body).map_err(BackendError::Parse);
        }

        Err(last_error.unwrap_or(BackendError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }

    /// Sends a JSON body and ignores the response body. Never retried.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), BackendError> {
        let response = self
            .request(session, method.clone(), path)
            .json(body)
            .send()
            .await?;
        check_status(response, path).await?;
        debug!("Backend {} {} succeeded", method, path);
        Ok(())
    }
}

/// Maps non-success statuses onto `BackendError`.
async fn check_status(response: Response, path: &str) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(BackendError::Unauthorized),
        StatusCode::NOT_FOUND => Err(BackendError::NotFound(path.to_string())),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(BackendError::Api {
                status: status.as_u16(),
                message: extract_message(&body),
            })
        }
    }
}

/// Pulls a human-readable message out of an error body.
/// Falls back to the raw body when it is not a known JSON shape.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.detail.or(e.message).or(e.error))
        .unwrap_or_else(|| body.trim().to_string())
}
