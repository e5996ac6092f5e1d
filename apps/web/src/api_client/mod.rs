/// API client: the single HTTP collaborator for the backend résumé service.
///
/// Owns the transport policy: base URL, JSON content type, a fixed 10 second
/// timeout, and retry with exponential backoff on 429/5xx. Callers get back
/// raw JSON and decide what it means.
use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, StatusCode,
};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::ProviderError;

pub mod endpoints;

use endpoints::Endpoint;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Resource not found")]
    NotFound,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ApiError> for ProviderError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound => {
                ProviderError::DataUnavailable("backend has no such résumé".to_string())
            }
            ApiError::Http(e) => ProviderError::DataUnavailable(format!("request failed: {e}")),
            ApiError::Status { status, message } => ProviderError::DataUnavailable(format!(
                "backend answered {status}: {message}"
            )),
            ApiError::Parse(e) => {
                ProviderError::SchemaMismatch(format!("response is not valid JSON: {e}"))
            }
        }
    }
}

/// Error envelope the backend uses: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, max_retries: u32) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_retries,
        })
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// GETs `endpoint` and parses the body as JSON.
    /// An empty body comes back as `Value::Null`.
    /// Retries on 429 and 5xx only, waiting 1s, 2s, 4s, ... between attempts.
    pub async fn get_json(&self, endpoint: &Endpoint) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1).min(6)));
                warn!(
                    "GET {} attempt {} failed, retrying after {}ms...",
                    url,
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            // Transport failures and timeouts are not retried.
            let response = self.client.get(&url).send().await?;

            let status = response.status();

            if status == StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound);
            }

            if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("GET {} returned {}: {}", url, status, body);
                last_error = Some(ApiError::Status {
                    status: status.as_u16(),
                    message: error_message(body),
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    message: error_message(body),
                });
            }

            let body = response.text().await?;
            debug!("GET {} succeeded ({} bytes)", url, body.len());

            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&body)?);
        }

        Err(last_error.unwrap_or(ApiError::Status {
            status: 0,
            message: "no attempt was made".to_string(),
        }))
    }

    /// GET /v1/resumes/{id}
    pub async fn get_resume(&self, id: &str) -> Result<Value, ApiError> {
        self.get_json(&Endpoint::Resume(id.to_string())).await
    }
}

fn error_message(body: String) -> String {
    serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.error)
        .unwrap_or(body)
}
