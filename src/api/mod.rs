// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the ephemeris backend.
//!
//! Each call makes exactly one attempt: no retry, no backoff and no explicit
//! timeout. Transport failures, non-success statuses and undecodable payloads
//! all surface as an [`ApiError`] for the caller to handle.

pub mod types;

pub use types::{DetailsRequest, Ephemeris, EphemerisDetails, HealthStatus, Link, Year};

use crate::i18n::{Language, TranslationBundle};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

/// Base URL used when neither the CLI, the environment nor the config file set one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const USER_AGENT: &str = concat!("Ephemerides/", env!("CARGO_PKG_VERSION"));

/// Errors produced by [`ApiClient`] calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The configured base URL (or a thumbnail URL) could not be used.
    InvalidUrl(String),
    /// The request never produced a response.
    Network(String),
    /// The backend answered with a non-success status.
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected payload.
    Decode(String),
}

impl ApiError {
    /// Builds a status error, keeping the backend's `{"error": "..."}` message when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.is_empty());
        ApiError::Status { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status {
                status,
                message: Some(message),
            } => write!(f, "HTTP error! status: {status} ({message})"),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "HTTP error! status: {status}"),
            ApiError::Decode(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the three backend endpoints (plus the health probe).
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client rooted at `base_url`. A path prefix (`https://host/app`) is kept.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let mut url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        // `Url::join` drops the last path segment unless it ends with a slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base_url: url,
            http,
        })
    }

    /// Like [`ApiClient::new`], but an unusable `base_url` falls back to
    /// [`DEFAULT_BASE_URL`] with a warning.
    pub fn with_fallback(base_url: &str) -> ApiResult<Self> {
        Self::new(base_url).or_else(|err| {
            tracing::warn!(error = %err, "falling back to {DEFAULT_BASE_URL}");
            Self::new(DEFAULT_BASE_URL)
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    /// `GET /api/ephemeris/today?lang={code}`
    pub async fn today_ephemeris(&self, language: Language) -> ApiResult<Ephemeris> {
        let mut url = self.endpoint("api/ephemeris/today")?;
        url.query_pairs_mut().append_pair("lang", language.code());

        tracing::debug!(%url, "fetching today's ephemeris");
        let response = self.http.get(url).send().await;
        decode_json(response).await.inspect_err(|e| {
            tracing::warn!(error = %e, "error fetching ephemeris");
        })
    }

    /// `POST /api/ephemeris/details` with `{year, text, lang}`.
    pub async fn ephemeris_details(
        &self,
        year: &Year,
        text: &str,
        language: Language,
    ) -> ApiResult<EphemerisDetails> {
        let url = self.endpoint("api/ephemeris/details")?;
        let body = DetailsRequest {
            year,
            text,
            lang: language.code(),
        };

        tracing::debug!(%url, %year, "fetching ephemeris details");
        let response = self.http.post(url).json(&body).send().await;
        decode_json(response).await.inspect_err(|e| {
            tracing::warn!(error = %e, "error fetching details");
        })
    }

    /// `GET /api/translations/{code}`
    pub async fn translations(&self, language: Language) -> ApiResult<TranslationBundle> {
        let url = self.endpoint(&format!("api/translations/{}", language.code()))?;

        tracing::debug!(%url, "fetching translations");
        let response = self.http.get(url).send().await;
        decode_json(response).await.inspect_err(|e| {
            tracing::warn!(error = %e, language = language.code(), "error fetching translations");
        })
    }

    /// Downloads a thumbnail. `url` is absolute (it comes from the details payload).
    pub async fn fetch_thumbnail(&self, url: &str) -> ApiResult<Vec<u8>> {
        let url = Url::parse(url).map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;

        tracing::debug!(%url, "fetching thumbnail");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_success(response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// `GET /health`
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        let url = self.endpoint("health")?;
        let response = self.http.get(url).send().await;
        decode_json(response).await
    }
}

async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), &body))
}

async fn decode_json<T: DeserializeOwned>(
    response: Result<reqwest::Response, reqwest::Error>,
) -> ApiResult<T> {
    let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
    let response = ensure_success(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
