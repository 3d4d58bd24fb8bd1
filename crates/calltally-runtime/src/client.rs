//! HTTP client for the paginated call-log API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::CallLogPage;

/// Errors surfaced by call-log API fetches.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request to {url} returned status {status}")]
    Status { status: u16, url: String },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Connection settings for [`CallLogClient`].
#[derive(Debug, Clone)]
pub struct CallLogClientConfig {
    pub api_base: String,
    pub account_sid: String,
    pub api_key: String,
    pub request_timeout_ms: u64,
}

/// Basic-auth client over the call-log API. One attempt per request; a
/// timeout is a fetch failure like any other non-success outcome.
#[derive(Debug, Clone)]
pub struct CallLogClient {
    http: reqwest::Client,
    api_base: String,
    account_sid: String,
    api_key: String,
}

impl CallLogClient {
    pub fn new(config: CallLogClientConfig) -> Result<Self, ApiError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("calltally"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            account_sid: config.account_sid,
            api_key: config.api_key,
        })
    }

    /// Fetches one page of call records addressed by an API-relative URI.
    pub async fn fetch_page(&self, page_uri: &str) -> Result<CallLogPage, ApiError> {
        self.request_json(format!("{}{}", self.api_base, page_uri))
            .await
    }

    /// Fetches the raw event log for one call.
    pub async fn fetch_call_events(&self, call_sid: &str) -> Result<serde_json::Value, ApiError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Calls/{}/Events.json",
            self.api_base, self.account_sid, call_sid
        );
        self.request_json(url).await
    }

    async fn request_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.account_sid, Some(&self.api_key))
            .send()
            .await?;

        // Exactly 200 counts as success; every other status is a fetch
        // failure whose body is ignored.
        let status = response.status().as_u16();
        if status != 200 {
            return Err(ApiError::Status { status, url });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }
}
