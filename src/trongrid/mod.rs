//! TronGrid HTTP client.
//!
//! Single adapter for all upstream access. Every request carries the
//! `TRON-PRO-API-KEY` header; transient failures (HTTP 429/500/502/503/504
//! and transport errors) are retried with exponential backoff, anything else
//! surfaces immediately with the upstream status and body attached.

pub mod error;
pub mod types;

pub use error::UpstreamError;
pub use types::{Account, AccountResources, AccountResponse};

use reqwest::StatusCode;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;

const API_KEY_HEADER: HeaderName = HeaderName::from_static("tron-pro-api-key");

/// HTTP client for the TronGrid indexing API
#[derive(Debug, Clone)]
pub struct TronGridClient {
    http: reqwest::Client,
    base_url: String,
    max_attempts: u32,
    retry_base_delay: Duration,
}

impl TronGridClient {
    /// Build a client with the API key attached as a default header.
    pub fn new(config: &UpstreamConfig, api_key: &str) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(api_key).map_err(|_| UpstreamError::InvalidApiKey)?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(UpstreamError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_attempts: config.max_attempts.max(1),
            retry_base_delay: Duration::from_millis(config.retry_base_delay_ms),
        })
    }

    /// Account data (balance) for an address.
    pub async fn fetch_account(&self, address: &str) -> Result<AccountResponse, UpstreamError> {
        self.get_json(&format!("/v1/accounts/{}", address)).await
    }

    /// Resource limits (bandwidth, energy) for an address.
    pub async fn fetch_account_resources(
        &self,
        address: &str,
    ) -> Result<AccountResources, UpstreamError> {
        self.get_json(&format!("/v1/accounts/{}/resources", address))
            .await
    }

    /// GET with bounded retries and exponential backoff.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        let mut delay = self.retry_base_delay;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            debug!(%url, attempt, "TronGrid request");

            let last_failure = match self.http.get(&url).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.json::<T>().await.map_err(UpstreamError::Decode);
                    }
                    let body = resp.text().await.unwrap_or_default();
                    if !is_retryable_status(status) {
                        return Err(UpstreamError::Status {
                            status: status.as_u16(),
                            body,
                        });
                    }
                    format!("HTTP {}: {}", status.as_u16(), body)
                }
                Err(e) => e.to_string(),
            };

            if attempt >= self.max_attempts {
                return Err(UpstreamError::Exhausted {
                    attempts: attempt,
                    last: last_failure,
                });
            }

            warn!(%url, attempt, error = %last_failure, "retrying TronGrid request");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

/// Transient upstream conditions worth another attempt
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}
