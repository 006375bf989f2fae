// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the AQT portal REST API.
//!
//! Provides the [`PortalClient`] trait for abstracting HTTP operations and
//! [`ReqwestPortalClient`] as the production implementation with exponential
//! backoff retry logic and bearer token authentication.

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, warn};

use crate::backend::Workspace;
use crate::config::PortalConfig;
use crate::error::BackendError;

/// Value of the `SDK` header sent with every portal request.
const SDK_HEADER: &str = "rust";

/// Abstract HTTP client for portal operations.
///
/// This trait enables testing the provider without real HTTP calls.
#[async_trait]
pub trait PortalClient: Send + Sync {
    /// List the workspaces, and their resources, visible to the token.
    async fn workspaces(&self) -> Result<Vec<Workspace>, BackendError>;
}

/// Production HTTP client using reqwest with retry logic.
pub struct ReqwestPortalClient {
    client: reqwest::Client,
    api_url: String,
    access_token: SecretString,
    max_retries: u32,
    retry_base_delay_ms: u64,
}

impl std::fmt::Debug for ReqwestPortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestPortalClient")
            .field("api_url", &self.api_url)
            .field("access_token", &"[REDACTED]")
            .field("max_retries", &self.max_retries)
            .field("retry_base_delay_ms", &self.retry_base_delay_ms)
            .finish()
    }
}

impl ReqwestPortalClient {
    /// Create a client for the API rooted at `api_url`.
    pub fn new(
        api_url: impl Into<String>,
        access_token: SecretString,
        config: &PortalConfig,
    ) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()
            .map_err(|e| BackendError::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    /// Delay before retry number `attempt + 1`.
    ///
    /// `min(base_delay * 2^attempt, 30_000ms)` plus 25% on odd attempts.
    fn retry_delay_ms(&self, attempt: u32) -> u64 {
        let base = self
            .retry_base_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt));
        let capped = base.min(30_000);
        let jitter = capped / 4 * (attempt as u64 % 2);
        capped + jitter
    }

    /// Execute an HTTP request with exponential backoff retry.
    ///
    /// Retries on: 429 (rate limit), 5xx, connect/timeout errors.
    /// Does not retry: other 4xx.
    async fn request_with_retry<F, Fut, T>(
        &self,
        operation: &str,
        make_request: F,
    ) -> Result<T, BackendError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
        T: serde::de::DeserializeOwned,
    {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            match make_request().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        return response.json::<T>().await.map_err(|e| {
                            BackendError::Http(format!("Failed to parse {operation} response: {e}"))
                        });
                    }

                    let body = response.text().await.unwrap_or_default();

                    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                        return Err(BackendError::AuthenticationFailed(format!(
                            "{operation} auth failed ({status}): {body}"
                        )));
                    }

                    let retryable =
                        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
                    if !retryable {
                        return Err(BackendError::Http(format!(
                            "{operation} failed ({status}): {body}"
                        )));
                    }

                    last_error = Some(BackendError::Http(format!(
                        "{operation} failed ({status}): {body}"
                    )));
                }
                Err(e) => {
                    if e.is_connect() || e.is_timeout() {
                        last_error = Some(BackendError::Http(format!(
                            "{operation} request error: {e}"
                        )));
                    } else {
                        return Err(BackendError::Http(format!(
                            "{operation} request error: {e}"
                        )));
                    }
                }
            }

            if attempt < self.max_retries {
                let delay = self.retry_delay_ms(attempt);
                warn!(
                    attempt = attempt + 1,
                    max = self.max_retries,
                    delay_ms = delay,
                    "{operation} failed, retrying"
                );
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            BackendError::Http(format!(
                "{operation} failed after {} retries",
                self.max_retries
            ))
        }))
    }
}

#[async_trait]
impl PortalClient for ReqwestPortalClient {
    async fn workspaces(&self) -> Result<Vec<Workspace>, BackendError> {
        let url = format!("{}/workspaces", self.api_url);
        let token = self.access_token.expose_secret();

        let workspaces: Vec<Workspace> = self
            .request_with_retry("workspaces", || {
                self.client
                    .get(&url)
                    .bearer_auth(token)
                    .header("SDK", SDK_HEADER)
                    .send()
            })
            .await?;

        debug!(count = workspaces.len(), "Fetched portal workspaces");
        Ok(workspaces)
    }
}
