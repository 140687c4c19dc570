//! reqwest-backed GraphQL transport: `SubgraphHttp`.
//!
//! Posts a [`GraphqlRequest`] to a subgraph URL and returns the raw JSON envelope.
//! Decoding into typed wire structs happens in the domain sub-clients.

use crate::error::HttpError;
use crate::graphql::{GraphqlRequest, GraphqlTransport};
use crate::http::retry::RetryPolicy;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP transport for subgraph queries.
#[derive(Clone)]
pub struct SubgraphHttp {
    client: Client,
    retry: RetryPolicy,
}

impl SubgraphHttp {
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client, retry })
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    async fn post_with_retry(
        &self,
        endpoint: &str,
        request: &GraphqlRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let config = match self.retry.config() {
            Some(c) => c,
            None => return self.do_post(endpoint, request).await,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_post(endpoint, request).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.is_retryable_status(*status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            operation = request.operation_name,
                            "Retrying subgraph request to {}",
                            endpoint
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_post(
        &self,
        endpoint: &str,
        request: &GraphqlRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let resp = self.client.post(endpoint).json(request).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<serde_json::Value>().await?);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 | 403 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

#[async_trait]
impl GraphqlTransport for SubgraphHttp {
    async fn post(
        &self,
        endpoint: &str,
        request: &GraphqlRequest,
    ) -> Result<serde_json::Value, HttpError> {
        self.post_with_retry(endpoint, request).await
    }
}
