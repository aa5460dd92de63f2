use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RouteAuthError;

const RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// The backend's answer to "which paths may this session reach".
///
/// Fetched once per dynamic-mode authorization run; never cached across
/// sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRouteGrant {
    pub home: String,
    pub routes: Vec<String>,
}

/// Fetches the per-session route grant. The orchestrator only depends on
/// this trait, so tests substitute an in-process implementation.
#[async_trait]
pub trait RouteGrantClient: Send + Sync {
    async fn fetch_user_routes(&self) -> Result<ServerRouteGrant, RouteAuthError>;
}

/// HTTP implementation of [`RouteGrantClient`].
///
/// Applies a per-request timeout and retries transient failures a bounded
/// number of times; the route fetch is all-or-nothing for the caller, so a
/// hung or flaky request must not stall authorization indefinitely.
pub struct HttpRouteGrantClient {
    client: reqwest::Client,
    endpoint: Url,
    retries: u32,
}

impl HttpRouteGrantClient {
    pub fn new(endpoint: &str, timeout: Duration, retries: u32) -> Result<Self, RouteAuthError> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            retries,
        })
    }

    /// Builds a client from the application's auth-route configuration.
    pub fn from_config(cfg: &crate::config::AuthRouteConfig) -> Result<Self, RouteAuthError> {
        Self::new(
            &cfg.endpoint,
            Duration::from_secs(cfg.fetch_timeout_secs),
            cfg.fetch_retries,
        )
    }

    async fn fetch_once(&self) -> Result<ServerRouteGrant, RouteAuthError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteAuthError::BackendStatus(status.as_u16()));
        }

        Ok(response.json::<ServerRouteGrant>().await?)
    }
}

#[async_trait]
impl RouteGrantClient for HttpRouteGrantClient {
    async fn fetch_user_routes(&self) -> Result<ServerRouteGrant, RouteAuthError> {
        let attempts = self.retries + 1;
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.fetch_once().await {
                Ok(grant) => return Ok(grant),
                Err(e) => {
                    tracing::warn!(
                        "route grant fetch attempt {}/{} failed: {}",
                        attempt,
                        attempts,
                        e
                    );
                    last_error = Some(e);

                    if attempt < attempts {
                        tokio::time::sleep(RETRY_BACKOFF).await;
                    }
                }
            }
        }

        // attempts >= 1, so at least one error was recorded
        Err(last_error.unwrap_or(RouteAuthError::BackendStatus(0)))
    }
}
