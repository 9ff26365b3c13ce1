//! Single-attempt HTTP fetch of the device status page.

use axum::body::Bytes;
use reqwest::redirect;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;

/// Errors building the upstream client at startup.
#[derive(Debug, Error)]
pub enum FetchInitError {
    /// The configured device URL does not parse.
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors from one fetch attempt against the device.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout, or too many redirects.
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The device answered outside the accepted [200, 399] range.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The device answered with an empty body; nothing to extract.
    #[error("upstream returned an empty body")]
    EmptyBody,
}

/// HTTP client bound to the one configured device URL.
pub struct Fetcher {
    client: reqwest::Client,
    url: Url,
}

impl Fetcher {
    /// Build a client honoring the configured timeouts and redirect cap.
    ///
    /// `pool_max_idle_per_host(0)` keeps the upstream connection scoped to
    /// one inbound request; nothing is held across requests.
    pub fn new(config: &UpstreamConfig, user_agent: &str) -> Result<Self, FetchInitError> {
        let url = Url::parse(&config.url)?;
        let client = reqwest::Client::builder()
            .user_agent(user_agent.to_string())
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .redirect(redirect::Policy::limited(config.max_redirects))
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { client, url })
    }

    /// The device URL, echoed back in successful responses.
    pub fn source(&self) -> &str {
        self.url.as_str()
    }

    /// One GET against the device page. No retry on any failure.
    pub async fn fetch(&self) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status().as_u16();
        if !(200..400).contains(&status) {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Request)?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }
        Ok(body)
    }
}
