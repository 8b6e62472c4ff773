// src/tdnet/client.rs
use async_trait::async_trait;
use reqwest::{header, StatusCode};
use std::time::Duration;

use crate::utils::error::FetchError;

/// Origin of the TDnet public disclosure portal.
pub const TDNET_BASE_URL: &str = "https://www.release.tdnet.info";
const TDNET_USER_AGENT: &str = concat!("tdnet_scraper/", env!("CARGO_PKG_VERSION"));
/// Default pause before each request. Pages are fetched one after another.
pub const TDNET_REQUEST_DELAY_MS: u64 = 100;

/// Result of asking for one listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 2xx response with its body.
    Page(String),
    /// 404: the page does not exist, which is how the list ends.
    NotFound,
}

/// Anything that can fetch a listing page by URL.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<FetchOutcome, FetchError>;
}

/// HTTP page source backed by reqwest.
pub struct TdnetClient {
    http: reqwest::Client,
    request_delay: Duration,
}

impl TdnetClient {
    pub fn new(request_delay: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(TDNET_USER_AGENT)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self { http, request_delay })
    }
}

#[async_trait]
impl PageSource for TdnetClient {
    async fn fetch_page(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "text/html,*/*")
            .send()
            .await?; // Propagates reqwest::Error as FetchError::Network

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Received 404 Not Found for URL: {}", url);
            return Ok(FetchOutcome::NotFound);
        }
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for URL: {}", status, url);
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Downloaded {} bytes from {}", body.len(), url);

        Ok(FetchOutcome::Page(body))
    }
}
