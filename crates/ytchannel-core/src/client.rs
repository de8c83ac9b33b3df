//! HTTP client for fetching channel listing pages
//!
//! Performs one outbound GET per request with browser-like headers.
//! The target serves a stripped-down page to unbranded clients, so the
//! User-Agent and Accept-Language headers are required.

use std::time::Duration;

use crate::error::{Result, ScrapeError};

const DEFAULT_BASE_URL: &str = "https://www.youtube.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the target site (overridable for tests)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client wrapper for the channel listing page
///
/// A single fetch attempt per request: redirects are followed
/// transparently, but there are no retries and no caching. Each request
/// is independent; the client holds no per-request state.
pub struct ChannelClient {
    client: reqwest::Client,
    base_url: String,
}

impl ChannelClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    reqwest::header::HeaderValue::from_static(ACCEPT_LANGUAGE),
                );
                headers
            })
            .build()
            .map_err(ScrapeError::Transport)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch the raw HTML of a channel's "Videos" tab
    ///
    /// # Arguments
    /// * `channel_id` - Channel ID, substituted verbatim into the URL
    ///
    /// # Returns
    /// The full response body as text
    ///
    /// # Errors
    /// - `NotFound` - Upstream returned 404 for this channel
    /// - `Upstream` - Upstream returned any other non-2xx status
    /// - `Transport` - Network-level failure (timeout, DNS, reset)
    pub async fn fetch_channel_page(&self, channel_id: &str) -> Result<String> {
        let url = format!("{}/channel/{}/videos", self.base_url, channel_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ScrapeError::Transport)?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound(channel_id.to_string()));
        }

        if !status.is_success() {
            return Err(ScrapeError::Upstream {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        response.text().await.map_err(ScrapeError::Transport)
    }
}
