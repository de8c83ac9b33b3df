//! Main scraper API for channel video listings
//!
//! Provides the high-level API combining the HTTP client and the page
//! parsers. Requests are independent and stateless; the only suspension
//! point is the page fetch, extraction itself is synchronous and pure.

use tracing::warn;

use crate::client::{ChannelClient, ClientConfig};
use crate::error::{Result, ScrapeError};
use crate::parser::extract_channel_videos;
use crate::types::ChannelVideos;

/// High-level scraper for a channel's "Videos" tab
pub struct ChannelScraper {
    client: ChannelClient,
}

impl ChannelScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = ChannelClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = ChannelClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Fetch and extract a channel's video listing
    ///
    /// Performs one page fetch, extracts whatever records the embedded
    /// data tree yields, logs every tolerated anomaly, and truncates the
    /// list to `max_results`.
    ///
    /// # Arguments
    /// * `channel_id` - Channel ID, used verbatim in the page URL
    /// * `max_results` - Maximum number of videos to keep
    ///
    /// # Errors
    /// - `InvalidId` if `channel_id` is empty or whitespace only
    /// - `NotFound` if the channel page returns 404
    /// - `Upstream` for any other non-2xx upstream status
    /// - `Transport` for network-level failures
    /// - `NoDataBlob` if the page has no parseable embedded data
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytchannel_core::Result<()> {
    /// use ytchannel_core::ChannelScraper;
    /// let scraper = ChannelScraper::new()?;
    /// let result = scraper.channel_videos("UC_x5XG1OV2P6uZZ5FSM9Ttw", 20).await?;
    /// for video in &result.videos {
    ///     println!("{}: {}", video.title, video.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn channel_videos(
        &self,
        channel_id: &str,
        max_results: usize,
    ) -> Result<ChannelVideos> {
        let trimmed = channel_id.trim();
        if trimmed.is_empty() {
            return Err(ScrapeError::InvalidId(
                "Channel ID cannot be empty".to_string(),
            ));
        }

        let html = self.client.fetch_channel_page(trimmed).await?;

        let extraction = extract_channel_videos(&html, trimmed)?;
        for diagnostic in &extraction.diagnostics {
            warn!(
                channel_id = %diagnostic.channel_id,
                path = %diagnostic.path,
                "{}",
                diagnostic.message
            );
        }

        let mut channel = extraction.channel;
        channel.videos.truncate(max_results);
        Ok(channel)
    }
}
