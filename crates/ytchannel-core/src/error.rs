//! Error types for the channel scraper
//!
//! Terminal failures only: anything that still allows a partial result
//! (a malformed grid item, a missing channel name) is reported through
//! [`crate::diagnostics::DiagnosticSink`] instead of this enum.

use thiserror::Error;

/// Error type for all channel scraping operations
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Network-level failure (timeout, DNS, connection reset)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Channel page returned 404
    #[error("Channel with ID {0} not found")]
    NotFound(String),

    /// Upstream returned a non-404 non-2xx status
    #[error("Failed to fetch channel page: upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Page fetched but the embedded data script could not be found or parsed
    #[error("Failed to extract video data from page: {0}")]
    NoDataBlob(String),

    /// Invalid channel ID provided
    #[error("Invalid channel ID: {0}")]
    InvalidId(String),
}

/// Result type alias for channel scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;
