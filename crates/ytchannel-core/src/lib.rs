//! Channel Video Listing Scraper Core Library
//!
//! Provides an async API for fetching a YouTube channel's public "Videos"
//! tab and extracting its video listing without an API key.
//!
//! # Overview
//!
//! This crate is a translation layer between an unstable, semi-structured
//! page format and a stable typed result:
//! - HTTP client with browser-like headers for fetching the listing page
//! - Extractor for the embedded `ytInitialData` JSON blob
//! - Defensive walk over the loosely-typed data tree that tolerates
//!   partial structural mismatches
//!
//! # Example
//!
//! ```no_run
//! use ytchannel_core::{ChannelScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = ChannelScraper::new()?;
//!
//!     let result = scraper.channel_videos("UC_x5XG1OV2P6uZZ5FSM9Ttw", 20).await?;
//!
//!     println!("{}", result.channel_name.as_deref().unwrap_or("unknown channel"));
//!     for video in &result.videos {
//!         println!("{} [{}] {}", video.title, video.duration, video.url);
//!     }
//!     if let Some(token) = &result.continuation_token {
//!         println!("next page cursor: {}", token);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure policy
//!
//! Failures that prevent any meaningful output (fetch failure, missing
//! data blob) abort the whole call. Failures local to one optional field
//! or one grid item degrade gracefully: the item is dropped, a diagnostic
//! is recorded, and extraction continues.

mod client;
pub mod diagnostics;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ChannelClient, ClientConfig};

// Re-export error types
pub use error::{Result, ScrapeError};

// Re-export parser entry points
pub use parser::{Extraction, extract_channel_videos, extract_initial_data};

// Re-export main scraper API
pub use scraper::ChannelScraper;

// Re-export data types
pub use types::{ChannelVideos, VideoRecord};

// Re-export diagnostics types
pub use diagnostics::{Diagnostic, DiagnosticSink};
