//! Core data types for the channel scraper
//!
//! Contains the response structures assembled from a channel's video grid.

use serde::{Deserialize, Serialize};

/// One video row extracted from a channel's "Videos" tab
///
/// `published_at`, `view_count` and `duration` are free-text exactly as the
/// page presents them ("3 days ago", "12K views", "10:32") and default to
/// the empty string when the source omits them (livestreams have no
/// duration, for example). `thumbnail_url` is genuinely nullable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video ID, always non-empty (records without one are dropped)
    pub video_id: String,

    /// Video title, "Untitled Video" when the source has none
    pub title: String,

    /// Highest-resolution thumbnail URL, if any were listed
    pub thumbnail_url: Option<String>,

    /// Publish time as presented by the page (e.g. "3 days ago")
    pub published_at: String,

    /// View count as presented by the page (e.g. "12,345 views")
    pub view_count: String,

    /// Duration as presented by the page (e.g. "10:32")
    pub duration: String,

    /// Canonical watch URL, always non-empty
    pub url: String,
}

/// Full result for one channel-videos request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelVideos {
    /// Channel ID, echoed from the request
    pub channel_id: String,

    /// Channel name from page metadata; best effort, may be absent
    pub channel_name: Option<String>,

    /// Videos in source page order, truncated to the caller's limit
    pub videos: Vec<VideoRecord>,

    /// Opaque pagination cursor, if the page carried one
    pub continuation_token: Option<String>,
}
