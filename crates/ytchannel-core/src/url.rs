//! URL helper functions for youtube.com
//!
//! Provides functions for building channel listing and watch URLs.
//! Channel and video IDs are opaque external identifiers and are
//! substituted verbatim.

const BASE_URL: &str = "https://www.youtube.com";

/// Builds the URL of a channel's "Videos" tab
///
/// # Arguments
/// * `channel_id` - Channel ID (e.g., "UC_x5XG1OV2P6uZZ5FSM9Ttw")
///
/// # Returns
/// Full URL to the channel's video listing page
///
/// # Example
/// ```
/// use ytchannel_core::url::build_channel_videos_url;
/// let url = build_channel_videos_url("UC_x5XG1OV2P6uZZ5FSM9Ttw");
/// assert_eq!(url, "https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw/videos");
/// ```
pub fn build_channel_videos_url(channel_id: &str) -> String {
    format!("{}/channel/{}/videos", BASE_URL, channel_id)
}

/// Builds the canonical watch URL for a video
///
/// # Arguments
/// * `video_id` - Video ID (e.g., "dQw4w9WgXcQ")
///
/// # Returns
/// Full watch URL
///
/// # Example
/// ```
/// use ytchannel_core::url::build_watch_url;
/// let url = build_watch_url("dQw4w9WgXcQ");
/// assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
/// ```
pub fn build_watch_url(video_id: &str) -> String {
    format!("{}/watch?v={}", BASE_URL, video_id)
}
