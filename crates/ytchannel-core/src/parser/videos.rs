//! Video grid extraction from the initial-data tree
//!
//! The tree shape is externally controlled and versioned; every hop is an
//! optional-chained lookup that yields an absent value on a missing key or
//! type mismatch. Failures above the item level degrade to an empty
//! result, failures inside one item drop only that item.

use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::parser::initial_data::{extract_channel_name, extract_initial_data};
use crate::types::{ChannelVideos, VideoRecord};
use crate::url::build_watch_url;

const VIDEOS_TAB_TITLE: &str = "Videos";
const UNTITLED_VIDEO: &str = "Untitled Video";

/// Extraction output: the assembled result plus every tolerated anomaly
#[derive(Debug)]
pub struct Extraction {
    /// Assembled channel result, videos in source page order
    pub channel: ChannelVideos,
    /// Non-fatal anomalies observed along the way
    pub diagnostics: Vec<Diagnostic>,
}

/// Extracts the full channel video listing from a fetched page
///
/// # Arguments
/// * `html` - Raw HTML of the channel's "Videos" tab page
/// * `channel_id` - Channel ID, echoed into the result and diagnostics
///
/// # Returns
/// An [`Extraction`] with the untruncated video list and an optional
/// continuation token
///
/// # Errors
/// Returns `NoDataBlob` when the embedded data script is missing or
/// unparseable. A page whose blob parses but holds no recognizable video
/// grid is NOT an error: it yields an empty list and a diagnostic.
pub fn extract_channel_videos(html: &str, channel_id: &str) -> Result<Extraction> {
    let data = extract_initial_data(html)?;
    let mut sink = DiagnosticSink::new(channel_id);

    let channel_name = extract_channel_name(html);
    if channel_name.is_none() {
        sink.warn(
            "meta[property=og:title]",
            "channel name not found in page metadata",
        );
    }

    let (videos, continuation_token) = collect_grid(&data, &mut sink);

    Ok(Extraction {
        channel: ChannelVideos {
            channel_id: channel_id.to_string(),
            channel_name,
            videos,
            continuation_token,
        },
        diagnostics: sink.into_records(),
    })
}

/// Finds the tab entry whose declared title is "Videos"
fn videos_tab(data: &Value) -> Option<&Value> {
    data.get("contents")?
        .get("twoColumnBrowseResultsRenderer")?
        .get("tabs")?
        .as_array()?
        .iter()
        .find(|tab| {
            tab.get("tabRenderer")
                .and_then(|r| r.get("title"))
                .and_then(Value::as_str)
                == Some(VIDEOS_TAB_TITLE)
        })
}

/// Navigates from a tab entry to its grid item list
fn grid_items(tab: &Value) -> Option<&Vec<Value>> {
    tab.get("tabRenderer")?
        .get("content")?
        .get("richGridRenderer")?
        .get("contents")?
        .as_array()
}

/// Walks the grid items in document order
///
/// Returns the extracted records and the page-level continuation token.
/// At most one continuation marker is expected per page; if several
/// appear, the last one wins.
fn collect_grid(data: &Value, sink: &mut DiagnosticSink) -> (Vec<VideoRecord>, Option<String>) {
    let Some(tab) = videos_tab(data) else {
        sink.warn(
            "contents.twoColumnBrowseResultsRenderer.tabs",
            "no tab titled \"Videos\" in page data",
        );
        return (Vec::new(), None);
    };

    let Some(items) = grid_items(tab) else {
        sink.warn(
            "tabRenderer.content.richGridRenderer.contents",
            "Videos tab has no recognizable video grid",
        );
        return (Vec::new(), None);
    };

    let mut videos = Vec::new();
    let mut continuation_token = None;

    for (index, item) in items.iter().enumerate() {
        let renderer = item
            .get("richItemRenderer")
            .and_then(|r| r.get("content"))
            .and_then(|c| c.get("videoRenderer"));

        if let Some(renderer) = renderer {
            // An empty renderer object is a placeholder, not a malformed item
            let is_placeholder = renderer.as_object().is_some_and(|o| o.is_empty());
            if !is_placeholder {
                match parse_video_item(renderer) {
                    Some(record) => videos.push(record),
                    None => sink.warn(
                        format!("richGridRenderer.contents[{}].videoRenderer", index),
                        "item dropped: missing or malformed videoId",
                    ),
                }
            }
        }

        if let Some(token) = item
            .get("continuationItemRenderer")
            .and_then(|r| r.get("continuationEndpoint"))
            .and_then(|e| e.get("continuationCommand"))
            .and_then(|c| c.get("token"))
            .and_then(Value::as_str)
        {
            continuation_token = Some(token.to_string());
        }
    }

    (videos, continuation_token)
}

/// Extracts one video record from a renderer node
///
/// Returns `None` when the required `videoId` is missing, empty, or not a
/// string; every other field falls back to its documented default.
fn parse_video_item(renderer: &Value) -> Option<VideoRecord> {
    let video_id = renderer.get("videoId")?.as_str()?;
    if video_id.is_empty() {
        return None;
    }

    let title = renderer
        .get("title")
        .and_then(|t| t.get("runs"))
        .and_then(|r| r.get(0))
        .and_then(|r| r.get("text"))
        .and_then(Value::as_str)
        .unwrap_or(UNTITLED_VIDEO)
        .to_string();

    // Thumbnail candidates are listed in ascending resolution order
    let thumbnail_url = renderer
        .get("thumbnail")
        .and_then(|t| t.get("thumbnails"))
        .and_then(Value::as_array)
        .and_then(|thumbs| thumbs.last())
        .and_then(|t| t.get("url"))
        .and_then(Value::as_str)
        .map(|url| url.to_string());

    let published_at = renderer
        .get("publishedTimeText")
        .and_then(|t| t.get("simpleText"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let view_count = extract_view_count(renderer);

    let duration = renderer
        .get("lengthText")
        .and_then(|t| t.get("simpleText"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let url = build_watch_url(video_id);

    Some(VideoRecord {
        video_id: video_id.to_string(),
        title,
        thumbnail_url,
        published_at,
        view_count,
        duration,
        url,
    })
}

/// Extracts the view-count text from either of its two representations
///
/// Plain `simpleText` is preferred; a `runs` list contributes the text of
/// its first run; anything else yields the empty string.
fn extract_view_count(renderer: &Value) -> String {
    let Some(view_count) = renderer.get("viewCountText") else {
        return String::new();
    };

    if let Some(text) = view_count.get("simpleText").and_then(Value::as_str) {
        return text.to_string();
    }

    view_count
        .get("runs")
        .and_then(|r| r.get(0))
        .and_then(|r| r.get("text"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
