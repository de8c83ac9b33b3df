//! Embedded data blob and page metadata extraction
//!
//! The channel page carries its renderable content as a JSON literal
//! assigned to `ytInitialData` inside an inline script. The blob is
//! located with a single anchored search over the raw document text,
//! before any HTML-structural parsing.

use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::{Result, ScrapeError};

/// Locates and parses the `ytInitialData` JSON blob
///
/// # Arguments
/// * `html` - Raw HTML of the channel page
///
/// # Returns
/// The parsed data tree
///
/// # Errors
/// Returns `NoDataBlob` if no assignment marker is found or the captured
/// literal is not valid JSON. Nothing can be recovered without the blob,
/// so this is a hard failure for the whole page.
pub fn extract_initial_data(html: &str) -> Result<Value> {
    // Everything between the assignment marker and the closing script tag
    let re = Regex::new(r"(?s)var ytInitialData = (.+?);</script>")
        .map_err(|e| ScrapeError::NoDataBlob(format!("invalid marker pattern: {}", e)))?;

    let captures = re.captures(html).ok_or_else(|| {
        ScrapeError::NoDataBlob("no ytInitialData script found in page".to_string())
    })?;

    let json_str = captures
        .get(1)
        .ok_or_else(|| ScrapeError::NoDataBlob("empty ytInitialData capture".to_string()))?
        .as_str();

    serde_json::from_str(json_str)
        .map_err(|e| ScrapeError::NoDataBlob(format!("ytInitialData is not valid JSON: {}", e)))
}

/// Extracts the channel name from the page's open-graph title
///
/// Best effort: returns `None` when the meta tag is absent or carries no
/// content attribute.
pub fn extract_channel_name(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[property="og:title"]"#).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_initial_data_simple() {
        let html = r#"
        <html><head></head><body>
        <script>var ytInitialData = {"contents": {"key": "value"}};</script>
        </body></html>
        "#;

        let data = extract_initial_data(html).unwrap();
        assert_eq!(data["contents"]["key"], "value");
    }

    #[test]
    fn test_extract_initial_data_spans_lines() {
        let html = "<script>var ytInitialData = {\n\"a\": [1,\n2]\n};</script>";

        let data = extract_initial_data(html).unwrap();
        assert_eq!(data["a"][1], 2);
    }

    #[test]
    fn test_extract_initial_data_no_marker() {
        let html = "<html><body><script>var somethingElse = {};</script></body></html>";

        let result = extract_initial_data(html);
        match result {
            Err(ScrapeError::NoDataBlob(msg)) => assert!(msg.contains("no ytInitialData")),
            _ => panic!("Expected NoDataBlob error"),
        }
    }

    #[test]
    fn test_extract_initial_data_invalid_json() {
        let html = "<script>var ytInitialData = {not json at all;</script>";

        let result = extract_initial_data(html);
        match result {
            Err(ScrapeError::NoDataBlob(msg)) => assert!(msg.contains("not valid JSON")),
            _ => panic!("Expected NoDataBlob error"),
        }
    }

    #[test]
    fn test_extract_initial_data_stops_at_first_boundary() {
        // Non-greedy capture must end at the first closing script tag
        let html = concat!(
            "<script>var ytInitialData = {\"a\": 1};</script>",
            "<script>var other = {\"b\": 2};</script>",
        );

        let data = extract_initial_data(html).unwrap();
        assert_eq!(data["a"], 1);
        assert!(data.get("b").is_none());
    }

    #[test]
    fn test_extract_channel_name() {
        let html = r#"
        <html><head>
        <meta property="og:title" content="Rust Programming">
        </head><body></body></html>
        "#;

        assert_eq!(
            extract_channel_name(html),
            Some("Rust Programming".to_string())
        );
    }

    #[test]
    fn test_extract_channel_name_missing() {
        let html = "<html><head><title>plain title</title></head><body></body></html>";
        assert_eq!(extract_channel_name(html), None);
    }

    #[test]
    fn test_extract_channel_name_no_content_attr() {
        let html = r#"<html><head><meta property="og:title"></head></html>"#;
        assert_eq!(extract_channel_name(html), None);
    }
}
