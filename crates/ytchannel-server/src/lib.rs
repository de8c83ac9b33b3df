//! HTTP serving shell for the channel scraper
//!
//! Thin axum application over [`ytchannel_core::ChannelScraper`]. The
//! shell owns routing, query validation and error-to-status mapping; all
//! scraping behavior lives in the core crate.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use ytchannel_core::ChannelScraper;

mod handlers;

pub use handlers::ApiError;

/// Shared application state
///
/// The scraper is stateless across requests, so one instance serves all
/// concurrent requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<ChannelScraper>,
}

/// Builds the application router
pub fn app(scraper: Arc<ChannelScraper>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/api/channel/{channel_id}/videos",
            get(handlers::get_channel_videos),
        )
        .with_state(AppState { scraper })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use ytchannel_core::ClientConfig;

    fn test_app(base_url: &str) -> Router {
        let scraper = ChannelScraper::with_config(ClientConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
        .expect("scraper should build");
        app(Arc::new(scraper))
    }

    fn default_app() -> Router {
        app(Arc::new(ChannelScraper::new().expect("scraper should build")))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    fn channel_page() -> String {
        let data = json!({
            "contents": {"twoColumnBrowseResultsRenderer": {"tabs": [
                {"tabRenderer": {
                    "title": "Videos",
                    "content": {"richGridRenderer": {"contents": [
                        {"richItemRenderer": {"content": {"videoRenderer": {
                            "videoId": "abc",
                            "title": {"runs": [{"text": "First"}]},
                            "viewCountText": {"simpleText": "1 view"},
                        }}}},
                        {"continuationItemRenderer": {"continuationEndpoint": {
                            "continuationCommand": {"token": "NEXT"}
                        }}},
                    ]}}
                }},
            ]}}
        });
        format!(
            concat!(
                "<html><head><meta property=\"og:title\" content=\"Mock Channel\"></head>",
                "<body><script>var ytInitialData = {};</script></body></html>",
            ),
            data
        )
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let response = default_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "YouTube Channel Scraper API");
    }

    #[tokio::test]
    async fn test_max_results_zero_rejected_before_fetch() {
        // No mock upstream mounted: validation must fail before any fetch
        let response = default_app()
            .oneshot(
                Request::builder()
                    .uri("/api/channel/UC123/videos?max_results=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .contains("between 1 and 50")
        );
    }

    #[tokio::test]
    async fn test_max_results_over_fifty_rejected() {
        let response = default_app()
            .oneshot(
                Request::builder()
                    .uri("/api/channel/UC123/videos?max_results=51")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_max_results_non_numeric_rejected() {
        let response = default_app()
            .oneshot(
                Request::builder()
                    .uri("/api/channel/UC123/videos?max_results=lots")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_channel_videos_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channel/UC123/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string(channel_page()))
            .mount(&server)
            .await;

        let response = test_app(&server.uri())
            .oneshot(
                Request::builder()
                    .uri("/api/channel/UC123/videos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["channel_id"], "UC123");
        assert_eq!(body["channel_name"], "Mock Channel");
        assert_eq!(body["videos"][0]["video_id"], "abc");
        assert_eq!(body["videos"][0]["view_count"], "1 view");
        assert_eq!(body["continuation_token"], "NEXT");
    }

    #[tokio::test]
    async fn test_channel_not_found_maps_to_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channel/UCgone/videos"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let response = test_app(&server.uri())
            .oneshot(
                Request::builder()
                    .uri("/api/channel/UCgone/videos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("UCgone"));
    }

    #[tokio::test]
    async fn test_upstream_error_passes_status_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channel/UC123/videos"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let response = test_app(&server.uri())
            .oneshot(
                Request::builder()
                    .uri("/api/channel/UC123/videos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_missing_blob_maps_to_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channel/UC123/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>bare page</html>"))
            .mount(&server)
            .await;

        let response = test_app(&server.uri())
            .oneshot(
                Request::builder()
                    .uri("/api/channel/UC123/videos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .contains("Failed to extract video data")
        );
    }
}
