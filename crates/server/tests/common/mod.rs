//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server with a
//! mock HTTP fetcher injected, so the poster endpoints can be exercised without
//! reaching MoviePosterDB.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use posterdb_core::{testing::MockFetcher, Config, PosterDbClient, PosterDbConfig, ServerConfig};
use posterdb_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use posterdb_core::testing::fixtures;

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";

/// Test fixture for E2E testing with a mock fetcher.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new();
///     fixture.fetcher.set_json_response(json!({ "title": "Gladiator" })).await;
///
///     let response = fixture.get("/api/v1/posters/search?imdb_id=120586").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock fetcher - configure MoviePosterDB responses
    pub fetcher: Arc<MockFetcher>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with a configured MoviePosterDB client.
    pub fn new() -> Self {
        let fetcher = Arc::new(MockFetcher::new());
        let client = PosterDbClient::new(
            Some(API_KEY.to_string()),
            Some(API_SECRET.to_string()),
            Arc::clone(&fetcher) as Arc<dyn posterdb_core::HttpFetcher>,
        )
        .expect("Failed to create client");

        let config = Config {
            server: ServerConfig::default(),
            posterdb: Some(PosterDbConfig {
                api_key: Some(API_KEY.to_string()),
                api_secret: Some(API_SECRET.to_string()),
                ..Default::default()
            }),
        };

        Self::build(config, Some(Arc::new(client)), fetcher)
    }

    /// Create a fixture without MoviePosterDB credentials.
    pub fn without_posterdb() -> Self {
        Self::build(Config::default(), None, Arc::new(MockFetcher::new()))
    }

    fn build(
        config: Config,
        client: Option<Arc<PosterDbClient>>,
        fetcher: Arc<MockFetcher>,
    ) -> Self {
        let state = Arc::new(AppState::new(config, client));
        let router = create_router(state);

        Self { router, fetcher }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
