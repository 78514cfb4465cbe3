//! Mock HTTP fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

use crate::posterdb::{HttpFetcher, PosterDbError};

/// Mock implementation of the HttpFetcher trait.
///
/// Provides controllable behavior for testing:
/// - Return a default body, or a body chosen by the `imdb_code` query parameter
/// - Record requested URLs for assertions
/// - Simulate failures
///
/// Without any configuration every fetch answers `{}`, i.e. a movie without
/// poster data.
///
/// # Example
///
/// ```rust,ignore
/// use posterdb_core::testing::{MockFetcher, fixtures};
///
/// let fetcher = Arc::new(MockFetcher::new());
/// fetcher
///     .add_json_response(2304771, fixtures::search_result_json("2304771", "The Lego Movie", "2014", 300))
///     .await;
///
/// let client = PosterDbClient::new(Some(key), Some(secret), fetcher.clone())?;
/// let result = client.search(2304771, 300).await?;
/// assert_eq!(fetcher.request_count().await, 1);
/// ```
#[derive(Debug)]
pub struct MockFetcher {
    /// Body returned when no per-movie body matches.
    default_body: Arc<RwLock<Vec<u8>>>,
    /// Bodies by `imdb_code` query parameter.
    bodies: Arc<RwLock<HashMap<i64, Vec<u8>>>>,
    /// Requested URLs, in order.
    requests: Arc<RwLock<Vec<Url>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<PosterDbError>>>,
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetcher {
    /// Create a new mock fetcher answering `{}` to every request.
    pub fn new() -> Self {
        Self {
            default_body: Arc::new(RwLock::new(b"{}".to_vec())),
            bodies: Arc::new(RwLock::new(HashMap::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Response Configuration
    // =========================================================================

    /// Set the body returned for requests without a per-movie body.
    pub async fn set_response(&self, body: Vec<u8>) {
        *self.default_body.write().await = body;
    }

    /// Set the default body to a JSON value.
    pub async fn set_json_response(&self, value: serde_json::Value) {
        self.set_response(value.to_string().into_bytes()).await;
    }

    /// Set the body returned for a specific IMDb id.
    pub async fn add_response(&self, imdb_id: i64, body: Vec<u8>) {
        self.bodies.write().await.insert(imdb_id, body);
    }

    /// Set the body for a specific IMDb id to a JSON value.
    pub async fn add_json_response(&self, imdb_id: i64, value: serde_json::Value) {
        self.add_response(imdb_id, value.to_string().into_bytes())
            .await;
    }

    // =========================================================================
    // Request Recording
    // =========================================================================

    /// Get all requested URLs.
    pub async fn requested_urls(&self) -> Vec<Url> {
        self.requests.read().await.clone()
    }

    /// Get the number of fetches performed.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: PosterDbError) {
        *self.next_error.write().await = Some(error);
    }
}

fn imdb_code(url: &Url) -> Option<i64> {
    url.query_pairs()
        .find(|(key, _)| key == "imdb_code")
        .and_then(|(_, value)| value.parse().ok())
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, PosterDbError> {
        self.requests.write().await.push(url.clone());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        if let Some(id) = imdb_code(url) {
            if let Some(body) = self.bodies.read().await.get(&id) {
                return Ok(body.clone());
            }
        }

        Ok(self.default_body.read().await.clone())
    }
}
