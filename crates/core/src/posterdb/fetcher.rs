//! HTTP transport used by [`PosterDbClient`](super::PosterDbClient).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::PosterDbError;

/// Fetches the raw body behind a URL.
///
/// Implementations must map non-2xx responses to [`PosterDbError::ApiError`] and
/// connection failures to [`PosterDbError::Http`]. No retries.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, PosterDbError>;
}

/// [`HttpFetcher`] backed by a `reqwest` client.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Create a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, PosterDbError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, PosterDbError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("MoviePosterDB returned status {}", status.as_u16());
            return Err(PosterDbError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.bytes().await?;
        debug!("MoviePosterDB response: {} bytes", body.len());

        Ok(body.to_vec())
    }
}
