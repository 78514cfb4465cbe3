//! MoviePosterDB API client.
//!
//! Every call is signed with the API secret (see [`signature`](super::signature))
//! and identifies the movie by its IMDb id. Callers may pass either the id or an
//! IMDb title page URL.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::fetcher::{HttpFetcher, ReqwestFetcher};
use super::signature::sign;
use super::types::{MovieRef, SearchResult};
use super::PosterDbError;
use crate::imdb::parse_imdb_movie_url;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://api.movieposterdb.com";

/// Smallest poster width the API serves.
pub const MIN_IMAGE_WIDTH: i32 = 30;
/// Largest poster width the API serves.
pub const MAX_IMAGE_WIDTH: i32 = 300;
/// Width used when the caller does not ask for one.
pub const DEFAULT_IMAGE_WIDTH: i32 = MAX_IMAGE_WIDTH;

/// MoviePosterDB client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosterDbConfig {
    /// API key (required).
    #[serde(default)]
    pub api_key: Option<String>,
    /// API secret used to sign requests (required).
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Base URL (default: http://api.movieposterdb.com).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for PosterDbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// MoviePosterDB API client.
///
/// Holds the credentials for its whole lifetime and never mutates them, so a
/// single client can be shared across tasks.
pub struct PosterDbClient {
    api_key: String,
    api_secret: String,
    base_url: String,
    fetcher: Arc<dyn HttpFetcher>,
}

impl PosterDbClient {
    /// Create a new client.
    ///
    /// Fails with [`PosterDbError::MissingArgument`] when a credential is absent and
    /// with [`PosterDbError::InvalidFormat`] when it is empty.
    pub fn new(
        api_key: Option<String>,
        api_secret: Option<String>,
        fetcher: Arc<dyn HttpFetcher>,
    ) -> Result<Self, PosterDbError> {
        let api_key = require_non_empty(api_key, "api_key")?;
        let api_secret = require_non_empty(api_secret, "api_secret")?;

        Ok(Self {
            api_key,
            api_secret,
            base_url: DEFAULT_BASE_URL.to_string(),
            fetcher,
        })
    }

    /// Create a client using a `reqwest` fetcher built from `config`.
    pub fn from_config(config: &PosterDbConfig) -> Result<Self, PosterDbError> {
        let fetcher = ReqwestFetcher::new(Duration::from_secs(config.timeout_secs))?;

        let client = Self::new(
            config.api_key.clone(),
            config.api_secret.clone(),
            Arc::new(fetcher),
        )?;

        Ok(match &config.base_url {
            Some(base_url) => client.with_base_url(base_url),
            None => client,
        })
    }

    /// Use a different API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Compute the request signature for a movie.
    pub fn signature(&self, movie: impl Into<MovieRef>) -> Result<String, PosterDbError> {
        let imdb_id = resolve_imdb_id(movie.into())?;
        Ok(sign(&self.api_secret, imdb_id))
    }

    /// Build the signed API URL for a movie's posters at `image_width`.
    pub fn api_url(
        &self,
        movie: impl Into<MovieRef>,
        image_width: i32,
    ) -> Result<Url, PosterDbError> {
        let imdb_id = resolve_imdb_id(movie.into())?;
        check_image_width(image_width)?;

        let url = format!(
            "{}/json?imdb_code={}&api_key={}&secret={}&width={}",
            self.base_url,
            imdb_id,
            urlencoding::encode(&self.api_key),
            sign(&self.api_secret, imdb_id),
            image_width
        );

        debug!("MoviePosterDB API URL built: imdb_id={}, width={}", imdb_id, image_width);

        Url::parse(&url).map_err(|e| PosterDbError::InvalidFormat {
            param: "base_url",
            message: e.to_string(),
        })
    }

    /// Search for a movie's posters.
    ///
    /// A movie unknown to MoviePosterDB yields a [`SearchResult`] with every field
    /// absent.
    pub async fn search(
        &self,
        movie: impl Into<MovieRef>,
        image_width: i32,
    ) -> Result<SearchResult, PosterDbError> {
        let url = self.api_url(movie, image_width)?;

        let body = self.fetcher.fetch(&url).await?;

        let result: SearchResult = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode MoviePosterDB response: {}", e);
            PosterDbError::Decode(e)
        })?;

        debug!(
            "MoviePosterDB search: imdb={:?}, title={:?}, posters={}",
            result.imdb,
            result.title,
            result.posters.as_ref().map_or(0, Vec::len)
        );

        Ok(result)
    }

    /// URL of the first poster for a movie, or `None` when it has no posters.
    pub async fn poster_url(
        &self,
        movie: impl Into<MovieRef>,
        image_width: i32,
    ) -> Result<Option<String>, PosterDbError> {
        let result = self.search(movie, image_width).await?;
        Ok(result.first_poster_url().map(str::to_string))
    }
}

fn require_non_empty(value: Option<String>, param: &'static str) -> Result<String, PosterDbError> {
    let value = value.ok_or(PosterDbError::MissingArgument(param))?;
    if value.is_empty() {
        return Err(PosterDbError::InvalidFormat {
            param,
            message: format!("The {} parameter must not be empty.", param),
        });
    }
    Ok(value)
}

fn resolve_imdb_id(movie: MovieRef) -> Result<i64, PosterDbError> {
    let imdb_id = match movie {
        MovieRef::ImdbId(id) => id,
        MovieRef::Url(url) => parse_imdb_movie_url(&url)?,
    };

    if imdb_id <= 0 {
        return Err(PosterDbError::OutOfRange {
            param: "imdb_id",
            value: imdb_id,
            message: "must be greater than zero".to_string(),
        });
    }

    Ok(imdb_id)
}

fn check_image_width(image_width: i32) -> Result<(), PosterDbError> {
    if !(MIN_IMAGE_WIDTH..=MAX_IMAGE_WIDTH).contains(&image_width) {
        return Err(PosterDbError::OutOfRange {
            param: "image_width",
            value: image_width.into(),
            message: format!(
                "must be in the range [{}-{}]",
                MIN_IMAGE_WIDTH, MAX_IMAGE_WIDTH
            ),
        });
    }
    Ok(())
}
