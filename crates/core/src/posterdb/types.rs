//! Types for MoviePosterDB API requests and responses.

use serde::{Deserialize, Serialize};
use url::Url;

/// The MoviePosterDB search result.
///
/// Every field is optional: a movie without poster data comes back with all of
/// them absent, which is a valid outcome rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// IMDb id of the movie, as returned by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    /// Movie title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Year of release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Result page on movieposterdb.com.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Posters at the requested width, in API order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posters: Option<Vec<Poster>>,
}

impl SearchResult {
    /// Whether the API returned at least one poster.
    pub fn has_posters(&self) -> bool {
        self.posters.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// URL of the first poster, if any.
    pub fn first_poster_url(&self) -> Option<&str> {
        self.posters
            .as_ref()
            .and_then(|posters| posters.iter().find_map(|p| p.url.as_deref()))
    }
}

/// A single poster image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Poster {
    /// Absolute URL of the image.
    #[serde(
        rename = "image_location",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

/// Reference to a movie, either by IMDb id or by IMDb title page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieRef {
    ImdbId(i64),
    Url(String),
}

impl From<i64> for MovieRef {
    fn from(id: i64) -> Self {
        Self::ImdbId(id)
    }
}

impl From<i32> for MovieRef {
    fn from(id: i32) -> Self {
        Self::ImdbId(id.into())
    }
}

impl From<u32> for MovieRef {
    fn from(id: u32) -> Self {
        Self::ImdbId(id.into())
    }
}

impl From<&str> for MovieRef {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for MovieRef {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<&Url> for MovieRef {
    fn from(url: &Url) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<Url> for MovieRef {
    fn from(url: Url) -> Self {
        Self::Url(url.into())
    }
}
