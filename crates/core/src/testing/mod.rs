//! Testing utilities and mock implementations.
//!
//! This module provides a mock [`HttpFetcher`](crate::posterdb::HttpFetcher), so
//! the client and the server can be exercised without reaching MoviePosterDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use posterdb_core::testing::{fixtures, MockFetcher};
//!
//! let fetcher = Arc::new(MockFetcher::new());
//! fetcher.set_json_response(fixtures::search_result_json("120586", "Gladiator", "2000", 100)).await;
//!
//! // Use in PosterDbClient::new(...)
//! ```

mod mock_fetcher;

pub use mock_fetcher::MockFetcher;

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::posterdb::{Poster, SearchResult};

    /// Poster image URL in the format MoviePosterDB serves.
    pub fn poster_image_url(imdb_id: &str, width: i32) -> String {
        format!(
            "http://api.movieposterdb.com/cache/normal/71/{}/{}_{}.jpg",
            imdb_id, imdb_id, width
        )
    }

    /// API response body for a movie with a single poster.
    pub fn search_result_json(imdb_id: &str, title: &str, year: &str, width: i32) -> Value {
        json!({
            "imdb": imdb_id,
            "title": title,
            "year": year,
            "page": "1",
            "posters": [
                { "image_location": poster_image_url(imdb_id, width) }
            ]
        })
    }

    /// Decoded form of [`search_result_json`].
    pub fn search_result(imdb_id: &str, title: &str, year: &str, width: i32) -> SearchResult {
        SearchResult {
            imdb: Some(imdb_id.to_string()),
            title: Some(title.to_string()),
            year: Some(year.to_string()),
            page: Some("1".to_string()),
            posters: Some(vec![Poster {
                url: Some(poster_image_url(imdb_id, width)),
            }]),
        }
    }

}
