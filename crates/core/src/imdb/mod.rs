//! IMDb title URL recognition and id extraction.
//!
//! A title URL looks like `http://www.imdb.com/title/tt1408253/`. The seven digit
//! group after `tt` is the IMDb id; leading zeros are part of the URL but not of
//! the number (`tt0120586` is id `120586`).

use once_cell::sync::Lazy;
use regex_lite::Regex;
use url::Url;

use crate::posterdb::PosterDbError;

const INVALID_IMDB_MOVIE_URL: &str = "The URL is not a valid IMDb movie URL.";

/// Matched against the normalised absolute URL. The id must be followed by the end
/// of the URL or by a path, query or fragment delimiter.
static IMDB_MOVIE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://.*?imdb\.com/title/tt(\d{7})(?:[/?#].*)?$")
        .expect("IMDb movie URL pattern is valid")
});

/// Parse `url` as an absolute URL and return its normalised text.
fn absolute_url(url: &str) -> Option<String> {
    Url::parse(url.trim()).ok().map(String::from)
}

/// Check whether `url` points at an IMDb title page.
pub fn is_imdb_movie_url(url: &str) -> bool {
    absolute_url(url).is_some_and(|absolute| IMDB_MOVIE_URL.is_match(&absolute))
}

/// Extract the IMDb id from a title page URL.
///
/// Fails with [`PosterDbError::InvalidFormat`] when `url` is not an absolute URL
/// or does not point at a title page.
pub fn parse_imdb_movie_url(url: &str) -> Result<i64, PosterDbError> {
    let invalid = || PosterDbError::InvalidFormat {
        param: "imdb_movie_url",
        message: INVALID_IMDB_MOVIE_URL.to_string(),
    };

    let absolute = absolute_url(url).ok_or_else(invalid)?;
    let captures = IMDB_MOVIE_URL.captures(&absolute).ok_or_else(invalid)?;

    // Decimal parse, so "0120586" is 120586.
    captures[1].parse().map_err(|_| invalid())
}

/// Like [`parse_imdb_movie_url`], but reports an absent URL as
/// [`PosterDbError::MissingArgument`].
pub fn extract_imdb_id(url: Option<&str>) -> Result<i64, PosterDbError> {
    let url = url.ok_or(PosterDbError::MissingArgument("imdb_movie_url"))?;
    parse_imdb_movie_url(url)
}
