//! MoviePosterDB lookup handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use posterdb_core::{MovieRef, PosterDbClient, PosterDbError, SearchResult, DEFAULT_IMAGE_WIDTH};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

/// Query parameters shared by every poster endpoint.
///
/// Either `imdb_id` or `url` must be given; `imdb_id` wins when both are. Values
/// arrive as text so that empty fields from a form count as absent and bad numbers
/// answer with a JSON error.
#[derive(Debug, Deserialize)]
pub struct PosterParams {
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
}

impl PosterParams {
    fn movie(&self) -> Result<MovieRef, PosterDbError> {
        if let Some(id) = non_empty(&self.imdb_id) {
            return parse_number(id, "imdb_id").map(MovieRef::ImdbId);
        }

        match non_empty(&self.url) {
            Some(url) => Ok(MovieRef::Url(url.to_string())),
            None => Err(PosterDbError::MissingArgument("imdb_id or url")),
        }
    }

    fn width(&self) -> Result<i32, PosterDbError> {
        match non_empty(&self.width) {
            Some(width) => parse_number(width, "width"),
            None => Ok(DEFAULT_IMAGE_WIDTH),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number<T: FromStr>(value: &str, param: &'static str) -> Result<T, PosterDbError> {
    value.parse().map_err(|_| PosterDbError::InvalidFormat {
        param,
        message: format!("'{}' is not a valid number", value),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ApiUrlResponse {
    pub api_url: String,
}

#[derive(Debug, Serialize)]
pub struct PosterUrlResponse {
    pub poster_url: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(e: PosterDbError) -> ApiError {
    let status = if e.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::BAD_GATEWAY
    };

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn require_client(state: &AppState) -> Result<&PosterDbClient, ApiError> {
    state.posterdb().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "MoviePosterDB client not configured".to_string(),
            }),
        )
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/posters/search
///
/// Search MoviePosterDB for a movie's posters.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PosterParams>,
) -> Result<Json<SearchResult>, ApiError> {
    let client = require_client(&state)?;
    let movie = params.movie().map_err(error_response)?;
    let width = params.width().map_err(error_response)?;

    client
        .search(movie, width)
        .await
        .map(Json)
        .map_err(error_response)
}

/// GET /api/v1/posters/api-url
///
/// Build the signed API URL without calling MoviePosterDB.
pub async fn api_url(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PosterParams>,
) -> Result<Json<ApiUrlResponse>, ApiError> {
    let client = require_client(&state)?;
    let movie = params.movie().map_err(error_response)?;
    let width = params.width().map_err(error_response)?;

    let url = client
        .api_url(movie, width)
        .map_err(error_response)?;

    Ok(Json(ApiUrlResponse {
        api_url: url.to_string(),
    }))
}

/// GET /api/v1/posters/poster
///
/// URL of the first poster, or `null` when the movie has none.
pub async fn poster_url(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PosterParams>,
) -> Result<Json<PosterUrlResponse>, ApiError> {
    let client = require_client(&state)?;
    let movie = params.movie().map_err(error_response)?;
    let width = params.width().map_err(error_response)?;

    let poster_url = client
        .poster_url(movie, width)
        .await
        .map_err(error_response)?;

    Ok(Json(PosterUrlResponse { poster_url }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(imdb_id: Option<&str>, url: Option<&str>, width: Option<&str>) -> PosterParams {
        PosterParams {
            imdb_id: imdb_id.map(str::to_string),
            url: url.map(str::to_string),
            width: width.map(str::to_string),
        }
    }

    #[test]
    fn test_params_prefer_imdb_id() {
        let p = params(Some("2304771"), Some("http://www.imdb.com/title/tt0120586/"), None);
        assert_eq!(p.movie().unwrap(), MovieRef::ImdbId(2304771));
    }

    #[test]
    fn test_params_url_only() {
        let p = params(None, Some("http://www.imdb.com/title/tt0120586/"), None);
        assert_eq!(
            p.movie().unwrap(),
            MovieRef::Url("http://www.imdb.com/title/tt0120586/".to_string())
        );
    }

    #[test]
    fn test_params_empty_imdb_id_falls_back_to_url() {
        let p = params(Some(""), Some("http://www.imdb.com/title/tt0120586/"), Some(""));
        assert_eq!(
            p.movie().unwrap(),
            MovieRef::Url("http://www.imdb.com/title/tt0120586/".to_string())
        );
        assert_eq!(p.width().unwrap(), 300);
    }

    #[test]
    fn test_params_missing_movie() {
        assert!(matches!(
            params(None, None, None).movie(),
            Err(PosterDbError::MissingArgument(_))
        ));
        assert!(matches!(
            params(Some(" "), Some(""), None).movie(),
            Err(PosterDbError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_params_non_numeric_values() {
        assert!(matches!(
            params(Some("tt2304771"), None, None).movie(),
            Err(PosterDbError::InvalidFormat { param: "imdb_id", .. })
        ));
        assert!(matches!(
            params(Some("2304771"), None, Some("abc")).width(),
            Err(PosterDbError::InvalidFormat { param: "width", .. })
        ));
    }

    #[test]
    fn test_params_default_width() {
        assert_eq!(params(Some("1"), None, None).width().unwrap(), 300);
        assert_eq!(params(Some("1"), None, Some("100")).width().unwrap(), 100);
    }

    #[test]
    fn test_error_response_status() {
        let (status, _) = error_response(PosterDbError::MissingArgument("url"));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(PosterDbError::ApiError {
            status: 500,
            message: String::new(),
        });
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
