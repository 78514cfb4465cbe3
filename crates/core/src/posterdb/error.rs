use thiserror::Error;

/// Coarse classification of [`PosterDbError`], for callers that only need to know
/// which side of the call went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required value was absent.
    InvalidArgument,
    /// A value was present but malformed.
    Format,
    /// A numeric value was outside its valid domain.
    Range,
    /// The request could not be completed or the API answered with a non-2xx status.
    Transport,
    /// The response body was not the expected JSON.
    Decode,
}

/// Errors that can occur when talking to MoviePosterDB.
#[derive(Debug, Error)]
pub enum PosterDbError {
    /// A required argument was not provided.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An argument was provided but is malformed (empty credential, non-IMDb URL).
    #[error("Invalid {param}: {message}")]
    InvalidFormat {
        param: &'static str,
        message: String,
    },

    /// A numeric argument is outside its accepted range.
    #[error("{param} out of range ({value}): {message}")]
    OutOfRange {
        param: &'static str,
        value: i64,
        message: String,
    },

    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PosterDbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidFormat { .. } => ErrorKind::Format,
            Self::OutOfRange { .. } => ErrorKind::Range,
            Self::Http(_) | Self::ApiError { .. } => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// True for errors raised before any network call was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidArgument | ErrorKind::Format | ErrorKind::Range
        )
    }
}

/// The request URL carries the API key and signature, so it is left out of the
/// message.
impl From<reqwest::Error> for PosterDbError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url().to_string())
    }
}
