use std::sync::Arc;
use posterdb_core::{Config, PosterDbClient, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    posterdb: Option<Arc<PosterDbClient>>,
}

impl AppState {
    pub fn new(config: Config, posterdb: Option<Arc<PosterDbClient>>) -> Self {
        Self { config, posterdb }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    /// MoviePosterDB client, if credentials were configured.
    pub fn posterdb(&self) -> Option<&PosterDbClient> {
        self.posterdb.as_deref()
    }
}
