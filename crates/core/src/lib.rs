pub mod config;
pub mod imdb;
pub mod posterdb;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    ServerConfig,
};
pub use imdb::{extract_imdb_id, is_imdb_movie_url, parse_imdb_movie_url};
pub use posterdb::{
    ErrorKind, HttpFetcher, MovieRef, Poster, PosterDbClient, PosterDbConfig, PosterDbError,
    ReqwestFetcher, SearchResult, DEFAULT_BASE_URL, DEFAULT_IMAGE_WIDTH, MAX_IMAGE_WIDTH,
    MIN_IMAGE_WIDTH,
};
