//! MoviePosterDB integration.
//!
//! This module provides the signed-request client for the MoviePosterDB poster
//! lookup API, together with the transport abstraction it fetches through.

mod client;
mod error;
mod fetcher;
mod signature;
mod types;

pub use client::{
    PosterDbClient, PosterDbConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_WIDTH, MAX_IMAGE_WIDTH,
    MIN_IMAGE_WIDTH,
};
pub use error::{ErrorKind, PosterDbError};
pub use fetcher::{HttpFetcher, ReqwestFetcher};
pub use types::*;
