use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - MoviePosterDB timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if let Some(posterdb) = &config.posterdb {
        if posterdb.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "posterdb.timeout_secs cannot be 0".to_string(),
            ));
        }
    }

    Ok(())
}
