use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::posterdb::PosterDbConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// MoviePosterDB credentials. Poster endpoints are unavailable without them.
    #[serde(default)]
    pub posterdb: Option<PosterDbConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posterdb: Option<SanitizedPosterDbConfig>,
}

/// Sanitized MoviePosterDB config (key and secret hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedPosterDbConfig {
    pub api_key_configured: bool,
    pub api_secret_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

fn is_configured(value: &Option<String>) -> bool {
    value.as_ref().is_some_and(|v| !v.is_empty())
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            posterdb: config.posterdb.as_ref().map(|p| SanitizedPosterDbConfig {
                api_key_configured: is_configured(&p.api_key),
                api_secret_configured: is_configured(&p.api_secret),
                base_url: p.base_url.clone(),
                timeout_secs: p.timeout_secs,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_valid_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000

[posterdb]
api_key = "test-api-key"
api_secret = "test-api-secret"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");

        let posterdb = config.posterdb.as_ref().unwrap();
        assert_eq!(posterdb.api_key.as_deref(), Some("test-api-key"));
        assert_eq!(posterdb.api_secret.as_deref(), Some("test-api-secret"));
        assert!(posterdb.base_url.is_none());
        assert_eq!(posterdb.timeout_secs, 30); // default
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert!(config.posterdb.is_none());
    }

    #[test]
    fn test_deserialize_posterdb_overrides() {
        let toml = r#"
[posterdb]
api_key = "k"
api_secret = "s"
base_url = "http://localhost:9999"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let posterdb = config.posterdb.unwrap();
        assert_eq!(posterdb.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(posterdb.timeout_secs, 5);
    }

    #[test]
    fn test_deserialize_invalid_port_fails() {
        let toml = r#"
[server]
port = "not a port"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_sanitized_config_without_posterdb() {
        let config = Config::default();
        let sanitized = SanitizedConfig::from(&config);
        assert_eq!(sanitized.server.port, 8080);
        assert!(sanitized.posterdb.is_none());
    }

    #[test]
    fn test_sanitized_config_hides_secrets() {
        let config = Config {
            server: ServerConfig::default(),
            posterdb: Some(PosterDbConfig {
                api_key: Some("secret-key".to_string()),
                api_secret: Some(String::new()),
                base_url: None,
                timeout_secs: 60,
            }),
        };

        let sanitized = SanitizedConfig::from(&config);
        let posterdb = sanitized.posterdb.as_ref().unwrap();
        assert!(posterdb.api_key_configured);
        assert!(!posterdb.api_secret_configured);
        assert_eq!(posterdb.timeout_secs, 60);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("secret-key"));
    }
}
