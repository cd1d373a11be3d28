//! Configuration loading for the cinerec TUI.
//!
//! A config file is optional. Without one the client talks to the backend
//! URL baked in at build time (`CINEREC_API_URL`).

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Backend base URL fixed at build time.
pub const BUILD_API_URL: &str = match option_env!("CINEREC_API_URL") {
    Some(url) => url,
    None => "https://movie-recommendation-backend-5mbn.onrender.com",
};

/// Client timeout for the recommendation request.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 45_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Full history URL. Overrides the `{api_base_url}history` default.
    #[serde(default)]
    pub history_url: Option<String>,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "marquee".to_string(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            history_url: None,
            request_timeout_ms: default_request_timeout_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            log_path: default_log_path(),
            log_filter: default_log_filter(),
            theme: ThemeConfig::default(),
        }
    }
}

fn default_api_base_url() -> String {
    BUILD_API_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_path() -> PathBuf {
    PathBuf::from("cinerec.log")
}

fn default_log_filter() -> String {
    "cinerec_tui=info,cinerec=info,warn".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    /// Load from `--config <path>` or `CINEREC_CONFIG`, else use defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path_from_args().or_else(config_path_from_env) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("api_base_url", &self.api_base_url)?;
        if let Some(history_url) = &self.history_url {
            validate_url("history_url", history_url)?;
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if let Err(err) = tracing_subscriber::EnvFilter::try_new(&self.log_filter) {
            return Err(ConfigError::InvalidValue {
                field: "log_filter",
                reason: err.to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "marquee" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'marquee' is supported".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must start with http:// or https://".to_string(),
        });
    }
    Ok(())
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("CINEREC_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TuiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout_ms, 45_000);
        assert_eq!(config.api_base_url, BUILD_API_URL);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TuiConfig = toml::from_str("api_base_url = \"http://localhost:8000\"").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.history_url.is_none());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = toml::from_str::<TuiConfig>("retries = 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = TuiConfig::default();
        config.api_base_url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "api_base_url", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = TuiConfig::default();
        config.request_timeout_ms = 0;
        assert!(config.validate().is_err());
    }
}
