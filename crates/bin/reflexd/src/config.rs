//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `reflex.toml` in the working directory. Every field has a
//! sensible default except the delivery category name, which must be set.
//! Environment variables take precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Core management API settings.
    pub core: CoreConfig,
    /// Delivery variant settings.
    pub delivery: DeliveryConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Core management API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Base URL of the management API.
    pub base_url: String,
}

/// Which delivery variant to run and where its configuration lives.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// The delivery variant.
    pub variant: Variant,
    /// Name of the configuration category holding the delivery settings,
    /// fetched from the core at startup.
    pub category: String,
}

/// The two delivery variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Rewrite a JSON configuration item in place.
    #[default]
    ConfigUpdate,
    /// Forward a setpoint command to a south service.
    Setpoint,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `reflex.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("reflex.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("REFLEX_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("REFLEX_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("REFLEX_CORE_URL") {
            self.core.base_url = val;
        }
        if let Ok(val) = std::env::var("REFLEX_CATEGORY") {
            self.delivery.category = val;
        }
        if let Ok(val) = std::env::var("REFLEX_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.delivery.category.is_empty() {
            return Err(ConfigError::Validation(
                "delivery.category must be set".to_string(),
            ));
        }
        if !self.core.base_url.starts_with("http://") && !self.core.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "core.base_url must be an http(s) URL".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3200,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8081".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "reflexd=info,reflex=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3200);
        assert_eq!(config.core.base_url, "http://127.0.0.1:8081");
        assert_eq!(config.delivery.variant, Variant::ConfigUpdate);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [core]
            base_url = 'http://core.local:8081'

            [delivery]
            variant = 'setpoint'
            category = 'pumpNotify'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.core.base_url, "http://core.local:8081");
        assert_eq!(config.delivery.variant, Variant::Setpoint);
        assert_eq!(config.delivery.category, "pumpNotify");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [delivery]
            category = 'pumpNotify'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3200);
        assert_eq!(config.delivery.variant, Variant::ConfigUpdate);
        assert_eq!(config.delivery.category, "pumpNotify");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3200);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.delivery.category = "pumpNotify".to_string();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_missing_category() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_non_http_core_url() {
        let mut config = Config::default();
        config.delivery.category = "pumpNotify".to_string();
        config.core.base_url = "ftp://core".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_accept_valid_config() {
        let mut config = Config::default();
        config.delivery.category = "pumpNotify".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_unknown_variant() {
        let result: Result<Config, _> = toml::from_str(
            "
            [delivery]
            variant = 'carrier-pigeon'
            category = 'x'
        ",
        );
        assert!(result.is_err());
    }
}
