//! Application configuration

use serde::Deserialize;

use crate::domain::DomainError;

const DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Allowed cross-origin callers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Production origins; each must be HTTPS.
    pub allowed_origins: Vec<String>,
    /// Adds the localhost development origins. Off in production.
    pub allow_dev_origins: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Chat model used for generation.
    pub model: String,
    /// Output token budget per generation call.
    pub max_output_tokens: u32,
    /// Override for the provider base URL (e.g. a proxy).
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage backend: `postgres` or `memory`.
    pub backend: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allow_dev_origins: true,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_output_tokens: 1000,
            base_url: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "postgres".to_string(),
        }
    }
}

impl CorsConfig {
    /// The effective origin list: configured origins plus the development
    /// origins when enabled.
    pub fn origins(&self) -> Vec<String> {
        let mut origins = self.allowed_origins.clone();
        if self.allow_dev_origins {
            origins.extend(DEV_ORIGINS.iter().map(|o| o.to_string()));
        }
        origins
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Startup validation, before any request is served.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.cors.allowed_origins.is_empty() && !self.cors.allow_dev_origins {
            return Err(DomainError::configuration(
                "At least one CORS origin must be configured when development origins are disabled",
            ));
        }

        // Dev origins are exempt from the HTTPS rule; everything configured
        // explicitly is not.
        for origin in &self.cors.allowed_origins {
            if !origin.starts_with("https://") {
                return Err(DomainError::configuration(format!(
                    "CORS origin must use HTTPS: {}",
                    origin
                )));
            }
        }

        if crate::infrastructure::storage::StorageBackend::parse(&self.storage.backend).is_none() {
            return Err(DomainError::configuration(format!(
                "Unknown storage backend: {}",
                self.storage.backend
            )));
        }

        if self.llm.model.is_empty() {
            return Err(DomainError::configuration("LLM model must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.max_output_tokens, 1000);
        assert_eq!(config.storage.backend, "postgres");
        assert!(config.cors.allow_dev_origins);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_http_origin() {
        let mut config = AppConfig::default();
        config.cors.allowed_origins = vec!["http://app.example.com".to_string()];

        assert!(matches!(
            config.validate(),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_origins_without_dev() {
        let mut config = AppConfig::default();
        config.cors.allow_dev_origins = false;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accepts_https_origins_without_dev() {
        let mut config = AppConfig::default();
        config.cors.allow_dev_origins = false;
        config.cors.allowed_origins = vec!["https://app.example.com".to_string()];

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_storage_backend() {
        let mut config = AppConfig::default();
        config.storage.backend = "mongodb".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dev_origins_are_included() {
        let config = AppConfig::default();
        let origins = config.cors.origins();
        assert!(origins.contains(&"http://localhost:3000".to_string()));
        assert!(origins.contains(&"http://127.0.0.1:3000".to_string()));
    }
}
