//! Configuration management for FeedbackOS

use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main FeedbackOS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Remote API settings
    pub api: ApiConfig,

    /// Mock backend settings
    pub mock: MockConfig,

    /// Observability settings
    pub observability: ObservabilityConfig,
}

impl FeedbackConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new();

        // Load from file if provided
        if let Some(path) = config_path {
            figment = figment.merge(Yaml::file(path));
        }

        // Override with environment variables (prefixed with FEEDBACKOS_)
        figment = figment.merge(Env::prefixed("FEEDBACKOS_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::LoadError(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "API base URL required".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "API timeout must be greater than 0".to_string(),
            ));
        }

        if self.mock.entries == 0 {
            return Err(ConfigError::ValidationError(
                "Mock backend needs at least one entry".to_string(),
            ));
        }

        if self.mock.history_days == 0 {
            return Err(ConfigError::ValidationError(
                "Mock history window must cover at least one day".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            mock: MockConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the feedback resource namespace
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api/feedback".to_string(),
            timeout_secs: 30,
            user_agent: "feedbackos/1.0".to_string(),
        }
    }
}

/// Mock backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Number of entries to synthesize at startup
    pub entries: usize,

    /// Seed for the mock-data generator; a fixed seed makes runs repeatable
    pub seed: u64,

    /// Trailing window, in days, that synthesized entries are spread over
    pub history_days: u32,

    /// Simulated I/O latency per operation, in milliseconds
    pub latency_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            entries: 50,
            seed: 42,
            history_days: 30,
            latency_ms: 250,
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FeedbackConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:5000/api/feedback");
        assert_eq!(config.mock.entries, 50);
    }

    #[test]
    fn test_validation_rejects_empty_base_url() {
        let mut config = FeedbackConfig::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = FeedbackConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_mock_window() {
        let mut config = FeedbackConfig::default();
        config.mock.history_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults_overridden_by_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("FEEDBACKOS_API__BASE_URL", "http://api.example.test");
            jail.set_env("FEEDBACKOS_API__TIMEOUT_SECS", "5");
            jail.set_env("FEEDBACKOS_API__USER_AGENT", "feedbackos-test");
            jail.set_env("FEEDBACKOS_MOCK__ENTRIES", "10");
            jail.set_env("FEEDBACKOS_MOCK__SEED", "7");
            jail.set_env("FEEDBACKOS_MOCK__HISTORY_DAYS", "14");
            jail.set_env("FEEDBACKOS_MOCK__LATENCY_MS", "0");
            jail.set_env("FEEDBACKOS_OBSERVABILITY__LOG_LEVEL", "debug");

            let config = FeedbackConfig::load(None).expect("load");
            assert_eq!(config.api.base_url, "http://api.example.test");
            assert_eq!(config.api.timeout_secs, 5);
            assert_eq!(config.mock.entries, 10);
            assert_eq!(config.observability.log_level, "debug");
            Ok(())
        });
    }
}
