//! Configuration management for the Santa gift workshop agent
//!
//! Supports loading configuration from:
//! - YAML files (config/default.yaml, config/{env}.yaml)
//! - Environment variables (SANTA_AGENT prefix, `__` separator)
//! - Provider-specific environment variables (RAPIDAPI_KEY, MIN_GIFT_PRICE, ...)
//!
//! All components receive their configuration explicitly at construction
//! time; nothing reads process-wide state after startup.

pub mod settings;

pub use settings::{
    load_settings, AgentConfig, GiftConfig, ObservabilityConfig, ProviderConfig,
    RuntimeEnvironment, ServerConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
