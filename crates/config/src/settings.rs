//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Product-search provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Gift selection configuration
    #[serde(default)]
    pub gifts: GiftConfig,

    /// Agent persona configuration
    #[serde(default)]
    pub agent: AgentConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Product-search provider (RapidAPI) configuration
///
/// With no API key configured the catalog runs in fallback-only mode, which
/// is the normal state for local development.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider API key; None disables the external provider
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,

    /// Provider API host
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Provider request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    /// Whether provider credentials are configured
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            api_host: default_api_host(),
            timeout_seconds: default_provider_timeout(),
        }
    }
}

/// Gift selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftConfig {
    /// Minimum acceptable gift price
    #[serde(default = "default_min_price")]
    pub min_price: f64,

    /// Maximum acceptable gift price
    #[serde(default = "default_max_price")]
    pub max_price: f64,
}

impl Default for GiftConfig {
    fn default() -> Self {
        Self {
            min_price: default_min_price(),
            max_price: default_max_price(),
        }
    }
}

/// Agent persona configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Display year label for the current Christmas
    #[serde(default = "default_christmas_year")]
    pub christmas_year: String,

    /// Optional callback URL for end-of-call summaries
    #[serde(default = "default_post_prompt_url")]
    pub post_prompt_url: Option<String>,

    /// Directory holding the companion display assets
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            christmas_year: default_christmas_year(),
            post_prompt_url: default_post_prompt_url(),
            web_dir: default_web_dir(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON
    #[serde(default)]
    pub log_json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000)
}

fn default_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_api_key() -> Option<String> {
    std::env::var("RAPIDAPI_KEY").ok().filter(|k| !k.is_empty())
}

fn default_api_host() -> String {
    std::env::var("RAPIDAPI_HOST")
        .unwrap_or_else(|_| "real-time-amazon-data.p.rapidapi.com".to_string())
}

fn default_provider_timeout() -> u64 {
    10
}

fn default_min_price() -> f64 {
    std::env::var("MIN_GIFT_PRICE")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(10.00)
}

fn default_max_price() -> f64 {
    std::env::var("MAX_GIFT_PRICE")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(100.00)
}

fn default_christmas_year() -> String {
    std::env::var("CHRISTMAS_YEAR").unwrap_or_else(|_| "2025".to_string())
}

fn default_post_prompt_url() -> Option<String> {
    std::env::var("POST_PROMPT_URL").ok().filter(|u| !u.is_empty())
}

fn default_web_dir() -> String {
    "web".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }
        if self.gifts.min_price < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "gifts.min_price".to_string(),
                message: "minimum price cannot be negative".to_string(),
            });
        }
        if self.gifts.min_price > self.gifts.max_price {
            return Err(ConfigError::InvalidValue {
                field: "gifts.max_price".to_string(),
                message: format!(
                    "maximum price {} is below minimum price {}",
                    self.gifts.max_price, self.gifts.min_price
                ),
            });
        }
        if self.provider.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "provider.timeout_seconds".to_string(),
                message: "provider timeout must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Load settings from config files and environment.
///
/// Priority: env vars > config/{env}.yaml > config/default.yaml > defaults.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder().add_source(File::with_name("config/default").required(false));

    if let Some(env) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env)).required(false));
    }

    let config = builder
        .add_source(Environment::with_prefix("SANTA_AGENT").separator("__"))
        .build()?;

    let settings: Settings = config.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}
