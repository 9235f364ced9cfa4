//! Application State
//!
//! Shared state across all handlers. Everything is wired once at startup:
//! the provider client, the gift finder, and the tool registry all read
//! their configuration at construction time.

use std::sync::Arc;

use santa_agent_catalog::{GiftFinder, RapidApiClient};
use santa_agent_config::Settings;
use santa_agent_tools::{create_registry, ToolRegistry};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration, fixed for the process lifetime
    pub config: Arc<Settings>,
    /// Tool registry
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Settings) -> Self {
        let provider = Arc::new(RapidApiClient::new(&config.provider));
        let finder = Arc::new(GiftFinder::new(provider, &config.gifts));

        Self {
            tools: Arc::new(create_registry(finder)),
            config: Arc::new(config),
        }
    }
}
