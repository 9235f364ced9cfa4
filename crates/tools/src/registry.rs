//! Tool Registry
//!
//! Manages tool registration, discovery, and execution.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use santa_agent_catalog::GiftFinder;
use santa_agent_core::GiftSession;

use crate::swaig::{ToolError, ToolReply, ToolSchema};

/// Default timeout for tool execution
const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 30;

/// One SWAIG tool.
///
/// Execution takes the current session by value and returns the updated one
/// inside the reply, so a tool can never leave half-applied state behind.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as invoked by the platform
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Argument schema advertised to the platform
    fn schema(&self) -> ToolSchema;

    /// Validate arguments against the declared schema
    fn validate(&self, arguments: &Value) -> Result<(), ToolError> {
        self.schema().input_schema.validate(arguments)
    }

    /// Execute the tool for one call turn
    async fn execute(
        &self,
        arguments: Value,
        session: GiftSession,
    ) -> Result<ToolReply, ToolError>;

    /// Per-tool execution timeout
    fn timeout_secs(&self) -> u64 {
        DEFAULT_TOOL_TIMEOUT_SECS
    }
}

/// Tool executor trait
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool by name
    async fn execute(
        &self,
        name: &str,
        arguments: Value,
        session: GiftSession,
    ) -> Result<ToolReply, ToolError>;

    /// List available tools
    fn list_tools(&self) -> Vec<ToolSchema>;

    /// Get tool schema by name
    fn get_tool(&self, name: &str) -> Option<ToolSchema>;
}

/// Tool registry
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for ToolRegistry {
    /// Execute a tool with timeout protection
    async fn execute(
        &self,
        name: &str,
        arguments: Value,
        session: GiftSession,
    ) -> Result<ToolReply, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::not_found(format!("Tool not found: {}", name)))?;

        tool.validate(&arguments)?;

        let timeout_secs = tool.timeout_secs();
        let timeout_duration = Duration::from_secs(timeout_secs);

        tracing::trace!(
            tool = name,
            timeout_secs = timeout_secs,
            "Executing tool with timeout"
        );

        match tokio::time::timeout(timeout_duration, tool.execute(arguments, session)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(ToolError::timeout(name, timeout_secs)),
        }
    }

    fn list_tools(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    fn get_tool(&self, name: &str) -> Option<ToolSchema> {
        self.tools.get(name).map(|t| t.schema())
    }
}

/// Create the registry with the three gift-workflow tools.
pub fn create_registry(finder: Arc<GiftFinder>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(crate::gift_tools::SearchGiftsTool::new(finder));
    registry.register(crate::gift_tools::SelectGiftTool::new());
    registry.register(crate::gift_tools::CheckNiceListTool::new());

    tracing::info!(tool_count = registry.len(), "Created gift tool registry");

    registry
}
