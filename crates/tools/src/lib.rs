//! SWAIG tools for the Santa gift workshop agent
//!
//! Implements the voice platform's tool-invocation contract: each tool
//! declares a schema, validates its arguments against it, and executes as a
//! pure transformation over the per-call [`GiftSession`]: old state plus
//! input in, response text plus UI events plus new state out.

pub mod gift_tools;
pub mod registry;
pub mod swaig;

pub use gift_tools::{CheckNiceListTool, SearchGiftsTool, SelectGiftTool};
pub use registry::{create_registry, Tool, ToolExecutor, ToolRegistry};
pub use swaig::{
    ErrorCode, InputSchema, PropertySchema, ToolError, ToolReply, ToolSchema, UiEvent,
};
