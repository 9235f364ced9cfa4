//! SWAIG tool-invocation contract types
//!
//! Schemas describe each tool's arguments the way the platform's LLM
//! runtime expects them (JSON-Schema-style objects with required fields and
//! numeric bounds). [`UiEvent`]s are the tagged payloads forwarded to the
//! companion display; [`ToolReply`] is the (speech, events, new state)
//! triple every tool produces.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use santa_agent_core::{GiftCandidate, GiftSession};

/// Tool schema advertised to the platform
#[derive(Debug, Clone, Serialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

/// JSON-Schema-style object schema for tool arguments
#[derive(Debug, Clone, Serialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    schema_type: &'static str,
    properties: BTreeMap<String, PropertySchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,
}

impl InputSchema {
    /// Start an object schema
    pub fn object() -> Self {
        Self {
            schema_type: "object",
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Add a property, marking it required when asked
    pub fn property(mut self, name: &str, schema: PropertySchema, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    /// Validate arguments against this schema: required-ness and basic
    /// types. Numeric bounds are advisory for the platform's LLM and are not
    /// enforced here; out-of-range values reach the tool, which answers with
    /// corrective speech instead of failing the turn.
    pub fn validate(&self, arguments: &Value) -> Result<(), ToolError> {
        let object = arguments
            .as_object()
            .ok_or_else(|| ToolError::invalid_params("arguments must be an object"))?;

        for name in &self.required {
            if !object.contains_key(name) {
                return Err(ToolError::invalid_params(format!("{} is required", name)));
            }
        }

        for (name, value) in object {
            let Some(schema) = self.properties.get(name) else {
                continue; // unknown fields are ignored, not rejected
            };
            schema.check(name, value)?;
        }

        Ok(())
    }
}

/// Schema for one argument property
#[derive(Debug, Clone, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    kind: &'static str,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum: Option<i64>,
}

impl PropertySchema {
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            kind: "string",
            description: description.into(),
            minimum: None,
            maximum: None,
        }
    }

    pub fn integer(description: impl Into<String>) -> Self {
        Self {
            kind: "integer",
            description: description.into(),
            minimum: None,
            maximum: None,
        }
    }

    /// Advisory bounds advertised to the platform. Not checked locally.
    pub fn with_range(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    fn check(&self, name: &str, value: &Value) -> Result<(), ToolError> {
        match self.kind {
            "string" => {
                if !value.is_string() {
                    return Err(ToolError::invalid_params(format!(
                        "{} must be a string",
                        name
                    )));
                }
            }
            "integer" => {
                if value.as_i64().is_none() {
                    return Err(ToolError::invalid_params(format!(
                        "{} must be an integer",
                        name
                    )));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Tool execution error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    InvalidParams,
    Timeout,
    Internal,
}

/// Tool execution error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ToolError {
    pub code: ErrorCode,
    pub message: String,
}

impl ToolError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidParams,
            message: message.into(),
        }
    }

    pub fn timeout(name: &str, secs: u64) -> Self {
        Self {
            code: ErrorCode::Timeout,
            message: format!("tool {} timed out after {}s", name, secs),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }
}

/// Structured event forwarded to the companion display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Search started; lets the display reset before results land
    Searching { query: String },
    /// Search produced nothing usable
    SearchFailed { query: String },
    /// New result set for the display carousel
    GiftsFound {
        gifts: Vec<GiftCandidate>,
        query: String,
    },
    /// A gift was confirmed
    GiftSelected { gift: GiftCandidate },
    /// Nice-list animation trigger
    NiceListChecked { name: String, status: String },
}

/// What a tool turn produces: speech for the LLM, events for the display,
/// and the updated session state for the platform to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolReply {
    pub response: String,
    pub events: Vec<UiEvent>,
    pub session: GiftSession,
}

impl ToolReply {
    pub fn new(response: impl Into<String>, session: GiftSession) -> Self {
        Self {
            response: response.into(),
            events: Vec::new(),
            session,
        }
    }

    pub fn with_event(mut self, event: UiEvent) -> Self {
        self.events.push(event);
        self
    }
}
