//! Nice List Tool
//!
//! Every child is on the nice list. The only variation is which of the
//! canned confirmations Santa reads out.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use santa_agent_core::GiftSession;

use crate::registry::Tool;
use crate::swaig::{InputSchema, PropertySchema, ToolError, ToolReply, ToolSchema, UiEvent};

const TOOL_NAME: &str = "check_nice_list";

const FALLBACK_NAME: &str = "dear child";

const CONFIRMATIONS: [&str; 4] = [
    "Let me check my big magical book here at the North Pole... *pages rustling*... \
     Oh yes! I found it! {name} is definitely on the NICE LIST! You've been wonderful \
     this year!",
    "Ho ho ho! {name}! Let me see... *checking list twice*... YES! You're on my nice \
     list! I can see all the kind things you've done this year!",
    "My special list says {name} has been absolutely wonderful! The elves have been \
     telling me such good things about you! Keep up the fantastic work!",
    "The elves are so excited! They just told me that {name} is on the nice list! \
     They've been watching and you've been so good!",
];

/// Nice list lookup tool
pub struct CheckNiceListTool {
    rng: Mutex<SmallRng>,
}

impl CheckNiceListTool {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }

    /// Fixed-seed constructor for deterministic tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl Default for CheckNiceListTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CheckNiceListTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Check whether a child is on Santa's nice list"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object().property(
                "name",
                PropertySchema::string("The child's first name"),
                false,
            ),
        }
    }

    async fn execute(
        &self,
        arguments: Value,
        mut session: GiftSession,
    ) -> Result<ToolReply, ToolError> {
        let name = arguments
            .get("name")
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(FALLBACK_NAME)
            .to_string();

        let index = self.rng.lock().gen_range(0..CONFIRMATIONS.len());
        let mut response = CONFIRMATIONS[index].replace("{name}", &name);
        response.push_str(&format!(
            "\n\n\u{2728} {} - NICE LIST STATUS: CONFIRMED! \u{2728}\n\n\
             You're going to have a magical Christmas!",
            name
        ));

        tracing::info!(name = %name, "nice list checked");

        session.mark_nice_list(&name);
        Ok(ToolReply::new(response, session).with_event(UiEvent::NiceListChecked {
            name,
            status: "nice".to_string(),
        }))
    }
}
