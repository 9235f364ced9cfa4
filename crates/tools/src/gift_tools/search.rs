//! Gift Search Tool
//!
//! Looks up gift candidates for whatever the child asked for and presents
//! up to three options.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use santa_agent_catalog::GiftFinder;
use santa_agent_core::{GiftCandidate, GiftSession, MAX_PRESENTED_GIFTS};

use crate::registry::Tool;
use crate::swaig::{InputSchema, PropertySchema, ToolError, ToolReply, ToolSchema, UiEvent};

const TOOL_NAME: &str = "search_gifts";

/// Covers the provider's 10s request timeout with headroom
const SEARCH_TIMEOUT_SECS: u64 = 15;

const SEARCH_FAILED_MESSAGE: &str = "Oh dear! I'm having trouble reaching my workshop catalog \
     right now. Let me check again... Can you tell me more about what kind of gift you're \
     looking for?";

/// Gift search tool
pub struct SearchGiftsTool {
    finder: Arc<GiftFinder>,
}

impl SearchGiftsTool {
    pub fn new(finder: Arc<GiftFinder>) -> Self {
        Self { finder }
    }
}

#[async_trait]
impl Tool for SearchGiftsTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Search for gift ideas based on what the child wants"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object()
                .property(
                    "query",
                    PropertySchema::string(
                        "What to search for (e.g., 'lego sets', 'dolls', 'video games for kids')",
                    ),
                    true,
                )
                .property(
                    "child_age",
                    PropertySchema::integer("Approximate age of the child (optional)")
                        .with_range(3, 16),
                    false,
                ),
        }
    }

    async fn execute(
        &self,
        arguments: Value,
        mut session: GiftSession,
    ) -> Result<ToolReply, ToolError> {
        let query = arguments
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::invalid_params("query is required"))?
            .to_string();
        // Age is informational only, never used for filtering
        let child_age = arguments.get("child_age").and_then(|v| v.as_i64());

        tracing::debug!(query = %query, ?child_age, "searching for gifts");

        let products = self.finder.search(&query).await;

        if products.is_empty() {
            session.record_results(&query, Vec::new());
            return Ok(ToolReply::new(SEARCH_FAILED_MESSAGE, session)
                .with_event(UiEvent::Searching {
                    query: query.clone(),
                })
                .with_event(UiEvent::SearchFailed { query }));
        }

        let candidates: Vec<GiftCandidate> = products
            .into_iter()
            .take(MAX_PRESENTED_GIFTS)
            .enumerate()
            .map(|(i, product)| GiftCandidate::from_product(i + 1, product))
            .collect();

        let response = render_options(&candidates);

        tracing::info!(
            query = %query,
            count = candidates.len(),
            "presenting gift options"
        );

        session.record_results(&query, candidates.clone());
        Ok(ToolReply::new(response, session)
            .with_event(UiEvent::Searching {
                query: query.clone(),
            })
            .with_event(UiEvent::GiftsFound {
                gifts: candidates,
                query,
            }))
    }

    fn timeout_secs(&self) -> u64 {
        SEARCH_TIMEOUT_SECS
    }
}

/// Build the spoken enumeration of the found options.
fn render_options(candidates: &[GiftCandidate]) -> String {
    let mut text = String::from(
        "Ho ho ho! I found some wonderful gifts that would be perfect! \
         Let me tell you about each one:\n\n",
    );

    for gift in candidates {
        text.push_str(&format!("Option {}: {}\n", gift.position, gift.title));
        text.push_str(&format!("   Price: {}\n", gift.price));
        if let Some(rating) = &gift.rating {
            text.push_str(&format!("   Rating: {} stars\n", rating));
        }
        if !gift.description.is_empty() {
            text.push_str(&format!(
                "   Description: {}...\n",
                gift.spoken_description()
            ));
        }
        text.push('\n');
    }

    text.push_str(
        "I can see all these wonderful gifts on my magical display here at the North Pole! ",
    );
    text.push_str(&format!(
        "Which one would you like? Just tell me the number - {}!",
        option_prompt(candidates.len())
    ));
    text
}

/// "option 1", "option 1 or 2", "option 1, 2, or 3"
fn option_prompt(count: usize) -> String {
    match count {
        0 | 1 => "option 1".to_string(),
        2 => "option 1 or 2".to_string(),
        n => {
            let head: Vec<String> = (1..n).map(|i| i.to_string()).collect();
            format!("option {}, or {}", head.join(", "), n)
        }
    }
}
