//! Gift Selection Tool
//!
//! Confirms one of the gifts presented by the last search.

use async_trait::async_trait;
use serde_json::Value;

use santa_agent_core::{truncate_chars, GiftSession, SelectionError};

use crate::registry::Tool;
use crate::swaig::{InputSchema, PropertySchema, ToolError, ToolReply, ToolSchema, UiEvent};

const TOOL_NAME: &str = "select_gift";

/// Reason text is capped so the spoken confirmation stays short
const REASON_CHARS: usize = 150;

/// Gift selection tool
pub struct SelectGiftTool;

impl SelectGiftTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SelectGiftTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SelectGiftTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Record which gift option the child picked"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object().property(
                "gift_choice",
                PropertySchema::integer("The option number the child chose (1, 2, or 3)")
                    .with_range(1, 3),
                true,
            ),
        }
    }

    async fn execute(
        &self,
        arguments: Value,
        mut session: GiftSession,
    ) -> Result<ToolReply, ToolError> {
        let choice_raw = arguments
            .get("gift_choice")
            .and_then(|v| v.as_i64())
            .ok_or_else(|| ToolError::invalid_params("gift_choice is required"))?;
        let choice = usize::try_from(choice_raw).unwrap_or(0);

        match session.select(choice) {
            Ok(gift) => {
                tracing::info!(position = gift.position, title = %gift.title, "gift confirmed");

                let mut response = format!(
                    "Ho ho ho! What a wonderful choice! You've selected:\n\n\
                     **{}**\nPrice: {}\n",
                    gift.title, gift.price
                );
                if let Some(rating) = &gift.rating {
                    response.push_str(&format!(
                        "Rating: {} stars - Other children love this!\n",
                        rating
                    ));
                }
                if !gift.description.is_empty() {
                    response.push_str(&format!(
                        "\nThis gift is perfect because: {}\n",
                        truncate_chars(&gift.description, REASON_CHARS)
                    ));
                }
                response.push_str(
                    "\nThe elves are already preparing this special gift for you! \
                     I can see it appearing on my list right now. \n\
                     Would you like to search for anything else from Santa's workshop?",
                );

                Ok(ToolReply::new(response, session)
                    .with_event(UiEvent::GiftSelected { gift }))
            }
            Err(SelectionError::NoResults) => Ok(ToolReply::new(
                "Oh my! I need to search for gifts first. What kind of gift would you \
                 like for Christmas?",
                session,
            )),
            Err(SelectionError::OutOfRange { max, .. }) => Ok(ToolReply::new(
                format!(
                    "Oh my! I don't see option {}. Please choose from options 1 to {}. \
                     Which one would you like?",
                    choice_raw, max
                ),
                session,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_agent_core::{ConversationStage, GiftCandidate};
    use serde_json::json;

    fn session_with_results(count: usize) -> GiftSession {
        let mut session = GiftSession::new();
        let results: Vec<GiftCandidate> = (1..=count)
            .map(|i| {
                GiftCandidate {
                    position: i,
                    title: format!("Gift {}", i),
                    price: "$29.99".to_string(),
                    image: "https://example.com/img.jpg".to_string(),
                    url: "#".to_string(),
                    description: "A lovely toy".to_string(),
                    rating: Some("4.8".to_string()),
                    asin: None,
                }
            })
            .collect();
        session.record_results("toys", results);
        session
    }

    #[tokio::test]
    async fn test_valid_choice_confirms() {
        let tool = SelectGiftTool::new();
        let reply = tool
            .execute(json!({"gift_choice": 2}), session_with_results(3))
            .await
            .unwrap();

        assert_eq!(reply.session.stage, ConversationStage::GiftConfirmed);
        assert_eq!(
            reply.session.selected_gift.as_ref().unwrap().title,
            "Gift 2"
        );
        assert!(reply.response.contains("Gift 2"));
        assert!(reply.response.contains("Other children love this"));
        assert!(matches!(
            reply.events.as_slice(),
            [UiEvent::GiftSelected { gift }] if gift.position == 2
        ));
    }

    #[tokio::test]
    async fn test_choice_without_search_prompts_for_search() {
        let tool = SelectGiftTool::new();
        let reply = tool
            .execute(json!({"gift_choice": 1}), GiftSession::new())
            .await
            .unwrap();

        assert!(reply.response.contains("search for gifts first"));
        assert!(reply.events.is_empty());
        assert_eq!(reply.session.stage, ConversationStage::Greeting);
    }

    #[tokio::test]
    async fn test_out_of_range_choice_corrects() {
        let tool = SelectGiftTool::new();
        let reply = tool
            .execute(json!({"gift_choice": 7}), session_with_results(2))
            .await
            .unwrap();

        assert!(reply.response.contains("option 7"));
        assert!(reply.response.contains("options 1 to 2"));
        assert!(reply.events.is_empty());
        assert!(reply.session.selected_gift.is_none());
        assert_eq!(reply.session.stage, ConversationStage::PresentingOptions);
    }

    #[tokio::test]
    async fn test_reason_text_is_capped() {
        let tool = SelectGiftTool::new();
        let mut session = GiftSession::new();
        let gift = GiftCandidate {
            position: 1,
            title: "Gift 1".to_string(),
            price: "$29.99".to_string(),
            image: "https://example.com/img.jpg".to_string(),
            url: "#".to_string(),
            description: "y".repeat(200),
            rating: None,
            asin: None,
        };
        session.record_results("toys", vec![gift]);

        let reply = tool
            .execute(json!({"gift_choice": 1}), session)
            .await
            .unwrap();
        assert!(reply.response.contains(&"y".repeat(150)));
        assert!(!reply.response.contains(&"y".repeat(151)));
    }
}
