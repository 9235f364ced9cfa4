//! Gift workflow tools
//!
//! The three operations the platform's LLM can invoke during a call:
//! searching the workshop catalog, confirming a pick, and checking the
//! nice list.

mod nice_list;
mod search;
mod select;

pub use nice_list::CheckNiceListTool;
pub use search::SearchGiftsTool;
pub use select::SelectGiftTool;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    use santa_agent_catalog::{GiftFinder, ProductSearch, ProviderError};
    use santa_agent_config::GiftConfig;
    use santa_agent_core::{ConversationStage, GiftSession, Product};

    use crate::registry::{create_registry, ToolExecutor};
    use crate::swaig::UiEvent;

    struct DownProvider;

    #[async_trait]
    impl ProductSearch for DownProvider {
        async fn search(&self, _query: &str) -> Result<Vec<Product>, ProviderError> {
            Err(ProviderError::MissingCredentials)
        }
    }

    /// Full workflow with the provider disabled: search falls back to the
    /// built-in LEGO catalog, a valid pick confirms, an invalid pick
    /// corrects without touching the selection.
    #[tokio::test]
    async fn test_search_select_scenario() {
        let finder = Arc::new(GiftFinder::new(
            Arc::new(DownProvider),
            &GiftConfig::default(),
        ));
        let registry = create_registry(finder);

        // Search: 3 LEGO candidates, presenting_options, gifts_found event
        let reply = registry
            .execute(
                "search_gifts",
                json!({"query": "lego sets"}),
                GiftSession::new(),
            )
            .await
            .unwrap();
        assert_eq!(reply.session.gift_search_results.len(), 3);
        assert_eq!(reply.session.stage, ConversationStage::PresentingOptions);
        assert!(matches!(
            reply.events.as_slice(),
            [UiEvent::Searching { .. }, UiEvent::GiftsFound { gifts, .. }] if gifts.len() == 3
        ));

        // Select option 2: second LEGO item, gift_confirmed, gift_selected event
        let reply = registry
            .execute("select_gift", json!({"gift_choice": 2}), reply.session)
            .await
            .unwrap();
        let selected = reply.session.selected_gift.clone().unwrap();
        assert_eq!(selected.title, "LEGO City Police Station");
        assert_eq!(reply.session.stage, ConversationStage::GiftConfirmed);
        assert!(matches!(
            reply.events.as_slice(),
            [UiEvent::GiftSelected { gift }] if gift.title == selected.title
        ));

        // Select option 5: corrective message, selection unchanged
        let reply = registry
            .execute("select_gift", json!({"gift_choice": 5}), reply.session)
            .await
            .unwrap();
        assert!(reply.response.contains("options 1 to 3"));
        assert!(reply.events.is_empty());
        assert_eq!(
            reply.session.selected_gift.unwrap().title,
            "LEGO City Police Station"
        );
    }

    #[tokio::test]
    async fn test_nice_list_scenario() {
        let finder = Arc::new(GiftFinder::new(
            Arc::new(DownProvider),
            &GiftConfig::default(),
        ));
        let registry = create_registry(finder);

        let reply = registry
            .execute("check_nice_list", json!({"name": "Alex"}), GiftSession::new())
            .await
            .unwrap();
        assert!(reply.response.contains("Alex"));
        assert!(reply.response.contains("NICE LIST"));
        assert!(reply.session.nice_list_checked);
        assert_eq!(reply.session.child_name.as_deref(), Some("Alex"));
    }
}
