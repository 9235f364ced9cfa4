//! SWAIG webhook dispatch
//!
//! Decodes the platform's tool-invocation payload, round-trips the per-call
//! gift state through `global_data`, and turns tool output into the
//! response/action document the platform expects. Tool failures never raise
//! out of the webhook; they become corrective speech with no state change.

use serde::Deserialize;
use serde_json::{json, Value};

use santa_agent_core::GiftSession;
use santa_agent_tools::{ErrorCode, ToolExecutor, ToolRegistry};

/// Tool invocation request from the platform
#[derive(Debug, Deserialize)]
pub struct SwaigRequest {
    pub function: String,
    #[serde(default)]
    pub argument: Option<SwaigArgument>,
    #[serde(default)]
    pub global_data: Option<Value>,
}

/// Tool arguments, parsed by the platform or raw JSON text
#[derive(Debug, Default, Deserialize)]
pub struct SwaigArgument {
    #[serde(default)]
    pub parsed: Option<Vec<Value>>,
    #[serde(default)]
    pub raw: Option<String>,
}

impl SwaigRequest {
    /// First parsed argument object, falling back to the raw JSON string.
    pub fn arguments(&self) -> Value {
        if let Some(argument) = &self.argument {
            if let Some(parsed) = argument.parsed.as_ref().and_then(|p| p.first()) {
                return parsed.clone();
            }
            if let Some(raw) = &argument.raw {
                if let Ok(value) = serde_json::from_str(raw) {
                    return value;
                }
            }
        }
        json!({})
    }
}

const UNKNOWN_FUNCTION_MESSAGE: &str = "Ho ho ho! I'm not quite sure how to do that, \
     but I'd love to help you find a gift! What would you like for Christmas?";

const BAD_ARGUMENTS_MESSAGE: &str =
    "Oh my! I didn't quite catch that. Could you tell me again?";

const BUSY_WORKSHOP_MESSAGE: &str = "Ho ho ho! My workshop is a little busy right \
     now. Let's try that again in a moment!";

/// Execute one tool invocation and build the webhook reply.
pub async fn dispatch(registry: &ToolRegistry, request: SwaigRequest) -> Value {
    let session = GiftSession::from_global_data(request.global_data.as_ref());
    let arguments = request.arguments();

    tracing::debug!(function = %request.function, "dispatching tool invocation");

    match registry.execute(&request.function, arguments, session).await {
        Ok(reply) => {
            let mut actions = vec![json!({
                "set_global_data": { "gift_state": reply.session }
            })];
            for event in &reply.events {
                actions.push(json!({ "user_event": { "event": event } }));
            }
            json!({
                "response": reply.response,
                "action": actions,
            })
        }
        Err(err) => {
            tracing::warn!(
                function = %request.function,
                code = ?err.code,
                error = %err,
                "tool invocation failed"
            );
            let response = match err.code {
                ErrorCode::NotFound => UNKNOWN_FUNCTION_MESSAGE,
                ErrorCode::InvalidParams => BAD_ARGUMENTS_MESSAGE,
                ErrorCode::Timeout | ErrorCode::Internal => BUSY_WORKSHOP_MESSAGE,
            };
            // No action list: the platform keeps the previous global_data
            json!({ "response": response })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_agent_catalog::{GiftFinder, RapidApiClient};
    use santa_agent_config::Settings;
    use santa_agent_tools::create_registry;
    use std::sync::Arc;

    /// Registry with no provider credentials, so searches use the fallback
    /// catalog deterministically.
    fn offline_registry() -> ToolRegistry {
        let mut settings = Settings::default();
        settings.provider.api_key = None;
        let provider = Arc::new(RapidApiClient::new(&settings.provider));
        let finder = Arc::new(GiftFinder::new(provider, &settings.gifts));
        create_registry(finder)
    }

    fn request(body: Value) -> SwaigRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_arguments_prefer_parsed_over_raw() {
        let req = request(json!({
            "function": "search_gifts",
            "argument": {
                "parsed": [{"query": "lego"}],
                "raw": "{\"query\": \"ignored\"}"
            }
        }));
        assert_eq!(req.arguments(), json!({"query": "lego"}));

        let req = request(json!({
            "function": "search_gifts",
            "argument": { "raw": "{\"query\": \"dolls\"}" }
        }));
        assert_eq!(req.arguments(), json!({"query": "dolls"}));

        let req = request(json!({ "function": "search_gifts" }));
        assert_eq!(req.arguments(), json!({}));
    }

    #[tokio::test]
    async fn test_unknown_function_is_polite_and_stateless() {
        let registry = offline_registry();
        let reply = dispatch(
            &registry,
            request(json!({ "function": "make_it_snow" })),
        )
        .await;

        assert!(reply["response"]
            .as_str()
            .unwrap()
            .contains("not quite sure"));
        assert!(reply["action"].is_null());
    }

    #[tokio::test]
    async fn test_search_round_trips_state_and_events() {
        let registry = offline_registry();
        let reply = dispatch(
            &registry,
            request(json!({
                "function": "search_gifts",
                "argument": { "parsed": [{"query": "lego sets"}] }
            })),
        )
        .await;

        let actions = reply["action"].as_array().unwrap();
        let gift_state = &actions[0]["set_global_data"]["gift_state"];
        assert_eq!(gift_state["stage"], "presenting_options");
        assert_eq!(
            gift_state["gift_search_results"].as_array().unwrap().len(),
            3
        );

        let events: Vec<&str> = actions[1..]
            .iter()
            .map(|a| a["user_event"]["event"]["type"].as_str().unwrap())
            .collect();
        assert_eq!(events, vec!["searching", "gifts_found"]);
    }

    #[tokio::test]
    async fn test_select_resumes_from_global_data() {
        let registry = offline_registry();
        let search = dispatch(
            &registry,
            request(json!({
                "function": "search_gifts",
                "argument": { "parsed": [{"query": "lego sets"}] }
            })),
        )
        .await;
        let gift_state = search["action"][0]["set_global_data"]["gift_state"].clone();

        let select = dispatch(
            &registry,
            request(json!({
                "function": "select_gift",
                "argument": { "parsed": [{"gift_choice": 2}] },
                "global_data": { "gift_state": gift_state }
            })),
        )
        .await;

        let new_state = &select["action"][0]["set_global_data"]["gift_state"];
        assert_eq!(new_state["stage"], "gift_confirmed");
        assert_eq!(
            new_state["selected_gift"]["title"],
            "LEGO City Police Station"
        );
    }

    #[tokio::test]
    async fn test_invalid_arguments_do_not_touch_state() {
        let registry = offline_registry();
        let reply = dispatch(
            &registry,
            request(json!({
                "function": "search_gifts",
                "argument": { "parsed": [{"child_age": 8}] }
            })),
        )
        .await;

        assert!(reply["response"]
            .as_str()
            .unwrap()
            .contains("didn't quite catch"));
        assert!(reply["action"].is_null());
    }
}
