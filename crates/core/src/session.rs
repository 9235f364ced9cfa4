//! Per-call session state
//!
//! The hosting platform owns storage: this state is round-tripped opaquely
//! through the per-call global data blob and mutated once per tool turn.
//! Serde defaults make a missing or partial blob decode to the initial
//! session, so the first tool call of a fresh call always starts clean.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::gift::GiftCandidate;

/// Coarse label for where the scripted conversation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    /// Welcoming the child, before any search
    #[default]
    Greeting,
    /// Gift options are on the display, waiting for a pick
    PresentingOptions,
    /// Last search produced nothing usable
    SearchFailed,
    /// A gift has been selected
    GiftConfirmed,
}

impl ConversationStage {
    /// Get stage display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConversationStage::Greeting => "Greeting",
            ConversationStage::PresentingOptions => "Presenting Options",
            ConversationStage::SearchFailed => "Search Failed",
            ConversationStage::GiftConfirmed => "Gift Confirmed",
        }
    }
}

impl std::fmt::Display for ConversationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Why a gift selection was rejected. Both cases are conversational, not
/// fatal: the tool turns them into corrective speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No search has produced results yet
    #[error("no gift search results in session")]
    NoResults,
    /// Choice outside [1, max]
    #[error("choice {choice} outside valid options 1 to {max}")]
    OutOfRange { choice: usize, max: usize },
}

/// Per-call gift selection state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GiftSession {
    /// Candidates from the most recent search, in presented order
    #[serde(default)]
    pub gift_search_results: Vec<GiftCandidate>,
    /// The confirmed pick, always one of `gift_search_results`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_gift: Option<GiftCandidate>,
    /// Last search query as spoken by the child
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub stage: ConversationStage,
    #[serde(default)]
    pub nice_list_checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
}

impl GiftSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode session state from the platform's global data blob.
    ///
    /// Missing, malformed, or partial `gift_state` decodes to the initial
    /// session rather than failing the turn.
    pub fn from_global_data(global_data: Option<&Value>) -> Self {
        global_data
            .and_then(|g| g.get("gift_state"))
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    /// Store the outcome of a search.
    ///
    /// An empty result set clears the stored options and moves the stage to
    /// `search_failed`; otherwise the candidates become the current result
    /// set and the stage moves to `presenting_options`.
    pub fn record_results(&mut self, query: impl Into<String>, results: Vec<GiftCandidate>) {
        self.search_query = query.into();
        if results.is_empty() {
            self.gift_search_results.clear();
            self.stage = ConversationStage::SearchFailed;
        } else {
            self.gift_search_results = results;
            self.stage = ConversationStage::PresentingOptions;
        }
    }

    /// Validate a 1-based choice against the current result set and record
    /// it as the selection.
    ///
    /// The prior result list stays intact for reference, so re-selecting a
    /// valid option is idempotent. On error the session is unchanged.
    pub fn select(&mut self, choice: usize) -> Result<GiftCandidate, SelectionError> {
        if self.gift_search_results.is_empty() {
            return Err(SelectionError::NoResults);
        }
        let max = self.gift_search_results.len();
        if choice < 1 || choice > max {
            return Err(SelectionError::OutOfRange { choice, max });
        }
        let gift = self.gift_search_results[choice - 1].clone();
        self.selected_gift = Some(gift.clone());
        self.stage = ConversationStage::GiftConfirmed;
        Ok(gift)
    }

    /// Record a nice-list check for the given child.
    pub fn mark_nice_list(&mut self, name: impl Into<String>) {
        self.nice_list_checked = true;
        self.child_name = Some(name.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(position: usize, title: &str) -> GiftCandidate {
        GiftCandidate {
            position,
            title: title.to_string(),
            price: "$29.99".to_string(),
            image: "https://example.com/img.jpg".to_string(),
            url: "#".to_string(),
            description: "A wonderful toy".to_string(),
            rating: None,
            asin: None,
        }
    }

    #[test]
    fn test_default_session_is_greeting() {
        let session = GiftSession::new();
        assert_eq!(session.stage, ConversationStage::Greeting);
        assert!(session.gift_search_results.is_empty());
        assert!(session.selected_gift.is_none());
        assert!(!session.nice_list_checked);
    }

    #[test]
    fn test_select_before_search_fails() {
        let mut session = GiftSession::new();
        assert_eq!(session.select(1), Err(SelectionError::NoResults));
        assert!(session.selected_gift.is_none());
        assert_eq!(session.stage, ConversationStage::Greeting);
    }

    #[test]
    fn test_select_out_of_range_leaves_state_unchanged() {
        let mut session = GiftSession::new();
        session.record_results("lego", vec![candidate(1, "A"), candidate(2, "B")]);

        let err = session.select(5).unwrap_err();
        assert_eq!(err, SelectionError::OutOfRange { choice: 5, max: 2 });
        assert!(session.selected_gift.is_none());
        assert_eq!(session.stage, ConversationStage::PresentingOptions);

        let err = session.select(0).unwrap_err();
        assert_eq!(err, SelectionError::OutOfRange { choice: 0, max: 2 });
    }

    #[test]
    fn test_select_is_idempotent_and_keeps_results() {
        let mut session = GiftSession::new();
        session.record_results("lego", vec![candidate(1, "A"), candidate(2, "B")]);

        let first = session.select(2).unwrap();
        let second = session.select(2).unwrap();
        assert_eq!(first, second);
        assert_eq!(session.stage, ConversationStage::GiftConfirmed);
        assert_eq!(session.gift_search_results.len(), 2);
        assert_eq!(session.selected_gift.as_ref().unwrap().title, "B");
    }

    #[test]
    fn test_empty_results_mark_search_failed() {
        let mut session = GiftSession::new();
        session.record_results("plasma rifle", Vec::new());
        assert_eq!(session.stage, ConversationStage::SearchFailed);
        assert_eq!(session.search_query, "plasma rifle");
        assert!(session.gift_search_results.is_empty());
    }

    #[test]
    fn test_from_global_data_round_trip() {
        let mut session = GiftSession::new();
        session.record_results("dolls", vec![candidate(1, "Doll")]);
        session.mark_nice_list("Alex");

        let blob = json!({ "gift_state": serde_json::to_value(&session).unwrap() });
        let decoded = GiftSession::from_global_data(Some(&blob));
        assert_eq!(decoded, session);
    }

    #[test]
    fn test_from_global_data_tolerates_garbage() {
        assert_eq!(GiftSession::from_global_data(None), GiftSession::new());
        let blob = json!({ "gift_state": "not an object" });
        assert_eq!(GiftSession::from_global_data(Some(&blob)), GiftSession::new());
        let partial = json!({ "gift_state": { "nice_list_checked": true } });
        let decoded = GiftSession::from_global_data(Some(&partial));
        assert!(decoded.nice_list_checked);
        assert_eq!(decoded.stage, ConversationStage::Greeting);
    }

    #[test]
    fn test_stage_serializes_snake_case() {
        let v = serde_json::to_value(ConversationStage::PresentingOptions).unwrap();
        assert_eq!(v, json!("presenting_options"));
        let v = serde_json::to_value(ConversationStage::SearchFailed).unwrap();
        assert_eq!(v, json!("search_failed"));
    }
}
