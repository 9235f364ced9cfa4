//! Core types for the Santa gift workshop agent
//!
//! This crate provides the types shared across the catalog, tools, and
//! server crates:
//! - Gift and product types with description length limits
//! - Per-call session state and conversation stage labels
//! - Selection validation against the current result set

pub mod gift;
pub mod session;

pub use gift::{
    truncate_chars, GiftCandidate, Product, MAX_PRESENTED_GIFTS, SPOKEN_DESCRIPTION_CHARS,
    STORED_DESCRIPTION_CHARS,
};
pub use session::{ConversationStage, GiftSession, SelectionError};
