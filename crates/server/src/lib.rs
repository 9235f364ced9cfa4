//! Santa agent webhook server
//!
//! The HTTP surface the voice platform talks to: SWML document generation,
//! SWAIG tool dispatch, a couple of info endpoints, and the static assets for
//! the companion display.

pub mod http;
pub mod prompt;
pub mod state;
pub mod swaig;
pub mod swml;

pub use http::create_router;
pub use state::AppState;
