//! Gift and product types

use serde::{Deserialize, Serialize};

/// Maximum number of gifts presented to the child in one search.
///
/// The catalog lookup and the spoken option list both use this limit so the
/// display, the session state, and the agent's speech always agree.
pub const MAX_PRESENTED_GIFTS: usize = 3;

/// Description length when the agent reads a gift aloud.
pub const SPOKEN_DESCRIPTION_CHARS: usize = 100;

/// Description length when stored in session state and sent to the display.
pub const STORED_DESCRIPTION_CHARS: usize = 200;

/// A product as returned by the catalog lookup, before it is assigned an
/// option number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    /// Display price as the provider formats it (e.g. "$29.99")
    pub price: String,
    /// Product image URL
    pub image: String,
    /// Product page URL
    pub url: String,
    pub description: String,
    /// Star rating, when the provider supplies one (e.g. "4.7")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// External catalog id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
}

/// One gift option presented to the child.
///
/// Identity is positional within a single search result set; candidates are
/// never persisted beyond the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftCandidate {
    /// 1-based option number as spoken to the child
    pub position: usize,
    pub title: String,
    pub price: String,
    pub image: String,
    pub url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
}

impl GiftCandidate {
    /// Build a positioned candidate from a catalog product.
    ///
    /// The stored description is capped at [`STORED_DESCRIPTION_CHARS`].
    pub fn from_product(position: usize, product: Product) -> Self {
        Self {
            position,
            title: product.title,
            price: product.price,
            image: product.image,
            url: product.url,
            description: truncate_chars(&product.description, STORED_DESCRIPTION_CHARS),
            rating: product.rating,
            asin: product.asin,
        }
    }

    /// Description excerpt sized for speech.
    pub fn spoken_description(&self) -> String {
        truncate_chars(&self.description, SPOKEN_DESCRIPTION_CHARS)
    }
}

/// Truncate to at most `max` characters, on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(description: &str) -> Product {
        Product {
            title: "LEGO Classic Creative Bricks Set".to_string(),
            price: "$29.99".to_string(),
            image: "https://example.com/lego.jpg".to_string(),
            url: "https://example.com/lego".to_string(),
            description: description.to_string(),
            rating: Some("4.8".to_string()),
            asin: None,
        }
    }

    #[test]
    fn test_from_product_caps_stored_description() {
        let long = "x".repeat(500);
        let candidate = GiftCandidate::from_product(1, product(&long));
        assert_eq!(candidate.position, 1);
        assert_eq!(candidate.description.chars().count(), STORED_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_spoken_description_is_shorter() {
        let long = "y".repeat(500);
        let candidate = GiftCandidate::from_product(2, product(&long));
        assert_eq!(
            candidate.spoken_description().chars().count(),
            SPOKEN_DESCRIPTION_CHARS
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // Multi-byte chars must not be split
        let s = "héllo wörld";
        assert_eq!(truncate_chars(s, 4), "héll");
        assert_eq!(truncate_chars(s, 100), s);
    }
}
