//! RapidAPI product-search client
//!
//! Thin HTTP client for the real-time Amazon data API. Maps the provider's
//! wire format into [`Product`] values; all failure modes surface as
//! [`ProviderError`] so the finder can degrade to the fallback catalog.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use santa_agent_config::ProviderConfig;
use santa_agent_core::{truncate_chars, Product, STORED_DESCRIPTION_CHARS};

use crate::ProductSearch;

/// Product-search provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider credentials not configured")]
    MissingCredentials,

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// RapidAPI search client
pub struct RapidApiClient {
    client: Client,
    host: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl RapidApiClient {
    /// Create a client from provider configuration.
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            host: config.api_host.clone(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

#[async_trait]
impl ProductSearch for RapidApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Product>, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials)?;

        let url = format!("https://{}/search", self.host);

        tracing::debug!(query, url = %url, "querying product-search provider");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", api_key)
            .query(&[
                ("query", query),
                ("page", "1"),
                ("country", "US"),
                ("sort_by", "RELEVANCE"),
                ("product_condition", "ALL"),
                ("is_prime", "false"),
                ("deals_and_discounts", "NONE"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: SearchResponse = response.json().await?;
        let products: Vec<Product> = body
            .data
            .products
            .into_iter()
            .map(Product::from)
            .collect();

        tracing::debug!(query, count = products.len(), "provider returned products");
        Ok(products)
    }
}

/// Provider response envelope: products live under `data.products`
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: SearchData,
}

#[derive(Debug, Default, Deserialize)]
struct SearchData {
    #[serde(default)]
    products: Vec<ProviderProduct>,
}

/// One raw provider item
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderProduct {
    #[serde(default)]
    product_title: String,
    #[serde(default)]
    product_price: Option<String>,
    #[serde(default)]
    product_photo: String,
    #[serde(default)]
    product_url: Option<String>,
    #[serde(default)]
    asin: Option<String>,
    #[serde(default)]
    product_star_rating: Option<String>,
    #[serde(default)]
    product_description: Option<String>,
}

impl From<ProviderProduct> for Product {
    fn from(item: ProviderProduct) -> Self {
        let asin = item.asin.filter(|a| !a.is_empty());

        let url = match item.product_url.filter(|u| !u.is_empty()) {
            Some(url) => url,
            None => match &asin {
                Some(asin) => format!("https://www.amazon.com/dp/{}", asin),
                None => "#".to_string(),
            },
        };

        let description = match item.product_description.filter(|d| !d.is_empty()) {
            Some(d) => truncate_chars(&d, STORED_DESCRIPTION_CHARS),
            None => format!("{} - Great gift for kids!", item.product_title),
        };

        Self {
            title: item.product_title,
            price: item
                .product_price
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "Price not available".to_string()),
            image: item.product_photo,
            url,
            description,
            rating: item.product_star_rating.filter(|r| !r.is_empty()),
            asin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str) -> ProviderProduct {
        ProviderProduct {
            product_title: title.to_string(),
            product_price: Some("$29.99".to_string()),
            product_photo: "https://example.com/img.jpg".to_string(),
            product_url: None,
            asin: Some("B000TEST01".to_string()),
            product_star_rating: Some("4.5".to_string()),
            product_description: None,
        }
    }

    #[test]
    fn test_url_falls_back_to_asin() {
        let product = Product::from(raw("Toy"));
        assert_eq!(product.url, "https://www.amazon.com/dp/B000TEST01");
    }

    #[test]
    fn test_url_falls_back_to_hash_without_asin() {
        let mut item = raw("Toy");
        item.asin = None;
        let product = Product::from(item);
        assert_eq!(product.url, "#");
    }

    #[test]
    fn test_missing_description_synthesized() {
        let product = Product::from(raw("Wooden Train"));
        assert_eq!(product.description, "Wooden Train - Great gift for kids!");
    }

    #[test]
    fn test_missing_price_placeholder() {
        let mut item = raw("Toy");
        item.product_price = None;
        let product = Product::from(item);
        assert_eq!(product.price, "Price not available");
    }

    #[test]
    fn test_empty_rating_becomes_none() {
        let mut item = raw("Toy");
        item.product_star_rating = Some(String::new());
        let product = Product::from(item);
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_response_envelope_decodes() {
        let body = r#"{
            "status": "OK",
            "data": {
                "products": [
                    {
                        "product_title": "LEGO Set",
                        "product_price": "$49.99",
                        "product_photo": "https://example.com/lego.jpg",
                        "product_url": "https://example.com/lego",
                        "asin": "B0TEST",
                        "product_star_rating": "4.8"
                    }
                ]
            }
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.products.len(), 1);
        let product = Product::from(parsed.data.products.into_iter().next().unwrap());
        assert_eq!(product.title, "LEGO Set");
        assert_eq!(product.rating.as_deref(), Some("4.8"));
    }
}
