//! Product lookup for the Santa gift workshop agent
//!
//! Wraps the external product-search provider behind the [`ProductSearch`]
//! trait, filters results to the configured price band, and degrades to a
//! built-in fallback catalog when the provider is unavailable. The finder
//! never returns an error to the caller: transport failures produce fallback
//! data, and only a provider that answered with zero acceptable items yields
//! an empty result.

pub mod client;
pub mod fallback;
pub mod price;

use async_trait::async_trait;
use std::sync::Arc;

use santa_agent_config::GiftConfig;
use santa_agent_core::{Product, MAX_PRESENTED_GIFTS};

pub use client::{ProviderError, RapidApiClient};
pub use price::parse_price;

/// How many raw provider items to scan before giving up on filling the
/// result set.
const MAX_RAW_SCAN: usize = 10;

/// Product-search provider seam. The production implementation is
/// [`RapidApiClient`]; tests substitute stubs.
#[async_trait]
pub trait ProductSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Product>, ProviderError>;
}

/// Gift lookup combining the provider, the price filter, and the fallback
/// catalog.
pub struct GiftFinder {
    provider: Arc<dyn ProductSearch>,
    min_price: f64,
    max_price: f64,
}

impl GiftFinder {
    pub fn new(provider: Arc<dyn ProductSearch>, gifts: &GiftConfig) -> Self {
        Self {
            provider,
            min_price: gifts.min_price,
            max_price: gifts.max_price,
        }
    }

    /// Search for up to [`MAX_PRESENTED_GIFTS`] gift candidates.
    ///
    /// Provider failure of any kind (missing credentials, non-200, transport
    /// error) degrades to the fallback catalog. A provider that responded
    /// but produced zero acceptable items is a genuine "no results" and
    /// returns an empty vec.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        match self.provider.search(query).await {
            Ok(raw) => self.filter(raw),
            Err(e) => {
                tracing::warn!(
                    query,
                    error = %e,
                    "product search failed, using fallback catalog"
                );
                fallback::fallback_products(query)
            }
        }
    }

    /// Filter raw provider items down to acceptable candidates.
    ///
    /// Items missing a title or image are dropped. A parseable price outside
    /// [min_price, max_price] drops the item; an unparseable price keeps it.
    /// Scans at most [`MAX_RAW_SCAN`] items and stops once the result set is
    /// full.
    fn filter(&self, raw: Vec<Product>) -> Vec<Product> {
        let mut out = Vec::with_capacity(MAX_PRESENTED_GIFTS);

        for item in raw.into_iter().take(MAX_RAW_SCAN) {
            if item.title.is_empty() || item.image.is_empty() {
                continue;
            }
            if let Some(value) = price::parse_price(&item.price) {
                if value < self.min_price || value > self.max_price {
                    continue;
                }
            }
            out.push(item);
            if out.len() >= MAX_PRESENTED_GIFTS {
                break;
            }
        }

        out
    }
}
