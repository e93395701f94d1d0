//! Catalog service client.
//!
//! Plain REST over `reqwest` against a fakestore-style API. The two list
//! endpoints are cached using `moka` with the TTL from configuration, so
//! repeat loads within the window never touch the network.

mod cache;
pub mod types;
mod wire;

pub use types::{Product, Rating};

use std::sync::Arc;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::StorefrontConfig;

use cache::{CacheKey, CacheValue};
use wire::WireProduct;

/// Errors from talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failure (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("Catalog service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not decode into the expected shape.
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the product catalog service.
///
/// Cheap to clone. Fetches the full product and category lists; both are
/// cached for the configured TTL.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(8)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config.catalog_base_url.clone(),
                cache,
            }),
        })
    }

    /// Fetch and decode a JSON endpoint.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{path}", self.inner.base_url);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                url = %url,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog service returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        match serde_json::from_str(&response_text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    url = %url,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to decode catalog response"
                );
                Err(CatalogError::Decode(e))
            }
        }
    }

    // =========================================================================
    // Catalog Methods
    // =========================================================================

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not
    /// decode.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        // Check cache
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let records: Vec<WireProduct> = self.fetch_json("/products").await?;
        let products: Vec<Product> = records.into_iter().map(Product::from).collect();

        // Cache the result
        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Fetch the list of category names.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not
    /// decode.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        // Check cache
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let categories: Vec<String> = self.fetch_json("/products/categories").await?;

        // Cache the result
        self.inner
            .cache
            .insert(CacheKey::Categories, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }
}
