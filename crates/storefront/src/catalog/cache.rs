//! Cache types for catalog responses.
//!
//! Both list endpoints are cached whole under a fixed key; entries expire
//! after the configured TTL and the next read refetches.

use super::types::Product;

/// Cache key for catalog fetches.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub(crate) enum CacheKey {
    /// The full product list
    Products,
    /// The category list
    Categories,
}

/// Cached response value.
#[derive(Debug, Clone)]
pub(crate) enum CacheValue {
    Products(Vec<Product>),
    Categories(Vec<String>),
}
