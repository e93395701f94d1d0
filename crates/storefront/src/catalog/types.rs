//! Domain types for the product catalog.
//!
//! These are the types the rest of the application works with; the raw
//! records returned by the catalog service live in the wire module and are
//! converted at the fetch boundary.

use serde::{Deserialize, Serialize};
use vitrine_core::{Price, ProductId};

// =============================================================================
// Product Types
// =============================================================================

/// Customer rating summary for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value (e.g., 4.5)
    pub rate: f64,
    /// Number of ratings collected
    pub count: u32,
}

impl Rating {
    /// The rating of a product that has never been rated.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            rate: 0.0,
            count: 0,
        }
    }
}

/// A product in the catalog.
///
/// Server products and locally created drafts share this type. Drafts carry
/// clock-derived ids and a zero rating but are otherwise indistinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID
    pub id: ProductId,
    /// Display title
    pub title: String,
    /// Unit price
    pub price: Price,
    /// Long-form description
    pub description: String,
    /// Category name (the service reports these lowercase)
    pub category: String,
    /// Image URL
    pub image: String,
    /// Customer rating summary
    pub rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_zero() {
        let rating = Rating::zero();
        assert!(rating.rate.abs() < f64::EPSILON);
        assert_eq!(rating.count, 0);
    }
}
