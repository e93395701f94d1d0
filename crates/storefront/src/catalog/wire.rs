//! Wire records returned by the catalog service.
//!
//! Decoded strictly at the fetch boundary and converted to the domain types
//! in [`super::types`] before anything downstream sees them. A response
//! that does not match these shapes is rejected as a decode error rather
//! than passed through.

use serde::Deserialize;
use vitrine_core::{Price, ProductId};

use super::types::{Product, Rating};

/// A product record as returned by `GET /products`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireProduct {
    pub id: i64,
    pub title: String,
    pub price: Price,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: WireRating,
}

/// Rating object nested inside a product record.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireRating {
    pub rate: f64,
    pub count: u32,
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        Self {
            id: ProductId::new(wire.id),
            title: wire.title,
            price: wire.price,
            description: wire.description,
            category: wire.category,
            image: wire.image,
            rating: wire.rating.into(),
        }
    }
}

impl From<WireRating> for Rating {
    fn from(wire: WireRating) -> Self {
        Self {
            rate: wire.rate,
            count: wire.count,
        }
    }
}
