//! Pending quantity selection per product card.

use std::collections::HashMap;

use vitrine_core::ProductId;

/// The "units to add" selection shown on each product card.
///
/// Ids with no recorded selection read as 1. Zero is coerced to 1 on
/// write, and a successful add resets the product's selection back to 1.
#[derive(Debug, Clone, Default)]
pub struct QuantitySelection {
    quantities: HashMap<ProductId, u32>,
}

impl QuantitySelection {
    /// Create an empty selection map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected quantity for a product, defaulting to 1.
    #[must_use]
    pub fn get(&self, id: ProductId) -> u32 {
        self.quantities.get(&id).copied().unwrap_or(1)
    }

    /// Set the selected quantity. Zero is stored as 1.
    pub fn set(&mut self, id: ProductId, quantity: u32) {
        self.quantities.insert(id, quantity.max(1));
    }

    /// Reset a product's selection back to 1.
    pub fn reset(&mut self, id: ProductId) {
        self.quantities.insert(id, 1);
    }
}
