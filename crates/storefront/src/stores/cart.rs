//! Shopping cart store.

use serde::{Deserialize, Serialize};
use vitrine_core::{Price, ProductId};

use crate::catalog::Product;

/// One cart entry: an owned product snapshot plus a quantity.
///
/// The snapshot is taken when the product is added; later catalog changes
/// do not reach into lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product as it looked when added
    pub product: Product,
    /// Number of units, always at least 1
    pub quantity: u32,
}

impl CartLine {
    /// Line total (unit price times quantity).
    #[must_use]
    pub fn total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// The shopping cart.
///
/// Holds at most one line per product id; adding an id that is already
/// present accumulates quantity onto the existing line. Lines keep
/// insertion order. Totals and counts are recomputed on read, never
/// stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If a line for this product id exists its quantity grows by
    /// `quantity`; otherwise a new line is appended. A quantity of zero is
    /// treated as 1. Never fails.
    pub fn add(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine { product, quantity });
        }
    }

    /// Remove the line with the given product id, if any.
    ///
    /// Removing an id that is not in the cart is a no-op.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether the cart holds a line for this product id.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.lines.iter().any(|line| line.product.id == id)
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (distinct products), which is also the cart badge
    /// number.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact total across all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::total).sum()
    }
}
