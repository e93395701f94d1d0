//! Locally created product drafts.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Products created through the add-product form, newest first.
///
/// Drafts are prepend-only: nothing edits or removes them, and they live
/// for the session only. They are listed ahead of fetched products in the
/// combined catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftStore {
    products: Vec<Product>,
}

impl DraftStore {
    /// Create an empty draft store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a new draft.
    pub fn prepend(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    /// The drafts, newest first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of drafts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether no drafts exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;
    use vitrine_core::{Price, ProductId};

    fn draft(id: i64, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Price::from_cents(100),
            description: "d".to_string(),
            category: "misc".to_string(),
            image: "https://example.com/img.jpg".to_string(),
            rating: Rating::zero(),
        }
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut drafts = DraftStore::new();
        drafts.prepend(draft(1, "First"));
        drafts.prepend(draft(2, "Second"));

        let titles: Vec<&str> = drafts.products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
        assert_eq!(drafts.len(), 2);
    }

    #[test]
    fn test_empty() {
        let drafts = DraftStore::new();
        assert!(drafts.is_empty());
        assert!(drafts.products().is_empty());
    }
}
