//! Combined catalog view model.
//!
//! Derives the product list the rendering layer displays: local drafts
//! first, then fetched products, with the search and category filter
//! applied on read. Nothing here is cached or stored; every call
//! recomputes from the borrowed sources, so the view can never go stale.

mod highlight;

pub use highlight::{Fragment, highlight};

use vitrine_core::ProductId;

use crate::catalog::Product;
use crate::stores::FilterState;

/// Read-only view over the combined catalog.
///
/// Borrows the draft and fetched product slices; construction is free.
#[derive(Debug, Clone, Copy)]
pub struct CatalogView<'a> {
    drafts: &'a [Product],
    fetched: &'a [Product],
}

impl<'a> CatalogView<'a> {
    /// Create a view over drafts (listed first) and fetched products.
    #[must_use]
    pub const fn new(drafts: &'a [Product], fetched: &'a [Product]) -> Self {
        Self { drafts, fetched }
    }

    /// All products in combined order: drafts newest first, then fetched
    /// products in source order. Ids are not deduplicated.
    pub fn iter(self) -> impl Iterator<Item = &'a Product> {
        self.drafts.iter().chain(self.fetched.iter())
    }

    /// Products passing the filter, in combined order.
    ///
    /// A product is visible when its category passes the category filter
    /// and its title contains the search string case-insensitively. An
    /// empty search matches every title.
    #[must_use]
    pub fn visible(self, filter: &FilterState) -> Vec<&'a Product> {
        let needle = filter.search.to_lowercase();
        self.iter()
            .filter(|product| {
                filter.category.matches(&product.category)
                    && product.title.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// First product with the given id. Drafts shadow fetched products.
    #[must_use]
    pub fn find(self, id: ProductId) -> Option<&'a Product> {
        self.iter().find(|product| product.id == id)
    }

    /// Number of products in the combined catalog.
    #[must_use]
    pub const fn len(self) -> usize {
        self.drafts.len() + self.fetched.len()
    }

    /// Whether the combined catalog is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.drafts.is_empty() && self.fetched.is_empty()
    }
}
