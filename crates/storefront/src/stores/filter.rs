//! Catalog filter state.

use serde::{Deserialize, Serialize};

/// Category selection over the combined catalog.
///
/// `All` is the rest position and matches every product. Selector values
/// use the literal `"all"` for it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a selector value. `"all"` maps to [`Self::All`], anything else
    /// is a category name.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// The selector value for this filter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(name) => name,
        }
    }

    /// Whether a product with this category passes the filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => name == category,
        }
    }
}

/// Search and category filter applied to the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive title substring query; empty matches everything
    pub search: String,
    /// Category selection
    pub category: CategoryFilter,
}

impl FilterState {
    /// Create a filter in the rest position (empty search, all categories).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search query.
    pub fn set_search(&mut self, value: &str) {
        value.clone_into(&mut self.search);
    }

    /// Set the category selection.
    pub fn set_category(&mut self, value: CategoryFilter) {
        self.category = value;
    }

    /// Clear both filters back to the rest position.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether either filter deviates from the rest position.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }
}
