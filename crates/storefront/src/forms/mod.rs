//! Add-product form: field validation and draft synthesis.
//!
//! The form collects raw text input. Validation reports every failing
//! field at once with a fixed per-field message, and a successful
//! validation yields a [`ValidatedDraft`] that the application turns into
//! a catalog product with a clock-derived id.

use chrono::Utc;
use url::Url;
use vitrine_core::{Price, PriceError, ProductId};

use crate::catalog::{Product, Rating};

/// Validation messages shown next to form fields.
pub mod messages {
    pub const TITLE_REQUIRED: &str = "Title is required";
    pub const PRICE_NOT_A_NUMBER: &str = "Price must be a number";
    pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than 0";
    pub const DESCRIPTION_REQUIRED: &str = "Description is required";
    pub const CATEGORY_REQUIRED: &str = "Category is required";
    pub const IMAGE_URL_INVALID: &str = "Image URL must be valid";
}

// =============================================================================
// Form Types
// =============================================================================

/// Raw form fields as entered.
///
/// Price arrives as text and is parsed during validation; everything else
/// is taken verbatim (no trimming).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// Field-level validation failures, one message per failing field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub price: Option<&'static str>,
    pub description: Option<&'static str>,
    pub category: Option<&'static str>,
    pub image: Option<&'static str>,
}

impl FormErrors {
    /// Whether no field failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }
}

/// A form that passed validation: owned fields with the price parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub title: String,
    pub price: Price,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ValidatedDraft {
    /// Build the catalog product, minting the given id and a zero rating.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
            rating: Rating::zero(),
        }
    }
}

impl ProductForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field for reentry.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate the form.
    ///
    /// All failing fields are reported together; the form itself is not
    /// modified either way.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] with a message for each failing field.
    pub fn validate(&self) -> Result<ValidatedDraft, FormErrors> {
        let mut errors = FormErrors::default();

        if self.title.is_empty() {
            errors.title = Some(messages::TITLE_REQUIRED);
        }

        let price = match Price::parse(&self.price) {
            Ok(price) => Some(price),
            Err(PriceError::NotANumber) => {
                errors.price = Some(messages::PRICE_NOT_A_NUMBER);
                None
            }
            Err(PriceError::NotPositive) => {
                errors.price = Some(messages::PRICE_NOT_POSITIVE);
                None
            }
        };

        if self.description.is_empty() {
            errors.description = Some(messages::DESCRIPTION_REQUIRED);
        }

        if self.category.is_empty() {
            errors.category = Some(messages::CATEGORY_REQUIRED);
        }

        if Url::parse(&self.image).is_err() {
            errors.image = Some(messages::IMAGE_URL_INVALID);
        }

        match (price, errors.is_empty()) {
            (Some(price), true) => Ok(ValidatedDraft {
                title: self.title.clone(),
                price,
                description: self.description.clone(),
                category: self.category.clone(),
                image: self.image.clone(),
            }),
            _ => Err(errors),
        }
    }
}

// =============================================================================
// Draft Ids
// =============================================================================

/// Mints clock-derived draft ids, strictly increasing within a session.
///
/// Ids are epoch milliseconds. When the clock has not advanced past the
/// last issued id (rapid submissions within one millisecond) the id is
/// bumped by one instead, so two drafts never share an id.
#[derive(Debug, Clone, Default)]
pub struct DraftIdGenerator {
    last: i64,
}

impl DraftIdGenerator {
    /// Create a generator with no ids issued yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id.
    pub fn next_id(&mut self) -> ProductId {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last.saturating_add(1));
        ProductId::new(self.last)
    }
}
