//! Unified application error type.
//!
//! Fetch failures that only affect what a view displays surface as
//! `FetchState::Failed` on the state instead; `AppError` is for
//! operations whose caller must handle the failure. None of these are
//! fatal: the application keeps running and the failing operation is
//! reported where it happened.

use thiserror::Error;
use vitrine_core::ProductId;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront state core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog service call failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// No product with this id exists in the combined catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::ProductNotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_config_error_wraps() {
        let err = AppError::from(ConfigError::InvalidEnvVar(
            "CATALOG_BASE_URL".to_string(),
            "relative URL without a base".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable CATALOG_BASE_URL: relative URL without a base"
        );
    }
}
