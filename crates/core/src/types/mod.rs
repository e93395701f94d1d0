//! Core types for Vitrine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod fetch;
pub mod id;
pub mod price;

pub use fetch::FetchState;
pub use id::ProductId;
pub use price::{Price, PriceError};
