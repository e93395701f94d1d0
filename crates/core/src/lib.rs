//! Vitrine Core - Shared types library.
//!
//! This crate provides common types used across all Vitrine components:
//! - `storefront` - Catalog, cart, and preference state core
//! - `cli` - Command-line tools for inspecting the catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   fetch lifecycle enum

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
