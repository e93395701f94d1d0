//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_browsing` - Combined catalog view, filtering, and detail lookup
//! - `cart_flows` - Add/remove/clear flows, notices, and totals
//! - `draft_products` - Form validation and locally created drafts
//!
//! The tests drive [`vitrine_storefront::state::AppState`] end to end but
//! never touch the network: fetch outcomes are injected through the settle
//! methods, the same path `load_catalog` uses internally.
