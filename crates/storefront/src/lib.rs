//! Vitrine Storefront library.
//!
//! Client-side state core for the storefront: fetches the product catalog,
//! derives the searchable product list, and owns cart, draft, filter, and
//! UI preference state. A rendering layer reads derived snapshots and calls
//! the operations on [`state::AppState`]; it never mutates stores directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod state;
pub mod stores;
pub mod view;
