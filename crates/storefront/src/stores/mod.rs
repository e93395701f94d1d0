//! Mutable state containers.
//!
//! Each store owns one slice of client state and exposes the smallest
//! mutation surface that slice needs. Stores never reach into each other;
//! cross-store policy (id lookups, notices, form submission) lives in
//! [`crate::state::AppState`].

pub mod cart;
pub mod drafts;
pub mod filter;
pub mod prefs;
pub mod quantities;

pub use cart::{CartLine, CartStore};
pub use drafts::DraftStore;
pub use filter::{CategoryFilter, FilterState};
pub use prefs::PreferenceStore;
pub use quantities::QuantitySelection;
