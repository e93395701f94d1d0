//! UI preference flags.

use serde::{Deserialize, Serialize};

/// Presentation preferences for the rendering layer.
///
/// Both flags start off. They never interact with catalog, cart, or filter
/// state; toggling one leaves everything else untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceStore {
    /// Dark color scheme
    pub dark_mode: bool,
    /// Cart side panel visibility
    pub cart_open: bool,
}

impl PreferenceStore {
    /// Create the default preferences (both flags off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip dark mode.
    pub const fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Set dark mode to a specific value.
    pub const fn set_dark_mode(&mut self, value: bool) {
        self.dark_mode = value;
    }

    /// Flip cart panel visibility.
    pub const fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }
}
