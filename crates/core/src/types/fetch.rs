//! Lifecycle of remotely fetched data.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The lifecycle of a value fetched from a remote source.
///
/// Starts in [`FetchState::Loading`], then settles to [`FetchState::Ready`]
/// or [`FetchState::Failed`]. A failed fetch keeps its display message and
/// is only retried by an explicit reload; nothing here schedules retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FetchState<T> {
    /// The request has been issued and has not settled yet.
    #[default]
    Loading,
    /// The fetch completed and the value is available.
    Ready(T),
    /// The fetch failed; the message is meant for display.
    Failed(String),
}

impl<T> FetchState<T> {
    /// Settle from a fetch outcome, keeping the error's display form.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Whether the fetch has not settled yet.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the fetch settled successfully.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The value, if the fetch settled successfully.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The display message, if the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
