//! DOM access errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while touching the page.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DomError {
    /// No global `window` (not running in a browser)
    #[error("No window")]
    NoWindow,

    /// Window has no document
    #[error("No document")]
    NoDocument,

    /// Document has no body yet
    #[error("No document body")]
    NoBody,

    /// A JS call threw or returned an unexpected value
    #[error("{context}: {message}")]
    Js {
        /// What was being attempted
        context: String,
        /// Stringified JS error
        message: String,
    },
}

impl DomError {
    /// Build a [`DomError::Js`] from a context label and any debuggable JS value.
    pub fn js(context: impl Into<String>, value: &impl std::fmt::Debug) -> Self {
        Self::Js { context: context.into(), message: format!("{value:?}") }
    }
}
