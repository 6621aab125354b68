//! Clipboard copy errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DomError;

/// Errors that can occur while copying text to the clipboard.
///
/// None of these ever reach the page as an exception: the copy flow maps
/// each one onto a fixed notification message.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CopyError {
    /// Nothing to copy (missing, non-string, or empty input)
    #[error("Nothing to copy")]
    EmptyText,

    /// Async clipboard API is missing or the context is not secure
    #[error("Clipboard API unavailable")]
    ClipboardUnavailable,

    /// Async clipboard write was rejected (permission denied, focus lost)
    #[error("Clipboard write rejected: {message}")]
    WriteRejected {
        /// Rejection reason reported by the browser
        message: String,
    },

    /// The off-screen textarea could not be selected
    #[error("Selection failed: {message}")]
    SelectionFailed {
        /// Description of the selection failure
        message: String,
    },

    /// `document.execCommand("copy")` returned false
    #[error("Copy command rejected by the browser")]
    CommandRejected,

    /// DOM operation failed while preparing the fallback surface
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl CopyError {
    /// Whether the failure happened before any clipboard access.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyText)
    }

    /// Whether the fallback path should be attempted after this error.
    pub fn allows_fallback(&self) -> bool {
        matches!(self, Self::ClipboardUnavailable | Self::WriteRejected { .. })
    }
}
