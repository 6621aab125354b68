//! Copy outcomes and their notification text.

use serde::{Deserialize, Serialize};

use super::config::NotificationMessages;
use crate::error::CopyError;

/// Which clipboard path produced a successful copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CopyMethod {
    /// `navigator.clipboard.writeText`
    AsyncClipboard,
    /// Off-screen textarea plus `execCommand("copy")`
    Fallback,
}

/// The single user-visible result of one copy request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CopyOutcome {
    /// Text reached the clipboard
    Copied,
    /// Both paths failed
    Failed,
    /// Nothing to copy; clipboard untouched
    Empty,
}

impl CopyOutcome {
    /// Collapse a copy result into the outcome shown to the user.
    pub fn from_result(result: &Result<CopyMethod, CopyError>) -> Self {
        match result {
            Ok(_) => Self::Copied,
            Err(e) if e.is_input_error() => Self::Empty,
            Err(_) => Self::Failed,
        }
    }

    /// Notification text for this outcome.
    pub fn message<'a>(&self, messages: &'a NotificationMessages) -> &'a str {
        match self {
            Self::Copied => &messages.copied,
            Self::Failed => &messages.failed,
            Self::Empty => &messages.empty,
        }
    }
}

/// A validated, non-empty piece of text to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    text: String,
}

impl CopyRequest {
    /// Accept page input. `None` stands for `null`, `undefined` or a non-string.
    pub fn from_input(input: Option<String>) -> Result<Self, CopyError> {
        match input {
            Some(text) if !text.is_empty() => Ok(Self { text }),
            _ => Err(CopyError::EmptyText),
        }
    }

    /// Text to write.
    pub fn text(&self) -> &str {
        &self.text
    }
}
