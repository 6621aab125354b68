//! Typed error definitions for PageKit.
//!
//! Errors are grouped by the concern that raises them:
//!
//! - **`CopyError`** - clipboard primary and fallback paths
//! - **`DomError`** - missing globals and JS exceptions at the DOM boundary
//! - **`ConfigError`** - page configuration parsing and validation

mod config;
mod copy;
mod dom;

pub use config::ConfigError;
pub use copy::CopyError;
pub use dom::DomError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a clipboard error
    #[error("Copy error: {0}")]
    Copy(#[from] CopyError),

    /// Wraps a DOM access error
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Copy(CopyError::WriteRejected { message: "NotAllowedError".to_string() });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Copy"));
        assert!(json.contains("NotAllowedError"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_dom_error_is_transparent_inside_copy_error() {
        let err = CopyError::from(DomError::js("create textarea", &"InvalidStateError"));
        let msg = err.to_string();
        assert!(msg.starts_with("create textarea"));
        assert!(msg.contains("InvalidStateError"));
    }

    #[test]
    fn test_fallback_policy() {
        assert!(CopyError::ClipboardUnavailable.allows_fallback());
        assert!(CopyError::WriteRejected { message: String::new() }.allows_fallback());
        assert!(!CopyError::CommandRejected.allows_fallback());
        assert!(!CopyError::EmptyText.allows_fallback());
        assert!(CopyError::EmptyText.is_input_error());
    }
}
