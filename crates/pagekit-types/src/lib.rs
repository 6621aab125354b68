//! # PageKit Types
//!
//! Core types, state machines, and error definitions for PageKit.
//!
//! - **`error`** - Typed error hierarchy for copy, DOM, and configuration
//! - **`models`** - Page configuration and copy outcomes
//! - **`state`** - DOM-free state behind the dropdown, toast, carousel and anchors
//! - **`styles`** - Toast keyframes and inline styles
//!
//! ## Architecture Role
//!
//! ```text
//!    pagekit-types (this crate)
//!            │
//!            ▼
//!      pagekit-web (wasm, web-sys glue)
//! ```
//!
//! Nothing here touches the DOM, so everything is testable with a plain
//! `cargo test`.

pub mod error;
pub mod models;
pub mod state;
pub mod styles;

// Re-export error types for convenience
pub use error::{ConfigError, CopyError, DomError, Result, TypedError};

// Re-export core model types
pub use models::{CopyMethod, CopyOutcome, CopyRequest, PageConfig};
