//! Domain models for PageKit.

mod config;
mod outcome;

pub use config::{
    CarouselConfig, DropdownConfig, NotificationConfig, NotificationMessages, PageConfig,
    ScrollConfig, StyleConfig,
};
pub use outcome::{CopyMethod, CopyOutcome, CopyRequest};
