//! Page-level configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::sections::{
    CarouselConfig, DropdownConfig, NotificationConfig, ScrollConfig, StyleConfig,
};
use crate::error::ConfigError;

/// Full configuration for one page. Every section is optional in the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct PageConfig {
    /// Dropdown wiring
    #[validate(nested)]
    #[serde(default)]
    pub dropdown: DropdownConfig,
    /// Toast presentation and copy messages
    #[validate(nested)]
    #[serde(default)]
    pub notification: NotificationConfig,
    /// Anchor smooth scrolling
    #[validate(nested)]
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Animation stylesheet
    #[validate(nested)]
    #[serde(default)]
    pub styles: StyleConfig,
    /// Review carousel
    #[validate(nested)]
    #[serde(default)]
    pub carousel: CarouselConfig,
}

impl PageConfig {
    /// Parse a JSON payload and validate it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::from_json_error(&e))?;
        config.validated()
    }

    /// Validate an already-deserialized config.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;
        Ok(self)
    }
}
