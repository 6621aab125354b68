//! Per-controller configuration sections.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Dropdown trigger/panel wiring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct DropdownConfig {
    /// Selector for elements that open a panel
    #[validate(length(min = 1))]
    #[serde(default = "default_trigger_selector")]
    pub trigger_selector: String,
    /// Selector for the hideable panels
    #[validate(length(min = 1))]
    #[serde(default = "default_panel_selector")]
    pub panel_selector: String,
    /// Trigger attribute naming its panel's id explicitly
    #[validate(length(min = 1))]
    #[serde(default = "default_target_attribute")]
    pub target_attribute: String,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            trigger_selector: default_trigger_selector(),
            panel_selector: default_panel_selector(),
            target_attribute: default_target_attribute(),
        }
    }
}

/// Fixed user-facing messages for copy outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct NotificationMessages {
    /// Shown after a successful copy
    #[serde(default = "default_copied_message")]
    pub copied: String,
    /// Shown when both copy paths failed
    #[serde(default = "default_failed_message")]
    pub failed: String,
    /// Shown when there was nothing to copy
    #[serde(default = "default_empty_message")]
    pub empty: String,
}

impl Default for NotificationMessages {
    fn default() -> Self {
        Self {
            copied: default_copied_message(),
            failed: default_failed_message(),
            empty: default_empty_message(),
        }
    }
}

/// Toast presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct NotificationConfig {
    /// Class put on the toast node (also used to find stray toasts)
    #[validate(length(min = 1))]
    #[serde(default = "default_notification_class")]
    pub class_name: String,
    /// How long the toast stays before its exit animation starts
    #[validate(range(min = 1_u32))]
    #[serde(default = "default_visible_ms")]
    pub visible_ms: u32,
    /// Exit animation duration; the node is removed after it
    #[validate(range(min = 1_u32))]
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u32,
    /// Copy outcome messages
    #[validate(nested)]
    #[serde(default)]
    pub messages: NotificationMessages,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            class_name: default_notification_class(),
            visible_ms: default_visible_ms(),
            exit_ms: default_exit_ms(),
            messages: NotificationMessages::default(),
        }
    }
}

/// In-page anchor handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ScrollConfig {
    /// Selector for anchors that get smooth scrolling
    #[validate(length(min = 1))]
    #[serde(default = "default_anchor_selector")]
    pub anchor_selector: String,
    /// Push the fragment onto history after scrolling
    #[serde(default = "default_true")]
    pub push_history: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { anchor_selector: default_anchor_selector(), push_history: true }
    }
}

/// Injected animation stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct StyleConfig {
    /// Id of the `<style>` element; its presence means already injected
    #[validate(length(min = 1))]
    #[serde(default = "default_marker_id")]
    pub marker_id: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self { marker_id: default_marker_id() }
    }
}

/// Review carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CarouselConfig {
    /// Selector for the moving strip
    #[validate(length(min = 1))]
    #[serde(default = "default_track_selector")]
    pub track_selector: String,
    /// Selector for the slides, counted once at startup
    #[validate(length(min = 1))]
    #[serde(default = "default_slide_selector")]
    pub slide_selector: String,
    /// Time between slide advances
    #[validate(range(min = 100_u32))]
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            track_selector: default_track_selector(),
            slide_selector: default_slide_selector(),
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_trigger_selector() -> String {
    ".dots".to_string()
}

fn default_panel_selector() -> String {
    ".dropdown".to_string()
}

fn default_target_attribute() -> String {
    "data-dropdown-target".to_string()
}

fn default_copied_message() -> String {
    "✅ Berhasil disalin!".to_string()
}

fn default_failed_message() -> String {
    "❌ Gagal menyalin".to_string()
}

fn default_empty_message() -> String {
    "❌ Tidak ada teks untuk disalin".to_string()
}

fn default_notification_class() -> String {
    "copy-notification".to_string()
}

const fn default_visible_ms() -> u32 {
    2000
}

const fn default_exit_ms() -> u32 {
    300
}

fn default_anchor_selector() -> String {
    r##"a[href^="#"]"##.to_string()
}

fn default_marker_id() -> String {
    "notification-animations".to_string()
}

fn default_track_selector() -> String {
    ".carousel-track".to_string()
}

fn default_slide_selector() -> String {
    ".slide".to_string()
}

const fn default_interval_ms() -> u32 {
    3500
}
