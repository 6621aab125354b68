//! Page configuration models.

mod page;
mod sections;

pub use page::PageConfig;
pub use sections::{
    CarouselConfig, DropdownConfig, NotificationConfig, NotificationMessages, ScrollConfig,
    StyleConfig,
};
