//! DOM-free state behind each page controller.

mod anchor;
mod carousel;
mod dropdown;
mod selection;
mod toast;

pub use anchor::AnchorTarget;
pub use carousel::SlideCursor;
pub use dropdown::{display_value, DropdownState};
pub use selection::{SelectionStrategy, RANGE_END};
pub use toast::{sanitize_message, ToastPhase, ToastSlot, ToastTicket};
