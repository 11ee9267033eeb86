//! Reusable TUI components.

mod rating_panel;

pub use rating_panel::{RatingPanel, RatingPanelContext};
