//! Bookrate library crate providing the star-rating control of a book
//! tracker.
//!
//! The library models a continuous rating in `[0, 5]`, keeps its star fills,
//! numeric label, and descriptive text in sync through an injected render
//! target, and publishes the value into a host form field. A terminal front
//! end drives the same widget from the keyboard.

pub mod config;
pub mod error;
pub mod rating;
pub mod tui;
pub mod widget;

pub use config::{BookrateConfig, OperationMode};
pub use error::BookrateError;
pub use rating::{Rating, RatingLabel, StarFill, StarIndex};
pub use widget::{FormField, HiddenField, RatingView, RatingWidget, RenderedRating, UiEvent};
