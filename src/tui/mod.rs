//! Terminal user interface for editing a book rating.
//!
//! This module drives the rating widget from the keyboard using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::RatingApp`]
//! - **View**: [`components::RatingPanel`], the widget's render target
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model
//! - [`messages`]: Message types for the update loop
//! - [`components`]: The rating panel
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the host field's initial text is passed through module-level
//! storage. Call [`set_initial_rating`] before starting the program. When
//! the user saves, the field value is stored for [`take_submitted_rating`].

use std::sync::{Mutex, OnceLock};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::RatingApp;

/// Global storage for the host field's initial text.
static INITIAL_RATING: OnceLock<String> = OnceLock::new();

/// Field value saved by the user, if any.
static SUBMITTED_RATING: Mutex<Option<String>> = Mutex::new(None);

/// Sets the host field's initial text for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the value was set, `false` if it was already set.
pub fn set_initial_rating(text: String) -> bool {
    INITIAL_RATING.set(text).is_ok()
}

/// Returns the stored initial text, or an empty string when unset.
pub(crate) fn get_initial_rating() -> String {
    INITIAL_RATING.get().cloned().unwrap_or_default()
}

/// Takes the field value saved by the user, leaving nothing behind.
///
/// Returns `None` when the editor was quit without saving.
pub fn take_submitted_rating() -> Option<String> {
    SUBMITTED_RATING
        .lock()
        .ok()
        .and_then(|mut submitted| submitted.take())
}

pub(crate) fn store_submitted_rating(value: &str) {
    match SUBMITTED_RATING.lock() {
        Ok(mut submitted) => *submitted = Some(value.to_owned()),
        Err(error) => tracing::warn!("failed to store submitted rating: {error}"),
    }
}

#[cfg(test)]
mod tests;
