//! TUI mode for editing a rating.
//!
//! This module provides the entry point for the interactive terminal editor
//! and prints the saved field value once the program exits.

use std::io::{self, Write};

use bubbletea_rs::Program;

use bookrate::tui::app::RATING_FIELD_NAME;
use bookrate::tui::{RatingApp, set_initial_rating, take_submitted_rating};
use bookrate::{BookrateConfig, BookrateError};

use super::output::write_submitted;

/// Runs the TUI mode for editing the configured rating.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialise or run, or if the result
/// cannot be written to stdout.
pub async fn run(config: &BookrateConfig) -> Result<(), BookrateError> {
    // Store the initial field text for Model::init() to retrieve.
    // If already set, this is a no-op and the existing value remains.
    let _ = set_initial_rating(config.initial_field_text().to_owned());

    run_tui().await.map_err(|error| BookrateError::Terminal {
        message: error.to_string(),
    })?;

    let submitted = take_submitted_rating();
    let mut stdout = io::stdout().lock();
    write_submitted(
        &mut stdout,
        RATING_FIELD_NAME,
        submitted.as_deref(),
        config.json,
    )
}

/// Runs the bubbletea-rs program with the `RatingApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<RatingApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
