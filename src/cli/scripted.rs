//! Scripted mode: apply configured input to the widget and print the result.
//!
//! The configured star click and edit go through the same event adapter the
//! terminal front end uses, so the printed value is exactly what a user
//! clicking and typing would have produced.

use std::io;

use bookrate::tui::app::RATING_FIELD_NAME;
use bookrate::tui::components::RatingPanel;
use bookrate::widget::{EditorKey, dispatch};
use bookrate::{BookrateConfig, BookrateError, FormField, HiddenField, RatingWidget, UiEvent};

use super::output::{RatingSummary, write_rating_summary};

/// Runs scripted mode and prints the summary to stdout.
///
/// # Errors
///
/// Returns an error if the configured star is invalid or stdout cannot be
/// written.
pub fn run(config: &BookrateConfig) -> Result<(), BookrateError> {
    let summary = apply(config)?;
    let mut stdout = io::stdout().lock();
    write_rating_summary(&mut stdout, &summary, config.json)
}

/// Attaches a widget to the configured initial value and replays the
/// configured input.
///
/// # Errors
///
/// Returns [`BookrateError::InvalidStar`] when the configured star is not
/// one of the five stars.
pub fn apply(config: &BookrateConfig) -> Result<RatingSummary, BookrateError> {
    let star = config.star_index()?;
    let field = HiddenField::new(RATING_FIELD_NAME, config.initial_field_text());
    let mut widget = RatingWidget::attach(RatingPanel::default(), field);

    for event in scripted_events(star.map(|index| index.position()), config.edit.as_deref()) {
        let outcome = dispatch(&mut widget, &event);
        tracing::debug!(?event, ?outcome, "applied scripted event");
    }

    let rendered = widget.snapshot();
    let (_, field) = widget.into_parts();
    Ok(RatingSummary {
        field: field.name().to_owned(),
        value: field.read(),
        rendered,
    })
}

/// Events for clicking `star`, then typing `edit` into the editor and
/// pressing Enter.
fn scripted_events(star: Option<usize>, edit: Option<&str>) -> Vec<UiEvent> {
    let mut events = Vec::new();
    if let Some(position) = star {
        events.push(UiEvent::StarClicked(position));
    }
    if let Some(text) = edit {
        events.extend([
            UiEvent::ValueLabelClicked,
            UiEvent::EditorInput(text.to_owned()),
            UiEvent::EditorKey(EditorKey::Enter),
        ]);
    }
    events
}
