//! Translation of raw UI events into widget operations.
//!
//! Front ends report what happened (a star was clicked, the editor lost
//! focus) and [`dispatch`] decides which widget operation that means. Events
//! that do not apply in the widget's current state are ignored rather than
//! treated as errors.

use crate::rating::StarIndex;

use super::{FormField, RatingView, RatingWidget};

/// Keys the inline editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Confirms the edit.
    Enter,
    /// Any other key; the editor text arrives separately as input.
    Other,
}

/// A raw event reported by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The star at this zero-based position was clicked.
    StarClicked(usize),
    /// The numeric label was clicked.
    ValueLabelClicked,
    /// The editor text changed to this value.
    EditorInput(String),
    /// A key was pressed inside the editor.
    EditorKey(EditorKey),
    /// The editor lost focus.
    EditorBlurred,
}

/// Outcome of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The rating changed.
    Changed,
    /// The event was handled but the rating is the same.
    Unchanged,
    /// The event does not apply in the current state.
    Ignored,
}

/// Applies `event` to `widget`.
pub fn dispatch<V: RatingView, F: FormField>(
    widget: &mut RatingWidget<V, F>,
    event: &UiEvent,
) -> Dispatch {
    let before = widget.value();
    let handled = match event {
        UiEvent::StarClicked(position) => StarIndex::new(*position).map_or_else(
            || {
                tracing::debug!("ignoring click on unknown star position {position}");
                false
            },
            |index| {
                widget.set_rating_from_star(index);
                true
            },
        ),
        UiEvent::ValueLabelClicked => widget.begin_edit(),
        UiEvent::EditorInput(text) => {
            let editing = widget.is_editing();
            widget.update_draft(text);
            editing
        }
        UiEvent::EditorKey(EditorKey::Enter) | UiEvent::EditorBlurred => {
            let editing = widget.is_editing();
            widget.commit_draft();
            editing
        }
        UiEvent::EditorKey(EditorKey::Other) => false,
    };

    if !handled {
        return Dispatch::Ignored;
    }
    if widget.value() == before {
        Dispatch::Unchanged
    } else {
        Dispatch::Changed
    }
}
