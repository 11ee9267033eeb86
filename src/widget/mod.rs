//! Star-rating widget state machine.
//!
//! [`RatingWidget`] holds a single [`Rating`] and keeps three views of it in
//! sync through an injected [`RatingView`]: the star fills, the one-decimal
//! numeric label, and the descriptive text. After every change it publishes
//! the one-decimal value into an injected [`FormField`], which is the only
//! externally observable sink.
//!
//! # States
//!
//! ```text
//! Display --begin_edit--> Edit { draft }
//! Edit    --commit_edit / commit_draft (blur or Enter)--> Display
//! ```
//!
//! A star click is honoured in both states. While editing, the pending draft
//! is committed first, as the editor loses focus to the star, and the star's
//! rating is applied afterwards.
//!
//! No operation fails: unparseable text becomes zero and out-of-range values
//! are clamped.

use std::mem;

use crate::rating::{Rating, StarIndex};

pub mod events;
mod field;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod view;

pub use events::{Dispatch, EditorKey, UiEvent, dispatch};
pub use field::{FormField, HiddenField};
pub use view::{RatingView, RenderedRating};

#[cfg(test)]
pub(crate) use field::MockFormField;
#[cfg(test)]
pub(crate) use view::MockRatingView;

/// Whether the numeric value is shown as a label or an editable field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetMode {
    /// The numeric label is shown.
    #[default]
    Display,
    /// The numeric label is replaced by an editor.
    Edit {
        /// Text currently in the editor.
        draft: String,
    },
}

/// A rating control bound to a render target and a host form field.
#[derive(Debug)]
pub struct RatingWidget<V, F> {
    value: Rating,
    mode: WidgetMode,
    view: V,
    field: F,
}

impl<V: RatingView, F: FormField> RatingWidget<V, F> {
    /// Attaches to `field`, using its current text as the initial rating.
    ///
    /// Text that does not parse as a number starts the widget at zero. The
    /// coerced value is written back to the field and every view is drawn.
    pub fn attach(view: V, field: F) -> Self {
        let initial = Rating::coerce(&field.read());
        Self::with_rating(view, field, initial)
    }

    /// Attaches with an already numeric initial value, such as an average.
    pub fn with_value(view: V, field: F, initial: f64) -> Self {
        Self::with_rating(view, field, Rating::clamped(initial))
    }

    fn with_rating(view: V, field: F, initial: Rating) -> Self {
        let mut widget = Self {
            value: initial,
            mode: WidgetMode::Display,
            view,
            field,
        };
        widget.update_rating(initial);
        widget
    }

    /// Returns the current rating.
    #[must_use]
    pub const fn value(&self) -> Rating {
        self.value
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> &WidgetMode {
        &self.mode
    }

    /// Returns true while the editor is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, WidgetMode::Edit { .. })
    }

    /// Returns the render target.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Returns the host form field.
    pub const fn field(&self) -> &F {
        &self.field
    }

    /// Releases the render target and the host field.
    pub fn into_parts(self) -> (V, F) {
        (self.view, self.field)
    }

    /// Applies the integer rating of the clicked star.
    ///
    /// An open editor is committed before the star's rating is applied.
    pub fn set_rating_from_star(&mut self, index: StarIndex) {
        if self.is_editing() {
            tracing::debug!("star {} clicked while editing", index.ordinal());
            self.commit_draft();
        }
        self.update_rating(Rating::from_star(index));
    }

    /// Opens the editor, pre-filled with the current value.
    ///
    /// Returns false, leaving the widget untouched, when the editor is
    /// already open.
    pub fn begin_edit(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        let draft = self.value.to_one_decimal();
        self.view.open_editor(&draft);
        self.mode = WidgetMode::Edit { draft };
        true
    }

    /// Replaces the editor text. Ignored when the editor is closed.
    pub fn update_draft(&mut self, text: &str) {
        if let WidgetMode::Edit { draft } = &mut self.mode {
            text.clone_into(draft);
        }
    }

    /// Commits `raw` as the new rating and closes the editor.
    ///
    /// `raw` is coerced: unparseable text becomes zero, and the result is
    /// clamped to `[0, 5]`. There is no cancel path, so an empty editor
    /// commits zero.
    pub fn commit_edit(&mut self, raw: &str) {
        if let WidgetMode::Edit { .. } = mem::take(&mut self.mode) {
            self.view.close_editor();
        }
        self.update_rating(Rating::coerce(raw));
    }

    /// Commits whatever the editor currently holds. Ignored when closed.
    pub fn commit_draft(&mut self) {
        if let WidgetMode::Edit { draft } = mem::take(&mut self.mode) {
            self.view.close_editor();
            self.update_rating(Rating::coerce(&draft));
        }
    }

    /// Redraws every view from the current value.
    pub fn render(&mut self) {
        tracing::trace!("rendering rating {}", self.value);
        self.view.set_value_label(&self.value.to_one_decimal());
        self.view.set_text_label(self.value.label().text());
        for (index, fill) in StarIndex::all().into_iter().zip(self.value.star_fills()) {
            self.view.set_star_fill(index, fill);
        }
    }

    /// Returns what the widget currently displays.
    #[must_use]
    pub fn snapshot(&self) -> RenderedRating {
        RenderedRating {
            value_label: self.value.to_one_decimal(),
            text_label: self.value.label().text().to_owned(),
            star_fills: self.value.star_fills(),
            editor: match &self.mode {
                WidgetMode::Display => None,
                WidgetMode::Edit { draft } => Some(draft.clone()),
            },
        }
    }

    fn update_rating(&mut self, rating: Rating) {
        self.value = rating;
        self.field.write(&rating.to_one_decimal());
        self.render();
    }
}
