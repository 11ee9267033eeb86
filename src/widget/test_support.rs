//! Recording render target for widget tests.
//!
//! # Examples
//!
//! ```
//! use bookrate::widget::test_support::RecordingView;
//! use bookrate::widget::{HiddenField, RatingWidget};
//!
//! let widget = RatingWidget::attach(RecordingView::default(), HiddenField::new("rating", "3.5"));
//! assert_eq!(widget.view().current().text_label, "Very Good");
//! ```

use crate::rating::{StarFill, StarIndex};

use super::{RatingView, RenderedRating};

/// A single call made on a [`RatingView`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    /// `set_star_fill` was called.
    StarFill(StarIndex, StarFill),
    /// `set_value_label` was called.
    ValueLabel(String),
    /// `set_text_label` was called.
    TextLabel(String),
    /// `open_editor` was called with this draft.
    OpenEditor(String),
    /// `close_editor` was called.
    CloseEditor,
}

/// Render target that remembers every call and the resulting display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingView {
    calls: Vec<ViewCall>,
    current: RenderedRating,
}

impl RecordingView {
    /// Returns the calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> &[ViewCall] {
        &self.calls
    }

    /// Returns and clears the recorded calls.
    pub fn take_calls(&mut self) -> Vec<ViewCall> {
        std::mem::take(&mut self.calls)
    }

    /// Returns what the view currently shows.
    #[must_use]
    pub const fn current(&self) -> &RenderedRating {
        &self.current
    }
}

impl RatingView for RecordingView {
    fn set_star_fill(&mut self, index: StarIndex, fill: StarFill) {
        if let Some(slot) = self.current.star_fills.get_mut(index.position()) {
            *slot = fill;
        }
        self.calls.push(ViewCall::StarFill(index, fill));
    }

    fn set_value_label(&mut self, text: &str) {
        text.clone_into(&mut self.current.value_label);
        self.calls.push(ViewCall::ValueLabel(text.to_owned()));
    }

    fn set_text_label(&mut self, text: &str) {
        text.clone_into(&mut self.current.text_label);
        self.calls.push(ViewCall::TextLabel(text.to_owned()));
    }

    fn open_editor(&mut self, draft: &str) {
        self.current.editor = Some(draft.to_owned());
        self.calls.push(ViewCall::OpenEditor(draft.to_owned()));
    }

    fn close_editor(&mut self) {
        self.current.editor = None;
        self.calls.push(ViewCall::CloseEditor);
    }
}
