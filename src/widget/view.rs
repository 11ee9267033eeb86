//! Render target seam for the rating widget.

use serde::Serialize;

use crate::rating::{STAR_COUNT, StarFill, StarIndex};

/// Surfaces a [`RatingWidget`](super::RatingWidget) draws into.
///
/// Implementations are injected at construction, so the widget never looks
/// its targets up. Every method is a plain setter; the widget decides what to
/// show and the view only displays it.
#[cfg_attr(test, mockall::automock)]
pub trait RatingView {
    /// Sets how much of the star at `index` is filled.
    fn set_star_fill(&mut self, index: StarIndex, fill: StarFill);

    /// Sets the numeric label, already formatted to one decimal place.
    fn set_value_label(&mut self, text: &str);

    /// Sets the descriptive label ("Good", "Excellent", ...).
    fn set_text_label(&mut self, text: &str);

    /// Hides the numeric label and shows a focused editor holding `draft`.
    fn open_editor(&mut self, draft: &str);

    /// Hides the editor and shows the numeric label again.
    fn close_editor(&mut self);
}

/// Snapshot of everything a rating widget currently displays.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderedRating {
    /// Numeric label at one decimal place.
    pub value_label: String,
    /// Descriptive label.
    pub text_label: String,
    /// Fill of each star, first star first.
    pub star_fills: [StarFill; STAR_COUNT],
    /// Editor text while the numeric label is being edited.
    pub editor: Option<String>,
}

impl RenderedRating {
    /// Returns the fill of the star at `index`.
    #[must_use]
    pub fn star_fill(&self, index: StarIndex) -> StarFill {
        self.star_fills
            .get(index.position())
            .copied()
            .unwrap_or_default()
    }
}
