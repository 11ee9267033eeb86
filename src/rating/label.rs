//! Descriptive labels shown next to the stars.

use std::fmt;

/// Text label for a rounded rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RatingLabel {
    /// Rounded rating 0, and the fallback for any unknown value.
    #[default]
    NoRating,
    /// Rounded rating 1.
    Poor,
    /// Rounded rating 2.
    Fair,
    /// Rounded rating 3.
    Good,
    /// Rounded rating 4.
    VeryGood,
    /// Rounded rating 5.
    Excellent,
}

impl RatingLabel {
    /// Maps a rounded rating to its label.
    ///
    /// Anything outside `0..=5` falls back to [`Self::NoRating`].
    #[must_use]
    pub const fn for_rounded(rounded: i64) -> Self {
        match rounded {
            1 => Self::Poor,
            2 => Self::Fair,
            3 => Self::Good,
            4 => Self::VeryGood,
            5 => Self::Excellent,
            _ => Self::NoRating,
        }
    }

    /// Returns the human-readable text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::NoRating => "No rating",
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
