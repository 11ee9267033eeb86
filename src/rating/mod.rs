//! Rating value type and the derived views it drives.
//!
//! A [`Rating`] is a continuous value in the closed interval `[0, 5]`. Every
//! constructor coerces its input into that interval instead of rejecting it,
//! so the rest of the crate can treat an existing `Rating` as always valid.
//!
//! Three views are derived from a rating:
//!
//! - the numeric label, formatted to exactly one decimal place
//!   ([`Rating::to_one_decimal`]);
//! - the descriptive text ([`Rating::label`]), chosen by rounding half up;
//! - the per-star fill percentages ([`Rating::star_fills`]).

use std::fmt;

mod fill;
mod label;
mod parse;

pub use fill::{STAR_COUNT, StarFill, StarIndex};
pub use label::RatingLabel;
pub use parse::parse_leading_float;

const MAX_VALUE: f64 = 5.0;

/// A rating clamped to `[0, 5]`.
///
/// # Example
///
/// ```
/// use bookrate::rating::{Rating, RatingLabel};
///
/// let rating = Rating::coerce("7.2");
/// assert_eq!(rating, Rating::MAX);
/// assert_eq!(rating.label(), RatingLabel::Excellent);
/// assert_eq!(Rating::coerce("abc").to_one_decimal(), "0.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rating(f64);

impl Rating {
    /// The lowest rating, also the fallback for unparseable input.
    pub const ZERO: Self = Self(0.0);

    /// The highest rating.
    pub const MAX: Self = Self(MAX_VALUE);

    /// Creates a rating, snapping out-of-range values to the nearest bound.
    ///
    /// `NaN` becomes zero. Negative zero is normalised to zero so it never
    /// renders as `-0.0`.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            Self::ZERO
        } else if value >= MAX_VALUE {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Coerces free-form text into a rating.
    ///
    /// The leading number is parsed the way a browser parses a float from
    /// text (see [`parse_leading_float`]); anything unparseable becomes zero
    /// and the result is clamped.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        parse_leading_float(raw).map_or(Self::ZERO, Self::clamped)
    }

    /// The integer rating selected by clicking the star at `index`.
    #[must_use]
    pub fn from_star(index: StarIndex) -> Self {
        Self(f64::from(index.ordinal()))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns the descriptive label for this rating.
    ///
    /// The value is rounded half up, so `3.5` is [`RatingLabel::VeryGood`].
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is clamped to [0, 5] so the rounded result fits"
    )]
    pub const fn label(self) -> RatingLabel {
        // Rounding half away from zero equals half up for non-negative values.
        RatingLabel::for_rounded(self.0.round() as i64)
    }

    /// Returns the fill of every star slot, first star first.
    #[must_use]
    pub fn star_fills(self) -> [StarFill; STAR_COUNT] {
        StarIndex::all().map(|index| StarFill::for_star(self, index))
    }

    /// Formats the value with exactly one decimal place.
    ///
    /// Exact ties (`x.25`, `x.75`) round up, matching how the value is shown
    /// in the host form.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "tie adjustment nudges the value past the midpoint"
    )]
    pub fn to_one_decimal(self) -> String {
        if is_one_decimal_tie(self.0) {
            format!("{:.1}", self.0 + 0.05)
        } else {
            format!("{:.1}", self.0)
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_one_decimal())
    }
}

/// Returns true when `value` sits exactly halfway between two tenths.
///
/// Only quarters can do that in binary floating point, and multiplying by
/// four is exact.
#[expect(
    clippy::float_arithmetic,
    clippy::float_cmp,
    reason = "multiplying by four is exact; the comparisons test integrality"
)]
fn is_one_decimal_tie(value: f64) -> bool {
    let quarters = value * 4.0;
    quarters.fract() == 0.0 && quarters % 2.0 == 1.0
}

#[cfg(test)]
mod tests;
