//! Star slots and their partial fills.

use serde::Serialize;

use super::Rating;

/// Number of star slots a rating is drawn with.
pub const STAR_COUNT: usize = 5;

/// Zero-based position of a star slot, always below [`STAR_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarIndex(u8);

impl StarIndex {
    /// The first (leftmost) star.
    pub const FIRST: Self = Self(0);

    /// The last (rightmost) star.
    pub const LAST: Self = Self(4);

    /// Validates a zero-based position.
    ///
    /// Returns `None` when `position` is not a star slot.
    #[must_use]
    pub fn new(position: usize) -> Option<Self> {
        u8::try_from(position)
            .ok()
            .filter(|value| usize::from(*value) < STAR_COUNT)
            .map(Self)
    }

    /// Returns every star slot in display order.
    #[must_use]
    pub const fn all() -> [Self; STAR_COUNT] {
        [Self(0), Self(1), Self(2), Self(3), Self(4)]
    }

    /// Returns the zero-based position.
    #[must_use]
    pub fn position(self) -> usize {
        usize::from(self.0)
    }

    /// Returns the one-based ordinal, which is also the rating the star sets.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.0.saturating_add(1)
    }

    /// Returns the star to the left, staying on the first star.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Returns the star to the right, staying on the last star.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 < Self::LAST.0 {
            Self(self.0.saturating_add(1))
        } else {
            self
        }
    }
}

/// Fill of a single star slot as a percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct StarFill(f64);

impl StarFill {
    /// An empty star.
    pub const EMPTY: Self = Self(0.0);

    /// A completely filled star.
    pub const FULL: Self = Self(100.0);

    /// Computes `clamp((value - index) * 100, 0, 100)`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "partial fill is the fractional part of the rating above this star"
    )]
    pub fn for_star(rating: Rating, index: StarIndex) -> Self {
        let above = rating.get() - f64::from(index.0);
        Self((above * 100.0).clamp(0.0, 100.0))
    }

    /// Returns the fill percentage.
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }

    /// Returns the fill as a fraction of one star.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "percent to fraction conversion")]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Returns true when the star is drawn completely filled.
    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 >= 100.0
    }

    /// Returns true when the star is drawn empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 <= 0.0
    }
}
