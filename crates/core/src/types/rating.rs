//! Product review rating.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside `0.0..=5.0`.
    #[error("rating must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// The rejected value.
        value: Decimal,
        /// Lowest allowed rating.
        min: Decimal,
        /// Highest allowed rating.
        max: Decimal,
    },
}

/// An average review rating between 0.0 and 5.0 inclusive.
///
/// ```
/// use beltline_core::Rating;
/// use rust_decimal::Decimal;
///
/// assert!(Rating::parse(Decimal::new(45, 1)).is_ok());
/// assert!(Rating::parse(Decimal::new(51, 1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// Highest possible rating.
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Validate a rating value.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if the value is negative or above 5.
    pub fn parse(value: Decimal) -> Result<Self, RatingError> {
        if value < Decimal::ZERO || value > Self::MAX {
            return Err(RatingError::OutOfRange {
                value,
                min: Decimal::ZERO,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Clamp a value into `0.0..=5.0`.
    #[must_use]
    pub fn clamped(value: Decimal) -> Self {
        Self(value.clamp(Decimal::ZERO, Self::MAX))
    }

    /// The rating as a decimal.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
