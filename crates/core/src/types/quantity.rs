//! Cart line quantity.

use serde::{Deserialize, Serialize};

/// A line item quantity, always at least one.
///
/// Requests below one are clamped up rather than rejected, and values above
/// `u32::MAX` are clamped down, so every constructor is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A quantity of one.
    pub const ONE: Self = Self(1);

    /// Clamp an arbitrary requested quantity into `1..=u32::MAX`.
    #[must_use]
    pub fn clamped(requested: i64) -> Self {
        let value = requested.clamp(1, i64::from(u32::MAX));
        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// The quantity as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<i64> for Quantity {
    fn from(requested: i64) -> Self {
        Self::clamped(requested)
    }
}

impl From<u32> for Quantity {
    fn from(requested: u32) -> Self {
        Self(requested.max(1))
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_floors_at_one() {
        assert_eq!(Quantity::clamped(0).get(), 1);
        assert_eq!(Quantity::clamped(-5).get(), 1);
        assert_eq!(Quantity::clamped(i64::MIN).get(), 1);
    }

    #[test]
    fn test_clamped_keeps_valid_values() {
        assert_eq!(Quantity::clamped(1).get(), 1);
        assert_eq!(Quantity::clamped(42).get(), 42);
    }

    #[test]
    fn test_clamped_caps_at_u32_max() {
        assert_eq!(Quantity::clamped(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn test_saturating_add() {
        assert_eq!(Quantity::clamped(1).saturating_add(Quantity::clamped(2)).get(), 3);
        assert_eq!(
            Quantity::clamped(i64::MAX).saturating_add(Quantity::ONE).get(),
            u32::MAX
        );
    }

    #[test]
    fn test_from_u32_zero_is_one() {
        assert_eq!(Quantity::from(0_u32), Quantity::ONE);
    }

    #[test]
    fn test_serde_clamps_on_read() {
        let quantity: Quantity = serde_json::from_str("-3").unwrap();
        assert_eq!(quantity, Quantity::ONE);
        assert_eq!(serde_json::to_string(&Quantity::clamped(4)).unwrap(), "4");
    }
}
