//! Status enums for multi-step flows.

use serde::{Deserialize, Serialize};

/// Position in the checkout flow.
///
/// Steps only move forward: shipping, then payment, then confirmation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    /// One-based step number shown in the progress indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Confirmation => 3,
        }
    }

    /// The step after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Shipping => Some(Self::Payment),
            Self::Payment => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shipping => write!(f, "Shipping"),
            Self::Payment => write!(f, "Payment"),
            Self::Confirmation => write!(f, "Confirmation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_advance_in_order() {
        assert_eq!(CheckoutStep::default(), CheckoutStep::Shipping);
        assert_eq!(CheckoutStep::Shipping.next(), Some(CheckoutStep::Payment));
        assert_eq!(
            CheckoutStep::Payment.next(),
            Some(CheckoutStep::Confirmation)
        );
        assert_eq!(CheckoutStep::Confirmation.next(), None);
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(CheckoutStep::Shipping.number(), 1);
        assert_eq!(CheckoutStep::Confirmation.number(), 3);
        assert!(CheckoutStep::Payment > CheckoutStep::Shipping);
    }
}
