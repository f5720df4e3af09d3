//! Order total calculation.
//!
//! Shipping is free when the subtotal is strictly greater than the free
//! shipping threshold, otherwise a flat rate applies. Tax is a flat rate on
//! the subtotal and is not applied to shipping. Amounts are kept exact; they
//! are only rounded to cents for display. Arithmetic saturates at
//! `Decimal::MAX` instead of overflowing.

use beltline_core::{CurrencyCode, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartStore;

/// Shipping and tax parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Decimal,
    /// Shipping charged at or below the threshold.
    pub flat_shipping: Decimal,
    /// Fraction of the subtotal charged as tax.
    pub tax_rate: Decimal,
    pub currency: CurrencyCode,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::from(50),
            flat_shipping: Decimal::new(599, 2),
            tax_rate: Decimal::new(7, 2),
            currency: CurrencyCode::USD,
        }
    }
}

/// Subtotal, shipping, tax and grand total for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub currency: CurrencyCode,
}

impl OrderSummary {
    /// Price an order with the given subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal, pricing: &PricingConfig) -> Self {
        let shipping = if subtotal > pricing.free_shipping_threshold {
            Decimal::ZERO
        } else {
            pricing.flat_shipping
        };
        let tax = subtotal.saturating_mul(pricing.tax_rate);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal.saturating_add(shipping).saturating_add(tax),
            currency: pricing.currency,
        }
    }

    /// Price the current contents of `cart`.
    #[must_use]
    pub fn for_cart(cart: &CartStore, pricing: &PricingConfig) -> Self {
        Self::from_subtotal(cart.total(), pricing)
    }

    /// Whether shipping is free.
    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }

    #[must_use]
    pub fn subtotal_display(&self) -> String {
        self.format(self.subtotal)
    }

    /// `"Free"` when no shipping is charged.
    #[must_use]
    pub fn shipping_display(&self) -> String {
        if self.ships_free() {
            "Free".to_owned()
        } else {
            self.format(self.shipping)
        }
    }

    #[must_use]
    pub fn tax_display(&self) -> String {
        self.format(self.tax)
    }

    #[must_use]
    pub fn total_display(&self) -> String {
        self.format(self.total)
    }

    fn format(&self, amount: Decimal) -> String {
        Price::new(amount, self.currency).display()
    }
}
