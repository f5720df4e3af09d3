//! Checkout flow: shipping details, order placement, confirmation.
//!
//! No payment data is collected. Placing an order snapshots the cart, prices
//! it, and empties the cart.

use beltline_core::{CheckoutStep, Email, OrderNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::cart::{CartLine, CartStore};
use crate::totals::{OrderSummary, PricingConfig};

/// Country used when the form leaves it blank.
pub const DEFAULT_COUNTRY: &str = "US";

/// Checkout errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("your cart is empty")]
    EmptyCart,
    #[error("{field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("checkout is at the {actual} step, expected {expected}")]
    WrongStep {
        expected: CheckoutStep,
        actual: CheckoutStep,
    },
}

/// Raw shipping form input, as typed by the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Validated shipping details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl ShippingDetails {
    /// `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl TryFrom<ShippingForm> for ShippingDetails {
    type Error = CheckoutError;

    fn try_from(form: ShippingForm) -> Result<Self, Self::Error> {
        let email = Email::parse(&form.email).map_err(|e| CheckoutError::InvalidField {
            field: "email",
            reason: e.to_string(),
        })?;
        let country = form.country.trim();

        Ok(Self {
            email,
            first_name: required("firstName", &form.first_name)?,
            last_name: required("lastName", &form.last_name)?,
            address: required("address", &form.address)?,
            city: required("city", &form.city)?,
            state: required("state", &form.state)?,
            zip: required("zip", &form.zip)?,
            country: if country.is_empty() {
                DEFAULT_COUNTRY.to_owned()
            } else {
                country.to_owned()
            },
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, CheckoutError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CheckoutError::InvalidField {
            field,
            reason: "is required".to_owned(),
        });
    }
    Ok(value.to_owned())
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_number: OrderNumber,
    pub placed_at: DateTime<Utc>,
    pub shipping: ShippingDetails,
    pub lines: Vec<CartLine>,
    pub summary: OrderSummary,
}

/// One pass through the checkout steps.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    step: CheckoutStep,
    shipping: Option<ShippingDetails>,
}

impl CheckoutSession {
    /// Start checkout for `cart`.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart has no lines.
    pub fn begin(cart: &CartStore) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self {
            step: CheckoutStep::Shipping,
            shipping: None,
        })
    }

    /// The current step.
    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Shipping details, once submitted.
    #[must_use]
    pub const fn shipping(&self) -> Option<&ShippingDetails> {
        self.shipping.as_ref()
    }

    /// Validate the shipping form and move on to payment.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::WrongStep` outside the shipping step and
    /// `CheckoutError::InvalidField` for the first invalid field.
    pub fn submit_shipping(&mut self, form: ShippingForm) -> Result<&ShippingDetails, CheckoutError> {
        self.expect_step(CheckoutStep::Shipping)?;
        let details = ShippingDetails::try_from(form)?;
        self.advance();
        Ok(self.shipping.insert(details))
    }

    /// Place the order for the current cart contents and empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::WrongStep` outside the payment step and
    /// `CheckoutError::EmptyCart` if the cart was emptied meanwhile.
    #[instrument(skip_all)]
    pub fn place_order(
        &mut self,
        cart: &mut CartStore,
        pricing: &PricingConfig,
    ) -> Result<OrderConfirmation, CheckoutError> {
        self.expect_step(CheckoutStep::Payment)?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let Some(shipping) = self.shipping.clone() else {
            return Err(CheckoutError::WrongStep {
                expected: CheckoutStep::Shipping,
                actual: self.step,
            });
        };

        let snapshot = cart.snapshot();
        let summary = OrderSummary::from_subtotal(snapshot.total, pricing);
        let confirmation = OrderConfirmation {
            order_number: OrderNumber::generate(),
            placed_at: Utc::now(),
            shipping,
            lines: snapshot.lines,
            summary,
        };

        cart.clear_cart();
        self.advance();
        tracing::info!(
            order_number = %confirmation.order_number,
            items = snapshot.count,
            total = %confirmation.summary.total,
            "Order placed"
        );
        Ok(confirmation)
    }

    fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    fn expect_step(&self, expected: CheckoutStep) -> Result<(), CheckoutError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CheckoutError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }
}
