//! Order total preview.

use std::io::Write;

use beltline_storefront::error::{AppError, Result};
use beltline_storefront::totals::{OrderSummary, PricingConfig};
use rust_decimal::Decimal;

use crate::render;

/// Largest subtotal accepted from the command line.
const MAX_SUBTOTAL: i64 = 1_000_000_000;

/// Print shipping, tax and total for `subtotal`.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a negative subtotal or one above
/// `MAX_SUBTOTAL`.
pub fn run(out: &mut impl Write, subtotal: Decimal, pricing: &PricingConfig) -> Result<()> {
    if subtotal < Decimal::ZERO {
        return Err(AppError::BadRequest(format!(
            "subtotal must not be negative (got {subtotal})"
        )));
    }
    if subtotal > Decimal::from(MAX_SUBTOTAL) {
        return Err(AppError::BadRequest(format!(
            "subtotal must not exceed {MAX_SUBTOTAL} (got {subtotal})"
        )));
    }
    let summary = OrderSummary::from_subtotal(subtotal, pricing);
    render::order_summary(out, &summary)?;
    if !summary.ships_free() {
        let remaining = pricing.free_shipping_threshold - subtotal;
        writeln!(
            out,
            "Add more than {} to qualify for free shipping",
            beltline_core::Price::new(remaining, pricing.currency)
        )?;
    }
    Ok(())
}
