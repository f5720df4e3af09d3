//! Plain-text rendering of storefront views.

use std::io::{self, Write};
use std::sync::Arc;

use beltline_core::CurrencyCode;
use beltline_storefront::cart::CartStore;
use beltline_storefront::catalog::Product;
use beltline_storefront::checkout::OrderConfirmation;
use beltline_storefront::query::ProductListing;
use beltline_storefront::totals::OrderSummary;

/// One product per line: id, name, price, category, rating.
pub fn product_row(out: &mut impl Write, product: &Product, currency: CurrencyCode) -> io::Result<()> {
    writeln!(
        out,
        "{:>4}  {:<24} {:>9}  {:<12} {}",
        product.id.as_str(),
        product.name,
        product.price_display(currency),
        product.category.label(),
        product.rating,
    )
}

pub fn product_rows(
    out: &mut impl Write,
    products: &[Arc<Product>],
    currency: CurrencyCode,
) -> io::Result<()> {
    for product in products {
        product_row(out, product, currency)?;
    }
    Ok(())
}

pub fn listing(out: &mut impl Write, listing: &ProductListing, currency: CurrencyCode) -> io::Result<()> {
    writeln!(out, "{} (sorted by {})", listing.summary(), listing.sort.label())?;
    product_rows(out, &listing.products, currency)
}

pub fn product_detail(
    out: &mut impl Write,
    product: &Product,
    related: &[Arc<Product>],
    currency: CurrencyCode,
) -> io::Result<()> {
    writeln!(out, "{} [{}]", product.name, product.id)?;
    writeln!(out, "{}", product.price_display(currency))?;
    writeln!(out, "Category: {}", product.category.label())?;
    writeln!(out, "Rating:   {} / 5", product.rating)?;
    writeln!(
        out,
        "Stock:    {}",
        if product.in_stock { "In stock" } else { "Out of stock" }
    )?;
    if let Some(sizes) = &product.sizes {
        writeln!(out, "Sizes:    {}", sizes.join(", "))?;
    }
    if let Some(colors) = &product.colors {
        writeln!(out, "Colors:   {}", colors.join(", "))?;
    }
    if let Some(image) = product.thumbnail() {
        writeln!(out, "Image:    {image}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", product.description)?;

    if !related.is_empty() {
        writeln!(out)?;
        writeln!(out, "You may also like:")?;
        product_rows(out, related, currency)?;
    }
    Ok(())
}

pub fn cart(out: &mut impl Write, cart: &CartStore, summary: &OrderSummary) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "Your cart is empty");
    }

    writeln!(out, "Cart ({} items)", cart.count())?;
    for line in cart.lines() {
        let options = line
            .options_label()
            .map(|label| format!(" ({label})"))
            .unwrap_or_default();
        writeln!(
            out,
            "{:>4} x {}{} [{}]  {}",
            line.quantity.get(),
            line.product.name,
            options,
            line.product.id,
            line.line_total_display(summary.currency),
        )?;
    }
    order_summary(out, summary)
}

pub fn order_summary(out: &mut impl Write, summary: &OrderSummary) -> io::Result<()> {
    writeln!(out, "Subtotal: {:>10}", summary.subtotal_display())?;
    writeln!(out, "Shipping: {:>10}", summary.shipping_display())?;
    writeln!(out, "Tax:      {:>10}", summary.tax_display())?;
    writeln!(out, "Total:    {:>10}", summary.total_display())
}

pub fn confirmation(out: &mut impl Write, order: &OrderConfirmation) -> io::Result<()> {
    writeln!(out, "Order confirmed: {}", order.order_number)?;
    writeln!(
        out,
        "Placed {} for {}",
        order.placed_at.format("%Y-%m-%d %H:%M UTC"),
        order.shipping.full_name()
    )?;
    writeln!(
        out,
        "Shipping to {}, {}, {} {}, {}",
        order.shipping.address,
        order.shipping.city,
        order.shipping.state,
        order.shipping.zip,
        order.shipping.country
    )?;
    writeln!(out, "A confirmation email will be sent to {}", order.shipping.email)?;
    order_summary(out, &order.summary)
}
