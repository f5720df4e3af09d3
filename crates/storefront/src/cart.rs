//! Shopping cart store.
//!
//! A cart line is identified by `(product id, size, color)`: adding the same
//! product with the same options merges into one line, while a different size
//! or color starts a new line. Removal and quantity updates match on the
//! product id alone and therefore touch every line of that product.
//!
//! Blank size or color values are treated as "not selected", so a line added
//! with `Some("")` merges with one added with `None`. This intentionally
//! differs from a strict equality key, where the two would be separate lines.
//!
//! Derived values (`total`, `count`) are recomputed synchronously at the end
//! of every mutating call, so readers always see values consistent with the
//! current lines. Money arithmetic saturates rather than overflowing.

use std::sync::Arc;

use beltline_core::{CurrencyCode, Price, ProductId, Quantity};
use rust_decimal::Decimal;

use crate::catalog::Product;

/// One row in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Arc<Product>,
    pub quantity: Quantity,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl CartLine {
    /// Unit price times quantity, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .saturating_mul(Decimal::from(self.quantity.get()))
    }

    /// Line total formatted for display.
    #[must_use]
    pub fn line_total_display(&self, currency: CurrencyCode) -> String {
        Price::new(self.line_total(), currency).display()
    }

    /// Selected options joined for display, e.g. `"M / Blue"`.
    #[must_use]
    pub fn options_label(&self) -> Option<String> {
        match (self.size.as_deref(), self.color.as_deref()) {
            (Some(size), Some(color)) => Some(format!("{size} / {color}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_owned()),
            (None, None) => None,
        }
    }

    fn has_key(&self, product_id: &ProductId, size: Option<&str>, color: Option<&str>) -> bool {
        self.product.id == *product_id
            && self.size.as_deref() == size
            && self.color.as_deref() == color
    }
}

/// Owned copy of the cart handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub count: u64,
}

/// The current set of cart lines plus derived totals.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    total: Decimal,
    count: u64,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product` with the chosen options.
    ///
    /// Merges into an existing line with the same `(id, size, color)` key,
    /// otherwise appends a new line. Blank size/color values count as "not
    /// selected".
    pub fn add_to_cart(
        &mut self,
        product: Arc<Product>,
        quantity: Quantity,
        size: Option<&str>,
        color: Option<&str>,
    ) {
        let size = normalize_option(size);
        let color = normalize_option(color);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.has_key(&product.id, size.as_deref(), color.as_deref()))
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product: Arc::clone(&product),
                quantity,
                size,
                color,
            });
        }

        self.recompute();
        tracing::debug!(
            product_id = %product.id,
            quantity = quantity.get(),
            cart_count = self.count,
            cart_total = %self.total,
            "Added to cart"
        );
    }

    /// Remove every line for `product_id`, whatever its size or color.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id.as_str() != product_id);
        self.recompute();
        tracing::debug!(
            product_id,
            removed_lines = before - self.lines.len(),
            cart_count = self.count,
            "Removed from cart"
        );
    }

    /// Set the quantity of every line for `product_id`.
    ///
    /// Requests below one are clamped to one; lines are never removed here.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        let quantity = Quantity::clamped(quantity);
        for line in self
            .lines
            .iter_mut()
            .filter(|line| line.product.id.as_str() == product_id)
        {
            line.quantity = quantity;
        }
        self.recompute();
        tracing::debug!(
            product_id,
            quantity = quantity.get(),
            cart_count = self.count,
            "Updated cart quantity"
        );
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.recompute();
        tracing::debug!("Cleared cart");
    }

    /// Current lines, in order of first addition.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Owned copy of lines and derived values.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total,
            count: self.count,
        }
    }

    fn recompute(&mut self) {
        self.total = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        self.count = self
            .lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum();
    }
}

fn normalize_option(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Arc<Product> {
        Catalog::builtin().by_id(id).unwrap()
    }

    fn qty(n: i64) -> Quantity {
        Quantity::clamped(n)
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_same_key_merges_quantities() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("1"), qty(1), Some("M"), None);
        cart.add_to_cart(product("1"), qty(2), Some("M"), None);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity.get(), 3);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Decimal::new(14997, 2));
    }

    #[test]
    fn test_different_options_are_distinct_lines() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("1"), qty(1), Some("M"), Some("White"));
        cart.add_to_cart(product("1"), qty(1), Some("L"), Some("White"));
        cart.add_to_cart(product("1"), qty(1), Some("M"), Some("Blue"));

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_blank_options_normalize_to_none() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("2"), qty(1), None, None);
        cart.add_to_cart(product("2"), qty(1), Some(""), Some("  "));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity.get(), 2);
        assert_eq!(cart.lines()[0].size, None);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("4"), qty(1), None, None);
        cart.add_to_cart(product("2"), qty(1), None, None);
        cart.add_to_cart(product("4"), qty(1), None, None);

        let order: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(order, ["4", "2"]);
    }

    #[test]
    fn test_remove_drops_every_line_of_product() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("1"), qty(1), Some("M"), None);
        cart.add_to_cart(product("1"), qty(2), Some("L"), None);
        cart.add_to_cart(product("2"), qty(1), None, Some("Brown"));

        cart.remove_from_cart("1");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product.id.as_str(), "2");
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(), Decimal::new(3999, 2));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("5"), qty(2), Some("S"), None);
        cart.remove_from_cart("nope");
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_update_quantity_applies_to_all_lines_of_product() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("1"), qty(1), Some("M"), None);
        cart.add_to_cart(product("1"), qty(5), Some("L"), None);
        cart.add_to_cart(product("4"), qty(1), None, None);

        cart.update_quantity("1", 4);

        assert_eq!(cart.lines()[0].quantity.get(), 4);
        assert_eq!(cart.lines()[1].quantity.get(), 4);
        assert_eq!(cart.lines()[2].quantity.get(), 1);
        assert_eq!(cart.count(), 9);
    }

    #[test]
    fn test_update_quantity_never_drops_below_one() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("3"), qty(3), Some("32"), None);

        for requested in [0, -1, -100] {
            cart.update_quantity("3", requested);
            assert_eq!(cart.lines().len(), 1);
            assert_eq!(cart.lines()[0].quantity.get(), 1);
            assert_eq!(cart.total(), Decimal::new(5999, 2));
        }
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("6"), qty(1), None, Some("Black"));
        cart.clear_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let mut cart = CartStore::new();
        let expected = |cart: &CartStore| -> Decimal {
            cart.lines()
                .iter()
                .map(|l| l.product.price * Decimal::from(l.quantity.get()))
                .sum()
        };

        cart.add_to_cart(product("1"), qty(2), Some("S"), None);
        assert_eq!(cart.total(), expected(&cart));
        cart.add_to_cart(product("6"), qty(1), None, None);
        assert_eq!(cart.total(), expected(&cart));
        cart.update_quantity("6", 3);
        assert_eq!(cart.total(), expected(&cart));
        cart.remove_from_cart("1");
        assert_eq!(cart.total(), expected(&cart));
        assert_eq!(cart.total(), Decimal::new(38997, 2));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("8"), qty(1), None, None);
        let snapshot = cart.snapshot();
        cart.clear_cart();

        assert_eq!(snapshot.lines.len(), 1);
        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.total, Decimal::new(3499, 2));
    }

    #[test]
    fn test_line_helpers() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product("7"), qty(2), Some("L"), Some("Pink"));
        let line = &cart.lines()[0];
        assert_eq!(line.line_total_display(CurrencyCode::USD), "$139.98");
        assert_eq!(line.options_label().as_deref(), Some("L / Pink"));
    }

    #[test]
    fn test_extreme_prices_saturate() {
        let mut pricey = (*product("6")).clone();
        pricey.price = Decimal::MAX;
        let pricey = Arc::new(pricey);

        let mut cart = CartStore::new();
        cart.add_to_cart(Arc::clone(&pricey), qty(2), None, None);
        assert_eq!(cart.lines()[0].line_total(), Decimal::MAX);
        assert_eq!(cart.total(), Decimal::MAX);

        cart.add_to_cart(product("1"), qty(1), Some("M"), None);
        assert_eq!(cart.total(), Decimal::MAX);
        assert_eq!(cart.count(), 3);
    }
}
