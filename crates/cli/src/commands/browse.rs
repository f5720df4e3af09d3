//! Catalog browsing commands.

use std::io::Write;

use beltline_core::{Category, PriceBucket, SortOption};
use beltline_storefront::error::Result;
use beltline_storefront::query::{FilterSelection, ProductListing};
use beltline_storefront::state::Storefront;
use beltline_storefront::storage::SlotStore;
use clap::Args;

use crate::render;

/// Number of related products shown on a detail page.
const RELATED_LIMIT: usize = 4;

/// Filter and sort flags for product listings.
///
/// Repeating a flag widens that dimension (`--size S --size M` shows products
/// offered in S or M); different flags narrow the listing.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Category: clothing, belts, accessories
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Price range: 0-25, 25-50, 50-100, 100+
    #[arg(long = "price", value_name = "RANGE")]
    pub prices: Vec<PriceBucket>,

    /// Size label, e.g. M
    #[arg(long = "size", value_name = "SIZE")]
    pub sizes: Vec<String>,

    /// Color label, e.g. Black
    #[arg(long = "color", value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Sort order: featured, price-low, price-high, rating
    #[arg(long, default_value_t = SortOption::Featured)]
    pub sort: SortOption,
}

impl ListArgs {
    /// The filter selection these flags describe.
    #[must_use]
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            categories: self.categories.iter().copied().collect(),
            prices: self.prices.iter().copied().collect(),
            sizes: trimmed(&self.sizes),
            colors: trimmed(&self.colors),
        }
    }
}

fn trimmed<T: FromIterator<String>>(values: &[String]) -> T {
    values
        .iter()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .collect()
}

/// List products matching `args`.
pub fn products<S: SlotStore>(out: &mut impl Write, store: &Storefront<S>, args: &ListArgs) -> Result<()> {
    let selection = args.selection();
    tracing::debug!(active_filters = selection.active_count(), sort = %args.sort, "Listing products");
    let listing = ProductListing::build(store.catalog(), &selection, args.sort);
    render::listing(out, &listing, store.pricing().currency)?;
    Ok(())
}

/// List products whose name, description or category contains `query`.
pub fn search<S: SlotStore>(out: &mut impl Write, store: &Storefront<S>, query: &str) -> Result<()> {
    let results = store.catalog().search(query);
    let noun = if results.len() == 1 { "result" } else { "results" };
    writeln!(out, "{} {noun} for \"{query}\"", results.len())?;
    render::product_rows(out, &results, store.pricing().currency)?;
    Ok(())
}

/// Show one product with related products from its category.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown id.
pub fn show<S: SlotStore>(out: &mut impl Write, store: &Storefront<S>, id: &str) -> Result<()> {
    let product = store.product(id)?;
    let related = store.catalog().related(&product, RELATED_LIMIT);
    render::product_detail(out, &product, &related, store.pricing().currency)?;
    if store.wishlist().is_in_wishlist(id) {
        writeln!(out, "\nSaved in your wishlist")?;
    }
    Ok(())
}

pub fn featured<S: SlotStore>(out: &mut impl Write, store: &Storefront<S>) -> Result<()> {
    writeln!(out, "Featured products")?;
    render::product_rows(out, &store.catalog().featured(), store.pricing().currency)?;
    Ok(())
}
