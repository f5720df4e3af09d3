//! Product listing pipeline: filter selection, filtering and sorting.
//!
//! Within one dimension selected values are alternatives (size S *or* M);
//! across dimensions every non-empty selection must match. An empty
//! dimension places no constraint. Sorting is stable, so products that tie on
//! the sort key keep their catalog order.

use std::collections::BTreeSet;
use std::sync::Arc;

use beltline_core::{Category, FilterDimension, PriceBucket, SortOption};

use crate::catalog::{Catalog, Product};

/// One checkbox in the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

const SIZE_OPTIONS: [FilterOption; 4] = [
    FilterOption { value: "S", label: "Small" },
    FilterOption { value: "M", label: "Medium" },
    FilterOption { value: "L", label: "Large" },
    FilterOption { value: "XL", label: "X-Large" },
];

const COLOR_OPTIONS: [FilterOption; 5] = [
    FilterOption { value: "Black", label: "Black" },
    FilterOption { value: "White", label: "White" },
    FilterOption { value: "Blue", label: "Blue" },
    FilterOption { value: "Brown", label: "Brown" },
    FilterOption { value: "Gray", label: "Gray" },
];

/// The checkboxes offered for `dimension`, in sidebar order.
#[must_use]
pub fn filter_options(dimension: FilterDimension) -> Vec<FilterOption> {
    match dimension {
        FilterDimension::Category => Category::ALL
            .into_iter()
            .map(|c| FilterOption {
                value: c.as_str(),
                label: c.label(),
            })
            .collect(),
        FilterDimension::Price => PriceBucket::ALL
            .into_iter()
            .map(|b| FilterOption {
                value: b.as_str(),
                label: b.label(),
            })
            .collect(),
        FilterDimension::Size => SIZE_OPTIONS.to_vec(),
        FilterDimension::Color => COLOR_OPTIONS.to_vec(),
    }
}

/// Active filter values per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub categories: BTreeSet<Category>,
    pub prices: BTreeSet<PriceBucket>,
    pub sizes: BTreeSet<String>,
    pub colors: BTreeSet<String>,
}

impl FilterSelection {
    /// No constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selection a category page starts with.
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        Self {
            categories: BTreeSet::from([category]),
            ..Self::default()
        }
    }

    /// Check or uncheck `value` in `dimension`.
    ///
    /// Values that are not valid for a typed dimension (category, price) and
    /// blank size or color values are ignored with a warning. Returns whether
    /// the selection changed.
    pub fn set(&mut self, dimension: FilterDimension, value: &str, checked: bool) -> bool {
        match dimension {
            FilterDimension::Category => match value.parse::<Category>() {
                Ok(category) => toggle(&mut self.categories, category, checked),
                Err(e) => reject(dimension, &e),
            },
            FilterDimension::Price => match value.parse::<PriceBucket>() {
                Ok(bucket) => toggle(&mut self.prices, bucket, checked),
                Err(e) => reject(dimension, &e),
            },
            FilterDimension::Size => toggle_label(&mut self.sizes, dimension, value, checked),
            FilterDimension::Color => toggle_label(&mut self.colors, dimension, value, checked),
        }
    }

    /// Drop every selected value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop every selected value except the page's own category.
    pub fn reset_to(&mut self, category: Option<Category>) {
        *self = category.map_or_else(Self::default, Self::for_category);
    }

    /// Total number of checked values across all dimensions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.prices.len() + self.sizes.len() + self.colors.len()
    }

    /// Whether no dimension is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Whether `product` passes every constrained dimension.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        (self.categories.is_empty() || self.categories.contains(&product.category))
            && (self.prices.is_empty()
                || self.prices.iter().any(|bucket| bucket.contains(product.price)))
            && (self.sizes.is_empty() || product.offers_any_size(&self.sizes))
            && (self.colors.is_empty() || product.offers_any_color(&self.colors))
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T, checked: bool) -> bool {
    if checked {
        set.insert(value)
    } else {
        set.remove(&value)
    }
}

fn toggle_label(
    set: &mut BTreeSet<String>,
    dimension: FilterDimension,
    value: &str,
    checked: bool,
) -> bool {
    let value = value.trim();
    if value.is_empty() {
        tracing::warn!(%dimension, "Ignoring blank filter value");
        return false;
    }
    toggle(set, value.to_owned(), checked)
}

fn reject(dimension: FilterDimension, error: &beltline_core::ParseEnumError) -> bool {
    tracing::warn!(%dimension, %error, "Ignoring unknown filter value");
    false
}

/// Filter the catalog and order the result.
#[must_use]
pub fn query(catalog: &Catalog, filters: &FilterSelection, sort: SortOption) -> Vec<Arc<Product>> {
    let mut products: Vec<Arc<Product>> = catalog
        .all()
        .iter()
        .filter(|product| filters.matches(product))
        .cloned()
        .collect();

    // `sort_by` is stable; ties keep catalog order.
    match sort {
        SortOption::Featured => {}
        SortOption::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }

    products
}

/// A rendered product listing.
#[derive(Debug, Clone)]
pub struct ProductListing {
    pub products: Vec<Arc<Product>>,
    pub sort: SortOption,
}

impl ProductListing {
    /// Run [`query`] and keep the sort it used.
    #[must_use]
    pub fn build(catalog: &Catalog, filters: &FilterSelection, sort: SortOption) -> Self {
        Self {
            products: query(catalog, filters, sort),
            sort,
        }
    }

    /// e.g. `"Showing 1 product"`, `"Showing 4 products"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let n = self.products.len();
        format!("Showing {n} product{}", if n == 1 { "" } else { "s" })
    }
}
