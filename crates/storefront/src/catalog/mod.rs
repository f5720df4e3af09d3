//! Read-only product catalog.
//!
//! The catalog is created once at startup, either from the built-in product
//! list or from a YAML override file, and is shared (`Arc`) by everything
//! that renders or stores products. All queries are pure and total: a miss is
//! an empty list or `None`, never an error.

mod seed;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use beltline_core::{Category, CurrencyCode, Price, ProductId, Rating};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

/// Errors raised while loading or validating a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("product {0} has no images")]
    MissingImages(ProductId),
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
    #[error("product {0} costs more than the {max} limit", max = MAX_PRICE)]
    PriceTooHigh(ProductId),
}

/// Highest unit price a catalog entry may carry.
pub const MAX_PRICE: i64 = 1_000_000;

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub description: String,
    /// Image URIs; the first one is the listing thumbnail.
    pub images: Vec<String>,
    /// Size labels, or `None` when size does not apply to this product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    /// Color labels, or `None` when color does not apply to this product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub featured: bool,
    /// Informational only; nothing enforces stock.
    pub in_stock: bool,
    pub rating: Rating,
}

impl Product {
    /// Price formatted in the given currency.
    #[must_use]
    pub fn price_display(&self, currency: CurrencyCode) -> String {
        Price::new(self.price, currency).display()
    }

    /// The listing thumbnail.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the product offers any of the given sizes.
    ///
    /// Products without sizes never match.
    pub fn offers_any_size<'a>(&self, wanted: impl IntoIterator<Item = &'a String>) -> bool {
        offers_any(self.sizes.as_deref(), wanted)
    }

    /// Whether the product offers any of the given colors.
    ///
    /// Products without colors never match.
    pub fn offers_any_color<'a>(&self, wanted: impl IntoIterator<Item = &'a String>) -> bool {
        offers_any(self.colors.as_deref(), wanted)
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.as_str().contains(needle)
    }
}

fn offers_any<'a>(offered: Option<&[String]>, wanted: impl IntoIterator<Item = &'a String>) -> bool {
    offered.is_some_and(|offered| wanted.into_iter().any(|value| offered.contains(value)))
}

/// The fixed, ordered collection of purchasable products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Build a catalog, validating every product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on duplicate ids, a product without images,
    /// or a price below zero or above [`MAX_PRICE`].
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.images.is_empty() {
                return Err(CatalogError::MissingImages(product.id.clone()));
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
            if product.price > Decimal::from(MAX_PRICE) {
                return Err(CatalogError::PriceTooHigh(product.id.clone()));
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// The storefront's built-in product list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: seed::products().into_iter().map(Arc::new).collect(),
        }
    }

    /// Parse a YAML list of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed YAML and the validation
    /// errors of [`Catalog::new`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_yaml::from_str(yaml)?;
        Self::new(products)
    }

    /// Load a YAML catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_yaml_str`].
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&yaml)?;
        tracing::info!(products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Every product, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in `category`, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<Arc<Product>> {
        self.retain(|product| product.category == category)
    }

    /// The first product with the given id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<Arc<Product>> {
        self.products
            .iter()
            .find(|product| product.id.as_str() == id)
            .cloned()
    }

    /// Featured products, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<Arc<Product>> {
        self.retain(|product| product.featured)
    }

    /// Case-insensitive substring search over name, description and category.
    ///
    /// An empty query matches every product.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Arc<Product>> {
        let needle = query.to_lowercase();
        self.retain(|product| product.matches_search(&needle))
    }

    /// Up to `limit` other products from the same category.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|other| other.category == product.category && other.id != product.id)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Products whose id is in `ids`, in catalog order. Unknown ids are skipped.
    pub fn by_ids<'a>(&self, ids: impl IntoIterator<Item = &'a ProductId>) -> Vec<Arc<Product>> {
        let wanted: HashSet<&str> = ids.into_iter().map(ProductId::as_str).collect();
        self.retain(|product| wanted.contains(product.id.as_str()))
    }

    fn retain(&self, keep: impl Fn(&Product) -> bool) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|product| keep(product))
            .cloned()
            .collect()
    }
}
