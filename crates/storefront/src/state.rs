//! Storefront session state.

use std::sync::Arc;

use beltline_core::Quantity;

use crate::cart::CartStore;
use crate::catalog::{Catalog, Product};
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::storage::{FileSlotStore, MemorySlotStore, SlotStore};
use crate::totals::{OrderSummary, PricingConfig};
use crate::wishlist::WishlistStore;

/// One shopper's session: the shared catalog plus their cart and wishlist.
///
/// Constructed explicitly and passed to whatever renders it. Reads go through
/// shared references; mutation requires `&mut self`, so there is a single
/// writer at a time.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Arc<Catalog>,
    cart: CartStore,
    wishlist: WishlistStore<S>,
    pricing: PricingConfig,
}

impl<S: SlotStore> Storefront<S> {
    /// Create a session over an existing catalog and wishlist.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, wishlist: WishlistStore<S>, pricing: PricingConfig) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
            wishlist,
            pricing,
        }
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore<S> {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut WishlistStore<S> {
        &mut self.wishlist
    }

    #[must_use]
    pub const fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Look up a product, failing with `AppError::NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no product has this id.
    pub fn product(&self, id: &str) -> Result<Arc<Product>> {
        self.catalog
            .by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))
    }

    /// Resolve `id` against the catalog and add it to the cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no product has this id.
    pub fn add_to_cart_by_id(
        &mut self,
        id: &str,
        quantity: Quantity,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<Arc<Product>> {
        let product = self.product(id)?;
        self.cart
            .add_to_cart(Arc::clone(&product), quantity, size, color);
        Ok(product)
    }

    /// Saved products that are still in the catalog, in catalog order.
    #[must_use]
    pub fn wishlist_products(&self) -> Vec<Arc<Product>> {
        self.catalog.by_ids(self.wishlist.ids())
    }

    /// Totals for the current cart.
    #[must_use]
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::for_cart(&self.cart, &self.pricing)
    }
}

impl Storefront<Box<dyn SlotStore>> {
    /// Build a session from configuration.
    ///
    /// Loads the catalog override file if one is configured and opens the
    /// wishlist slot in `data_dir`, or in memory when persistence is off.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the catalog file cannot be loaded.
    pub fn open(config: &StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };

        let store: Box<dyn SlotStore> = if config.persist {
            Box::new(FileSlotStore::new(&config.data_dir))
        } else {
            Box::new(MemorySlotStore::new())
        };
        let wishlist = WishlistStore::load(store, config.wishlist_key.as_str());

        tracing::info!(
            products = catalog.len(),
            wishlist_items = wishlist.len(),
            persist = config.persist,
            data_dir = %config.data_dir.display(),
            "Storefront ready"
        );
        Ok(Self::new(Arc::new(catalog), wishlist, config.pricing))
    }
}
