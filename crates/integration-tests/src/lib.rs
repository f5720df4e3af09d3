//! Integration tests for Beltline.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p beltline-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart mutations and derived totals through the session facade
//! - `wishlist_persistence` - Wishlist surviving restarts through the file slot
//! - `checkout_flow` - Shipping form, order placement and confirmation
//! - `catalog_listing` - Filtering and sorting over the built-in and YAML catalogs
//!
//! Each test gets its own data directory, so tests can run in parallel.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use beltline_storefront::config::StorefrontConfig;
use beltline_storefront::error::Result;
use beltline_storefront::state::Storefront;
use beltline_storefront::storage::SlotStore;
use tempfile::TempDir;

/// A storefront configuration rooted in a fresh temporary directory.
pub struct TestContext {
    dir: TempDir,
    pub config: StorefrontConfig,
}

impl TestContext {
    /// Create a context with persistence enabled and default pricing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config = StorefrontConfig {
            data_dir: dir.path().join("data"),
            ..StorefrontConfig::default()
        };
        Ok(Self { dir, config })
    }

    /// The temporary directory backing this context.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a new session, as a fresh process start would.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the configured catalog cannot be loaded.
    pub fn open(&self) -> Result<Storefront<Box<dyn SlotStore>>> {
        Storefront::open(&self.config)
    }
}
