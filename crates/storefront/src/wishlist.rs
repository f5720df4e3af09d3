//! Wishlist store backed by a durable slot.
//!
//! The wishlist is a set of product ids kept in the order they were first
//! added. It is loaded once when the store is created and written back in
//! full after every change, as a JSON array of id strings.

use beltline_core::ProductId;

use crate::storage::{SlotStore, StorageError};

/// Slot key used when none is configured.
pub const DEFAULT_WISHLIST_KEY: &str = "wishlist";

/// Result of a wishlist mutation.
#[derive(Debug)]
#[must_use]
pub struct WishlistUpdate {
    /// Whether membership changed.
    pub changed: bool,
    /// Set when the change could not be persisted. The in-memory wishlist
    /// still reflects the change.
    pub warning: Option<StorageError>,
}

impl WishlistUpdate {
    const fn unchanged() -> Self {
        Self {
            changed: false,
            warning: None,
        }
    }
}

/// Product ids the shopper has saved for later.
#[derive(Debug)]
pub struct WishlistStore<S> {
    store: S,
    key: String,
    ids: Vec<ProductId>,
    degraded: bool,
}

impl<S: SlotStore> WishlistStore<S> {
    /// Load the wishlist from `key` in `store`.
    ///
    /// A missing slot starts an empty wishlist. An unreadable or malformed
    /// slot also starts empty, with a warning, rather than failing.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = match store.read(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ProductId>>(&raw) {
                Ok(stored) => dedup_preserving_order(stored),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Malformed wishlist slot, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Wishlist slot unreadable, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(key = %key, items = ids.len(), "Wishlist loaded");
        Self {
            store,
            key,
            ids,
            degraded: false,
        }
    }

    /// Add `id`. Adding an id that is already present changes nothing.
    pub fn add_to_wishlist(&mut self, id: &str) -> WishlistUpdate {
        if self.is_in_wishlist(id) {
            return WishlistUpdate::unchanged();
        }
        self.ids.push(ProductId::new(id));
        tracing::debug!(product_id = id, items = self.ids.len(), "Added to wishlist");
        self.persist()
    }

    /// Remove `id`. Removing an absent id changes nothing.
    pub fn remove_from_wishlist(&mut self, id: &str) -> WishlistUpdate {
        let before = self.ids.len();
        self.ids.retain(|existing| existing.as_str() != id);
        if self.ids.len() == before {
            return WishlistUpdate::unchanged();
        }
        tracing::debug!(product_id = id, items = self.ids.len(), "Removed from wishlist");
        self.persist()
    }

    /// Remove `id` if present, otherwise add it.
    ///
    /// Returns the new membership together with the update outcome.
    pub fn toggle_wishlist(&mut self, id: &str) -> (bool, WishlistUpdate) {
        if self.is_in_wishlist(id) {
            (false, self.remove_from_wishlist(id))
        } else {
            (true, self.add_to_wishlist(id))
        }
    }

    /// Whether `id` is in the wishlist.
    #[must_use]
    pub fn is_in_wishlist(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing.as_str() == id)
    }

    /// Saved ids in the order they were added.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Number of saved ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether a write failed earlier and persistence is off for this session.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    fn persist(&mut self) -> WishlistUpdate {
        if self.degraded {
            return WishlistUpdate {
                changed: true,
                warning: None,
            };
        }

        let result = serde_json::to_string(&self.ids)
            .map_err(StorageError::from)
            .and_then(|encoded| self.store.write(&self.key, &encoded));

        match result {
            Ok(()) => WishlistUpdate {
                changed: true,
                warning: None,
            },
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Wishlist could not be saved; keeping changes in memory for this session"
                );
                self.degraded = true;
                WishlistUpdate {
                    changed: true,
                    warning: Some(e),
                }
            }
        }
    }
}

fn dedup_preserving_order(ids: Vec<ProductId>) -> Vec<ProductId> {
    let mut unique: Vec<ProductId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
