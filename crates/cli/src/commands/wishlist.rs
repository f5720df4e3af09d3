//! Wishlist commands.
//!
//! Changes are written to the durable slot as they happen. When the slot
//! cannot be written the change still applies for the rest of the session and
//! a warning is logged.

use std::io::Write;

use beltline_storefront::error::Result;
use beltline_storefront::state::Storefront;
use beltline_storefront::storage::SlotStore;
use beltline_storefront::wishlist::WishlistUpdate;
use clap::Subcommand;

use crate::render;

#[derive(Debug, Clone, Subcommand)]
pub enum WishlistAction {
    /// Show saved products
    List,
    /// Save a product
    Add { id: String },
    /// Remove a saved product
    Remove { id: String },
    /// Save a product, or remove it if already saved
    Toggle { id: String },
}

/// Run a wishlist action.
///
/// # Errors
///
/// Returns `AppError::NotFound` when adding an id that is not in the catalog.
pub fn run<S: SlotStore>(
    out: &mut impl Write,
    store: &mut Storefront<S>,
    action: &WishlistAction,
) -> Result<()> {
    match action {
        WishlistAction::List => list(out, store),
        WishlistAction::Add { id } => {
            let product = store.product(id)?;
            let update = store.wishlist_mut().add_to_wishlist(id);
            let message = if update.changed {
                "Saved to wishlist"
            } else {
                "Already in wishlist"
            };
            report(out, update, &format!("{message}: {}", product.name))
        }
        WishlistAction::Remove { id } => {
            let update = store.wishlist_mut().remove_from_wishlist(id);
            let message = if update.changed {
                format!("Removed {id} from wishlist")
            } else {
                format!("{id} was not in your wishlist")
            };
            report(out, update, &message)
        }
        WishlistAction::Toggle { id } => toggle(out, store, id),
    }
}

/// Flip membership of `id`, as the heart button on a product card does.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an id that is not in the catalog.
pub fn toggle<S: SlotStore>(out: &mut impl Write, store: &mut Storefront<S>, id: &str) -> Result<()> {
    let product = store.product(id)?;
    let (saved, update) = store.wishlist_mut().toggle_wishlist(id);
    let message = if saved {
        format!("Saved to wishlist: {}", product.name)
    } else {
        format!("Removed from wishlist: {}", product.name)
    };
    report(out, update, &message)
}

pub fn list<S: SlotStore>(out: &mut impl Write, store: &Storefront<S>) -> Result<()> {
    let products = store.wishlist_products();
    if products.is_empty() {
        writeln!(out, "Your wishlist is empty")?;
        return Ok(());
    }
    writeln!(out, "Wishlist ({} items)", products.len())?;
    render::product_rows(out, &products, store.pricing().currency)?;
    Ok(())
}

fn report(out: &mut impl Write, update: WishlistUpdate, message: &str) -> Result<()> {
    writeln!(out, "{message}")?;
    if update.warning.is_some() {
        writeln!(out, "(wishlist could not be saved; changes will be lost on exit)")?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use beltline_storefront::catalog::Catalog;
    use beltline_storefront::error::AppError;
    use beltline_storefront::storage::FileSlotStore;
    use beltline_storefront::totals::PricingConfig;
    use beltline_storefront::wishlist::WishlistStore;

    use super::*;

    fn open(dir: &std::path::Path) -> Storefront<FileSlotStore> {
        Storefront::new(
            Arc::new(Catalog::builtin()),
            WishlistStore::load(FileSlotStore::new(dir), "wishlist"),
            PricingConfig::default(),
        )
    }

    fn run_action(store: &mut Storefront<FileSlotStore>, action: WishlistAction) -> String {
        let mut out = Vec::new();
        run(&mut out, store, &action).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_list_remove_persist() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = open(dir.path());
        assert_eq!(run_action(&mut store, WishlistAction::List), "Your wishlist is empty\n");
        assert_eq!(
            run_action(&mut store, WishlistAction::Add { id: "6".to_owned() }),
            "Saved to wishlist: Designer Sunglasses\n"
        );
        assert_eq!(
            run_action(&mut store, WishlistAction::Add { id: "6".to_owned() }),
            "Already in wishlist: Designer Sunglasses\n"
        );

        let mut reopened = open(dir.path());
        let listed = run_action(&mut reopened, WishlistAction::List);
        assert!(listed.starts_with("Wishlist (1 items)"));
        assert!(listed.contains("Designer Sunglasses"));

        assert_eq!(
            run_action(&mut reopened, WishlistAction::Remove { id: "6".to_owned() }),
            "Removed 6 from wishlist\n"
        );
        assert!(open(dir.path()).wishlist().is_empty());
    }

    #[test]
    fn test_toggle_flips_membership() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open(dir.path());

        let first = run_action(&mut store, WishlistAction::Toggle { id: "2".to_owned() });
        assert_eq!(first, "Saved to wishlist: Premium Leather Belt\n");
        let second = run_action(&mut store, WishlistAction::Toggle { id: "2".to_owned() });
        assert_eq!(second, "Removed from wishlist: Premium Leather Belt\n");
        assert!(store.wishlist().is_empty());
    }

    #[test]
    fn test_unknown_product_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open(dir.path());
        let mut out = Vec::new();
        let err = run(&mut out, &mut store, &WishlistAction::Add { id: "77".to_owned() })
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(store.wishlist().is_empty());
    }
}
