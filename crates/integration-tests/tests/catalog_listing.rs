//! Listing pipeline over the configured catalog.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;

use beltline_core::{Category, FilterDimension, SortOption};
use beltline_integration_tests::TestContext;
use beltline_storefront::query::{FilterSelection, ProductListing, query};
use rust_decimal::Decimal;

const OVERRIDE_CATALOG: &str = r"
- id: sku-10
  name: Suede Belt
  price: 45
  category: belts
  description: Soft suede belt.
  images: [https://img.example/sku-10.jpg]
  colors: [Tan]
  inStock: true
  rating: 4.4
- id: sku-11
  name: Rope Belt
  price: 18.5
  category: belts
  description: Braided rope belt.
  images: [https://img.example/sku-11.jpg]
  colors: [Tan, Navy]
  featured: true
  inStock: false
  rating: 4.4
- id: sku-12
  name: Linen Shirt
  price: 55
  category: clothing
  description: Breathable linen shirt.
  images: [https://img.example/sku-12.jpg]
  sizes: [S, M, L]
  colors: [White]
  inStock: true
  rating: 4.9
";

fn ids(listing: &ProductListing) -> Vec<&str> {
    listing.products.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_every_result_satisfies_every_dimension() {
    let ctx = TestContext::new().unwrap();
    let store = ctx.open().unwrap();

    let mut filters = FilterSelection::new();
    filters.set(FilterDimension::Category, "clothing", true);
    filters.set(FilterDimension::Price, "25-50", true);
    filters.set(FilterDimension::Price, "50-100", true);
    filters.set(FilterDimension::Color, "Black", true);

    let results = query(store.catalog(), &filters, SortOption::Featured);
    assert_eq!(
        results.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        ["1", "3"]
    );
    for product in &results {
        assert_eq!(product.category, Category::Clothing);
        assert!(product.price >= Decimal::from(25) && product.price < Decimal::ONE_HUNDRED);
        assert!(product.colors.as_ref().unwrap().iter().any(|c| c == "Black"));
    }
}

#[test]
fn test_category_page_reset_keeps_category() {
    let ctx = TestContext::new().unwrap();
    let store = ctx.open().unwrap();

    let mut filters = FilterSelection::for_category(Category::Belts);
    filters.set(FilterDimension::Color, "Black", true);
    assert_eq!(filters.active_count(), 2);

    filters.reset_to(Some(Category::Belts));
    let listing = ProductListing::build(store.catalog(), &filters, SortOption::PriceLow);
    assert_eq!(ids(&listing), ["8", "2"]);
    assert_eq!(listing.summary(), "Showing 2 products");
}

#[test]
fn test_catalog_override_file() {
    let mut ctx = TestContext::new().unwrap();
    let path = ctx.path().join("catalog.yaml");
    fs::write(&path, OVERRIDE_CATALOG).unwrap();
    ctx.config.catalog_path = Some(path);

    let store = ctx.open().unwrap();
    assert_eq!(store.catalog().len(), 3);
    assert_eq!(
        store
            .catalog()
            .featured()
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>(),
        ["sku-11"]
    );

    let none = FilterSelection::new();
    let by_rating = ProductListing::build(store.catalog(), &none, SortOption::Rating);
    assert_eq!(ids(&by_rating), ["sku-12", "sku-10", "sku-11"]);

    let by_price = ProductListing::build(store.catalog(), &none, SortOption::PriceHigh);
    assert_eq!(ids(&by_price), ["sku-12", "sku-10", "sku-11"]);

    let mut tan = FilterSelection::new();
    tan.set(FilterDimension::Color, "Tan", true);
    let listing = ProductListing::build(store.catalog(), &tan, SortOption::PriceLow);
    assert_eq!(ids(&listing), ["sku-11", "sku-10"]);
}

#[test]
fn test_invalid_override_file_fails_to_open() {
    let mut ctx = TestContext::new().unwrap();
    let path = ctx.path().join("catalog.yaml");
    fs::write(&path, OVERRIDE_CATALOG.replace("sku-11", "sku-10")).unwrap();
    ctx.config.catalog_path = Some(path);

    let err = ctx.open().err().expect("open should fail");
    assert!(err.to_string().contains("duplicate product id: sku-10"));
}

#[test]
fn test_search_then_related() {
    let ctx = TestContext::new().unwrap();
    let store = ctx.open().unwrap();

    let hits = store.catalog().search("shirt");
    assert_eq!(
        hits.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        ["1", "5", "7"]
    );
    let related = store.catalog().related(&hits[0], 2);
    assert_eq!(related.len(), 2);
    assert!(related.iter().all(|p| p.category == Category::Clothing && p.id != hits[0].id));
}

#[test]
fn test_override_price_above_limit_fails_to_open() {
    let mut ctx = TestContext::new().unwrap();
    let path = ctx.path().join("catalog.yaml");
    fs::write(
        &path,
        OVERRIDE_CATALOG.replace("price: 45", "price: '40000000000000000000000000000'"),
    )
    .unwrap();
    ctx.config.catalog_path = Some(path);

    let err = ctx.open().err().expect("open should fail");
    assert!(err.to_string().contains("product sku-10 costs more than the 1000000 limit"));
}
