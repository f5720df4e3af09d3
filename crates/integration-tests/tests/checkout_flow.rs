//! Checkout from a filled cart to a confirmed order.

#![allow(clippy::unwrap_used)]

use beltline_core::{CheckoutStep, OrderNumber, Quantity};
use beltline_integration_tests::TestContext;
use beltline_storefront::checkout::{CheckoutError, CheckoutSession, ShippingForm};
use rust_decimal::Decimal;

fn shipping_form() -> ShippingForm {
    ShippingForm {
        email: "grace@example.org".to_owned(),
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        address: "1 Compiler Way".to_owned(),
        city: "Arlington".to_owned(),
        state: "VA".to_owned(),
        zip: "22201".to_owned(),
        country: "US".to_owned(),
    }
}

#[test]
fn test_full_checkout() {
    let ctx = TestContext::new().unwrap();
    let mut store = ctx.open().unwrap();
    store
        .add_to_cart_by_id("3", Quantity::ONE, Some("32"), Some("Blue"))
        .unwrap();
    store.add_to_cart_by_id("2", Quantity::ONE, None, Some("Brown")).unwrap();

    let mut session = CheckoutSession::begin(store.cart()).unwrap();
    assert_eq!(session.step(), CheckoutStep::Shipping);
    session.submit_shipping(shipping_form()).unwrap();
    assert_eq!(session.step(), CheckoutStep::Payment);

    let pricing = *store.pricing();
    let order = session.place_order(store.cart_mut(), &pricing).unwrap();

    assert_eq!(session.step(), CheckoutStep::Confirmation);
    assert!(order.order_number.as_str().starts_with(OrderNumber::PREFIX));
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.summary.subtotal, Decimal::new(9998, 2));
    assert!(order.summary.ships_free());
    assert_eq!(order.summary.tax_display(), "$7.00");
    assert_eq!(order.summary.total_display(), "$106.98");
    assert_eq!(order.shipping.full_name(), "Grace Hopper");

    assert!(store.cart().is_empty());
    assert_eq!(store.cart().total(), Decimal::ZERO);
}

#[test]
fn test_small_order_pays_shipping() {
    let ctx = TestContext::new().unwrap();
    let mut store = ctx.open().unwrap();
    store.add_to_cart_by_id("5", Quantity::ONE, Some("M"), None).unwrap();

    let mut session = CheckoutSession::begin(store.cart()).unwrap();
    session.submit_shipping(shipping_form()).unwrap();
    let pricing = *store.pricing();
    let order = session.place_order(store.cart_mut(), &pricing).unwrap();

    assert_eq!(order.summary.shipping_display(), "$5.99");
    assert_eq!(order.summary.total_display(), "$32.73");
}

#[test]
fn test_empty_cart_cannot_check_out() {
    let ctx = TestContext::new().unwrap();
    let store = ctx.open().unwrap();
    assert!(matches!(
        CheckoutSession::begin(store.cart()),
        Err(CheckoutError::EmptyCart)
    ));
}

#[test]
fn test_invalid_form_keeps_cart() {
    let ctx = TestContext::new().unwrap();
    let mut store = ctx.open().unwrap();
    store.add_to_cart_by_id("6", Quantity::ONE, None, None).unwrap();

    let mut session = CheckoutSession::begin(store.cart()).unwrap();
    let form = ShippingForm {
        zip: String::new(),
        ..shipping_form()
    };
    assert!(matches!(
        session.submit_shipping(form),
        Err(CheckoutError::InvalidField { field: "zip", .. })
    ));

    let pricing = *store.pricing();
    assert!(matches!(
        session.place_order(store.cart_mut(), &pricing),
        Err(CheckoutError::WrongStep { .. })
    ));
    assert_eq!(store.cart().count(), 1);
}

#[test]
fn test_wishlist_untouched_by_checkout() {
    let ctx = TestContext::new().unwrap();
    let mut store = ctx.open().unwrap();
    let _ = store.wishlist_mut().add_to_wishlist("6");
    store.add_to_cart_by_id("6", Quantity::ONE, None, None).unwrap();

    let mut session = CheckoutSession::begin(store.cart()).unwrap();
    session.submit_shipping(shipping_form()).unwrap();
    let pricing = *store.pricing();
    session.place_order(store.cart_mut(), &pricing).unwrap();

    assert!(store.wishlist().is_in_wishlist("6"));
}
