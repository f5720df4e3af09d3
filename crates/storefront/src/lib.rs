//! Beltline Storefront library.
//!
//! This crate provides the storefront behavior as a library: a read-only
//! product catalog, the cart and wishlist stores, the filter/sort pipeline
//! that drives product listings, order totals, and the checkout flow.
//!
//! # Architecture
//!
//! - [`catalog`], [`query`] and [`totals`] are pure functions over shared data.
//! - [`cart::CartStore`] and [`wishlist::WishlistStore`] are the only stateful
//!   pieces; each is owned by a [`state::Storefront`] and mutated through its
//!   operations, one action at a time.
//! - The wishlist survives restarts through a single durable slot
//!   ([`storage::SlotStore`]); the cart is per session.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod query;
pub mod state;
pub mod storage;
pub mod totals;
pub mod wishlist;
