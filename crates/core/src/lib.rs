//! Beltline Core - Shared types library.
//!
//! This crate provides common types used across all Beltline components:
//! - `storefront` - Catalog, cart, wishlist, filtering and checkout logic
//! - `cli` - Command-line front end for browsing and shopping
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, quantities, ratings, emails,
//!   and the closed enumerations used for browsing and checkout

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
