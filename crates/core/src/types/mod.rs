//! Core types for Beltline.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod browse;
pub mod email;
pub mod id;
pub mod price;
pub mod quantity;
pub mod rating;
pub mod status;

pub use browse::{Category, FilterDimension, ParseEnumError, PriceBucket, SortOption};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use quantity::Quantity;
pub use rating::{Rating, RatingError};
pub use status::CheckoutStep;
