//! Command implementations.
//!
//! Every command writes its output to the `Write` it is given and reports
//! failures as `AppError`.

pub mod browse;
pub mod shop;
pub mod totals;
pub mod wishlist;
