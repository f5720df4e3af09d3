//! Closed enumerations used when browsing the catalog.
//!
//! Each type has a stable wire value (`as_str`, used in filter selections and
//! on the command line) and a human label for filter sidebars and sort menus.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error returned when a browse value does not name a known variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    /// What was being parsed (e.g. "category").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Clothing,
    Belts,
    Accessories,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Self; 3] = [Self::Clothing, Self::Belts, Self::Accessories];

    /// Wire value, e.g. `"belts"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clothing => "clothing",
            Self::Belts => "belts",
            Self::Accessories => "accessories",
        }
    }

    /// Menu label, e.g. `"Belts"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Belts => "Belts",
            Self::Accessories => "Accessories",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("category", s))
    }
}

/// Price range filter bucket.
///
/// Buckets are half-open intervals with no gaps or overlap:
/// `[0, 25)`, `[25, 50)`, `[50, 100)`, `[100, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceBucket {
    #[serde(rename = "0-25")]
    Under25,
    #[serde(rename = "25-50")]
    From25To50,
    #[serde(rename = "50-100")]
    From50To100,
    #[serde(rename = "100+")]
    Over100,
}

impl PriceBucket {
    /// Every bucket, in menu order.
    pub const ALL: [Self; 4] = [
        Self::Under25,
        Self::From25To50,
        Self::From50To100,
        Self::Over100,
    ];

    /// Wire value, e.g. `"25-50"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Under25 => "0-25",
            Self::From25To50 => "25-50",
            Self::From50To100 => "50-100",
            Self::Over100 => "100+",
        }
    }

    /// Menu label, e.g. `"From $25 to $50"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under25 => "Under $25",
            Self::From25To50 => "From $25 to $50",
            Self::From50To100 => "From $50 to $100",
            Self::Over100 => "Over $100",
        }
    }

    /// Whether `price` falls inside this bucket.
    #[must_use]
    pub fn contains(self, price: Decimal) -> bool {
        let (low, high) = self.bounds();
        low.is_none_or(|low| price >= low) && high.is_none_or(|high| price < high)
    }

    fn bounds(self) -> (Option<Decimal>, Option<Decimal>) {
        match self {
            Self::Under25 => (None, Some(Decimal::from(25))),
            Self::From25To50 => (Some(Decimal::from(25)), Some(Decimal::from(50))),
            Self::From50To100 => (Some(Decimal::from(50)), Some(Decimal::ONE_HUNDRED)),
            Self::Over100 => (Some(Decimal::ONE_HUNDRED), None),
        }
    }
}

impl std::fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriceBucket {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s.trim())
            .ok_or_else(|| ParseEnumError::new("price range", s))
    }
}

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Ascending price.
    PriceLow,
    /// Descending price.
    PriceHigh,
    /// Descending rating.
    Rating,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [Self; 4] = [Self::Featured, Self::PriceLow, Self::PriceHigh, Self::Rating];

    /// Wire value, e.g. `"price-low"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Top Rated",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOption {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("sort option", s))
    }
}

/// One axis of product filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Category,
    Price,
    Size,
    Color,
}

impl FilterDimension {
    /// Every dimension, in sidebar order.
    pub const ALL: [Self; 4] = [Self::Category, Self::Price, Self::Size, Self::Color];

    /// Wire value, e.g. `"size"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Price => "price",
            Self::Size => "size",
            Self::Color => "color",
        }
    }
}

impl std::fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FilterDimension {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("filter dimension", s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!("Belts".parse::<Category>().unwrap(), Category::Belts);
        assert_eq!("clothing".parse::<Category>().unwrap(), Category::Clothing);
        let err = "shoes".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "invalid category: shoes");
    }

    #[test]
    fn test_category_serde_uses_wire_value() {
        let json = serde_json::to_string(&Category::Accessories).unwrap();
        assert_eq!(json, "\"accessories\"");
    }

    #[test]
    fn test_price_bucket_boundaries_are_half_open() {
        let p = |cents: i64| Decimal::new(cents, 2);

        assert!(PriceBucket::Under25.contains(p(0)));
        assert!(PriceBucket::Under25.contains(p(2499)));
        assert!(!PriceBucket::Under25.contains(p(2500)));

        assert!(PriceBucket::From25To50.contains(p(2500)));
        assert!(PriceBucket::From25To50.contains(p(4999)));
        assert!(!PriceBucket::From25To50.contains(p(5000)));

        assert!(PriceBucket::From50To100.contains(p(5000)));
        assert!(!PriceBucket::From50To100.contains(p(10000)));

        assert!(PriceBucket::Over100.contains(p(10000)));
        assert!(PriceBucket::Over100.contains(p(1_000_000)));
    }

    #[test]
    fn test_price_buckets_cover_each_price_once() {
        for cents in [0, 1, 2499, 2500, 4999, 5000, 9999, 10000, 12999] {
            let price = Decimal::new(cents, 2);
            let hits = PriceBucket::ALL
                .iter()
                .filter(|bucket| bucket.contains(price))
                .count();
            assert_eq!(hits, 1, "price {price} matched {hits} buckets");
        }
    }

    #[test]
    fn test_price_bucket_wire_values() {
        assert_eq!("100+".parse::<PriceBucket>().unwrap(), PriceBucket::Over100);
        assert_eq!(
            serde_json::to_string(&PriceBucket::From25To50).unwrap(),
            "\"25-50\""
        );
        assert!("100-200".parse::<PriceBucket>().is_err());
    }

    #[test]
    fn test_sort_option_round_trip_and_default() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert_eq!(SortOption::default(), SortOption::Featured);
        assert_eq!(SortOption::Rating.label(), "Top Rated");
    }

    #[test]
    fn test_filter_dimension_from_str() {
        assert_eq!(
            "Color".parse::<FilterDimension>().unwrap(),
            FilterDimension::Color
        );
        assert!("material".parse::<FilterDimension>().is_err());
    }
}
