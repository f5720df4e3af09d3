//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_DATA_DIR` - Directory for durable slots (default: .beltline)
//! - `STOREFRONT_WISHLIST_KEY` - Slot key for the wishlist (default: wishlist)
//! - `STOREFRONT_PERSIST` - Write the wishlist to disk (default: true)
//! - `STOREFRONT_CATALOG_PATH` - YAML file replacing the built-in catalog
//! - `STOREFRONT_CURRENCY` - Display currency (default: USD)
//! - `STOREFRONT_FREE_SHIPPING_THRESHOLD` - Subtotal above which shipping is free (default: 50)
//! - `STOREFRONT_FLAT_SHIPPING` - Shipping charged otherwise (default: 5.99)
//! - `STOREFRONT_TAX_RATE` - Tax as a fraction of the subtotal (default: 0.07)
//! - `STOREFRONT_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::storage::validate_key;
use crate::totals::PricingConfig;
use crate::wishlist::DEFAULT_WISHLIST_KEY;

const DEFAULT_DATA_DIR: &str = ".beltline";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected pretty or json, got {other:?}")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding durable slot files
    pub data_dir: PathBuf,
    /// Slot key the wishlist is stored under
    pub wishlist_key: String,
    /// Whether the wishlist is written to `data_dir`
    pub persist: bool,
    /// Optional catalog file replacing the built-in products
    pub catalog_path: Option<PathBuf>,
    /// Shipping, tax and currency
    pub pricing: PricingConfig,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            wishlist_key: DEFAULT_WISHLIST_KEY.to_owned(),
            persist: true,
            catalog_path: None,
            pricing: PricingConfig::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(lookup);
        let defaults = PricingConfig::default();

        let wishlist_key = env.or_default("STOREFRONT_WISHLIST_KEY", DEFAULT_WISHLIST_KEY);
        validate_key(&wishlist_key).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_WISHLIST_KEY".to_string(), e.to_string())
        })?;

        let pricing = PricingConfig {
            free_shipping_threshold: env.amount(
                "STOREFRONT_FREE_SHIPPING_THRESHOLD",
                defaults.free_shipping_threshold,
            )?,
            flat_shipping: env.amount("STOREFRONT_FLAT_SHIPPING", defaults.flat_shipping)?,
            tax_rate: env.amount("STOREFRONT_TAX_RATE", defaults.tax_rate)?,
            currency: env.parsed("STOREFRONT_CURRENCY", defaults.currency)?,
        };

        Ok(Self {
            data_dir: PathBuf::from(env.or_default("STOREFRONT_DATA_DIR", DEFAULT_DATA_DIR)),
            wishlist_key,
            persist: env.flag("STOREFRONT_PERSIST", true)?,
            catalog_path: env.optional("STOREFRONT_CATALOG_PATH").map(PathBuf::from),
            pricing,
            log_format: env.parsed("STOREFRONT_LOG_FORMAT", LogFormat::default())?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get an optional variable, treating blank values as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable with `FromStr`, falling back to `default` when unset.
    fn parsed<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key).map_or(Ok(default), |value| {
            value
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }

    /// Parse a non-negative decimal amount.
    fn amount(&self, key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
        let value = self.parsed(key, default)?;
        if value < Decimal::ZERO {
            return Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("must not be negative (got {value})"),
            ));
        }
        Ok(value)
    }

    /// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`).
    fn flag(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = self.optional(key) else {
            return Ok(default);
        };
        match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("expected a boolean, got {value:?}"),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use beltline_core::CurrencyCode;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.data_dir, PathBuf::from(".beltline"));
        assert_eq!(config.wishlist_key, "wishlist");
        assert!(config.persist);
        assert_eq!(config.pricing.flat_shipping, Decimal::new(599, 2));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STOREFRONT_DATA_DIR", "/tmp/beltline"),
            ("STOREFRONT_WISHLIST_KEY", "saved"),
            ("STOREFRONT_PERSIST", "off"),
            ("STOREFRONT_CATALOG_PATH", "catalog.yaml"),
            ("STOREFRONT_CURRENCY", "gbp"),
            ("STOREFRONT_FREE_SHIPPING_THRESHOLD", "75"),
            ("STOREFRONT_TAX_RATE", "0.2"),
            ("STOREFRONT_LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/beltline"));
        assert_eq!(config.wishlist_key, "saved");
        assert!(!config.persist);
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.pricing.currency, CurrencyCode::GBP);
        assert_eq!(config.pricing.free_shipping_threshold, Decimal::from(75));
        assert_eq!(config.pricing.tax_rate, Decimal::new(2, 1));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("STOREFRONT_DATA_DIR", "  "), ("STOREFRONT_CATALOG_PATH", "")]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".beltline"));
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("STOREFRONT_TAX_RATE", "seven")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_TAX_RATE"));

        let err = load(&[("STOREFRONT_FLAT_SHIPPING", "-1")]).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));

        assert!(load(&[("STOREFRONT_PERSIST", "maybe")]).is_err());
        assert!(load(&[("STOREFRONT_CURRENCY", "XYZ")]).is_err());
        assert!(load(&[("STOREFRONT_LOG_FORMAT", "xml")]).is_err());
        assert!(load(&[("STOREFRONT_WISHLIST_KEY", "../wishlist")]).is_err());
    }
}
