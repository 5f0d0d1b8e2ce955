use crate::catalog::{DEFAULT_MAX_PRICE, SHOP_PRICE_RANGE};
use crate::sections::LanguageChangePolicy;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Preferences
    pub preferences_file: PathBuf,

    // Catalog
    pub category_policy: LanguageChangePolicy,
    pub max_price: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            // Preferences
            preferences_file: lookup("AJ_PREFERENCES_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".aj-preferences.json")),

            // Catalog
            category_policy: lookup("AJ_CATEGORY_POLICY")
                .map(|v| v.parse::<LanguageChangePolicy>())
                .transpose()
                .context("AJ_CATEGORY_POLICY must be one of keep, reset, remap")?
                .unwrap_or_default(),
            max_price: SHOP_PRICE_RANGE.snap(
                lookup("AJ_MAX_PRICE")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_MAX_PRICE),
            ),
        })
    }
}
