//! Pricing configuration loaded from the environment.

use std::collections::{HashMap, HashSet};
use std::env;

use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::errors::{Error, Result};

/// Environment keys, as shipped by the platform deployment.
const DEFAULT_CURRENCY_KEY: &str = "DEFAULT_CURRENCY";
const EXCHANGE_RATE_API_KEY: &str = "EXCHANGE_RATE_API_KEY";
const RATES_BASE_CURRENCY_KEY: &str = "BASE_CURRENCY_FOR_RATES";
const LOCATION_MULTIPLIERS_KEY: &str = "LOCATION_MULTIPLIERS";
const BLACKLISTED_COUNTRIES_KEY: &str = "BLACKLISTED_COUNTRIES";

/// Pricing engine configuration, read once at process start and
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct PricingSettings {
    /// Currency course prices are stored in.
    pub default_currency: String,
    /// ExchangeRate-API key. `None` disables live rates entirely.
    pub exchange_rate_api_key: Option<String>,
    /// Base currency requested from the rate provider.
    pub rates_base_currency: String,
    /// Per-location price multipliers, keyed by uppercase country name.
    pub location_multipliers: HashMap<String, f64>,
    /// Lowercased country names blocked from purchasing.
    pub blacklisted_countries: HashSet<String>,
}

impl PricingSettings {
    /// Load settings from the process environment.
    ///
    /// Every key has a shipped default; only malformed values error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default_currency = lookup(DEFAULT_CURRENCY_KEY)
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string());

        let exchange_rate_api_key =
            lookup(EXCHANGE_RATE_API_KEY).filter(|key| !key.trim().is_empty());

        let rates_base_currency = lookup(RATES_BASE_CURRENCY_KEY)
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string());

        let location_multipliers =
            parse_multipliers(lookup(LOCATION_MULTIPLIERS_KEY).as_deref())?;

        let blacklisted_countries =
            parse_blacklist(lookup(BLACKLISTED_COUNTRIES_KEY).as_deref());

        Ok(Self {
            default_currency,
            exchange_rate_api_key,
            rates_base_currency,
            location_multipliers,
            blacklisted_countries,
        })
    }
}

/// Parse the `LOCATION_MULTIPLIERS` JSON object. Keys are uppercased so
/// lookups can be case-insensitive; values must be positive and finite.
fn parse_multipliers(raw: Option<&str>) -> Result<HashMap<String, f64>> {
    let Some(raw) = raw else {
        return Ok(HashMap::new());
    };

    let multipliers: HashMap<String, f64> = serde_json::from_str(raw)
        .map_err(|e| Error::InvalidConfigValue(format!("{}: {}", LOCATION_MULTIPLIERS_KEY, e)))?;

    for (country, multiplier) in &multipliers {
        if !multiplier.is_finite() || *multiplier <= 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "{}: multiplier for {} must be a positive number",
                LOCATION_MULTIPLIERS_KEY, country
            )));
        }
    }

    Ok(multipliers
        .into_iter()
        .map(|(country, multiplier)| (country.to_uppercase(), multiplier))
        .collect())
}

/// Parse the comma-separated blacklist, trimming and lowercasing each
/// entry and dropping empties.
fn parse_blacklist(raw: Option<&str>) -> HashSet<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|country| country.trim().to_lowercase())
        .filter(|country| !country.is_empty())
        .collect()
}
