//! Location classification policy - blacklist, multipliers, currency
//! mapping.

use std::collections::{HashMap, HashSet};

use crate::settings::PricingSettings;

/// Country name to primary currency mapping, as shipped.
const COUNTRY_CURRENCIES: &[(&str, &str)] = &[
    ("INDIA", "INR"),
    ("USA", "USD"),
    ("UK", "GBP"),
    ("GERMANY", "EUR"),
    ("FRANCE", "EUR"),
    ("JAPAN", "JPY"),
    ("CANADA", "CAD"),
    ("AUSTRALIA", "AUD"),
];

/// Static localization policy: which locations are blocked, which get a
/// price multiplier, and which currency they pay in.
///
/// Built once from loaded settings and read-only afterwards. All lookups
/// are pure functions of the policy and the location string.
#[derive(Clone, Debug)]
pub struct LocalizationPolicy {
    default_currency: String,
    country_to_currency: HashMap<String, String>,
    location_multipliers: HashMap<String, f64>,
    blacklisted_countries: HashSet<String>,
}

impl LocalizationPolicy {
    pub fn new(settings: &PricingSettings) -> Self {
        let country_to_currency = COUNTRY_CURRENCIES
            .iter()
            .map(|(country, currency)| (country.to_string(), currency.to_string()))
            .collect();

        Self {
            default_currency: settings.default_currency.clone(),
            country_to_currency,
            location_multipliers: settings.location_multipliers.clone(),
            blacklisted_countries: settings.blacklisted_countries.clone(),
        }
    }

    /// Currency prices are stored in before localization.
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// True when the location is blocked from purchasing.
    ///
    /// Only the first comma-segment of the location is significant, and
    /// matching is case-insensitive.
    pub fn is_blacklisted(&self, location: &str) -> bool {
        let country = location
            .split(',')
            .next()
            .unwrap_or(location)
            .trim()
            .to_lowercase();
        self.blacklisted_countries.contains(&country)
    }

    /// Price multiplier for the location, 1.0 when none is configured.
    ///
    /// Keyed by the uppercased full location string.
    pub fn multiplier_for(&self, location: &str) -> f64 {
        self.location_multipliers
            .get(&location.to_uppercase())
            .copied()
            .unwrap_or(1.0)
    }

    /// Currency the location pays in, falling back to the default
    /// currency for unmapped locations.
    pub fn currency_for(&self, location: &str) -> &str {
        self.country_to_currency
            .get(&location.to_uppercase())
            .map(String::as_str)
            .unwrap_or(&self.default_currency)
    }
}
