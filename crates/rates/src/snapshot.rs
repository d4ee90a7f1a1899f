//! Point-in-time exchange rate snapshots.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

/// An immutable capture of exchange rates for one base currency.
///
/// Snapshots are created by a cache refresh, shared as `Arc<RateSnapshot>`,
/// and replaced wholesale by the next successful refresh. Readers never
/// observe a partially updated snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct RateSnapshot {
    /// Currency the rates are quoted against.
    pub base_currency: String,
    /// Conversion rates keyed by ISO 4217 currency code.
    /// One unit of the base currency equals `rate` units of the target.
    pub rates: HashMap<String, f64>,
    /// When the rates were fetched from the provider.
    pub fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    /// Create a snapshot from freshly fetched rates, stamped with the
    /// current time.
    pub fn new(base_currency: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base_currency: base_currency.into(),
            rates,
            fetched_at: Utc::now(),
        }
    }

    /// Degenerate snapshot mapping the base currency to 1.0, used when no
    /// real rate data is available.
    pub fn identity(base_currency: &str) -> Self {
        Self::new(base_currency, HashMap::from([(base_currency.to_string(), 1.0)]))
    }

    /// Conversion rate for the given currency, if the snapshot holds one.
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    /// Age of this snapshot relative to `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }
}
