//! Shared fakes for the pricing integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use coursefolio_core::{LocalizationPolicy, PriceLocalizer, PricingSettings};
use coursefolio_rates::{RateCache, RateError, RateProvider};

/// In-memory rate provider that counts how often it is called.
pub struct StaticRateProvider {
    rates: HashMap<String, f64>,
    calls: AtomicUsize,
}

impl StaticRateProvider {
    pub fn new(rates: &[(&str, f64)]) -> Arc<Self> {
        Arc::new(Self {
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    fn id(&self) -> &'static str {
        "STATIC_RATE_PROVIDER"
    }

    async fn fetch_rates(&self, _base: &str) -> Result<HashMap<String, f64>, RateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rates.clone())
    }
}

/// Wire a localizer over the given provider, with USD as the base
/// currency.
pub fn build_localizer(
    provider: Arc<StaticRateProvider>,
    multipliers: &[(&str, f64)],
    blacklist: &[&str],
) -> PriceLocalizer {
    let settings = PricingSettings {
        default_currency: "USD".to_string(),
        exchange_rate_api_key: None,
        rates_base_currency: "USD".to_string(),
        location_multipliers: multipliers
            .iter()
            .map(|(country, multiplier)| (country.to_string(), *multiplier))
            .collect(),
        blacklisted_countries: blacklist.iter().map(|c| c.to_string()).collect(),
    };

    let cache = Arc::new(RateCache::new(Some(provider), "USD"));
    PriceLocalizer::new(LocalizationPolicy::new(&settings), cache)
}
