//! Price localization orchestration.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use coursefolio_rates::{ExchangeRateApiProvider, RateCache, RateProvider};

use super::pricing_model::LocalizedPrice;
use super::pricing_policy::LocalizationPolicy;
use super::pricing_traits::PriceLocalizerTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::settings::PricingSettings;

/// The pricing engine entry point: applies the localization policy,
/// reads the rate cache, and composes the final price.
pub struct PriceLocalizer {
    policy: LocalizationPolicy,
    rate_cache: Arc<RateCache>,
}

impl PriceLocalizer {
    pub fn new(policy: LocalizationPolicy, rate_cache: Arc<RateCache>) -> Self {
        Self { policy, rate_cache }
    }

    /// Wire the full engine from loaded settings: provider (when an API
    /// key is configured), cache, and policy.
    pub fn from_settings(settings: &PricingSettings) -> Self {
        let provider: Option<Arc<dyn RateProvider>> = settings
            .exchange_rate_api_key
            .clone()
            .map(|key| Arc::new(ExchangeRateApiProvider::new(key)) as Arc<dyn RateProvider>);

        let rate_cache = Arc::new(RateCache::new(
            provider,
            settings.rates_base_currency.clone(),
        ));

        Self::new(LocalizationPolicy::new(settings), rate_cache)
    }

    /// The cache backing this localizer, for host-driven warm-up at boot.
    pub fn rate_cache(&self) -> &Arc<RateCache> {
        &self.rate_cache
    }
}

/// Round a composed price to display precision. Applied exactly once,
/// after multiplier and conversion.
fn round_price(value: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_DECIMAL_PRECISION as i32);
    (value * factor).round() / factor
}

#[async_trait]
impl PriceLocalizerTrait for PriceLocalizer {
    async fn localize(&self, base_price: f64, location: &str) -> LocalizedPrice {
        let default_currency = self.policy.default_currency();

        // No location supplied - nothing to localize.
        if location.trim().is_empty() {
            return LocalizedPrice::unlocalized(base_price, default_currency);
        }

        if self.policy.is_blacklisted(location) {
            return LocalizedPrice::blacklisted(base_price, default_currency, location);
        }

        let multiplier = self.policy.multiplier_for(location);
        let adjusted_price = base_price * multiplier;

        let mut final_price = adjusted_price;
        let mut final_currency = default_currency.to_string();
        let mut conversion_rate = None;

        let target_currency = self.policy.currency_for(location);
        if target_currency != default_currency {
            let snapshot = self.rate_cache.get_rates().await;
            match snapshot.rate(target_currency) {
                Some(rate) => {
                    final_price = adjusted_price * rate;
                    final_currency = target_currency.to_string();
                    conversion_rate = Some(rate);
                }
                None => {
                    // Degraded path, not an error: the price stays in the
                    // default currency with the multiplier applied.
                    warn!(
                        "Currency {} for location {} not found in exchange rates; price remains in {}",
                        target_currency, location, default_currency
                    );
                }
            }
        }

        // Net identity - the bare result signals "no localization
        // applicable", distinct from a computed price that happens to
        // equal the base.
        if final_price == base_price && final_currency == default_currency && multiplier == 1.0 {
            return LocalizedPrice::unlocalized(base_price, default_currency);
        }

        LocalizedPrice {
            localized_price: Some(round_price(final_price)),
            localized_currency: Some(final_currency),
            applied_multiplier: (multiplier != 1.0).then_some(multiplier),
            conversion_rate,
            ..LocalizedPrice::unlocalized(base_price, default_currency)
        }
    }
}
