//! Rate provider trait definition.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::RateError;

/// Trait for exchange rate providers.
///
/// Implement this trait to add support for a new rate source. A provider
/// performs exactly one outbound call per `fetch_rates` invocation and
/// never retries internally; retry and fallback policy belong to the
/// cache layer.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "EXCHANGE_RATE_API".
    /// Used for logging and error reporting.
    fn id(&self) -> &'static str;

    /// Fetch the latest conversion rates for the given base currency.
    ///
    /// # Returns
    ///
    /// A mapping of ISO 4217 currency code to conversion rate on success
    /// (one unit of `base_currency` equals `rate` units of the target),
    /// or a [`RateError`] when the call fails, the provider signals a
    /// non-success result, or the response is malformed.
    async fn fetch_rates(
        &self,
        base_currency: &str,
    ) -> Result<HashMap<String, f64>, RateError>;
}
