//! ExchangeRate-API provider for currency conversion rates.
//!
//! Fetches the latest conversion rates for a base currency from the
//! exchangerate-api.com v6 endpoint. The API key travels as a path
//! segment and the response carries a `result` success indicator plus
//! a `conversion_rates` mapping of currency code to rate.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::RateError;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// Base URL of the v6 API
const API_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API response from ExchangeRate-API
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// "success" or "error"
    result: String,
    /// Error code, present when `result` is not "success"
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    /// Rates keyed by currency code (1 base = rate target)
    conversion_rates: Option<HashMap<String, f64>>,
}

/// ExchangeRate-API provider.
///
/// # Example
///
/// ```ignore
/// use coursefolio_rates::ExchangeRateApiProvider;
///
/// let provider = ExchangeRateApiProvider::new("your_api_key".to_string());
/// ```
pub struct ExchangeRateApiProvider {
    client: Client,
    api_key: String,
}

impl ExchangeRateApiProvider {
    /// Create a new provider with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    fn latest_url(&self, base_currency: &str) -> String {
        format!("{}/{}/latest/{}", API_BASE_URL, self.api_key, base_currency)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_rates(
        &self,
        base_currency: &str,
    ) -> Result<HashMap<String, f64>, RateError> {
        let response = self.client.get(self.latest_url(base_currency)).send().await?;

        let body: LatestRatesResponse =
            response.json().await.map_err(|e| RateError::Malformed {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        if body.result != "success" {
            return Err(RateError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: body
                    .error_type
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        body.conversion_rates.ok_or_else(|| RateError::Malformed {
            provider: PROVIDER_ID.to_string(),
            message: "missing conversion_rates".to_string(),
        })
    }
}
