//! Error types for exchange rate operations.

use thiserror::Error;

/// Errors that can occur while fetching rates from an upstream provider.
///
/// None of these variants escape the cache layer: the [`RateCache`](crate::RateCache)
/// recovers every failure by serving stale data or the identity snapshot.
#[derive(Error, Debug)]
pub enum RateError {
    /// The provider answered but signalled a non-success result.
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that returned the error
        provider: String,
        /// The error indicator reported by the provider
        message: String,
    },

    /// The response decoded but did not contain usable rate data.
    #[error("Malformed response from {provider}: {message}")]
    Malformed {
        /// The provider that returned the response
        provider: String,
        /// Description of what was missing or undecodable
        message: String,
    },

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
