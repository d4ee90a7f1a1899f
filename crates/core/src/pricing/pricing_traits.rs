use async_trait::async_trait;

use super::pricing_model::LocalizedPrice;

/// Trait defining the pricing entry point consumed by the storefront
/// layer.
#[async_trait]
pub trait PriceLocalizerTrait: Send + Sync {
    /// Localize a base-currency price for a requester location.
    ///
    /// Total over its inputs: every internal failure degrades to an
    /// unconverted base-currency result rather than an error. The
    /// `base_price >= 0` precondition is enforced by the caller.
    async fn localize(&self, base_price: f64, location: &str) -> LocalizedPrice;
}
