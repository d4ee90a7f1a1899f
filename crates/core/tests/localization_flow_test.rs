//! End-to-end pricing flow: localizer -> rate cache -> provider.

mod common;

use common::{build_localizer, StaticRateProvider};
use coursefolio_core::PriceLocalizerTrait;

#[tokio::test]
async fn test_conversion_flow_fetches_rates_once() {
    let provider = StaticRateProvider::new(&[("USD", 1.0), ("INR", 83.0), ("GBP", 0.79)]);
    let localizer = build_localizer(provider.clone(), &[], &[]);

    let india = localizer.localize(10.0, "India").await;
    assert_eq!(india.localized_price, Some(830.0));
    assert_eq!(india.localized_currency.as_deref(), Some("INR"));
    assert_eq!(india.conversion_rate, Some(83.0));

    // Second conversion reuses the fresh snapshot.
    let uk = localizer.localize(100.0, "UK").await;
    assert_eq!(uk.localized_price, Some(79.0));
    assert_eq!(uk.localized_currency.as_deref(), Some("GBP"));

    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_blacklisted_location_never_touches_the_provider() {
    let provider = StaticRateProvider::new(&[("USD", 1.0), ("INR", 83.0)]);
    let localizer = build_localizer(provider.clone(), &[], &["india"]);

    let result = localizer.localize(100.0, "India").await;

    assert_eq!(result.is_blacklisted, Some(true));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_default_currency_location_never_touches_the_provider() {
    let provider = StaticRateProvider::new(&[("USD", 1.0)]);
    let localizer = build_localizer(provider.clone(), &[("USA", 1.5)], &[]);

    let result = localizer.localize(100.0, "USA").await;

    assert_eq!(result.localized_price, Some(150.0));
    assert_eq!(result.localized_currency.as_deref(), Some("USD"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_warm_up_primes_the_cache_for_later_requests() {
    let provider = StaticRateProvider::new(&[("USD", 1.0), ("JPY", 150.0)]);
    let localizer = build_localizer(provider.clone(), &[], &[]);

    localizer.rate_cache().warm_up().await;
    assert_eq!(provider.calls(), 1);

    let result = localizer.localize(10.0, "Japan").await;
    assert_eq!(result.localized_price, Some(1500.0));
    assert_eq!(result.conversion_rate, Some(150.0));

    // The warm snapshot served the request; no further fetch.
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_multiplier_and_conversion_compose_across_the_stack() {
    let provider = StaticRateProvider::new(&[("USD", 1.0), ("CAD", 1.36)]);
    let localizer = build_localizer(provider.clone(), &[("CANADA", 1.1)], &[]);

    let result = localizer.localize(100.0, "Canada").await;

    // 100 * 1.1 * 1.36 = 149.6, rounded once at the end.
    assert_eq!(result.localized_price, Some(149.6));
    assert_eq!(result.localized_currency.as_deref(), Some("CAD"));
    assert_eq!(result.applied_multiplier, Some(1.1));
    assert_eq!(result.conversion_rate, Some(1.36));
}
