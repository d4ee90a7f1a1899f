//! Property-based integration tests for the price localizer.
//!
//! These tests verify that structural invariants of `LocalizedPrice`
//! hold across all valid inputs, using the `proptest` crate for random
//! test case generation.

mod common;

use proptest::prelude::*;

use common::{build_localizer, StaticRateProvider};
use coursefolio_core::{LocalizedPrice, PriceLocalizerTrait};

// =============================================================================
// Generators
// =============================================================================

/// Generates a base price in the range the storefront actually serves.
fn arb_base_price() -> impl Strategy<Value = f64> {
    0.0f64..100_000.0
}

/// Generates requester locations: mapped, unmapped, blacklisted,
/// multi-segment, and empty.
fn arb_location() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("India"),
        Just("USA"),
        Just("UK"),
        Just("Germany"),
        Just("Japan"),
        Just("Atlantis"),
        Just("north korea"),
        Just("North Korea, Pyongyang"),
        Just("Mumbai, India"),
        Just(""),
        Just("   "),
    ]
}

fn localize(base_price: f64, location: &str) -> LocalizedPrice {
    let provider = StaticRateProvider::new(&[
        ("USD", 1.0),
        ("INR", 83.0),
        ("GBP", 0.79),
        ("EUR", 0.92),
        // JPY deliberately missing to exercise the missing-rate fallback.
    ]);
    let localizer = build_localizer(
        provider,
        &[("USA", 1.5), ("INDIA", 0.5)],
        &["north korea"],
    );

    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(localizer.localize(base_price, location))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The original fields always echo the input, whatever else happens.
    #[test]
    fn prop_original_fields_echo_the_input(
        base_price in arb_base_price(),
        location in arb_location(),
    ) {
        let result = localize(base_price, location);

        prop_assert_eq!(result.original_price, base_price);
        prop_assert_eq!(result.original_currency.as_str(), "USD");
    }

    /// Localized price and currency are present together or absent
    /// together.
    #[test]
    fn prop_localized_fields_are_paired(
        base_price in arb_base_price(),
        location in arb_location(),
    ) {
        let result = localize(base_price, location);

        prop_assert_eq!(
            result.localized_price.is_some(),
            result.localized_currency.is_some()
        );
    }

    /// A blacklisted result never carries pricing fields, only the
    /// restriction message.
    #[test]
    fn prop_blacklisted_results_carry_no_pricing(
        base_price in arb_base_price(),
        location in arb_location(),
    ) {
        let result = localize(base_price, location);

        if result.is_blacklisted == Some(true) {
            prop_assert!(result.message.is_some());
            prop_assert!(result.localized_price.is_none());
            prop_assert!(result.localized_currency.is_none());
            prop_assert!(result.applied_multiplier.is_none());
            prop_assert!(result.conversion_rate.is_none());
        }
    }

    /// A unit multiplier is never reported.
    #[test]
    fn prop_unit_multiplier_is_suppressed(
        base_price in arb_base_price(),
        location in arb_location(),
    ) {
        let result = localize(base_price, location);

        prop_assert_ne!(result.applied_multiplier, Some(1.0));
    }

    /// Localized prices carry at most two decimal places.
    #[test]
    fn prop_localized_prices_are_rounded(
        base_price in arb_base_price(),
        location in arb_location(),
    ) {
        let result = localize(base_price, location);

        if let Some(price) = result.localized_price {
            let cents = price * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6);
        }
    }
}
