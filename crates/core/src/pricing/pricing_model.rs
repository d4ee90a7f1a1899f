//! Localized price value objects.

use serde::{Deserialize, Serialize};

/// Result of localizing a base-currency price for a requester location.
///
/// Serialized camelCase with absent fields omitted, the shape the
/// storefront renders. `localized_price` and `localized_currency` are
/// always present together; a blacklisted result carries only `message`
/// alongside the original price fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedPrice {
    pub original_price: f64,
    pub original_currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blacklisted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LocalizedPrice {
    /// Bare result: the base price unchanged, no localization applicable.
    pub fn unlocalized(original_price: f64, original_currency: impl Into<String>) -> Self {
        Self {
            original_price,
            original_currency: original_currency.into(),
            localized_price: None,
            localized_currency: None,
            applied_multiplier: None,
            conversion_rate: None,
            is_blacklisted: None,
            message: None,
        }
    }

    /// Blocked result for a blacklisted location. Carries only the
    /// restriction message; no pricing fields are populated.
    pub fn blacklisted(
        original_price: f64,
        original_currency: impl Into<String>,
        location: &str,
    ) -> Self {
        Self {
            is_blacklisted: Some(true),
            message: Some(format!(
                "Access or purchase from {} is restricted.",
                location
            )),
            ..Self::unlocalized(original_price, original_currency)
        }
    }
}
