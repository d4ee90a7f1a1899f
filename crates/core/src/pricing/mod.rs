//! Pricing module - localization policy, price localizer, and value
//! objects.

pub mod pricing_model;
pub mod pricing_policy;
pub mod pricing_service;
pub mod pricing_traits;

pub use pricing_model::LocalizedPrice;
pub use pricing_policy::LocalizationPolicy;
pub use pricing_service::PriceLocalizer;
pub use pricing_traits::PriceLocalizerTrait;
