//! Coursefolio Rates Crate
//!
//! This crate provides exchange rate fetching and caching for the
//! Coursefolio pricing engine.
//!
//! # Overview
//!
//! The rates crate supports:
//! - A provider abstraction with one production implementation
//!   (ExchangeRate-API)
//! - A read-through snapshot cache with explicit freshness states
//! - Graceful degradation: stale data, then an identity snapshot, when
//!   the provider is slow, unavailable, or unconfigured
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  PriceLocalizer  |  (coursefolio-core)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    RateCache     |  (Fresh / Stale / Expired, identity fallback)
//! +------------------+
//!          | only on refresh
//!          v
//! +------------------+
//! |   RateProvider   |  (ExchangeRate-API)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   RateSnapshot   |  (immutable, replaced wholesale)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`RateSnapshot`] - Immutable point-in-time rates plus fetch timestamp
//! - [`RateProvider`] - One round trip to an upstream rate source
//! - [`RateCache`] - Read-through cache owning all fallback policy
//! - [`FreshnessPolicy`] - Freshness and extended windows for snapshots

pub mod cache;
pub mod errors;
pub mod provider;
pub mod snapshot;

// Re-export cache types
pub use cache::{Freshness, FreshnessPolicy, RateCache, RateCacheConfig};

// Re-export provider types
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::RateProvider;

pub use errors::RateError;
pub use snapshot::RateSnapshot;
