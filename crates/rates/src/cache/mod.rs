//! Rate snapshot caching - freshness policy and the read-through cache.

mod freshness;
mod rate_cache;

pub use freshness::{Freshness, FreshnessPolicy};
pub use rate_cache::{RateCache, RateCacheConfig};
