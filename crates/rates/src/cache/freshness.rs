//! Snapshot freshness classification.

use chrono::Duration;

/// Maximum snapshot age served without attempting a refresh.
const FRESHNESS_WINDOW_HOURS: i64 = 6;

/// Oldest age at which a stale snapshot may still be served.
const EXTENDED_WINDOW_HOURS: i64 = 12;

/// Freshness of a cached snapshot relative to the cache policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Freshness {
    /// Younger than the freshness window - serve directly, no network call.
    Fresh,
    /// Past the freshness window but inside the extended window - still
    /// usable, but a refresh should be attempted on read.
    Stale,
    /// Past the extended window - too old to serve; only the identity
    /// snapshot remains if a refresh fails.
    Expired,
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fresh => write!(f, "Fresh"),
            Self::Stale => write!(f, "Stale"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

/// Freshness windows for cached snapshots.
#[derive(Clone, Debug)]
pub struct FreshnessPolicy {
    /// Maximum age served without attempting a refresh.
    pub freshness_window: Duration,
    /// Maximum age served at all; beyond this the identity fallback wins.
    pub extended_window: Duration,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            freshness_window: Duration::hours(FRESHNESS_WINDOW_HOURS),
            extended_window: Duration::hours(EXTENDED_WINDOW_HOURS),
        }
    }
}

impl FreshnessPolicy {
    /// Classify a snapshot age against the policy windows.
    pub fn classify(&self, age: Duration) -> Freshness {
        if age < self.freshness_window {
            Freshness::Fresh
        } else if age < self.extended_window {
            Freshness::Stale
        } else {
            Freshness::Expired
        }
    }
}
