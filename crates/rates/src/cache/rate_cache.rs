//! Read-through cache for exchange rate snapshots.
//!
//! The cache serves a usable snapshot on every read, refreshing from the
//! provider when the held snapshot ages past its freshness window. It
//! degrades in two steps when the provider misbehaves:
//!
//! - **Stale**: the previous snapshot keeps being served while refresh
//!   attempts fail.
//! - **Expired**: once the snapshot ages past the extended window, the
//!   identity snapshot replaces it rather than serving arbitrarily old data.
//!
//! A cache constructed without a provider (no API key configured) serves
//! the identity snapshot permanently and never touches the network.
//!
//! Reads never return an error and never hold a lock across a network
//! call. Concurrent refreshes are coalesced: at most one provider call is
//! in flight per cache instance, and readers that find a refresh already
//! running serve the previous snapshot instead of waiting on the network.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::Utc;
use log::{debug, error, info, warn};
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::cache::freshness::{Freshness, FreshnessPolicy};
use crate::errors::RateError;
use crate::provider::RateProvider;
use crate::snapshot::RateSnapshot;

/// Default bound on how long an Empty or Expired read waits for a refresh
/// before proceeding with fallback data.
const DEFAULT_FETCH_WAIT: Duration = Duration::from_secs(10);

/// Rate cache configuration.
#[derive(Clone, Debug)]
pub struct RateCacheConfig {
    /// Freshness windows for the held snapshot.
    pub freshness: FreshnessPolicy,
    /// Bound on how long Empty and Expired reads wait for a refresh.
    pub fetch_wait: Duration,
}

impl Default for RateCacheConfig {
    fn default() -> Self {
        Self {
            freshness: FreshnessPolicy::default(),
            fetch_wait: DEFAULT_FETCH_WAIT,
        }
    }
}

/// Read-through cache holding the current exchange rate snapshot.
///
/// The snapshot is the only shared mutable state in the pricing engine.
/// It is replaced wholesale under a short-lived write lock; the refresh
/// gate serializes provider calls without ever being held by readers.
pub struct RateCache {
    /// Upstream rate source. `None` puts the cache in permanent identity
    /// mode.
    provider: Option<Arc<dyn RateProvider>>,
    /// Currency the cached rates are quoted against.
    base_currency: String,
    /// Freshness windows for the held snapshot.
    freshness: FreshnessPolicy,
    /// Current snapshot, replaced wholesale on successful refresh.
    snapshot: RwLock<Option<Arc<RateSnapshot>>>,
    /// Single-flight gate: at most one refresh in flight per cache.
    refresh_gate: Mutex<()>,
    /// Bound on how long Empty and Expired reads wait for a refresh.
    fetch_wait: Duration,
}

impl RateCache {
    /// Create a cache with default freshness windows.
    ///
    /// Passing `provider: None` puts the cache in permanent identity mode,
    /// logged once here rather than on every read.
    pub fn new(provider: Option<Arc<dyn RateProvider>>, base_currency: impl Into<String>) -> Self {
        Self::with_config(provider, base_currency, RateCacheConfig::default())
    }

    /// Create a cache with custom configuration.
    pub fn with_config(
        provider: Option<Arc<dyn RateProvider>>,
        base_currency: impl Into<String>,
        config: RateCacheConfig,
    ) -> Self {
        let base_currency = base_currency.into();
        if provider.is_none() {
            warn!(
                "No rate provider configured; serving identity rates for base {}",
                base_currency
            );
        }

        Self {
            provider,
            base_currency,
            freshness: config.freshness,
            snapshot: RwLock::new(None),
            refresh_gate: Mutex::new(()),
            fetch_wait: config.fetch_wait,
        }
    }

    /// Currency the cached rates are quoted against.
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Freshness of the held snapshot, or `None` while the cache is empty.
    pub fn snapshot_freshness(&self) -> Option<Freshness> {
        self.current()
            .map(|s| self.freshness.classify(s.age(Utc::now())))
    }

    /// Return a usable snapshot, refreshing when the held one has aged past
    /// its freshness window.
    ///
    /// Never returns an error: provider failures degrade to the stale
    /// snapshot while it is inside the extended window, then to the
    /// identity snapshot.
    pub async fn get_rates(&self) -> Arc<RateSnapshot> {
        let Some(provider) = self.provider.clone() else {
            return self.identity();
        };

        if let Some(snapshot) = self.current() {
            match self.freshness.classify(snapshot.age(Utc::now())) {
                Freshness::Fresh => return snapshot,
                Freshness::Stale => return self.refresh_stale(provider, snapshot).await,
                Freshness::Expired => {}
            }
        }

        self.refresh_or_fall_back(provider).await
    }

    /// Optional boot-time refresh so the first pricing request does not
    /// pay for the initial fetch. Failure is non-fatal; the first read
    /// will retry.
    pub async fn warm_up(&self) {
        let Some(provider) = self.provider.clone() else {
            return;
        };

        let _guard = self.refresh_gate.lock().await;
        let _ = self.refresh(provider.as_ref()).await;
    }

    /// Stale path: attempt a refresh unless one is already in flight, in
    /// which case the stale snapshot is served immediately. A failed
    /// refresh also serves the stale snapshot; its age keeps advancing
    /// toward the extended window.
    async fn refresh_stale(
        &self,
        provider: Arc<dyn RateProvider>,
        stale: Arc<RateSnapshot>,
    ) -> Arc<RateSnapshot> {
        match self.refresh_gate.try_lock() {
            Ok(_guard) => match self.refresh(provider.as_ref()).await {
                Ok(fresh) => fresh,
                Err(_) => {
                    debug!(
                        "Serving stale rates for base {} after failed refresh",
                        self.base_currency
                    );
                    stale
                }
            },
            Err(_) => stale,
        }
    }

    /// Empty and Expired path: wait for the refresh gate and fetch, all
    /// within the fetch-wait bound. Another task may complete the refresh
    /// while we wait, so the snapshot is re-checked before fetching.
    async fn refresh_or_fall_back(&self, provider: Arc<dyn RateProvider>) -> Arc<RateSnapshot> {
        let attempt = async {
            let _guard = self.refresh_gate.lock().await;

            if let Some(snapshot) = self.current() {
                if self.freshness.classify(snapshot.age(Utc::now())) == Freshness::Fresh {
                    return Ok(snapshot);
                }
            }

            self.refresh(provider.as_ref()).await
        };

        match timeout(self.fetch_wait, attempt).await {
            Ok(Ok(snapshot)) => snapshot,
            Ok(Err(_)) => self.fall_back(),
            Err(_) => {
                warn!(
                    "Rate refresh for base {} exceeded {:?}; proceeding with fallback data",
                    self.base_currency, self.fetch_wait
                );
                self.fall_back()
            }
        }
    }

    /// One provider round trip. Success atomically installs a new
    /// snapshot; failure leaves the held snapshot untouched. Callers must
    /// hold the refresh gate.
    async fn refresh(&self, provider: &dyn RateProvider) -> Result<Arc<RateSnapshot>, RateError> {
        match provider.fetch_rates(&self.base_currency).await {
            Ok(rates) => {
                let snapshot = self.install(RateSnapshot::new(self.base_currency.clone(), rates));
                info!(
                    "Fetched and cached exchange rates for base {}",
                    self.base_currency
                );
                Ok(snapshot)
            }
            Err(e) => {
                error!(
                    "Failed to fetch exchange rates from {}: {}",
                    provider.id(),
                    e
                );
                Err(e)
            }
        }
    }

    /// Last-known snapshot while it is still inside the extended window,
    /// identity otherwise.
    fn fall_back(&self) -> Arc<RateSnapshot> {
        match self.current() {
            Some(snapshot)
                if self.freshness.classify(snapshot.age(Utc::now())) != Freshness::Expired =>
            {
                snapshot
            }
            _ => self.identity(),
        }
    }

    fn identity(&self) -> Arc<RateSnapshot> {
        Arc::new(RateSnapshot::identity(&self.base_currency))
    }

    fn current(&self) -> Option<Arc<RateSnapshot>> {
        self.read_snapshot().clone()
    }

    fn install(&self, snapshot: RateSnapshot) -> Arc<RateSnapshot> {
        let snapshot = Arc::new(snapshot);
        *self.write_snapshot() = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Lock the snapshot for reading, recovering from poison if necessary.
    ///
    /// Recovering is safe here: the snapshot is only ever replaced whole,
    /// so a poisoned lock cannot expose a half-written value.
    fn read_snapshot(&self) -> RwLockReadGuard<'_, Option<Arc<RateSnapshot>>> {
        self.snapshot.read().unwrap_or_else(|poisoned| {
            warn!("Rate cache snapshot lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_snapshot(&self) -> RwLockWriteGuard<'_, Option<Arc<RateSnapshot>>> {
        self.snapshot.write().unwrap_or_else(|poisoned| {
            warn!("Rate cache snapshot lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
