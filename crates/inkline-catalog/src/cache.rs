//! # Snapshot Cache
//!
//! TTL cache over a [`SnapshotSource`] with atomic snapshot replacement.
//!
//! ## Replacement Guarantee
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Atomic Snapshot Replacement                            │
//! │                                                                         │
//! │  The cache holds an Arc to ONE complete snapshot. Refresh builds the   │
//! │  next snapshot entirely outside the lock, then swaps the Arc under     │
//! │  the write lock.                                                       │
//! │                                                                         │
//! │  In-flight quotes keep their Arc and finish on the snapshot they       │
//! │  started with; new quotes get the replacement. Nobody ever sees a      │
//! │  half-written table while the admin editor saves.                      │
//! │                                                                         │
//! │  Refresh failure with a cached snapshot present: serve stale, warn.    │
//! │  Refresh failure with nothing cached: the error propagates.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::CatalogResult;
use crate::snapshot::PricingSnapshot;
use crate::source::SnapshotSource;

struct CacheState {
    snapshot: Arc<PricingSnapshot>,
    fetched_at: Instant,
}

/// TTL cache serving immutable pricing snapshots.
pub struct SnapshotCache<S> {
    source: S,
    ttl: Duration,
    state: RwLock<Option<CacheState>>,
}

impl<S: SnapshotSource> SnapshotCache<S> {
    /// Creates an empty cache over a source.
    pub fn new(source: S, ttl: Duration) -> Self {
        SnapshotCache {
            source,
            ttl,
            state: RwLock::new(None),
        }
    }

    /// Returns the current snapshot, loading or refreshing as needed.
    ///
    /// Concurrent callers within the TTL share the same Arc; pricing a
    /// quote clones the Arc, never the dataset.
    pub async fn snapshot(&self) -> CatalogResult<Arc<PricingSnapshot>> {
        // Fast path: fresh snapshot under the read lock
        {
            let state = self.state.read().await;
            if let Some(state) = state.as_ref() {
                if state.fetched_at.elapsed() < self.ttl {
                    return Ok(Arc::clone(&state.snapshot));
                }
            }
        }

        self.reload().await
    }

    /// Reloads from the source when the cached snapshot is absent or expired.
    ///
    /// On failure, an expired snapshot (when present) is served stale: a
    /// broken pricing API must not take quoting down with it.
    async fn reload(&self) -> CatalogResult<Arc<PricingSnapshot>> {
        let mut state = self.state.write().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(current) = state.as_ref() {
            if current.fetched_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&current.snapshot));
            }
        }

        match self.source.load().await {
            Ok(snapshot) => {
                info!(tables = snapshot.tables.len(), "pricing snapshot refreshed");
                let snapshot = Arc::new(snapshot);
                *state = Some(CacheState {
                    snapshot: Arc::clone(&snapshot),
                    fetched_at: Instant::now(),
                });
                Ok(snapshot)
            }
            Err(err) => match state.as_ref() {
                Some(stale) => {
                    warn!(%err, "snapshot refresh failed, serving stale dataset");
                    Ok(Arc::clone(&stale.snapshot))
                }
                None => Err(err),
            },
        }
    }

    /// Drops the cached snapshot; the next call reloads.
    pub async fn invalidate(&self) {
        debug!("pricing snapshot cache invalidated");
        *self.state.write().await = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
