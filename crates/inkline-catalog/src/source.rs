//! # Snapshot & Distance Sources
//!
//! Collaborator contracts for the data the engine consumes but never
//! fetches itself.
//!
//! ## Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Provider Boundary                                   │
//! │                                                                         │
//! │  SnapshotSource ──► PricingSnapshot (tables + config), validated       │
//! │     implementations: admin pricing API, dataset file, seeded defaults  │
//! │                                                                         │
//! │  DistanceSource ──► km to the delivery address                         │
//! │     implementation: geocoding service owned by the host application   │
//! │     failure is recovered locally (courier minimum fee), never shown   │
//! │     to the customer                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::snapshot::PricingSnapshot;

// =============================================================================
// Snapshot Source
// =============================================================================

/// A source of complete pricing snapshots.
///
/// Implementations fetch from wherever the dataset lives (admin API, file,
/// seeded defaults). The cache calls `load` on expiry; a returned snapshot
/// must already be internally consistent; sources validate before handing
/// it over.
pub trait SnapshotSource: Send + Sync {
    /// Loads a fresh snapshot.
    fn load(&self) -> impl std::future::Future<Output = CatalogResult<PricingSnapshot>> + Send;
}

/// Reads the pricing dataset from a JSON file.
///
/// The file carries the same sparse-matrix shape the admin editor saves,
/// deserialized straight into the core table types.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSnapshotSource { path: path.into() }
    }
}

impl SnapshotSource for FileSnapshotSource {
    async fn load(&self) -> CatalogResult<PricingSnapshot> {
        debug!(path = %self.path.display(), "loading pricing dataset from file");
        let contents = std::fs::read_to_string(&self.path)?;
        let snapshot: PricingSnapshot = serde_json::from_str(&contents)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

// =============================================================================
// Distance Source
// =============================================================================

/// Road distance to a delivery address, for courier pricing.
pub trait DistanceSource: Send + Sync {
    /// Resolves the distance in km from the studio to `address`.
    fn distance_km(
        &self,
        address: &str,
    ) -> impl std::future::Future<Output = CatalogResult<f64>> + Send;
}

/// Resolves a courier distance, recovering from failure.
///
/// A failed lookup is logged and collapsed to `None`; the shipping
/// estimator then charges the configured courier minimum. The customer
/// never sees the failure.
pub async fn resolve_distance<D: DistanceSource>(source: &D, address: &str) -> Option<f64> {
    match source.distance_km(address).await {
        Ok(km) => Some(km),
        Err(err) => {
            warn!(%err, address, "distance lookup failed, courier minimum will apply");
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_snapshot;

    struct FixedDistance(f64);

    impl DistanceSource for FixedDistance {
        async fn distance_km(&self, _address: &str) -> CatalogResult<f64> {
            Ok(self.0)
        }
    }

    struct BrokenDistance;

    impl DistanceSource for BrokenDistance {
        async fn distance_km(&self, _address: &str) -> CatalogResult<f64> {
            Err(CatalogError::Distance("geocoder timeout".to_string()))
        }
    }

    #[tokio::test]
    async fn test_resolve_distance_success() {
        let km = resolve_distance(&FixedDistance(30.5), "12 Mill Lane").await;
        assert_eq!(km, Some(30.5));
    }

    #[tokio::test]
    async fn test_resolve_distance_failure_collapses_to_none() {
        let km = resolve_distance(&BrokenDistance, "12 Mill Lane").await;
        assert_eq!(km, None);
    }

    #[tokio::test]
    async fn test_file_source_round_trip() {
        let snapshot = default_snapshot();
        let path = std::env::temp_dir().join("inkline-dataset-test.json");
        std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        let loaded = FileSnapshotSource::new(&path).load().await.unwrap();
        assert_eq!(loaded.tables.len(), snapshot.tables.len());
        assert_eq!(loaded.config, snapshot.config);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let source = FileSnapshotSource::new("/nonexistent/inkline-dataset.json");
        assert!(matches!(
            source.load().await,
            Err(CatalogError::Io(_))
        ));
    }
}
