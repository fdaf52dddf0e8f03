//! # inkline-catalog: Pricing Data Providers for Inkline
//!
//! Everything the pure engine refuses to do lives here: fetching the
//! pricing dataset, caching it, and configuring where it comes from.
//!
//! ## Snapshot Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Snapshot Lifecycle                                 │
//! │                                                                         │
//! │  SnapshotSource (file / API / seeded defaults)                         │
//! │       │ load + validate                                                 │
//! │       ▼                                                                 │
//! │  SnapshotCache ── TTL expiry ──► reload                                │
//! │       │                                                                 │
//! │       │ Arc<PricingSnapshot>  (complete, immutable)                    │
//! │       ▼                                                                 │
//! │  inkline-core pricing calls                                            │
//! │                                                                         │
//! │  The cache swaps WHOLE snapshots only. A quote that started on an      │
//! │  old snapshot finishes on it; a half-saved admin edit is never         │
//! │  observable.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`snapshot`] - The atomic pricing dataset (tables + config)
//! - [`source`] - Snapshot and distance collaborator contracts
//! - [`cache`] - TTL cache with atomic replacement
//! - [`settings`] - TOML + environment configuration
//! - [`defaults`] - Seeded rate card for demos and fallback
//! - [`error`] - Provider-layer error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cache;
pub mod defaults;
pub mod error;
pub mod settings;
pub mod snapshot;
pub mod source;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cache::SnapshotCache;
pub use defaults::{default_pricing_config, default_snapshot};
pub use error::{CatalogError, CatalogResult};
pub use settings::CatalogSettings;
pub use snapshot::PricingSnapshot;
pub use source::{resolve_distance, DistanceSource, FileSnapshotSource, SnapshotSource};

// =============================================================================
// End-to-End Tests
// =============================================================================
