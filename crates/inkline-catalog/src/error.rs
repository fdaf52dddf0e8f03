//! # Error Types
//!
//! Failures of the provider layer. Pricing itself cannot fail here; these
//! are retrieval, parsing and configuration problems.

use thiserror::Error;

/// Provider-layer errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The snapshot source could not deliver a dataset.
    #[error("snapshot source failed: {0}")]
    SourceUnavailable(String),

    /// The dataset file could not be read.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset could not be parsed.
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset parsed but is not servable (malformed tables, missing
    /// technique). Carries the underlying table error.
    #[error("dataset rejected: {0}")]
    Rejected(String),

    /// Settings file could not be parsed.
    #[error("failed to parse settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Settings are present but invalid.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The distance lookup collaborator failed.
    ///
    /// Recovered locally: the shipping estimator substitutes the courier
    /// minimum fee, so this never reaches the customer.
    #[error("distance lookup failed: {0}")]
    Distance(String),
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
