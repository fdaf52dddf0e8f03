//! # Catalog Settings
//!
//! Configuration for the provider layer.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     INKLINE_DATASET_PATH=/srv/inkline/pricing.json                     │
//! │     INKLINE_CACHE_TTL_SECS=120                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/inkline/catalog.toml (Linux)                             │
//! │     ~/Library/Application Support/com.inkline.studio/catalog.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     seeded dataset, 300s TTL                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! dataset_path = "/srv/inkline/pricing.json"
//! cache_ttl_secs = 300
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};

/// Provider-layer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Path to the JSON pricing dataset. `None` means the seeded defaults.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Snapshot cache TTL in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_cache_ttl() -> u64 {
    300
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            dataset_path: None,
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl CatalogSettings {
    /// Loads settings from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (catalog.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut settings = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading catalog settings from file");
                let contents = std::fs::read_to_string(&path)?;
                settings = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Settings file not found, using defaults");
            }
        }

        settings.apply_env_overrides();
        settings.validate()?;

        Ok(settings)
    }

    /// Loads settings or returns defaults if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load catalog settings: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the settings.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.cache_ttl_secs == 0 {
            return Err(CatalogError::InvalidSettings(
                "cache_ttl_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// The cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("INKLINE_DATASET_PATH") {
            debug!(path = %path, "Overriding dataset path from environment");
            self.dataset_path = Some(PathBuf::from(path));
        }

        if let Ok(ttl) = std::env::var("INKLINE_CACHE_TTL_SECS") {
            if let Ok(secs) = ttl.parse::<u64>() {
                debug!(secs, "Overriding cache TTL from environment");
                self.cache_ttl_secs = secs;
            } else {
                warn!(value = %ttl, "Unparseable INKLINE_CACHE_TTL_SECS ignored");
            }
        }
    }

    /// Returns the default settings file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "inkline", "studio")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
