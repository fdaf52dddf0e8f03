//! # Pricing Snapshot
//!
//! The atomic unit of pricing data: the three price tables plus the global
//! config, stamped with its fetch time.
//!
//! A snapshot is immutable once built. Configuration changes produce a new
//! snapshot that replaces the old one wholesale (see `cache.rs`); callers
//! never observe a table mid-edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use inkline_core::{PriceTable, PricingConfig, Technique};

use crate::error::{CatalogError, CatalogResult};

/// One complete, validated pricing dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    /// One price table per technique.
    pub tables: Vec<PriceTable>,

    /// Global pricing knobs.
    pub config: PricingConfig,

    /// When this snapshot was produced by its source.
    pub fetched_at: DateTime<Utc>,
}

impl PricingSnapshot {
    /// Builds a snapshot stamped with the current time.
    pub fn new(tables: Vec<PriceTable>, config: PricingConfig) -> Self {
        PricingSnapshot {
            tables,
            config,
            fetched_at: Utc::now(),
        }
    }

    /// The price table for a technique, if the dataset carries one.
    pub fn table(&self, technique: Technique) -> Option<&PriceTable> {
        self.tables.iter().find(|t| t.technique() == technique)
    }

    /// Validates that the snapshot is servable.
    ///
    /// ## Rules
    /// - Every table passes its own structural validation
    /// - At most one table per technique (two would make lookup ambiguous)
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen: Vec<Technique> = Vec::new();
        for table in &self.tables {
            let technique = table.technique();
            if seen.contains(&technique) {
                return Err(CatalogError::Rejected(format!(
                    "more than one table for {technique}"
                )));
            }
            seen.push(technique);

            table
                .validate()
                .map_err(|err| CatalogError::Rejected(err.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkline_core::{DtfTable, QuantityTier};
    use std::collections::HashMap;

    fn dtf_table() -> PriceTable {
        PriceTable::Dtf(DtfTable {
            quantity_tiers: vec![QuantityTier::open_ended(1, "1+")],
            dimensions: vec!["10x10 cm".to_string()],
            prices: HashMap::new(),
            min_quantity: 1,
        })
    }

    #[test]
    fn test_table_lookup_by_technique() {
        let snapshot = PricingSnapshot::new(vec![dtf_table()], PricingConfig::default());
        assert!(snapshot.table(Technique::Dtf).is_some());
        assert!(snapshot.table(Technique::Embroidery).is_none());
    }

    #[test]
    fn test_validate_accepts_one_table_per_technique() {
        let snapshot = PricingSnapshot::new(vec![dtf_table()], PricingConfig::default());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_technique() {
        let snapshot =
            PricingSnapshot::new(vec![dtf_table(), dtf_table()], PricingConfig::default());
        let err = snapshot.validate().unwrap_err();
        assert!(err.to_string().contains("more than one table"));
    }

    #[test]
    fn test_validate_rejects_malformed_table() {
        let malformed = PriceTable::Dtf(DtfTable {
            quantity_tiers: vec![],
            dimensions: vec![],
            prices: HashMap::new(),
            min_quantity: 1,
        });
        let snapshot = PricingSnapshot::new(vec![malformed], PricingConfig::default());
        assert!(snapshot.validate().is_err());
    }
}
