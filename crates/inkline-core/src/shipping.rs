//! # Shipping Estimator
//!
//! Carton counts from per-category packing capacities, and delivery cost
//! from the selected mode.
//!
//! ## Packing Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Per-Class, Non-Pooled Packing                          │
//! │                                                                         │
//! │  Class      Capacity per carton                                        │
//! │  tshirt     80   (also the default class)                              │
//! │  sweat      30                                                         │
//! │  totebag    200                                                        │
//! │                                                                         │
//! │  cartons = Σ over classes of ceil(class quantity / class capacity)     │
//! │                                                                         │
//! │  Cartons are NOT shared across classes: 81 tees + 1 sweat packs as     │
//! │  ceil(81/80) + ceil(1/30) = 2 + 1 = 3 cartons, not 2. A half-empty     │
//! │  tee carton cannot absorb the sweat.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Distance for courier mode comes from an external collaborator; the
//! estimator itself is pure and takes the resolved distance (or its
//! absence) as an input. A failed lookup falls back to the minimum fee.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DeliveryMode, PricingConfig, ProductLine};

// =============================================================================
// Product Class
// =============================================================================

/// Packing class of a product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductClass {
    /// T-shirts and anything unrecognized.
    Tshirt,
    /// Sweatshirts and hoodies (bulkier, fewer per carton).
    Sweat,
    /// Tote bags (flat, many per carton).
    ToteBag,
}

impl ProductClass {
    /// Pieces that fit in one carton of this class.
    pub const fn capacity(&self) -> u32 {
        match self {
            ProductClass::Tshirt => 80,
            ProductClass::Sweat => 30,
            ProductClass::ToteBag => 200,
        }
    }

    /// Classifies a product line.
    ///
    /// The ERP category is authoritative when present; the product name is
    /// the fallback heuristic. Anything unrecognized packs as a t-shirt.
    pub fn classify(category: Option<&str>, name: &str) -> ProductClass {
        if let Some(category) = category {
            if let Some(class) = Self::from_label(category) {
                return class;
            }
        }
        Self::from_label(name).unwrap_or(ProductClass::Tshirt)
    }

    fn from_label(label: &str) -> Option<ProductClass> {
        let label = label.to_lowercase();
        if label.contains("sweat") || label.contains("hoodie") {
            Some(ProductClass::Sweat)
        } else if label.contains("tote") || label.contains("bag") {
            Some(ProductClass::ToteBag)
        } else if label.contains("shirt") || label.contains("tee") {
            Some(ProductClass::Tshirt)
        } else {
            None
        }
    }
}

// =============================================================================
// Carton Count
// =============================================================================

/// Cartons required to pack the given product lines.
///
/// Quantities are summed per class first, then each class rounds up to
/// whole cartons independently.
pub fn cartons_required(lines: &[ProductLine]) -> u32 {
    let mut per_class: HashMap<ProductClass, u32> = HashMap::new();
    for line in lines {
        let class = ProductClass::classify(line.category.as_deref(), &line.name);
        *per_class.entry(class).or_insert(0) += line.quantity;
    }

    per_class
        .into_iter()
        .map(|(class, quantity)| quantity.div_ceil(class.capacity()))
        .sum()
}

// =============================================================================
// Shipping Cost
// =============================================================================

/// Delivery cost for the given lines and mode.
///
/// - Parcel: cartons × per-carton rate.
/// - Courier: `max(km × per-km rate, minimum fee)`; a missing distance
///   (lookup failed or not attempted) falls back to the minimum fee.
/// - Pickup and client-arranged carriers cost nothing.
pub fn shipping_cost(
    lines: &[ProductLine],
    mode: DeliveryMode,
    config: &PricingConfig,
    distance_km: Option<f64>,
) -> Money {
    match mode {
        DeliveryMode::Parcel => {
            config.parcel_per_carton * cartons_required(lines) as i64
        }
        DeliveryMode::Courier => match distance_km {
            Some(km) => {
                let by_distance =
                    Money::from_cents((km * config.courier_per_km.cents() as f64).round() as i64);
                by_distance.max(config.courier_minimum)
            }
            None => config.courier_minimum,
        },
        DeliveryMode::Pickup | DeliveryMode::ClientCarrier => Money::zero(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, category: Option<&str>, quantity: u32) -> ProductLine {
        ProductLine {
            name: name.to_string(),
            category: category.map(|c| c.to_string()),
            quantity,
            unit_price: Money::from_cents(500),
        }
    }

    fn config() -> PricingConfig {
        PricingConfig {
            parcel_per_carton: Money::from_cents(950),
            courier_per_km: Money::from_cents(120),
            courier_minimum: Money::from_cents(2500),
            ..PricingConfig::default()
        }
    }

    #[test]
    fn test_classify_category_is_authoritative() {
        // Name says tee, category says sweat: category wins
        assert_eq!(
            ProductClass::classify(Some("Sweatshirts"), "Comfort Tee"),
            ProductClass::Sweat
        );
    }

    #[test]
    fn test_classify_falls_back_to_name() {
        assert_eq!(
            ProductClass::classify(None, "Organic Tote Bag"),
            ProductClass::ToteBag
        );
        assert_eq!(
            ProductClass::classify(Some("Goodies"), "Zip Hoodie"),
            ProductClass::Sweat
        );
        // Unrecognized packs as t-shirt
        assert_eq!(
            ProductClass::classify(None, "Mystery Item"),
            ProductClass::Tshirt
        );
    }

    #[test]
    fn test_cartons_are_not_pooled_across_classes() {
        // 81 tees need 2 cartons, 1 sweat needs its own: 3 total, never 2
        let lines = vec![
            line("Heavy Cotton Tee", Some("T-shirts"), 81),
            line("Crew Sweatshirt", Some("Sweatshirts"), 1),
        ];
        assert_eq!(cartons_required(&lines), 3);
    }

    #[test]
    fn test_cartons_sum_within_class_before_rounding() {
        // Two tee lines of 40 pack together into one carton
        let lines = vec![
            line("Tee A", Some("T-shirts"), 40),
            line("Tee B", Some("T-shirts"), 40),
        ];
        assert_eq!(cartons_required(&lines), 1);
    }

    #[test]
    fn test_carton_capacities() {
        assert_eq!(cartons_required(&[line("Tee", None, 80)]), 1);
        assert_eq!(cartons_required(&[line("Tee", None, 81)]), 2);
        assert_eq!(cartons_required(&[line("Sweat", None, 30)]), 1);
        assert_eq!(cartons_required(&[line("Sweat", None, 31)]), 2);
        assert_eq!(cartons_required(&[line("Tote", None, 200)]), 1);
        assert_eq!(cartons_required(&[line("Tote", None, 201)]), 2);
    }

    #[test]
    fn test_no_lines_means_no_cartons() {
        assert_eq!(cartons_required(&[]), 0);
    }

    #[test]
    fn test_parcel_cost_is_per_carton() {
        let lines = vec![line("Tee", None, 81), line("Sweat", None, 1)];
        let cost = shipping_cost(&lines, DeliveryMode::Parcel, &config(), None);
        assert_eq!(cost.cents(), 3 * 950);
    }

    #[test]
    fn test_courier_cost_by_distance_with_minimum() {
        let lines = vec![line("Tee", None, 10)];
        // 30 km × 1.20 = 36.00, above the minimum
        let cost = shipping_cost(&lines, DeliveryMode::Courier, &config(), Some(30.0));
        assert_eq!(cost.cents(), 3600);

        // 5 km × 1.20 = 6.00, below the 25.00 minimum
        let cost = shipping_cost(&lines, DeliveryMode::Courier, &config(), Some(5.0));
        assert_eq!(cost.cents(), 2500);
    }

    #[test]
    fn test_courier_missing_distance_falls_back_to_minimum() {
        let lines = vec![line("Tee", None, 10)];
        let cost = shipping_cost(&lines, DeliveryMode::Courier, &config(), None);
        assert_eq!(cost.cents(), 2500);
    }

    #[test]
    fn test_pickup_and_client_carrier_are_free() {
        let lines = vec![line("Tee", None, 500)];
        assert!(shipping_cost(&lines, DeliveryMode::Pickup, &config(), None).is_zero());
        assert!(shipping_cost(&lines, DeliveryMode::ClientCarrier, &config(), None).is_zero());
    }
}
