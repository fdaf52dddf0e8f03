//! # Seeded Default Dataset
//!
//! A realistic pricing dataset for demos, development, and as the fallback
//! source when no dataset file is configured.
//!
//! Prices mirror the studio's published rate card: unit prices decrease as
//! quantity tiers rise and increase with color count / stitch range / print
//! size. Five- and six-color screen printing is deliberately left
//! unconfigured in the smallest tier: short runs with many screens are not
//! offered, and the wizard uses the gap to suggest the unlocking quantity.

use std::collections::HashMap;

use inkline_core::{
    color_key, dimension_key, stitch_key, DtfTable, EmbroideryTable, Money, Percent, PriceTable,
    PricingConfig, QuantityTier, ScreenPrintOption, ScreenPrintTable, StitchRange,
};

use crate::snapshot::PricingSnapshot;

/// The default snapshot: all three techniques plus the default config.
pub fn default_snapshot() -> PricingSnapshot {
    PricingSnapshot::new(
        vec![
            default_screen_print_table(),
            default_embroidery_table(),
            default_dtf_table(),
        ],
        default_pricing_config(),
    )
}

/// Default global knobs.
pub fn default_pricing_config() -> PricingConfig {
    PricingConfig {
        textile_discount: Percent::zero(),
        indexation: Percent::zero(),
        packaging_per_piece: Money::from_cents(45),
        carton_price: Money::from_cents(250),
        vectorization_price: Money::from_cents(3500),
        parcel_per_carton: Money::from_cents(890),
        courier_per_km: Money::from_cents(150),
        courier_minimum: Money::from_cents(2500),
    }
}

fn quantity_tiers() -> Vec<QuantityTier> {
    vec![
        QuantityTier::bounded(10, 24, "10-24"),
        QuantityTier::bounded(25, 49, "25-49"),
        QuantityTier::bounded(50, 99, "50-99"),
        QuantityTier::bounded(100, 249, "100-249"),
        QuantityTier::open_ended(250, "250+"),
    ]
}

/// Screen printing rate card. Columns are color counts 1..=6, in cents.
const SCREEN_LIGHT_GRID: [(&str, [i64; 6]); 5] = [
    ("10-24", [260, 340, 420, 500, 580, 660]),
    ("25-49", [220, 290, 360, 430, 500, 570]),
    ("50-99", [185, 245, 305, 365, 425, 485]),
    ("100-249", [155, 205, 255, 305, 355, 405]),
    ("250+", [130, 170, 210, 250, 290, 330]),
];

/// Dark substrates take a white underbase pass, priced as a flat premium.
const DARK_PREMIUM_CENTS: i64 = 40;

pub fn default_screen_print_table() -> PriceTable {
    let mut light = HashMap::new();
    let mut dark = HashMap::new();

    for (tier_label, row) in SCREEN_LIGHT_GRID {
        for (index, &cents) in row.iter().enumerate() {
            let color_count = index as u8 + 1;
            // 5+ screens are not offered on the shortest runs
            if tier_label == "10-24" && color_count >= 5 {
                continue;
            }
            let key = color_key(tier_label, color_count);
            light.insert(key.clone(), Money::from_cents(cents));
            dark.insert(key, Money::from_cents(cents + DARK_PREMIUM_CENTS));
        }
    }

    PriceTable::ScreenPrint(ScreenPrintTable {
        quantity_tiers: quantity_tiers(),
        color_counts: vec![1, 2, 3, 4, 5, 6],
        light_prices: light,
        dark_prices: dark,
        fee_per_color: Money::from_cents(2200),
        options: vec![
            ScreenPrintOption {
                id: "puff".to_string(),
                name: "Puff ink".to_string(),
                surcharge: Percent::from_percent(15),
            },
            ScreenPrintOption {
                id: "metallic".to_string(),
                name: "Metallic ink".to_string(),
                surcharge: Percent::from_percent(25),
            },
            ScreenPrintOption {
                id: "discharge".to_string(),
                name: "Discharge ink".to_string(),
                surcharge: Percent::from_percent(10),
            },
        ],
        min_quantity: 10,
    })
}

/// Embroidery rate card. Columns follow the stitch ranges, in cents.
const EMBROIDERY_SMALL_GRID: [(&str, [i64; 4]); 5] = [
    ("10-24", [320, 410, 520, 640]),
    ("25-49", [270, 350, 450, 560]),
    ("50-99", [230, 300, 390, 490]),
    ("100-249", [195, 255, 335, 425]),
    ("250+", [165, 220, 290, 370]),
];

const EMBROIDERY_LARGE_GRID: [(&str, [i64; 4]); 5] = [
    ("10-24", [520, 660, 830, 1020]),
    ("25-49", [440, 560, 710, 880]),
    ("50-99", [375, 480, 610, 760]),
    ("100-249", [320, 410, 520, 650]),
    ("250+", [270, 350, 445, 555]),
];

pub fn default_embroidery_table() -> PriceTable {
    let small_ranges = vec![
        StitchRange::bounded(1, 5000, "1-5000"),
        StitchRange::bounded(5001, 10000, "5001-10000"),
        StitchRange::bounded(10001, 15000, "10001-15000"),
        StitchRange::open_ended(15001, "15001+"),
    ];
    let large_ranges = vec![
        StitchRange::bounded(1, 10000, "1-10000"),
        StitchRange::bounded(10001, 20000, "10001-20000"),
        StitchRange::bounded(20001, 30000, "20001-30000"),
        StitchRange::open_ended(30001, "30001+"),
    ];

    let mut small_prices = HashMap::new();
    for (tier_label, row) in EMBROIDERY_SMALL_GRID {
        for (range, &cents) in small_ranges.iter().zip(row.iter()) {
            small_prices.insert(stitch_key(tier_label, &range.label), Money::from_cents(cents));
        }
    }

    let mut large_prices = HashMap::new();
    for (tier_label, row) in EMBROIDERY_LARGE_GRID {
        for (range, &cents) in large_ranges.iter().zip(row.iter()) {
            large_prices.insert(stitch_key(tier_label, &range.label), Money::from_cents(cents));
        }
    }

    PriceTable::Embroidery(EmbroideryTable {
        quantity_tiers: quantity_tiers(),
        small_ranges,
        large_ranges,
        small_prices,
        large_prices,
        fee_small_digitization: Money::from_cents(3500),
        fee_large_digitization: Money::from_cents(7000),
        small_digitization_threshold: 10_000,
        min_quantity: 10,
    })
}

/// DTF rate card. Columns follow the print dimensions, in cents.
const DTF_GRID: [(&str, [i64; 3]); 5] = [
    ("10-24", [180, 310, 520]),
    ("25-49", [150, 260, 440]),
    ("50-99", [125, 220, 370]),
    ("100-249", [105, 185, 310]),
    ("250+", [90, 155, 260]),
];

const DTF_DIMENSIONS: [&str; 3] = ["10x10 cm", "20x20 cm", "30x40 cm"];

pub fn default_dtf_table() -> PriceTable {
    let mut prices = HashMap::new();
    for (tier_label, row) in DTF_GRID {
        for (dimension, &cents) in DTF_DIMENSIONS.iter().zip(row.iter()) {
            prices.insert(dimension_key(tier_label, dimension), Money::from_cents(cents));
        }
    }

    PriceTable::Dtf(DtfTable {
        quantity_tiers: quantity_tiers(),
        dimensions: DTF_DIMENSIONS.iter().map(|d| d.to_string()).collect(),
        prices,
        min_quantity: 10,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use inkline_core::{EmbroiderySize, SubstrateTone, Technique};

    #[test]
    fn test_default_snapshot_is_servable() {
        let snapshot = default_snapshot();
        assert!(snapshot.validate().is_ok());
        assert!(snapshot.table(Technique::ScreenPrint).is_some());
        assert!(snapshot.table(Technique::Embroidery).is_some());
        assert!(snapshot.table(Technique::Dtf).is_some());
    }

    /// For a fixed axis value, the unit price never rises as quantity
    /// climbs into higher tiers. Checked exactly at each boundary: `min`
    /// lands in the new tier, `min - 1` in the old one.
    #[test]
    fn test_screen_print_tier_monotonicity_at_boundaries() {
        let table = match default_screen_print_table() {
            PriceTable::ScreenPrint(t) => t,
            _ => unreachable!(),
        };

        for color_count in 1..=4u8 {
            for pair in table.quantity_tiers.windows(2) {
                let below = table.unit_price(&pair[0].label, color_count, SubstrateTone::Light);
                let at = table.unit_price(&pair[1].label, color_count, SubstrateTone::Light);
                let (below, at) = (below.unwrap(), at.unwrap());
                assert!(
                    at < below,
                    "{color_count} colors: price should drop from tier {} ({below}) to tier {} ({at})",
                    pair[0].label,
                    pair[1].label,
                );

                // Boundary resolution: min-1 stays in the lower tier
                let boundary = pair[1].min;
                let tiers = &table.quantity_tiers;
                assert_eq!(
                    inkline_core::resolve_tier(boundary, tiers).unwrap().label,
                    pair[1].label
                );
                assert_eq!(
                    inkline_core::resolve_tier(boundary - 1, tiers).unwrap().label,
                    pair[0].label
                );
            }
        }
    }

    #[test]
    fn test_embroidery_tier_monotonicity() {
        let table = match default_embroidery_table() {
            PriceTable::Embroidery(t) => t,
            _ => unreachable!(),
        };
        for size in [EmbroiderySize::Small, EmbroiderySize::Large] {
            for range in table.ranges(size) {
                for pair in table.quantity_tiers.windows(2) {
                    let below = table.unit_price(&pair[0].label, &range.label, size).unwrap();
                    let at = table.unit_price(&pair[1].label, &range.label, size).unwrap();
                    assert!(at < below);
                }
            }
        }
    }

    #[test]
    fn test_dtf_tier_monotonicity() {
        let table = match default_dtf_table() {
            PriceTable::Dtf(t) => t,
            _ => unreachable!(),
        };
        for dimension in &table.dimensions {
            for pair in table.quantity_tiers.windows(2) {
                let below = table.unit_price(&pair[0].label, dimension).unwrap();
                let at = table.unit_price(&pair[1].label, dimension).unwrap();
                assert!(at < below);
            }
        }
    }

    #[test]
    fn test_many_screens_unlock_at_second_tier() {
        let table = match default_screen_print_table() {
            PriceTable::ScreenPrint(t) => t,
            _ => unreachable!(),
        };
        // 5 and 6 screens are not offered on 10-24 piece runs
        assert_eq!(table.unit_price("10-24", 6, SubstrateTone::Light), None);
        assert_eq!(
            table.minimum_quantity_for(6, SubstrateTone::Light),
            Some(25)
        );
        assert_eq!(table.minimum_quantity_for(1, SubstrateTone::Dark), Some(10));
    }

    #[test]
    fn test_dark_substrate_carries_premium() {
        let table = match default_screen_print_table() {
            PriceTable::ScreenPrint(t) => t,
            _ => unreachable!(),
        };
        let light = table.unit_price("25-49", 2, SubstrateTone::Light).unwrap();
        let dark = table.unit_price("25-49", 2, SubstrateTone::Dark).unwrap();
        assert_eq!(dark.cents() - light.cents(), DARK_PREMIUM_CENTS);
    }
}
