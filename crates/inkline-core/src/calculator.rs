//! # Service Price Calculator
//!
//! Produces one price breakdown per quote item.
//!
//! ## Composition Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                Breakdown Composition (order is fixed)                   │
//! │                                                                         │
//! │  1. resolve quantity tier ──── fail ──► Unavailable                    │
//! │  2. resolve axis bucket ────── fail ──► Unavailable (+ unlock minimum) │
//! │  3. fixed fees (screens / digitization)                                │
//! │  4. base        = unit × quantity + fixed fees                         │
//! │  5. options     = base × Σ option percentages   (summed, not          │
//! │                   compounded, applied to base once)                    │
//! │  6. base_total  = base + options                                       │
//! │  7. express     = base_total × 10% per day under the 10-day standard   │
//! │  8. total       = base_total + express                                 │
//! │                                                                         │
//! │  Every intermediate is retained in the breakdown: the order wizard     │
//! │  itemizes them verbatim.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Unavailable" is a first-class outcome, not an error: one unpriceable
//! item never prevents pricing the rest of the quote, and the wizard uses
//! the carried minimum quantity to tell the customer how many more pieces
//! would unlock the selection.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::delivery::express_surcharge_percent;
use crate::money::{Money, Percent};
use crate::table::{DtfTable, EmbroideryTable, PriceTable, ScreenPrintTable};
use crate::types::{Delay, EmbroiderySize, QuoteItem, SubstrateTone, Technique, TechniqueSelection};

// =============================================================================
// Outcome Types
// =============================================================================

/// A fully itemized price for one quote item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    /// The technique that was priced.
    pub technique: Technique,

    /// Resolved per-piece price from the matrix.
    pub unit_price: Money,

    /// Pieces priced.
    pub quantity: u32,

    /// One-time setup charges (screens, digitization).
    pub fixed_fees: Money,

    /// Additive option surcharge amount (screen printing only).
    pub options_surcharge: Money,

    /// Express surcharge amount (zero at or above the standard lead time).
    pub express_surcharge: Money,

    /// Final item total. Already includes the express surcharge; the
    /// aggregator must not add it again.
    pub total: Money,
}

/// A selection the table has no configured price for.
///
/// Carries the minimum quantity at which pricing becomes available for the
/// same axis value, when one exists. Never a zero total in disguise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnavailableQuote {
    /// The technique that was requested.
    pub technique: Technique,

    /// User-facing explanation.
    pub message: String,

    /// Quantity at which the same axis value becomes priceable, if any.
    pub min_quantity_required: Option<u32>,
}

/// The outcome of pricing one quote item.
///
/// A tagged union so the calling layer can distinguish the two cases,
/// itemize priced breakdowns, and block checkout on unavailable ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PriceOutcome {
    Priced(PriceBreakdown),
    Unavailable(UnavailableQuote),
}

impl PriceOutcome {
    /// True when the item was successfully priced.
    pub fn is_available(&self) -> bool {
        matches!(self, PriceOutcome::Priced(_))
    }

    /// The item's contribution to the quote total.
    ///
    /// Unavailable items contribute zero; the caller is responsible for
    /// blocking submission until every item is priced.
    pub fn total(&self) -> Money {
        match self {
            PriceOutcome::Priced(b) => b.total,
            PriceOutcome::Unavailable(_) => Money::zero(),
        }
    }

    /// The breakdown, when priced.
    pub fn breakdown(&self) -> Option<&PriceBreakdown> {
        match self {
            PriceOutcome::Priced(b) => Some(b),
            PriceOutcome::Unavailable(_) => None,
        }
    }

    fn unavailable(technique: Technique, message: String, minimum: Option<u32>) -> Self {
        PriceOutcome::Unavailable(UnavailableQuote {
            technique,
            message,
            min_quantity_required: minimum,
        })
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Prices one quote item against its technique's price table.
///
/// Pure: same inputs, same breakdown. `delay` is optional; absent means the
/// standard lead time (no express surcharge).
///
/// The caller validates the technique's purchase minimum *before* adding an
/// item (see `validation::validate_min_quantity`); this function stays
/// robust if invoked anyway and reports unavailability instead of failing.
pub fn price_quote_item(item: &QuoteItem, table: &PriceTable, delay: Option<&Delay>) -> PriceOutcome {
    let technique = item.technique();

    if item.total_quantity == 0 {
        return PriceOutcome::unavailable(
            technique,
            format!("{technique} needs at least one piece to quote"),
            Some(table.min_quantity().max(1)),
        );
    }

    if table.technique() != technique {
        return PriceOutcome::unavailable(
            technique,
            format!(
                "price table covers {}, not {technique}",
                table.technique()
            ),
            None,
        );
    }

    match (&item.selection, table) {
        (
            TechniqueSelection::ScreenPrint {
                color_count,
                tone,
                selected_option_ids,
            },
            PriceTable::ScreenPrint(table),
        ) => price_screen_print(
            table,
            item.total_quantity,
            *color_count,
            *tone,
            selected_option_ids,
            delay,
        ),
        (
            TechniqueSelection::Embroidery { stitch_count, size },
            PriceTable::Embroidery(table),
        ) => price_embroidery(table, item.total_quantity, *stitch_count, *size, delay),
        (TechniqueSelection::Dtf { dimension }, PriceTable::Dtf(table)) => {
            price_dtf(table, item.total_quantity, dimension, delay)
        }
        // Selection and table variants disagree; technique() matched above,
        // so this arm is unreachable, but stays non-fatal regardless.
        _ => PriceOutcome::unavailable(
            technique,
            format!("{technique} selection does not match the supplied table"),
            None,
        ),
    }
}

// =============================================================================
// Per-Technique Pricing
// =============================================================================

fn price_screen_print(
    table: &ScreenPrintTable,
    quantity: u32,
    color_count: u8,
    tone: SubstrateTone,
    selected_option_ids: &[String],
    delay: Option<&Delay>,
) -> PriceOutcome {
    let technique = Technique::ScreenPrint;

    let Some(tier) = crate::tier::resolve_tier(quantity, &table.quantity_tiers) else {
        return no_tier(technique, quantity, &table.quantity_tiers);
    };

    if !table.color_counts.contains(&color_count) {
        return PriceOutcome::unavailable(
            technique,
            format!("{technique} is not offered in {color_count} colors"),
            None,
        );
    }

    let Some(unit_price) = table.unit_price(&tier.label, color_count, tone) else {
        let minimum = table.minimum_quantity_for(color_count, tone);
        return PriceOutcome::unavailable(
            technique,
            unlock_message(
                &format!("{technique} in {color_count} colors"),
                quantity,
                minimum,
            ),
            minimum,
        );
    };

    // Sum the selected option percentages before applying them to the base
    // once. Two options at 15% and 25% surcharge 40%, never 43.75%.
    let mut option_rate = Percent::zero();
    for id in selected_option_ids {
        match table.option(id) {
            Some(option) => option_rate = option_rate + option.surcharge,
            None => {
                return PriceOutcome::unavailable(
                    technique,
                    format!("{technique} option '{id}' is not offered"),
                    None,
                );
            }
        }
    }

    let fixed_fees = table.fee_per_color.multiply_quantity(color_count as i64);
    compose(
        technique,
        unit_price,
        quantity,
        fixed_fees,
        option_rate,
        delay,
    )
}

fn price_embroidery(
    table: &EmbroideryTable,
    quantity: u32,
    stitch_count: u32,
    size: EmbroiderySize,
    delay: Option<&Delay>,
) -> PriceOutcome {
    let technique = Technique::Embroidery;

    let Some(tier) = crate::tier::resolve_tier(quantity, &table.quantity_tiers) else {
        return no_tier(technique, quantity, &table.quantity_tiers);
    };

    let Some(range) = table.resolve_stitch_range(stitch_count, size) else {
        return PriceOutcome::unavailable(
            technique,
            format!("{technique} has no stitch range covering {stitch_count} stitches"),
            None,
        );
    };

    let Some(unit_price) = table.unit_price(&tier.label, &range.label, size) else {
        let minimum = table.minimum_quantity_for(stitch_count, size);
        return PriceOutcome::unavailable(
            technique,
            unlock_message(
                &format!("{technique} at {stitch_count} stitches"),
                quantity,
                minimum,
            ),
            minimum,
        );
    };

    let fixed_fees = table.digitization_fee(stitch_count);
    compose(
        technique,
        unit_price,
        quantity,
        fixed_fees,
        Percent::zero(),
        delay,
    )
}

fn price_dtf(
    table: &DtfTable,
    quantity: u32,
    dimension: &str,
    delay: Option<&Delay>,
) -> PriceOutcome {
    let technique = Technique::Dtf;

    let Some(tier) = crate::tier::resolve_tier(quantity, &table.quantity_tiers) else {
        return no_tier(technique, quantity, &table.quantity_tiers);
    };

    if !table.has_dimension(dimension) {
        return PriceOutcome::unavailable(
            technique,
            format!("{technique} is not offered in dimension \"{dimension}\""),
            None,
        );
    }

    let Some(unit_price) = table.unit_price(&tier.label, dimension) else {
        let minimum = table.minimum_quantity_for(dimension);
        return PriceOutcome::unavailable(
            technique,
            unlock_message(
                &format!("{technique} in \"{dimension}\""),
                quantity,
                minimum,
            ),
            minimum,
        );
    };

    // DTF has no fixed fees and no options
    compose(
        technique,
        unit_price,
        quantity,
        Money::zero(),
        Percent::zero(),
        delay,
    )
}

// =============================================================================
// Shared Composition
// =============================================================================

/// Steps 3-8 of the composition, shared by all techniques.
fn compose(
    technique: Technique,
    unit_price: Money,
    quantity: u32,
    fixed_fees: Money,
    option_rate: Percent,
    delay: Option<&Delay>,
) -> PriceOutcome {
    let base = unit_price.multiply_quantity(quantity as i64) + fixed_fees;
    let options_surcharge = base.apply_percent(option_rate);
    let base_total = base + options_surcharge;

    let express_rate = delay
        .map(|d| express_surcharge_percent(d.resolved_days()))
        .unwrap_or_else(Percent::zero);
    let express_surcharge = base_total.apply_percent(express_rate);

    PriceOutcome::Priced(PriceBreakdown {
        technique,
        unit_price,
        quantity,
        fixed_fees,
        options_surcharge,
        express_surcharge,
        total: base_total + express_surcharge,
    })
}

/// Unavailable outcome for a quantity no tier covers.
///
/// Only reachable for malformed tables or quantities below the first tier;
/// recovered as Unavailable rather than a fault so pricing stays non-fatal.
fn no_tier(
    technique: Technique,
    quantity: u32,
    tiers: &[crate::tier::QuantityTier],
) -> PriceOutcome {
    let minimum = tiers.first().map(|t| t.min.max(1));
    PriceOutcome::unavailable(
        technique,
        format!("no quantity tier covers {quantity} pieces for {technique}"),
        minimum,
    )
}

fn unlock_message(what: &str, quantity: u32, minimum: Option<u32>) -> String {
    match minimum {
        Some(minimum) => {
            format!("{what} is not priced for {quantity} pieces; available from {minimum} pieces")
        }
        None => format!("{what} is not priced for {quantity} pieces"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{color_key, dimension_key, stitch_key};
    use crate::tier::{QuantityTier, StitchRange};
    use crate::types::ScreenPrintOption;
    use std::collections::HashMap;

    fn screen_table() -> PriceTable {
        let mut light = HashMap::new();
        light.insert(color_key("1-10", 2), Money::from_cents(220));
        light.insert(color_key("11-25", 2), Money::from_cents(180));
        light.insert(color_key("11-25", 6), Money::from_cents(410));

        PriceTable::ScreenPrint(ScreenPrintTable {
            quantity_tiers: vec![
                QuantityTier::bounded(1, 10, "1-10"),
                QuantityTier::open_ended(11, "11-25"),
            ],
            color_counts: vec![1, 2, 3, 4, 5, 6],
            light_prices: light,
            dark_prices: HashMap::new(),
            fee_per_color: Money::from_cents(2500),
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
            ],
            min_quantity: 1,
        })
    }

    fn screen_item(quantity: u32, colors: u8, options: &[&str]) -> QuoteItem {
        QuoteItem::new(
            "Front print",
            TechniqueSelection::ScreenPrint {
                color_count: colors,
                tone: SubstrateTone::Light,
                selected_option_ids: options.iter().map(|s| s.to_string()).collect(),
            },
            quantity,
        )
    }

    #[test]
    fn test_screen_print_reference_scenario() {
        // 10 pieces × 2.20 + 2 colors × 25.00 = 72.00, no surcharges
        let outcome = price_quote_item(
            &screen_item(10, 2, &[]),
            &screen_table(),
            Some(&Delay::standard(10)),
        );
        let b = outcome.breakdown().unwrap();
        assert_eq!(b.unit_price.cents(), 220);
        assert_eq!(b.quantity, 10);
        assert_eq!(b.fixed_fees.cents(), 5000);
        assert_eq!(b.options_surcharge.cents(), 0);
        assert_eq!(b.express_surcharge.cents(), 0);
        assert_eq!(b.total.cents(), 7200);
    }

    #[test]
    fn test_option_surcharges_sum_not_compound() {
        // base = 10 × 2.20 + 50.00 = 72.00; 15% + 25% = 40% of base = 28.80
        let outcome = price_quote_item(
            &screen_item(10, 2, &["puff", "metallic"]),
            &screen_table(),
            None,
        );
        let b = outcome.breakdown().unwrap();
        assert_eq!(b.options_surcharge.cents(), 2880);
        assert_eq!(b.total.cents(), 7200 + 2880);
    }

    #[test]
    fn test_express_surcharge_applied_after_options() {
        // base_total = 100.80; 7 days resolved = 30% = 30.24
        let outcome = price_quote_item(
            &screen_item(10, 2, &["puff", "metallic"]),
            &screen_table(),
            Some(&Delay::express(7)),
        );
        let b = outcome.breakdown().unwrap();
        assert_eq!(b.express_surcharge.cents(), 3024);
        assert_eq!(b.total.cents(), 10080 + 3024);
    }

    #[test]
    fn test_express_threshold_at_standard_is_free() {
        let at_standard = price_quote_item(
            &screen_item(10, 2, &[]),
            &screen_table(),
            Some(&Delay::express(10)),
        );
        assert_eq!(at_standard.breakdown().unwrap().express_surcharge.cents(), 0);
    }

    #[test]
    fn test_no_delay_means_no_surcharge() {
        let outcome = price_quote_item(&screen_item(10, 2, &[]), &screen_table(), None);
        assert_eq!(outcome.breakdown().unwrap().express_surcharge.cents(), 0);
    }

    #[test]
    fn test_fixed_fees_independent_of_quantity() {
        let table = screen_table();
        let small = price_quote_item(&screen_item(2, 2, &[]), &table, None);
        let large = price_quote_item(&screen_item(10, 2, &[]), &table, None);
        assert_eq!(
            small.breakdown().unwrap().fixed_fees,
            large.breakdown().unwrap().fixed_fees
        );
    }

    #[test]
    fn test_unconfigured_price_is_unavailable_with_unlock_minimum() {
        // 6 colors only priced from the 11-25 tier
        let outcome = price_quote_item(&screen_item(5, 6, &[]), &screen_table(), None);
        match outcome {
            PriceOutcome::Unavailable(u) => {
                assert_eq!(u.min_quantity_required, Some(11));
                assert!(u.message.contains("6 colors"));
            }
            PriceOutcome::Priced(_) => panic!("expected unavailable"),
        }
    }

    #[test]
    fn test_no_silent_zero_for_missing_price() {
        // Dark matrix is empty; must never price at unit 0
        let item = QuoteItem::new(
            "Front print",
            TechniqueSelection::ScreenPrint {
                color_count: 2,
                tone: SubstrateTone::Dark,
                selected_option_ids: vec![],
            },
            10,
        );
        let outcome = price_quote_item(&item, &screen_table(), None);
        assert!(!outcome.is_available());
        assert_eq!(outcome.total().cents(), 0);
    }

    #[test]
    fn test_configured_zero_price_is_a_real_price() {
        // A present 0 is deliberately free, not "unconfigured"
        let mut table = match screen_table() {
            PriceTable::ScreenPrint(t) => t,
            _ => unreachable!(),
        };
        table
            .light_prices
            .insert(color_key("1-10", 1), Money::zero());
        table.fee_per_color = Money::zero();
        let outcome = price_quote_item(
            &screen_item(5, 1, &[]),
            &PriceTable::ScreenPrint(table),
            None,
        );
        let b = outcome.breakdown().unwrap();
        assert_eq!(b.unit_price.cents(), 0);
        assert_eq!(b.total.cents(), 0);
    }

    #[test]
    fn test_zero_quantity_is_unavailable() {
        let outcome = price_quote_item(&screen_item(0, 2, &[]), &screen_table(), None);
        assert!(!outcome.is_available());
    }

    #[test]
    fn test_unknown_option_id_is_unavailable() {
        let outcome = price_quote_item(&screen_item(10, 2, &["glitter"]), &screen_table(), None);
        match outcome {
            PriceOutcome::Unavailable(u) => assert!(u.message.contains("glitter")),
            PriceOutcome::Priced(_) => panic!("expected unavailable"),
        }
    }

    #[test]
    fn test_mismatched_table_is_unavailable() {
        let dtf_table = PriceTable::Dtf(DtfTable {
            quantity_tiers: vec![QuantityTier::open_ended(1, "1+")],
            dimensions: vec![],
            prices: HashMap::new(),
            min_quantity: 1,
        });
        let outcome = price_quote_item(&screen_item(10, 2, &[]), &dtf_table, None);
        assert!(!outcome.is_available());
    }

    #[test]
    fn test_embroidery_digitization_fee_by_threshold() {
        let mut small_prices = HashMap::new();
        small_prices.insert(stitch_key("1+", "0+"), Money::from_cents(150));
        let table = PriceTable::Embroidery(EmbroideryTable {
            quantity_tiers: vec![QuantityTier::open_ended(1, "1+")],
            small_ranges: vec![StitchRange::open_ended(0, "0+")],
            large_ranges: vec![StitchRange::open_ended(0, "0+")],
            small_prices,
            large_prices: HashMap::new(),
            fee_small_digitization: Money::from_cents(3000),
            fee_large_digitization: Money::from_cents(6000),
            small_digitization_threshold: 10_000,
            min_quantity: 1,
        });

        // Exactly at the threshold: small fee (boundary inclusive)
        let at = QuoteItem::new(
            "Chest logo",
            TechniqueSelection::Embroidery {
                stitch_count: 10_000,
                size: EmbroiderySize::Small,
            },
            20,
        );
        let b = price_quote_item(&at, &table, None);
        assert_eq!(b.breakdown().unwrap().fixed_fees.cents(), 3000);

        // One over: large fee
        let over = QuoteItem::new(
            "Chest logo",
            TechniqueSelection::Embroidery {
                stitch_count: 10_001,
                size: EmbroiderySize::Small,
            },
            20,
        );
        let b = price_quote_item(&over, &table, None);
        assert_eq!(b.breakdown().unwrap().fixed_fees.cents(), 6000);
    }

    #[test]
    fn test_dtf_unknown_dimension_names_it() {
        let mut prices = HashMap::new();
        prices.insert(dimension_key("1+", "10x10 cm"), Money::from_cents(450));
        let table = PriceTable::Dtf(DtfTable {
            quantity_tiers: vec![QuantityTier::open_ended(1, "1+")],
            dimensions: vec!["10x10 cm".to_string()],
            prices,
            min_quantity: 1,
        });
        let item = QuoteItem::new(
            "Back print",
            TechniqueSelection::Dtf {
                dimension: "12x18 cm".to_string(),
            },
            10,
        );
        match price_quote_item(&item, &table, None) {
            PriceOutcome::Unavailable(u) => assert!(u.message.contains("12x18 cm")),
            PriceOutcome::Priced(_) => panic!("expected unavailable"),
        }
    }

    #[test]
    fn test_dtf_has_no_fixed_fees() {
        let mut prices = HashMap::new();
        prices.insert(dimension_key("1+", "10x10 cm"), Money::from_cents(450));
        let table = PriceTable::Dtf(DtfTable {
            quantity_tiers: vec![QuantityTier::open_ended(1, "1+")],
            dimensions: vec!["10x10 cm".to_string()],
            prices,
            min_quantity: 1,
        });
        let item = QuoteItem::new(
            "Back print",
            TechniqueSelection::Dtf {
                dimension: "10x10 cm".to_string(),
            },
            10,
        );
        let b = price_quote_item(&item, &table, None);
        let b = b.breakdown().unwrap();
        assert_eq!(b.fixed_fees.cents(), 0);
        assert_eq!(b.total.cents(), 4500);
    }

    #[test]
    fn test_outcome_serde_tagging() {
        let outcome = price_quote_item(&screen_item(10, 2, &[]), &screen_table(), None);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "priced");

        let missing = price_quote_item(&screen_item(5, 6, &[]), &screen_table(), None);
        let json = serde_json::to_value(&missing).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["min_quantity_required"], 11);
    }
}
