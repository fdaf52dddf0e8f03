//! # Quote Aggregation
//!
//! Composes the grand total from independently computed parts.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quote Total                                      │
//! │                                                                         │
//! │    Σ service breakdown totals      (express already inside each one)   │
//! │  + products total                  (indexation uplift, then discount)  │
//! │  + shipping cost                   (from the estimator)                │
//! │  + packaging cost                  (pieces × per-piece, if selected)   │
//! │  + carton cost                     (cartons × per-carton, if selected) │
//! │  + vectorization cost              (flagged items × per-item)          │
//! │  ─────────────────────────────                                         │
//! │  = grand total                                                         │
//! │                                                                         │
//! │  The express surcharge is EMBEDDED in each service total and must      │
//! │  never be re-added here. Unavailable items contribute 0; the caller    │
//! │  blocks submission until every item is priced.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::PriceOutcome;
use crate::money::Money;
use crate::shipping::cartons_required;
use crate::types::{PricingConfig, ProductLine, QuoteItem};

// =============================================================================
// Add-On Selection
// =============================================================================

/// Optional quote-level add-ons the customer can select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteAddOns {
    /// Pack every piece individually.
    pub individual_packaging: bool,

    /// Ship in new (unbranded) cartons.
    pub new_cartons: bool,
}

// =============================================================================
// Quote Total
// =============================================================================

/// The aggregated quote, with every component retained for display.
///
/// The wizard itemizes each component and re-lists the per-item breakdowns;
/// nothing is collapsed into an opaque total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteTotal {
    /// Sum of all priced service breakdowns.
    pub services_total: Money,

    /// Garment total after indexation and textile discount.
    pub products_total: Money,

    /// Delivery cost from the shipping estimator.
    pub shipping_cost: Money,

    /// Individual packaging, zero unless selected.
    pub packaging_cost: Money,

    /// New cartons, zero unless selected.
    pub carton_cost: Money,

    /// Artwork vectorization for flagged items.
    pub vectorization_cost: Money,

    /// The invoice total.
    pub grand_total: Money,

    /// Per-item outcomes, in the same order as the input items.
    pub breakdowns: Vec<PriceOutcome>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Aggregates one quote.
///
/// `breakdowns` must be the outcomes for `items`, in order (one per item).
/// `shipping` comes from [`crate::shipping::shipping_cost`]; it is taken as
/// an input rather than recomputed so the caller can price delivery once
/// and show it standalone.
pub fn aggregate_quote(
    items: &[QuoteItem],
    breakdowns: &[PriceOutcome],
    product_lines: &[ProductLine],
    shipping: Money,
    add_ons: QuoteAddOns,
    config: &PricingConfig,
) -> QuoteTotal {
    let services_total: Money = breakdowns.iter().map(|outcome| outcome.total()).sum();

    let products_total: Money = product_lines
        .iter()
        .map(|line| {
            line.unit_price
                .apply_uplift(config.indexation)
                .apply_discount(config.textile_discount)
                .multiply_quantity(line.quantity as i64)
        })
        .sum();

    let packaging_cost = if add_ons.individual_packaging {
        let total_pieces: u32 = product_lines.iter().map(|line| line.quantity).sum();
        config.packaging_per_piece * total_pieces as i64
    } else {
        Money::zero()
    };

    let carton_cost = if add_ons.new_cartons {
        config.carton_price * cartons_required(product_lines) as i64
    } else {
        Money::zero()
    };

    let vectorization_count = items.iter().filter(|item| item.needs_vectorization).count();
    let vectorization_cost = config.vectorization_price * vectorization_count as i64;

    let grand_total = services_total
        + products_total
        + shipping
        + packaging_cost
        + carton_cost
        + vectorization_cost;

    QuoteTotal {
        services_total,
        products_total,
        shipping_cost: shipping,
        packaging_cost,
        carton_cost,
        vectorization_cost,
        grand_total,
        breakdowns: breakdowns.to_vec(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
