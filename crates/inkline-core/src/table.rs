//! # Price Tables
//!
//! The immutable per-technique pricing datasets: quantity tiers × secondary
//! axes mapping to unit prices, plus fixed fees and option surcharges.
//!
//! ## Matrix Representation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               Sparse String-Keyed Price Matrices                        │
//! │                                                                         │
//! │  Screen printing (light tone):        Embroidery (small size):          │
//! │  {                                    {                                 │
//! │    "1-10-1":  310,                      "1-10-0-5000":   420,           │
//! │    "1-10-2":  220,                      "1-10-5001-10000": 560,         │
//! │    "11-25-1": 250,                      "11-25-0-5000":  360,           │
//! │    ...                                  ...                             │
//! │  }                                    }                                 │
//! │                                                                         │
//! │  key = "<tierLabel>-<axisValue>"      values are integer cents          │
//! │                                                                         │
//! │  An ABSENT key means "price not configured" for that combination,      │
//! │  distinct from a present value of 0, which is a deliberately free      │
//! │  price. Lookups never coerce absence to zero.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sparse-map shape matches the admin pricing editor's JSON dataset
//! one-to-one. Key construction is centralized in the `*_key` functions
//! below; the admin write side uses the same functions, so read and write
//! key formats cannot drift apart.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::tier::{
    resolve_stitch_range, resolve_tier, validate_stitch_ranges, validate_tier_sequence,
    QuantityTier, StitchRange,
};
use crate::types::{EmbroiderySize, ScreenPrintOption, SubstrateTone, Technique};

// =============================================================================
// Composite Key Construction
// =============================================================================
// One function per axis type. Every lookup and every admin write goes
// through these; nothing else may build a matrix key.

/// Builds the screen-printing matrix key: `"<tierLabel>-<colorCount>"`.
#[inline]
pub fn color_key(tier_label: &str, color_count: u8) -> String {
    format!("{tier_label}-{color_count}")
}

/// Builds the embroidery matrix key: `"<tierLabel>-<stitchRangeLabel>"`.
#[inline]
pub fn stitch_key(tier_label: &str, range_label: &str) -> String {
    format!("{tier_label}-{range_label}")
}

/// Builds the DTF matrix key: `"<tierLabel>-<dimension>"`.
#[inline]
pub fn dimension_key(tier_label: &str, dimension: &str) -> String {
    format!("{tier_label}-{dimension}")
}

// =============================================================================
// Screen Printing Table
// =============================================================================

/// Pricing dataset for screen printing.
///
/// Axes: quantity tier × color count (1..6) × substrate tone, with
/// independent light/dark matrices. Fixed fee: one screen per color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreenPrintTable {
    /// Quantity tiers, ascending and contiguous.
    pub quantity_tiers: Vec<QuantityTier>,

    /// Offered color counts (1..=6).
    pub color_counts: Vec<u8>,

    /// Unit prices for light substrates, keyed by [`color_key`].
    pub light_prices: HashMap<String, Money>,

    /// Unit prices for dark substrates, keyed by [`color_key`].
    pub dark_prices: HashMap<String, Money>,

    /// Screen setup fee, charged once per ink color.
    pub fee_per_color: Money,

    /// Customer-selectable add-ons with additive percentage surcharges.
    pub options: Vec<ScreenPrintOption>,

    /// Minimum total quantity before this technique is purchasable at all.
    pub min_quantity: u32,
}

impl ScreenPrintTable {
    /// The matrix for a substrate tone.
    pub fn matrix(&self, tone: SubstrateTone) -> &HashMap<String, Money> {
        match tone {
            SubstrateTone::Light => &self.light_prices,
            SubstrateTone::Dark => &self.dark_prices,
        }
    }

    /// Looks up the configured unit price for a tier × color count × tone.
    ///
    /// `None` means "price not configured", never zero.
    pub fn unit_price(
        &self,
        tier_label: &str,
        color_count: u8,
        tone: SubstrateTone,
    ) -> Option<Money> {
        self.matrix(tone)
            .get(&color_key(tier_label, color_count))
            .copied()
    }

    /// Finds an option by id.
    pub fn option(&self, id: &str) -> Option<&ScreenPrintOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Scans tiers in ascending `min` order and returns the minimum quantity
    /// at which a price is configured for this color count and tone.
    ///
    /// This is what lets the wizard say "order N more pieces to unlock
    /// 6-color printing".
    pub fn minimum_quantity_for(&self, color_count: u8, tone: SubstrateTone) -> Option<u32> {
        let matrix = self.matrix(tone);
        self.quantity_tiers
            .iter()
            .find(|tier| matrix.contains_key(&color_key(&tier.label, color_count)))
            .map(|tier| tier.min.max(1))
    }

    /// Validates tier structure and axis values.
    pub fn validate(&self) -> PricingResult<()> {
        validate_tier_sequence(Technique::ScreenPrint, &self.quantity_tiers)?;
        for &count in &self.color_counts {
            if !(1..=6).contains(&count) {
                return Err(PricingError::MalformedTable {
                    technique: Technique::ScreenPrint,
                    reason: format!("color count {count} outside 1..=6"),
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Embroidery Table
// =============================================================================

/// Pricing dataset for embroidery.
///
/// Axes: quantity tier × stitch range, with separate range sequences and
/// matrices per embroidery size. Fixed fee: digitization, small or large
/// depending on the stitch count (threshold inclusive on the small side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmbroideryTable {
    /// Quantity tiers, ascending and contiguous.
    pub quantity_tiers: Vec<QuantityTier>,

    /// Stitch ranges for small embroidery, ascending and contiguous.
    pub small_ranges: Vec<StitchRange>,

    /// Stitch ranges for large embroidery, ascending and contiguous.
    pub large_ranges: Vec<StitchRange>,

    /// Unit prices for small embroidery, keyed by [`stitch_key`].
    pub small_prices: HashMap<String, Money>,

    /// Unit prices for large embroidery, keyed by [`stitch_key`].
    pub large_prices: HashMap<String, Money>,

    /// Digitization fee for artwork at or below the threshold.
    pub fee_small_digitization: Money,

    /// Digitization fee for artwork above the threshold.
    pub fee_large_digitization: Money,

    /// Stitch count up to which (inclusive) the small fee applies.
    pub small_digitization_threshold: u32,

    /// Minimum total quantity before this technique is purchasable at all.
    pub min_quantity: u32,
}

impl EmbroideryTable {
    /// The stitch-range sequence for an embroidery size.
    pub fn ranges(&self, size: EmbroiderySize) -> &[StitchRange] {
        match size {
            EmbroiderySize::Small => &self.small_ranges,
            EmbroiderySize::Large => &self.large_ranges,
        }
    }

    /// The matrix for an embroidery size.
    pub fn matrix(&self, size: EmbroiderySize) -> &HashMap<String, Money> {
        match size {
            EmbroiderySize::Small => &self.small_prices,
            EmbroiderySize::Large => &self.large_prices,
        }
    }

    /// Resolves the stitch range for a stitch count and size.
    pub fn resolve_stitch_range(
        &self,
        stitch_count: u32,
        size: EmbroiderySize,
    ) -> Option<&StitchRange> {
        resolve_stitch_range(stitch_count, self.ranges(size))
    }

    /// Looks up the configured unit price for a tier × stitch range × size.
    pub fn unit_price(
        &self,
        tier_label: &str,
        range_label: &str,
        size: EmbroiderySize,
    ) -> Option<Money> {
        self.matrix(size)
            .get(&stitch_key(tier_label, range_label))
            .copied()
    }

    /// The digitization fee for a stitch count.
    ///
    /// The threshold is inclusive on the small side: a count exactly equal
    /// to the threshold gets the small fee.
    pub fn digitization_fee(&self, stitch_count: u32) -> Money {
        if stitch_count <= self.small_digitization_threshold {
            self.fee_small_digitization
        } else {
            self.fee_large_digitization
        }
    }

    /// Minimum quantity at which a price is configured for this stitch
    /// count and size (ascending tier scan).
    pub fn minimum_quantity_for(&self, stitch_count: u32, size: EmbroiderySize) -> Option<u32> {
        let range = self.resolve_stitch_range(stitch_count, size)?;
        let matrix = self.matrix(size);
        self.quantity_tiers
            .iter()
            .find(|tier| matrix.contains_key(&stitch_key(&tier.label, &range.label)))
            .map(|tier| tier.min.max(1))
    }

    /// Validates tier and stitch-range structure.
    pub fn validate(&self) -> PricingResult<()> {
        validate_tier_sequence(Technique::Embroidery, &self.quantity_tiers)?;
        validate_stitch_ranges(Technique::Embroidery, &self.small_ranges)?;
        validate_stitch_ranges(Technique::Embroidery, &self.large_ranges)?;
        Ok(())
    }
}

// =============================================================================
// DTF Table
// =============================================================================

/// Pricing dataset for direct-to-film transfers.
///
/// Axes: quantity tier × print dimension (free-text labels such as
/// "10x10 cm"). No fixed fees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DtfTable {
    /// Quantity tiers, ascending and contiguous.
    pub quantity_tiers: Vec<QuantityTier>,

    /// Offered print dimensions.
    pub dimensions: Vec<String>,

    /// Unit prices, keyed by [`dimension_key`].
    pub prices: HashMap<String, Money>,

    /// Minimum total quantity before this technique is purchasable at all.
    pub min_quantity: u32,
}

impl DtfTable {
    /// Whether a dimension is offered at all.
    pub fn has_dimension(&self, dimension: &str) -> bool {
        self.dimensions.iter().any(|d| d == dimension)
    }

    /// Looks up the configured unit price for a tier × dimension.
    pub fn unit_price(&self, tier_label: &str, dimension: &str) -> Option<Money> {
        self.prices.get(&dimension_key(tier_label, dimension)).copied()
    }

    /// Minimum quantity at which a price is configured for this dimension
    /// (ascending tier scan).
    pub fn minimum_quantity_for(&self, dimension: &str) -> Option<u32> {
        self.quantity_tiers
            .iter()
            .find(|tier| self.prices.contains_key(&dimension_key(&tier.label, dimension)))
            .map(|tier| tier.min.max(1))
    }

    /// Validates tier structure.
    pub fn validate(&self) -> PricingResult<()> {
        validate_tier_sequence(Technique::Dtf, &self.quantity_tiers)
    }
}

// =============================================================================
// Price Table (tagged union over techniques)
// =============================================================================

/// The pricing dataset for one technique.
///
/// One variant per technique: the axes, fees and options differ per
/// technique, so a generic dictionary cannot model them without runtime
/// property probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "technique", rename_all = "snake_case")]
pub enum PriceTable {
    ScreenPrint(ScreenPrintTable),
    Embroidery(EmbroideryTable),
    Dtf(DtfTable),
}

impl PriceTable {
    /// The technique this table prices.
    pub fn technique(&self) -> Technique {
        match self {
            PriceTable::ScreenPrint(_) => Technique::ScreenPrint,
            PriceTable::Embroidery(_) => Technique::Embroidery,
            PriceTable::Dtf(_) => Technique::Dtf,
        }
    }

    /// The table's quantity tiers.
    pub fn quantity_tiers(&self) -> &[QuantityTier] {
        match self {
            PriceTable::ScreenPrint(t) => &t.quantity_tiers,
            PriceTable::Embroidery(t) => &t.quantity_tiers,
            PriceTable::Dtf(t) => &t.quantity_tiers,
        }
    }

    /// Resolves the quantity tier for a total quantity.
    pub fn resolve_tier(&self, quantity: u32) -> Option<&QuantityTier> {
        resolve_tier(quantity, self.quantity_tiers())
    }

    /// Minimum total quantity before the technique is purchasable at all.
    ///
    /// Independent of tier lookup: checked by the calling layer before an
    /// item is even added.
    pub fn min_quantity(&self) -> u32 {
        match self {
            PriceTable::ScreenPrint(t) => t.min_quantity,
            PriceTable::Embroidery(t) => t.min_quantity,
            PriceTable::Dtf(t) => t.min_quantity,
        }
    }

    /// Validates the table's structure.
    pub fn validate(&self) -> PricingResult<()> {
        match self {
            PriceTable::ScreenPrint(t) => t.validate(),
            PriceTable::Embroidery(t) => t.validate(),
            PriceTable::Dtf(t) => t.validate(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
