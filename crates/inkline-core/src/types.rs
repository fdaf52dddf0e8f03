//! # Domain Types
//!
//! Core domain types used throughout the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌──────────────────┐  │
//! │  │   QuoteItem     │   │ TechniqueSelection  │   │   ProductLine    │  │
//! │  │  ─────────────  │   │  ────────────────── │   │  ──────────────  │  │
//! │  │  id (UUID)      │   │  ScreenPrint {..}   │   │  name            │  │
//! │  │  selection ─────┼──►│  Embroidery {..}    │   │  category        │  │
//! │  │  total_quantity │   │  Dtf {..}           │   │  quantity        │  │
//! │  │  vectorization  │   └─────────────────────┘   │  unit_price      │  │
//! │  └─────────────────┘                             └──────────────────┘  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Delay       │   │  DeliveryMode   │   │  PricingConfig  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  working_days   │   │  Parcel         │   │  discount, idx  │       │
//! │  │  is_express     │   │  Courier        │   │  packaging      │       │
//! │  │  express_days   │   │  Pickup         │   │  carton, vecto  │       │
//! │  └─────────────────┘   │  ClientCarrier  │   │  courier rates  │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The selection is a tagged union, not a loose option bag: the calculator
//! dispatches on the variant instead of probing properties at runtime, so an
//! embroidery item can never be priced against the screen-printing matrix.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::{Money, Percent};

// =============================================================================
// Technique
// =============================================================================

/// A decoration technique.
///
/// Closed set: extending it means adding a new price-table variant with its
/// own axes and fee rules, not a generic dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    /// Screen printing: priced per quantity tier × color count × tone.
    ScreenPrint,
    /// Embroidery: priced per quantity tier × stitch range × size.
    Embroidery,
    /// Direct-to-film transfer: priced per quantity tier × print dimension.
    Dtf,
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Technique::ScreenPrint => write!(f, "screen printing"),
            Technique::Embroidery => write!(f, "embroidery"),
            Technique::Dtf => write!(f, "dtf"),
        }
    }
}

// =============================================================================
// Secondary Axis Values
// =============================================================================

/// Substrate tone for screen printing.
///
/// Dark garments need a white underbase, so light and dark substrates carry
/// independent unit-price matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SubstrateTone {
    Light,
    Dark,
}

/// Embroidery size class.
///
/// Small (chest/sleeve) and large (back) embroidery have separate stitch
/// ranges and separate price matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EmbroiderySize {
    Small,
    Large,
}

/// A customer-selectable screen-printing add-on (e.g., a special ink finish).
///
/// The surcharge is an *additive* percentage on the pre-surcharge subtotal:
/// two selected options at 15% and 25% surcharge the base once at 40%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreenPrintOption {
    /// Stable option identifier (referenced by quote items).
    pub id: String,

    /// Display name shown in the order wizard.
    pub name: String,

    /// Surcharge in basis points (1500 = 15%).
    pub surcharge: Percent,
}

// =============================================================================
// Technique Selection
// =============================================================================

/// The axis values and add-ons a customer picked for one decoration.
///
/// ## Why a Tagged Union?
/// Each technique has different pricing axes. Representing them as one
/// variant per technique means the compiler guarantees an embroidery
/// selection always carries a stitch count and never a color count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TechniqueSelection {
    /// Screen printing: 1-6 ink colors on a light or dark substrate.
    ScreenPrint {
        color_count: u8,
        tone: SubstrateTone,
        /// Ids of selected `ScreenPrintOption`s (may be empty).
        selected_option_ids: Vec<String>,
    },

    /// Embroidery: stitch count of the digitized artwork plus size class.
    Embroidery {
        stitch_count: u32,
        size: EmbroiderySize,
    },

    /// DTF transfer: the print dimension label (e.g., "10x10 cm").
    Dtf { dimension: String },
}

impl TechniqueSelection {
    /// Returns the technique this selection belongs to.
    pub fn technique(&self) -> Technique {
        match self {
            TechniqueSelection::ScreenPrint { .. } => Technique::ScreenPrint,
            TechniqueSelection::Embroidery { .. } => Technique::Embroidery,
            TechniqueSelection::Dtf { .. } => Technique::Dtf,
        }
    }
}

// =============================================================================
// Quote Item
// =============================================================================

/// One decoration line of a quote.
///
/// ## Lifecycle
/// Constructed by the calling layer from the wizard's selections, immutable
/// once handed to the engine. Exactly one breakdown is produced per item.
///
/// ## Dual-Key Identity Pattern
/// `id` is a UUID v4 used by the frontend to match breakdowns back to wizard
/// steps; `label` is the human-readable name shown on the quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display label (e.g., "Front print", "Left chest logo").
    pub label: String,

    /// The customer's technique and axis choices.
    pub selection: TechniqueSelection,

    /// Total decorated pieces across all sizes/colors of the garment.
    pub total_quantity: u32,

    /// Whether the attached artwork needs vectorization by the studio.
    pub needs_vectorization: bool,
}

impl QuoteItem {
    /// Creates a new quote item with a generated id.
    pub fn new(label: impl Into<String>, selection: TechniqueSelection, quantity: u32) -> Self {
        QuoteItem {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            selection,
            total_quantity: quantity,
            needs_vectorization: false,
        }
    }

    /// Marks the item's artwork for vectorization.
    pub fn with_vectorization(mut self) -> Self {
        self.needs_vectorization = true;
        self
    }

    /// Returns the technique of this item.
    pub fn technique(&self) -> Technique {
        self.selection.technique()
    }
}

// =============================================================================
// Product Line
// =============================================================================

/// A garment line of a quote (the blank products being decorated).
///
/// Product unit prices come from the ERP catalog; the engine only applies
/// the indexation uplift and the textile discount, and derives carton counts
/// from category/name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductLine {
    /// Product display name (e.g., "Heavy Cotton Tee").
    pub name: String,

    /// ERP category, when present. Authoritative for carton classification.
    pub category: Option<String>,

    /// Total pieces across all sizes/colors.
    pub quantity: u32,

    /// Catalog unit price, before indexation and discount.
    pub unit_price: Money,
}

// =============================================================================
// Delay
// =============================================================================

/// The requested production lead time.
///
/// The standard lead time is fixed at [`crate::STANDARD_LEAD_TIME_DAYS`]
/// working days; any resolved lead time below it triggers an express
/// surcharge (see `delivery::express_surcharge_percent`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Delay {
    /// Requested lead time in working days.
    pub working_days: u32,

    /// Whether the customer picked the express option.
    pub is_express: bool,

    /// Express lead time in working days, when express is selected.
    pub express_days: Option<u32>,
}

impl Delay {
    /// A standard, non-express delay.
    pub fn standard(working_days: u32) -> Self {
        Delay {
            working_days,
            is_express: false,
            express_days: None,
        }
    }

    /// An express delay.
    pub fn express(express_days: u32) -> Self {
        Delay {
            working_days: express_days,
            is_express: true,
            express_days: Some(express_days),
        }
    }

    /// The lead time the surcharge is computed from.
    ///
    /// Express items resolve to `express_days` when present; otherwise the
    /// plain `working_days` value is used.
    pub fn resolved_days(&self) -> u32 {
        if self.is_express {
            self.express_days.unwrap_or(self.working_days)
        } else {
            self.working_days
        }
    }
}

// =============================================================================
// Delivery Mode
// =============================================================================

/// How the finished order leaves the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Parcel carrier, charged per carton.
    Parcel,
    /// Same-day courier, charged per km with a minimum fee.
    Courier,
    /// Customer pickup at the studio. Free.
    Pickup,
    /// Customer-arranged carrier collects at the studio. Free.
    ClientCarrier,
}

// =============================================================================
// Pricing Config
// =============================================================================

/// Global pricing knobs.
///
/// ## Lifecycle
/// Owned by configuration storage outside the engine and handed in as a
/// read-only snapshot per call, never mutated in place. The catalog crate
/// owns retrieval and caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingConfig {
    /// Textile discount applied per product unit.
    pub textile_discount: Percent,

    /// Catalog indexation uplift applied per product unit, before the
    /// discount. Lets pricing track supplier increases without editing
    /// every catalog entry.
    pub indexation: Percent,

    /// Individual packaging price per piece (optional add-on).
    pub packaging_per_piece: Money,

    /// New-carton price per carton (optional add-on).
    pub carton_price: Money,

    /// Artwork vectorization price per flagged item.
    pub vectorization_price: Money,

    /// Parcel-carrier rate per carton.
    pub parcel_per_carton: Money,

    /// Courier rate per km.
    pub courier_per_km: Money,

    /// Courier minimum fee (also the fallback when distance is unknown).
    pub courier_minimum: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            textile_discount: Percent::zero(),
            indexation: Percent::zero(),
            packaging_per_piece: Money::zero(),
            carton_price: Money::zero(),
            vectorization_price: Money::zero(),
            parcel_per_carton: Money::zero(),
            courier_per_km: Money::zero(),
            courier_minimum: Money::zero(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_technique() {
        let sel = TechniqueSelection::Embroidery {
            stitch_count: 8000,
            size: EmbroiderySize::Small,
        };
        assert_eq!(sel.technique(), Technique::Embroidery);

        let sel = TechniqueSelection::Dtf {
            dimension: "10x10 cm".to_string(),
        };
        assert_eq!(sel.technique(), Technique::Dtf);
    }

    #[test]
    fn test_quote_item_ids_are_unique() {
        let sel = TechniqueSelection::Dtf {
            dimension: "10x10 cm".to_string(),
        };
        let a = QuoteItem::new("Front", sel.clone(), 10);
        let b = QuoteItem::new("Back", sel, 10);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_delay_resolution() {
        assert_eq!(Delay::standard(10).resolved_days(), 10);
        assert_eq!(Delay::express(7).resolved_days(), 7);

        // Express flag without express_days falls back to working_days
        let odd = Delay {
            working_days: 9,
            is_express: true,
            express_days: None,
        };
        assert_eq!(odd.resolved_days(), 9);
    }

    #[test]
    fn test_selection_serde_tagging() {
        let sel = TechniqueSelection::ScreenPrint {
            color_count: 2,
            tone: SubstrateTone::Dark,
            selected_option_ids: vec!["puff".to_string()],
        };
        let json = serde_json::to_value(&sel).unwrap();
        assert_eq!(json["kind"], "screen_print");
        assert_eq!(json["color_count"], 2);
        assert_eq!(json["tone"], "dark");

        let back: TechniqueSelection = serde_json::from_value(json).unwrap();
        assert_eq!(back, sel);
    }

    #[test]
    fn test_technique_display() {
        assert_eq!(Technique::ScreenPrint.to_string(), "screen printing");
        assert_eq!(Technique::Dtf.to_string(), "dtf");
    }
}
