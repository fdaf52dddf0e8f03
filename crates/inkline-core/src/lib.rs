//! # inkline-core: Pure Pricing Engine for Inkline
//!
//! This crate is the **heart** of the Inkline quoting flow. It turns a
//! technique selection, a quantity, and a set of modifiers into a fully
//! itemized price, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inkline Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Order Wizard (web frontend)                  │   │
//! │  │   Product step ──► Technique step ──► Delivery step ──► Quote  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON API                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Application Layer                            │   │
//! │  │    wizard state, auth, ERP catalog sync, order submission      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ inkline-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐ │   │
//! │  │   │   table   │  │calculator │  │  shipping  │  │   quote   │ │   │
//! │  │   │ PriceTable│  │ Breakdown │  │  Cartons   │  │ GrandTotal│ │   │
//! │  │   │ TierLookup│  │ Surcharges│  │  Cost      │  │ Add-ons   │ │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              inkline-catalog (Provider Layer)                   │   │
//! │  │     snapshot sources, TTL cache, settings, distance lookup      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Technique, QuoteItem, Delay, PricingConfig)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`tier`] - Quantity tiers, stitch ranges, and their resolvers
//! - [`table`] - Per-technique price tables and composite-key lookup
//! - [`calculator`] - Per-item price breakdowns
//! - [`shipping`] - Carton packing and delivery cost
//! - [`quote`] - Quote aggregation
//! - [`delivery`] - Working-day arithmetic and the express surcharge rule
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Unavailable is not zero**: a selection without a configured price is a
//!    distinct outcome, never a silent free breakdown
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use inkline_core::money::Money;
//! use inkline_core::table::{color_key, PriceTable, ScreenPrintTable};
//! use inkline_core::tier::QuantityTier;
//! use inkline_core::types::{Delay, QuoteItem, SubstrateTone, TechniqueSelection};
//! use inkline_core::calculator::price_quote_item;
//!
//! let mut light = HashMap::new();
//! light.insert(color_key("1-10", 2), Money::from_cents(220)); // 2.20 per piece
//!
//! let table = PriceTable::ScreenPrint(ScreenPrintTable {
//!     quantity_tiers: vec![QuantityTier::bounded(1, 10, "1-10")],
//!     color_counts: vec![1, 2, 3, 4, 5, 6],
//!     light_prices: light,
//!     dark_prices: HashMap::new(),
//!     fee_per_color: Money::from_cents(2500), // one screen per color
//!     options: vec![],
//!     min_quantity: 1,
//! });
//!
//! let item = QuoteItem::new(
//!     "Front print",
//!     TechniqueSelection::ScreenPrint {
//!         color_count: 2,
//!         tone: SubstrateTone::Light,
//!         selected_option_ids: vec![],
//!     },
//!     10,
//! );
//!
//! // 10 × 2.20 + 2 × 25.00 = 72.00
//! let outcome = price_quote_item(&item, &table, Some(&Delay::standard(10)));
//! assert_eq!(outcome.total().cents(), 7200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod delivery;
pub mod error;
pub mod money;
pub mod quote;
pub mod shipping;
pub mod table;
pub mod tier;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use inkline_core::Money` instead of
// `use inkline_core::money::Money`

pub use calculator::{price_quote_item, PriceBreakdown, PriceOutcome, UnavailableQuote};
pub use error::{PricingError, PricingResult, ValidationError};
pub use money::{Money, Percent};
pub use quote::{aggregate_quote, QuoteAddOns, QuoteTotal};
pub use shipping::{cartons_required, shipping_cost, ProductClass};
pub use table::{
    color_key, dimension_key, stitch_key, DtfTable, EmbroideryTable, PriceTable, ScreenPrintTable,
};
pub use tier::{resolve_tier, QuantityTier, StitchRange};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The standard production lead time in working days.
///
/// Any resolved lead time below this triggers the express surcharge
/// (10% per working day saved, see [`delivery::express_surcharge_percent`]).
pub const STANDARD_LEAD_TIME_DAYS: u32 = 10;

/// Maximum pieces in a single quote item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 1000)
/// before the ERP rejects the order much later in the flow.
pub const MAX_ORDER_PIECES: u32 = 50_000;

/// Maximum ink colors for screen printing.
///
/// The carousel press has six stations; more colors means a different
/// process entirely.
pub const MAX_COLOR_COUNT: u8 = 6;
