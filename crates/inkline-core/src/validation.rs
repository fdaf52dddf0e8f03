//! # Validation Module
//!
//! Input validation utilities for the quoting flow.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Order wizard (frontend)                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE: Business rule validation                        │
//! │  ├── Quantity, color count, stitch count, dimension                    │
//! │  └── Purchase minimum per technique (blocks adding the item)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculator                                                   │
//! │  └── Reports Unavailable for anything that slips through               │
//! │                                                                         │
//! │  Defense in depth: the calculator never crashes on unvalidated input,  │
//! │  but validating first gives the customer a message before pricing.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{PricingError, PricingResult, ValidationError, ValidationResult};
use crate::table::PriceTable;
use crate::types::{QuoteItem, TechniqueSelection};
use crate::{MAX_COLOR_COUNT, MAX_ORDER_PIECES};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a total quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ORDER_PIECES
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ORDER_PIECES {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ORDER_PIECES as i64,
        });
    }

    Ok(())
}

/// Validates a screen-printing color count (1..=6).
pub fn validate_color_count(count: u8) -> ValidationResult<()> {
    if count == 0 || count > MAX_COLOR_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "color count".to_string(),
            min: 1,
            max: MAX_COLOR_COUNT as i64,
        });
    }

    Ok(())
}

/// Validates an embroidery stitch count.
pub fn validate_stitch_count(count: u32) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: "stitch count".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a DTF print-dimension label.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 50 characters (free text otherwise; the table decides whether
///   the dimension is offered)
pub fn validate_dimension(dimension: &str) -> ValidationResult<()> {
    let dimension = dimension.trim();

    if dimension.is_empty() {
        return Err(ValidationError::Required {
            field: "dimension".to_string(),
        });
    }

    if dimension.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "dimension".to_string(),
            max: 50,
        });
    }

    Ok(())
}

/// Validates a quote-item id (UUID v4 format).
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates the axis values of a technique selection.
pub fn validate_selection(selection: &TechniqueSelection) -> ValidationResult<()> {
    match selection {
        TechniqueSelection::ScreenPrint { color_count, .. } => validate_color_count(*color_count),
        TechniqueSelection::Embroidery { stitch_count, .. } => validate_stitch_count(*stitch_count),
        TechniqueSelection::Dtf { dimension } => validate_dimension(dimension),
    }
}

/// Validates a quote item before it is added to the quote.
pub fn validate_item(item: &QuoteItem) -> ValidationResult<()> {
    validate_item_id(&item.id)?;
    validate_quantity(item.total_quantity)?;
    validate_selection(&item.selection)?;
    Ok(())
}

/// The purchase-minimum gate, checked before an item is added.
///
/// This is deliberately separate from the calculator: the minimum blocks
/// *adding* the item at all, while the calculator only answers "what would
/// it cost". The calculator stays robust if invoked below the minimum.
pub fn validate_min_quantity(table: &PriceTable, quantity: u32) -> PricingResult<()> {
    let minimum = table.min_quantity();
    if quantity < minimum {
        return Err(PricingError::BelowMinimumQuantity {
            technique: table.technique(),
            minimum,
            requested: quantity,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::table::DtfTable;
    use crate::tier::QuantityTier;
    use crate::types::{EmbroiderySize, SubstrateTone};
    use std::collections::HashMap;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(MAX_ORDER_PIECES).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(MAX_ORDER_PIECES + 1).is_err());
    }

    #[test]
    fn test_validate_color_count() {
        for count in 1..=6 {
            assert!(validate_color_count(count).is_ok());
        }
        assert!(validate_color_count(0).is_err());
        assert!(validate_color_count(7).is_err());
    }

    #[test]
    fn test_validate_stitch_count() {
        assert!(validate_stitch_count(8000).is_ok());
        assert!(validate_stitch_count(0).is_err());
    }

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("10x10 cm").is_ok());
        assert!(validate_dimension("").is_err());
        assert!(validate_dimension("   ").is_err());
        assert!(validate_dimension(&"x".repeat(60)).is_err());
    }

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_selection_dispatch() {
        assert!(validate_selection(&TechniqueSelection::ScreenPrint {
            color_count: 7,
            tone: SubstrateTone::Light,
            selected_option_ids: vec![],
        })
        .is_err());
        assert!(validate_selection(&TechniqueSelection::Embroidery {
            stitch_count: 8000,
            size: EmbroiderySize::Small,
        })
        .is_ok());
        assert!(validate_selection(&TechniqueSelection::Dtf {
            dimension: "".to_string(),
        })
        .is_err());
    }

    #[test]
    fn test_validate_min_quantity_gate() {
        let table = PriceTable::Dtf(DtfTable {
            quantity_tiers: vec![QuantityTier::open_ended(1, "1+")],
            dimensions: vec!["10x10 cm".to_string()],
            prices: HashMap::<String, Money>::new(),
            min_quantity: 25,
        });
        assert!(validate_min_quantity(&table, 25).is_ok());

        let err = validate_min_quantity(&table, 24).unwrap_err();
        assert!(matches!(
            err,
            PricingError::BelowMinimumQuantity { minimum: 25, requested: 24, .. }
        ));
    }
}
