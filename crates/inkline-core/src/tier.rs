//! # Tier Resolution
//!
//! Quantity tiers, stitch ranges, and the pure lookups that resolve them.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tier Resolution                                    │
//! │                                                                         │
//! │  total_quantity = 34                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resolve_tier(34, tiers) ← scans ascending min                         │
//! │       │                                                                 │
//! │       ├── "1-10"   (1..=10)    no                                      │
//! │       ├── "11-25"  (11..=25)   no                                      │
//! │       ├── "26-50"  (26..=50)   ✓ ──► tier "26-50"                      │
//! │       └── "51+"    (51..)      (not reached)                           │
//! │                                                                         │
//! │  No match ⇒ None. Callers report an unavailable breakdown, never a     │
//! │  thrown fault: the caller can still say which minimum would unlock     │
//! │  pricing.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{PricingError, PricingResult};
use crate::types::Technique;

// =============================================================================
// Quantity Tier
// =============================================================================

/// A contiguous quantity range with its own pricing.
///
/// ## Invariants (enforced by `validate_tier_sequence`)
/// - Tiers of one table are contiguous and non-overlapping when sorted by `min`
/// - Only the last tier may be unbounded (`max: None`)
/// - `label` is the stable lookup-key component and must not collide across
///   tiers of the same table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuantityTier {
    /// Lower bound, inclusive.
    pub min: u32,

    /// Upper bound, inclusive. `None` means unbounded (final tier).
    pub max: Option<u32>,

    /// Stable label used as the lookup-key component (e.g., "26-50").
    pub label: String,
}

impl QuantityTier {
    /// Creates a bounded tier.
    pub fn bounded(min: u32, max: u32, label: impl Into<String>) -> Self {
        QuantityTier {
            min,
            max: Some(max),
            label: label.into(),
        }
    }

    /// Creates the unbounded final tier.
    pub fn open_ended(min: u32, label: impl Into<String>) -> Self {
        QuantityTier {
            min,
            max: None,
            label: label.into(),
        }
    }

    /// Checks whether a quantity falls inside this tier.
    #[inline]
    pub fn contains(&self, quantity: u32) -> bool {
        quantity >= self.min && self.max.map_or(true, |max| quantity <= max)
    }
}

// =============================================================================
// Stitch Range
// =============================================================================

/// A contiguous stitch-count range for embroidery pricing.
///
/// Same shape and invariants as [`QuantityTier`], but keyed off the artwork's
/// stitch count instead of the ordered quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StitchRange {
    /// Lower bound, inclusive.
    pub min: u32,

    /// Upper bound, inclusive. `None` means unbounded (final range).
    pub max: Option<u32>,

    /// Stable label used as the lookup-key component (e.g., "5001-10000").
    pub label: String,
}

impl StitchRange {
    /// Creates a bounded stitch range.
    pub fn bounded(min: u32, max: u32, label: impl Into<String>) -> Self {
        StitchRange {
            min,
            max: Some(max),
            label: label.into(),
        }
    }

    /// Creates the unbounded final stitch range.
    pub fn open_ended(min: u32, label: impl Into<String>) -> Self {
        StitchRange {
            min,
            max: None,
            label: label.into(),
        }
    }

    /// Checks whether a stitch count falls inside this range.
    #[inline]
    pub fn contains(&self, stitch_count: u32) -> bool {
        stitch_count >= self.min && self.max.map_or(true, |max| stitch_count <= max)
    }
}

// =============================================================================
// Resolvers
// =============================================================================

/// Resolves the quantity tier a quantity falls into.
///
/// Scans tiers in ascending `min` order and returns the first tier where
/// `quantity >= min && (max is none || quantity <= max)`.
///
/// Returns `None` when no tier matches. For a well-formed table (contiguous
/// with an unbounded tail) this only happens for quantities below the first
/// tier; callers treat it as an unavailable breakdown.
pub fn resolve_tier(quantity: u32, tiers: &[QuantityTier]) -> Option<&QuantityTier> {
    tiers.iter().find(|tier| tier.contains(quantity))
}

/// Resolves the stitch range a stitch count falls into.
pub fn resolve_stitch_range(stitch_count: u32, ranges: &[StitchRange]) -> Option<&StitchRange> {
    ranges.iter().find(|range| range.contains(stitch_count))
}

// =============================================================================
// Sequence Validation
// =============================================================================

/// Validates that a tier sequence is sorted, contiguous, non-overlapping,
/// and free of label collisions.
///
/// Admin-edited tables pass through this before being served: a gap between
/// tiers would make some quantity unpriceable, an overlap would make the
/// resolved price depend on scan order, and a duplicated label would orphan
/// matrix entries.
pub fn validate_tier_sequence(technique: Technique, tiers: &[QuantityTier]) -> PricingResult<()> {
    let spans: Vec<(u32, Option<u32>, &str)> = tiers
        .iter()
        .map(|t| (t.min, t.max, t.label.as_str()))
        .collect();
    validate_span_sequence(technique, "quantity tier", &spans)
}

/// Validates a stitch-range sequence with the same rules as quantity tiers.
pub fn validate_stitch_ranges(technique: Technique, ranges: &[StitchRange]) -> PricingResult<()> {
    let spans: Vec<(u32, Option<u32>, &str)> = ranges
        .iter()
        .map(|r| (r.min, r.max, r.label.as_str()))
        .collect();
    validate_span_sequence(technique, "stitch range", &spans)
}

fn validate_span_sequence(
    technique: Technique,
    what: &str,
    spans: &[(u32, Option<u32>, &str)],
) -> PricingResult<()> {
    let malformed = |reason: String| PricingError::MalformedTable { technique, reason };

    if spans.is_empty() {
        return Err(malformed(format!("no {what}s defined")));
    }

    let mut seen_labels = std::collections::HashSet::new();
    for (min, max, label) in spans {
        if !seen_labels.insert(*label) {
            return Err(malformed(format!("duplicate {what} label '{label}'")));
        }
        if let Some(max) = max {
            if max < min {
                return Err(malformed(format!("{what} '{label}' has max below min")));
            }
        }
    }

    for pair in spans.windows(2) {
        let (_, prev_max, prev_label) = &pair[0];
        let (next_min, _, next_label) = &pair[1];
        match prev_max {
            // Unbounded before the end swallows every later span
            None => {
                return Err(malformed(format!(
                    "{what} '{prev_label}' is open-ended but not last"
                )));
            }
            Some(prev_max) => {
                if *next_min != prev_max + 1 {
                    return Err(malformed(format!(
                        "{what}s '{prev_label}' and '{next_label}' are not contiguous"
                    )));
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
