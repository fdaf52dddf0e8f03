//! # Error Types
//!
//! Domain-specific error types for inkline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inkline-core errors (this file)                                       │
//! │  ├── PricingError     - Table/quote rule violations                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  inkline-catalog errors (separate crate)                               │
//! │  └── CatalogError     - Snapshot retrieval failures                    │
//! │                                                                         │
//! │  NOTE: "no price configured for this tier/axis" is NOT an error.        │
//! │  It is a first-class Unavailable outcome (see calculator.rs), because   │
//! │  one unpriceable item must never prevent pricing the rest of a quote.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (technique, quantities, labels)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::Technique;

// =============================================================================
// Pricing Error
// =============================================================================

/// Quote-level rule violations.
///
/// These errors represent business rule violations detected before a price
/// computation runs. They should be caught by the calling layer and
/// translated to user-facing messages.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Total quantity is below the technique's purchase minimum.
    ///
    /// ## When This Occurs
    /// - The caller tries to add a decoration line with fewer pieces than
    ///   the technique is sold at (e.g., embroidery below 10 pieces)
    ///
    /// The calling layer checks this *before* invoking the calculator; the
    /// calculator itself stays robust if invoked anyway and reports an
    /// unavailable breakdown instead of failing.
    #[error("{technique} requires at least {minimum} pieces, got {requested}")]
    BelowMinimumQuantity {
        technique: Technique,
        minimum: u32,
        requested: u32,
    },

    /// A price table failed its well-formedness check.
    ///
    /// ## When This Occurs
    /// - Admin-edited quantity tiers overlap or leave a gap
    /// - Two tiers of the same table share a label
    /// - A stitch-range sequence is malformed
    #[error("malformed price table for {technique}: {reason}")]
    MalformedTable { technique: Technique, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before pricing logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, unparseable dimension).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
