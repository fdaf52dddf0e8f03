//! # Money Module
//!
//! Provides the `Money` and `Percent` types used by every price computation.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a quoting system that stacks surcharges:                           │
//! │    base × 1.15 × 1.25 accumulates error on every step                  │
//! │    and the invoice total drifts from the itemized lines                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                            │
//! │    Every amount is i64 cents; every rate is u32 basis points.          │
//! │    One rounding point per surcharge, in integer math.                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inkline_core::money::{Money, Percent};
//!
//! // Create from cents (preferred)
//! let unit = Money::from_cents(220); // 2.20
//!
//! // Arithmetic operations
//! let line = unit * 10i64;                    // 22.00
//! let total = line + Money::from_cents(5000); // 72.00
//!
//! // Percentages are basis points, applied in integer math
//! let surcharge = total.apply_percent(Percent::from_bps(3000)); // 30%
//! assert_eq!(surcharge.cents(), 2160);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for discounts and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every amount in the engine flows through this type: unit prices from the
/// price matrices, fixed fees, surcharges, shipping, and the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use inkline_core::money::Money;
    ///
    /// let unit = Money::from_cents(220); // 2.20 per piece
    /// assert_eq!(unit.cents(), 220);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use inkline_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(220); // 2.20
    /// let line_total = unit_price.multiply_quantity(10);
    /// assert_eq!(line_total.cents(), 2200); // 22.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage and returns the resulting amount.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(cents × bps + 5000) / 10000`.
    /// Intermediate math runs in i128 to prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use inkline_core::money::{Money, Percent};
    ///
    /// let base = Money::from_cents(10000);               // 100.00
    /// let surcharge = base.apply_percent(Percent::from_bps(4000)); // 40%
    /// assert_eq!(surcharge.cents(), 4000);               // 40.00
    /// ```
    pub fn apply_percent(&self, rate: Percent) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Example
    /// ```rust
    /// use inkline_core::money::{Money, Percent};
    ///
    /// let unit = Money::from_cents(1000);                             // 10.00
    /// let discounted = unit.apply_discount(Percent::from_bps(1000));  // 10% off
    /// assert_eq!(discounted.cents(), 900);                            // 9.00
    /// ```
    pub fn apply_discount(&self, rate: Percent) -> Money {
        *self - self.apply_percent(rate)
    }

    /// Applies a percentage uplift and returns the increased amount.
    ///
    /// Used for catalog indexation: `100.00` uplifted by 2.5% is `102.50`.
    pub fn apply_uplift(&self, rate: Percent) -> Money {
        *self + self.apply_percent(rate)
    }
}

// =============================================================================
// Percent Type
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% (e.g., a special-ink option surcharge)
///
/// Option surcharges, the express surcharge, the textile discount and the
/// indexation knob are all carried as this type so they compose through the
/// same integer rounding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(u32);

impl Percent {
    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a percentage from whole percent (for convenience).
    ///
    /// `Percent::from_percent(15)` == `Percent::from_bps(1500)`.
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        Percent(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fractional percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

/// Additive combination: option surcharges are summed, not compounded.
impl Add for Percent {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Percent(self.0 + other.0)
    }
}

impl std::iter::Sum for Percent {
    fn sum<I: Iterator<Item = Percent>>(iter: I) -> Self {
        iter.fold(Percent::zero(), |acc, p| acc + p)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. The frontend formats amounts itself
/// to handle locale conventions.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_apply_percent_basic() {
        // 100.00 at 40% = 40.00
        let base = Money::from_cents(10000);
        let rate = Percent::from_bps(4000);
        assert_eq!(base.apply_percent(rate).cents(), 4000);
    }

    #[test]
    fn test_apply_percent_rounds_half_up() {
        // 10.01 at 15% = 1.5015 → 1.50
        assert_eq!(
            Money::from_cents(1001)
                .apply_percent(Percent::from_bps(1500))
                .cents(),
            150
        );
        // 9.99 at 15% = 1.4985 → 1.50
        assert_eq!(
            Money::from_cents(999)
                .apply_percent(Percent::from_bps(1500))
                .cents(),
            150
        );
    }

    #[test]
    fn test_apply_discount_and_uplift() {
        let unit = Money::from_cents(1000);
        assert_eq!(unit.apply_discount(Percent::from_bps(1000)).cents(), 900);
        assert_eq!(unit.apply_uplift(Percent::from_bps(250)).cents(), 1025);
    }

    #[test]
    fn test_percent_sum_is_additive() {
        // 15% + 25% = 40%, never 43.75% (no multiplicative compounding)
        let combined: Percent = [Percent::from_percent(15), Percent::from_percent(25)]
            .into_iter()
            .sum();
        assert_eq!(combined.bps(), 4000);
        assert_eq!(
            Money::from_cents(10000).apply_percent(combined).cents(),
            4000
        );
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [100, 250, 50].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 400);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_no_overflow_on_large_amounts() {
        // A deliberately absurd amount still survives the i128 intermediate
        let base = Money::from_cents(i64::MAX / 20000);
        let rate = Percent::from_bps(10000);
        assert_eq!(base.apply_percent(rate).cents(), base.cents());
    }
}
