//! # Delivery Dates
//!
//! Working-day arithmetic and the express-surcharge rule.
//!
//! ## Express Surcharge Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Express Surcharge                                   │
//! │                                                                         │
//! │  Standard lead time: 10 working days                                   │
//! │                                                                         │
//! │  resolved days   10    9     8     7     6     5                       │
//! │  surcharge        0%  10%   20%   30%   40%   50%                      │
//! │                                                                         │
//! │  10% per working day saved, linear, no ceiling.                        │
//! │  Applied to the base total (after option surcharges), once per item.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::money::Percent;
use crate::STANDARD_LEAD_TIME_DAYS;

/// Surcharge rate for a resolved lead time.
///
/// Lead times at or above the standard carry no surcharge; every working day
/// saved below it adds 10%.
///
/// ## Example
/// ```rust
/// use inkline_core::delivery::express_surcharge_percent;
///
/// assert_eq!(express_surcharge_percent(10).bps(), 0);
/// assert_eq!(express_surcharge_percent(7).bps(), 3000); // 30%
/// ```
pub fn express_surcharge_percent(resolved_days: u32) -> Percent {
    if resolved_days >= STANDARD_LEAD_TIME_DAYS {
        Percent::zero()
    } else {
        Percent::from_percent(10 * (STANDARD_LEAD_TIME_DAYS - resolved_days))
    }
}

/// Checks whether a date is a working day (Monday through Friday).
#[inline]
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Adds `days` working days to a date, skipping weekends.
///
/// The count starts the day after `from`: adding 1 working day to a Friday
/// lands on the following Monday.
pub fn add_working_days(from: NaiveDate, days: u32) -> NaiveDate {
    let mut date = from;
    let mut remaining = days;
    while remaining > 0 {
        date = date + Duration::days(1);
        if is_working_day(date) {
            remaining -= 1;
        }
    }
    date
}

/// Counts working days from `from` (exclusive) to `to` (inclusive).
///
/// Returns 0 when `to` is not after `from`.
pub fn working_days_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut date = from;
    let mut count = 0;
    while date < to {
        date = date + Duration::days(1);
        if is_working_day(date) {
            count += 1;
        }
    }
    count
}

/// The earliest ship date for a lead time starting today.
pub fn ship_date(order_date: NaiveDate, lead_time_days: u32) -> NaiveDate {
    add_working_days(order_date, lead_time_days)
}

// =============================================================================
// Unit Tests
// =============================================================================
