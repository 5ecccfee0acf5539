//! Monthly duty-hours derivation.

use rust_decimal::Decimal;

/// Average weeks per month expressed in tenths (30.4 days / 7-day week).
const AVERAGE_DAYS_PER_MONTH_TENTHS: i64 = 304;

/// Derives a post's duty hours per month from its weekly schedule.
///
/// Uses the 30.4-day average month: `(30.4 x hours x days) / 7`, rounded
/// up to a whole hour. The multiplication happens before the division so
/// that exactly divisible schedules stay exact (a 5-day, 7-hour schedule
/// yields 152, not 153).
///
/// # Example
///
/// ```
/// use quote_engine::calculation::monthly_hours;
///
/// assert_eq!(monthly_hours(12, 7), 365);
/// assert_eq!(monthly_hours(24, 7), 730);
/// ```
pub fn monthly_hours(hours_per_day: u32, days_per_week: u32) -> u32 {
    let average_days = Decimal::new(AVERAGE_DAYS_PER_MONTH_TENTHS, 1);
    let weekly_fraction =
        average_days * Decimal::from(hours_per_day) * Decimal::from(days_per_week)
            / Decimal::from(7u32);
    // Schedules are bounded at 24x7, so the ceiling always fits in u32.
    weekly_fraction.ceil().try_into().unwrap_or(0)
}
