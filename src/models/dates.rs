//! Calendar-month arithmetic
//!
//! Installment schedules and recurring projections both advance by calendar
//! months while trying to preserve the origin day-of-month. When the target
//! month is shorter (e.g. day 31 into April), the date clamps to the last day
//! of that month.

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // First of next month minus one day; both dates are always valid
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Place `day` in the given month, clamping to the month's last day
pub fn clamp_day(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month)).max(1);
    // Guaranteed valid after clamping
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("clamped day is always a valid calendar date")
}

/// Add `offset` calendar months to a date, preserving the day-of-month where
/// it exists in the target month and clamping otherwise
pub fn add_months(date: NaiveDate, offset: u32) -> NaiveDate {
    let months0 = date.year() * 12 + date.month0() as i32 + offset as i32;
    let year = months0.div_euclid(12);
    let month = months0.rem_euclid(12) as u32 + 1;
    clamp_day(year, month, date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_add_months_preserves_day() {
        assert_eq!(add_months(date(2025, 1, 5), 1), date(2025, 2, 5));
        assert_eq!(add_months(date(2025, 1, 5), 2), date(2025, 3, 5));
        assert_eq!(add_months(date(2025, 1, 5), 0), date(2025, 1, 5));
    }

    #[test]
    fn test_add_months_clamps_short_months() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 3, 31), 1), date(2025, 4, 30));
    }

    #[test]
    fn test_add_months_crosses_year() {
        assert_eq!(add_months(date(2025, 11, 15), 3), date(2026, 2, 15));
        assert_eq!(add_months(date(2025, 12, 31), 2), date(2026, 2, 28));
    }

    #[test]
    fn test_clamp_day() {
        assert_eq!(clamp_day(2025, 2, 31), date(2025, 2, 28));
        assert_eq!(clamp_day(2025, 6, 15), date(2025, 6, 15));
    }
}
