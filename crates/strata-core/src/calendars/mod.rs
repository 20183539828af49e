//! Business day calendars.
//!
//! This module provides:
//! - The [`Calendar`] trait: business-day tests, date rolling, business-day
//!   counts, and business-date sequences
//! - [`WeekendCalendar`]: weekends-only, for tests and markets without a
//!   holiday table
//! - [`HolidayCalendar`]: a named holiday set loaded from dates or JSON

mod holiday;

pub use holiday::HolidayCalendar;

use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are trading days for a specific market
/// and provide the three operations the surface pipeline consumes:
/// `following`, `business_days_between`, and `sequence`.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Returns the next business day at or after the given date.
    ///
    /// A raw contract maturity (first calendar day of the delivery month)
    /// is rolled forward with this before any business-day count.
    fn following(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the previous business day at or before the given date.
    fn preceding(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Counts business days between two dates (exclusive of start,
    /// inclusive of end). Negative when `end` is before `start`.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        if start == end {
            return 0;
        }
        let (lo, hi, sign) = if start < end {
            (start, end, 1)
        } else {
            (end, start, -1)
        };

        let mut count = 0i64;
        let mut current = lo.add_days(1);
        while current <= hi {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }
        count * sign
    }

    /// Returns the ordered business dates in `[start, end]`.
    ///
    /// Empty when `end` is before `start`.
    fn sequence(&self, start: Date, end: Date) -> Vec<Date> {
        let mut dates = Vec::new();
        let mut current = start;
        while current <= end {
            if self.is_business_day(current) {
                dates.push(current);
            }
            current = current.add_days(1);
        }
        dates
    }
}

/// A weekends-only calendar (no holidays).
///
/// Useful for testing or when a holiday table is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_calendar() {
        let cal = WeekendCalendar;

        // 2024-06-14 is a Friday
        let friday = Date::from_ymd(2024, 6, 14).unwrap();
        assert!(cal.is_business_day(friday));
        assert!(!cal.is_business_day(friday + 1));
        assert!(cal.is_holiday(friday + 2));
    }

    #[test]
    fn test_following() {
        let cal = WeekendCalendar;

        let saturday = Date::from_ymd(2024, 6, 15).unwrap();
        let monday = Date::from_ymd(2024, 6, 17).unwrap();
        assert_eq!(cal.following(saturday), monday);
        // Business days are left unchanged
        assert_eq!(cal.following(monday), monday);
    }

    #[test]
    fn test_preceding() {
        let cal = WeekendCalendar;

        let sunday = Date::from_ymd(2024, 6, 16).unwrap();
        let friday = Date::from_ymd(2024, 6, 14).unwrap();
        assert_eq!(cal.preceding(sunday), friday);
    }

    #[test]
    fn test_business_days_between() {
        let cal = WeekendCalendar;

        // Monday to Friday of the same week: Tue, Wed, Thu, Fri
        let monday = Date::from_ymd(2024, 6, 10).unwrap();
        let friday = Date::from_ymd(2024, 6, 14).unwrap();
        assert_eq!(cal.business_days_between(monday, friday), 4);
        assert_eq!(cal.business_days_between(friday, monday), -4);
        assert_eq!(cal.business_days_between(monday, monday), 0);

        // Friday to next Monday crosses only the weekend
        let next_monday = Date::from_ymd(2024, 6, 17).unwrap();
        assert_eq!(cal.business_days_between(friday, next_monday), 1);
    }

    #[test]
    fn test_sequence() {
        let cal = WeekendCalendar;

        let friday = Date::from_ymd(2024, 6, 14).unwrap();
        let tuesday = Date::from_ymd(2024, 6, 18).unwrap();
        let seq = cal.sequence(friday, tuesday);
        assert_eq!(
            seq,
            vec![
                friday,
                Date::from_ymd(2024, 6, 17).unwrap(),
                tuesday,
            ]
        );

        // Inverted range is empty
        assert!(cal.sequence(tuesday, friday).is_empty());
    }
}
