//! Holiday calendar backed by an explicit holiday set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::error::{StrataError, StrataResult};
use crate::types::Date;

/// A market calendar defined by a named list of holidays.
///
/// Weekends are always non-business days; any listed date is a holiday on
/// top of that. The holiday table is external data (published per market),
/// loaded once and never mutated during a run.
///
/// # Example
///
/// ```rust
/// use strata_core::calendars::{Calendar, HolidayCalendar};
/// use strata_core::types::Date;
///
/// let cal = HolidayCalendar::from_dates(
///     "ANBIMA",
///     vec![Date::from_ymd(2024, 12, 25).unwrap()],
/// );
/// assert!(!cal.is_business_day(Date::from_ymd(2024, 12, 25).unwrap()));
/// assert!(cal.is_business_day(Date::from_ymd(2024, 12, 26).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    holidays: HashSet<Date>,
}

/// Serialized form of a holiday calendar.
#[derive(Serialize, Deserialize)]
struct CalendarFile {
    name: String,
    holidays: Vec<Date>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holiday dates.
    pub fn from_dates(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Loads a calendar from a JSON document.
    ///
    /// # JSON Format
    ///
    /// ```json
    /// {
    ///   "name": "ANBIMA",
    ///   "holidays": ["2024-12-25", "2025-01-01"]
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StrataError::ParseError` if the document is malformed.
    pub fn from_json(json: &str) -> StrataResult<Self> {
        let file: CalendarFile = serde_json::from_str(json)
            .map_err(|e| StrataError::parse_error(format!("calendar JSON: {e}")))?;
        Ok(Self::from_dates(file.name, file.holidays))
    }

    /// Returns the number of listed holidays.
    #[must_use]
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && !self.holidays.contains(&date)
    }
}
