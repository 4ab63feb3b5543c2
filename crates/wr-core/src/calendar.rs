//! Fixed campaign calendar.
//!
//! Uses a simplified 360-day year (12 months x 30 days) with no leap years,
//! matching the flavor calendar of the setting. Absolute days are 1-based
//! and counted from the first day of an epoch year supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{WeatherError, WeatherResult};

/// Days in every month.
pub const DAYS_PER_MONTH: u32 = 30;
/// Months in every year.
pub const MONTHS_PER_YEAR: u32 = 12;
/// Days in every year.
pub const DAYS_PER_YEAR: u64 = (DAYS_PER_MONTH * MONTHS_PER_YEAR) as u64;

/// A date in the fixed calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Year, any integer.
    pub year: i64,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-30.
    pub day: u32,
}

impl CalendarDate {
    /// Build a date, rejecting months outside 1-12 and days outside 1-30.
    pub fn new(month: u32, day: u32, year: i64) -> WeatherResult<Self> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) || !(1..=DAYS_PER_MONTH).contains(&day) {
            return Err(WeatherError::InvalidDate { month, day });
        }
        Ok(Self { year, month, day })
    }

    /// 1-based day of the year (1-360).
    pub fn day_of_year(&self) -> u64 {
        to_absolute_day(self.month, self.day)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

/// Convert an absolute day (1-based, counted from `epoch_year`) to a date.
///
/// Fails with `InvalidStartDay` for day 0 and with `DateOutOfRange` when
/// the resulting year does not fit in an `i64`.
pub fn to_date(absolute_day: u64, epoch_year: i64) -> WeatherResult<CalendarDate> {
    let Some(offset) = absolute_day.checked_sub(1) else {
        return Err(WeatherError::InvalidStartDay(absolute_day));
    };
    let year = i64::try_from(offset / DAYS_PER_YEAR)
        .ok()
        .and_then(|years| epoch_year.checked_add(years))
        .ok_or(WeatherError::DateOutOfRange {
            absolute_day,
            epoch_year,
        })?;
    let day_of_year = (offset % DAYS_PER_YEAR) as u32;
    Ok(CalendarDate {
        year,
        month: day_of_year / DAYS_PER_MONTH + 1,
        day: day_of_year % DAYS_PER_MONTH + 1,
    })
}

/// Convert a month and day to a day of the year, usable as a starting
/// absolute day in that year.
pub fn to_absolute_day(month: u32, day: u32) -> u64 {
    u64::from(month.saturating_sub(1)) * u64::from(DAYS_PER_MONTH) + u64::from(day)
}
