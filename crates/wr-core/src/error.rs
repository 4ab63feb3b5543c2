//! Error types for the weather core.

use thiserror::Error;

/// Result type for weather operations.
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Errors that can occur while rolling or simulating weather.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeatherError {
    /// A weather id outside the table was looked up.
    #[error("invalid weather event id: {0} (expected 1-9)")]
    InvalidEventId(u32),

    /// A simulation was requested for a non-positive number of days.
    #[error("invalid duration: {0} (must be at least 1 day)")]
    InvalidDuration(i64),

    /// A calendar date outside the 12 x 30 calendar.
    #[error("invalid date: month {month}, day {day} (expected month 1-12, day 1-30)")]
    InvalidDate {
        /// The rejected month.
        month: u32,
        /// The rejected day.
        day: u32,
    },

    /// A simulation was started on absolute day 0 (days are 1-based).
    #[error("invalid start day: {0} (days are counted from 1)")]
    InvalidStartDay(u64),

    /// A day too far past the epoch to be represented as a date.
    #[error("date out of range: day {absolute_day} counted from year {epoch_year} is past the end of the calendar")]
    DateOutOfRange {
        /// The absolute day that could not be converted.
        absolute_day: u64,
        /// The year the days are counted from.
        epoch_year: i64,
    },

    /// A scripted random source ran out of values.
    #[error("scripted random source exhausted")]
    ScriptExhausted,
}
