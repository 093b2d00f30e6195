pub mod calendar;
pub mod date_lut;
pub mod registry;

#[cfg(test)]
mod tests;

pub use calendar::{Calendar, CalendarProvider};
pub use date_lut::DateLut;
pub use registry::TimeZoneRegistry;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;

pub const DAYS_PER_YEAR: i32 = 365;
pub const DAYS_PER_4_YEARS: i32 = DAYS_PER_YEAR * 4 + 1; // 1461
pub const DAYS_PER_100_YEARS: i32 = DAYS_PER_4_YEARS * 25 - 1; // 36524
pub const DAYS_PER_400_YEARS: i32 = DAYS_PER_100_YEARS * 4 + 1; // 146097

/// Days elapsed from 0001-01-01 to 1970-01-01 (start of the UNIX epoch).
pub const DAYS_TILL_UNIX_EPOCH: i32 = 719_162;

/// First year covered by a [`DateLut`].
pub const DATE_LUT_MIN_YEAR: i32 = 1900;
/// Last year covered by a [`DateLut`].
pub const DATE_LUT_MAX_YEAR: i32 = 2299;

/// Day number (days since 1970-01-01) of 1900-01-01, the first day of the LUT.
pub const DATE_LUT_FIRST_DAY_NUM: i32 = -25_567;
/// Index of 2299-12-31, the last day of the LUT. The LUT spans exactly 400 years.
pub const DATE_LUT_LAST_INDEX: i32 = DAYS_PER_400_YEARS - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeZoneError {
    UnknownTimeZone(String),
}

impl std::fmt::Display for TimeZoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TimeZoneError::UnknownTimeZone(name) => write!(f, "Unknown time zone: '{name}'"),
        }
    }
}

impl std::error::Error for TimeZoneError {}

pub type TimeZoneResult<T> = std::result::Result<T, TimeZoneError>;
