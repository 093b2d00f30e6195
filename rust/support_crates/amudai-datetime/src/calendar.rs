//! The calendar interface consumed by the datetime construction functions.

use std::sync::Arc;

use crate::{DATE_LUT_MAX_YEAR, DATE_LUT_MIN_YEAR, TimeZoneResult};

/// Maps calendar fields to day numbers and seconds since the UNIX epoch
/// within a single time zone.
///
/// Implementations are immutable once built and are shared across threads.
pub trait Calendar: Send + Sync + std::fmt::Debug {
    /// Name of the time zone this calendar resolves local times in.
    fn time_zone(&self) -> &str;

    /// Smallest year with a representable day.
    fn min_year(&self) -> i32 {
        DATE_LUT_MIN_YEAR
    }

    /// Largest year with a representable day.
    fn max_year(&self) -> i32 {
        DATE_LUT_MAX_YEAR
    }

    /// Returns the number of days since 1970-01-01 for the given date.
    ///
    /// Out-of-range fields never fail: a year below [`Calendar::min_year`], or a
    /// month/day outside `[1, 12]`/`[1, 31]`, yields `0`; a year above
    /// [`Calendar::max_year`] yields the last representable day. A day-of-month
    /// past the end of its month rolls over into the following month.
    fn make_day_num(&self, year: i32, month: i32, day: i32) -> i32;

    /// Returns seconds since the UNIX epoch for the given local date and time.
    ///
    /// The date is resolved like [`Calendar::make_day_num`], except that invalid
    /// fields select the first representable day. The time of day is added as
    /// `hour * 3600 + minute * 60 + second` and may run past midnight.
    fn make_date_time(
        &self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> i64;
}

/// Resolves calendars by time zone name.
pub trait CalendarProvider: Send + Sync {
    /// The calendar used when a caller does not name a time zone.
    fn default_calendar(&self) -> Arc<dyn Calendar>;

    /// Returns the calendar for `time_zone`. An empty name selects the default.
    fn calendar(&self, time_zone: &str) -> TimeZoneResult<Arc<dyn Calendar>>;
}
