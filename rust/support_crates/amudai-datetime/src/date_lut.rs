use std::str::FromStr;

use chrono::{DateTime, Duration, LocalResult, Offset, TimeZone};
use chrono_tz::Tz;

use crate::calendar::Calendar;
use crate::{
    DATE_LUT_FIRST_DAY_NUM, DATE_LUT_LAST_INDEX, DATE_LUT_MAX_YEAR, DATE_LUT_MIN_YEAR,
    DAYS_TILL_UNIX_EPOCH, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TimeZoneError,
    TimeZoneResult,
};

const DAYS_TO_MONTH_365: [i32; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
const DAYS_TO_MONTH_366: [i32; 13] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// Proleptic Gregorian calendar bound to one time zone and to the years
/// `[DATE_LUT_MIN_YEAR, DATE_LUT_MAX_YEAR]`.
///
/// Days are addressed by their index from 1900-01-01 (`0`) to 2299-12-31
/// ([`DATE_LUT_LAST_INDEX`]). Day numbers are time zone independent; only
/// [`Calendar::make_date_time`] consults the zone's UTC offsets.
#[derive(Debug, Clone)]
pub struct DateLut {
    time_zone: Tz,
    name: String,
}

impl DateLut {
    /// Builds the calendar for an IANA time zone name such as `"Europe/Berlin"`.
    ///
    /// # Errors
    /// Returns [`TimeZoneError::UnknownTimeZone`] if the name is not a known zone.
    pub fn new(name: &str) -> TimeZoneResult<DateLut> {
        let time_zone =
            Tz::from_str(name).map_err(|_| TimeZoneError::UnknownTimeZone(name.to_string()))?;
        Ok(DateLut {
            time_zone,
            name: name.to_string(),
        })
    }

    pub fn utc() -> DateLut {
        DateLut {
            time_zone: Tz::UTC,
            name: Tz::UTC.name().to_string(),
        }
    }

    /// Index of the day addressed by the fields, saturating at both ends of the LUT.
    fn make_lut_index(&self, year: i32, month: i32, day: i32) -> i32 {
        if year < DATE_LUT_MIN_YEAR || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return 0;
        }
        if year > DATE_LUT_MAX_YEAR {
            return DATE_LUT_LAST_INDEX;
        }
        let index = Self::days_since_epoch(year, month, 1) - DATE_LUT_FIRST_DAY_NUM + day - 1;
        index.min(DATE_LUT_LAST_INDEX)
    }

    #[inline]
    fn day_num_from_index(index: i32) -> i32 {
        DATE_LUT_FIRST_DAY_NUM + index
    }

    /// Converts local seconds (seconds since the epoch as read on a wall clock
    /// in this zone) to seconds since the UNIX epoch.
    fn local_to_utc(&self, local_seconds: i64) -> i64 {
        let Some(local) = DateTime::from_timestamp(local_seconds, 0).map(|dt| dt.naive_utc())
        else {
            return local_seconds;
        };
        let offset = match self.time_zone.offset_from_local_datetime(&local) {
            LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => offset.fix(),
            // Local time inside a transition gap: keep the offset from before the gap.
            LocalResult::None => self
                .time_zone
                .offset_from_utc_datetime(&(local - Duration::days(1)))
                .fix(),
        };
        local_seconds - offset.local_minus_utc() as i64
    }
}

// Static calendar arithmetic
impl DateLut {
    pub fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    pub fn days_in_month(year: i32, month: i32) -> i32 {
        assert!(
            (1..=12).contains(&month),
            "Invalid month argument: DateLut::days_in_month({month})"
        );
        let days = if DateLut::is_leap_year(year) {
            DAYS_TO_MONTH_366
        } else {
            DAYS_TO_MONTH_365
        };
        days[month as usize] - days[(month - 1) as usize]
    }

    /// Days from 1970-01-01 to the given date. `month` must be in `[1, 12]`;
    /// `day` is not checked against the length of the month.
    pub fn days_since_epoch(year: i32, month: i32, day: i32) -> i32 {
        assert!(
            (1..=12).contains(&month),
            "Invalid month argument: DateLut::days_since_epoch({month})"
        );
        let days = if DateLut::is_leap_year(year) {
            DAYS_TO_MONTH_366
        } else {
            DAYS_TO_MONTH_365
        };
        let y = year - 1;
        let n = y * 365 + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            + days[(month - 1) as usize]
            + day
            - 1;
        n - DAYS_TILL_UNIX_EPOCH
    }
}

impl Calendar for DateLut {
    fn time_zone(&self) -> &str {
        &self.name
    }

    fn make_day_num(&self, year: i32, month: i32, day: i32) -> i32 {
        if year < DATE_LUT_MIN_YEAR || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return 0;
        }
        Self::day_num_from_index(self.make_lut_index(year, month, day))
    }

    fn make_date_time(
        &self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> i64 {
        let day_num = Self::day_num_from_index(self.make_lut_index(year, month, day));
        let time_offset = hour as i64 * SECONDS_PER_HOUR
            + minute as i64 * SECONDS_PER_MINUTE
            + second as i64;
        self.local_to_utc(day_num as i64 * SECONDS_PER_DAY + time_offset)
    }
}
