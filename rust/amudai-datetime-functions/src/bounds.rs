//! Range checks and saturation shared by all constructors.
//!
//! Fields arrive as reals. `NaN` fails every range check, so a row with a `NaN`
//! field is never well-formed.

use amudai_datetime::Calendar;
use num_traits::AsPrimitive;

/// Upper bound of hour, minute and second fields. Values past 59 are accepted
/// and roll over into the next larger unit.
pub const MAX_CLOCK_FIELD: f64 = 99.0;

/// Largest value of a 32-bit datetime.
pub const MAX_DATE_TIME_U32: i64 = 0xFFFF_FFFF;

#[inline]
fn in_range<T: AsPrimitive<f64>>(value: T, min: f64, max: f64) -> bool {
    let value: f64 = value.as_();
    value >= min && value <= max
}

/// `year` in `[min_year, max_year]`, `month` in `[1, 12]` and `day` in `[1, 31]`.
/// The day is not checked against the length of the month.
#[inline]
pub fn is_valid_date<T: AsPrimitive<f64>>(
    year: T,
    month: T,
    day: T,
    min_year: i32,
    max_year: i32,
) -> bool {
    in_range(year, min_year as f64, max_year as f64)
        && in_range(month, 1.0, 12.0)
        && in_range(day, 1.0, 31.0)
}

/// `year` in `[min_year, max_year]` and `day_of_year` in `[1, 365]`.
#[inline]
pub fn is_valid_year_day<T: AsPrimitive<f64>>(
    year: T,
    day_of_year: T,
    min_year: i32,
    max_year: i32,
) -> bool {
    in_range(year, min_year as f64, max_year as f64) && in_range(day_of_year, 1.0, 365.0)
}

/// Seconds-since-epoch values substituted for malformed (`min`) and too-late
/// (`max`) rows, computed once per call from the calendar in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeSentinels {
    pub min: i64,
    pub max: i64,
}

impl DateTimeSentinels {
    pub fn new(calendar: &dyn Calendar) -> DateTimeSentinels {
        DateTimeSentinels {
            min: calendar.make_date_time(calendar.min_year() - 1, 1, 1, 0, 0, 0),
            max: calendar.make_date_time(calendar.max_year() + 1, 1, 1, 23, 59, 59),
        }
    }
}

/// The six fields of a datetime row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTimeFields {
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl DateTimeFields {
    /// All fields within their legal ranges; the year is only bounded below.
    pub fn is_well_formed(&self, min_year: i32) -> bool {
        self.year >= min_year as f64
            && in_range(self.month, 1.0, 12.0)
            && in_range(self.day, 1.0, 31.0)
            && in_range(self.hour, 0.0, MAX_CLOCK_FIELD)
            && in_range(self.minute, 0.0, MAX_CLOCK_FIELD)
            && in_range(self.second, 0.0, MAX_CLOCK_FIELD)
    }

    /// Seconds since the epoch of this row in `calendar`: the minimum sentinel
    /// for malformed rows, the maximum sentinel for years past the calendar's
    /// last year, else the calendar's value for the (truncated) fields.
    pub fn seconds(&self, calendar: &dyn Calendar, sentinels: &DateTimeSentinels) -> i64 {
        if !self.is_well_formed(calendar.min_year()) {
            return sentinels.min;
        }
        if self.year > calendar.max_year() as f64 {
            return sentinels.max;
        }
        calendar.make_date_time(
            self.year as i32,
            self.month as i32,
            self.day as i32,
            self.hour as i32,
            self.minute as i32,
            self.second as i32,
        )
    }
}

/// Clamps seconds since the epoch into the 32-bit datetime range.
#[inline]
pub fn clamp_to_u32(seconds: i64) -> u32 {
    seconds.clamp(0, MAX_DATE_TIME_U32) as u32
}

/// Clamps a fraction into `[0, max_fraction]`. `None` for `NaN`.
#[inline]
pub fn clamp_fraction(fraction: f64, max_fraction: f64) -> Option<f64> {
    if fraction.is_nan() {
        None
    } else {
        Some(fraction.clamp(0.0, max_fraction))
    }
}

#[cfg(test)]
mod tests {
    use amudai_datetime::DateLut;

    use super::*;

    fn fields(year: f64, month: f64, day: f64, hour: f64, minute: f64, second: f64) -> DateTimeFields {
        DateTimeFields {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date(2023.0_f32, 2.0, 31.0, 1970, 2149));
        assert!(is_valid_date(1970_i64, 1, 1, 1970, 2149));
        assert!(!is_valid_date(1969.0_f32, 12.0, 31.0, 1970, 2149));
        assert!(!is_valid_date(2150_i64, 1, 1, 1970, 2149));
        assert!(!is_valid_date(2023.0_f32, 13.0, 1.0, 1970, 2149));
        assert!(!is_valid_date(2023.0_f32, 1.0, 0.0, 1970, 2149));
        assert!(!is_valid_date(f32::NAN, 1.0, 1.0, 1970, 2149));
        assert!(!is_valid_date(2023.0_f32, f32::NAN, 1.0, 1970, 2149));
    }

    #[test]
    fn test_is_valid_year_day() {
        assert!(is_valid_year_day(2023.0_f32, 365.0, 1900, 2299));
        assert!(!is_valid_year_day(2024.0_f32, 366.0, 1900, 2299));
        assert!(!is_valid_year_day(2023.0_f32, 0.0, 1900, 2299));
        assert!(!is_valid_year_day(2023.0_f32, f32::NAN, 1900, 2299));
    }

    #[test]
    fn test_well_formed_fields() {
        assert!(fields(2023.0, 2.0, 28.0, 99.0, 99.0, 99.0).is_well_formed(1900));
        assert!(fields(9999.0, 2.0, 28.0, 0.0, 0.0, 0.0).is_well_formed(1900));
        assert!(!fields(1899.0, 2.0, 28.0, 0.0, 0.0, 0.0).is_well_formed(1900));
        assert!(!fields(2023.0, 2.0, 28.0, 100.0, 0.0, 0.0).is_well_formed(1900));
        assert!(!fields(2023.0, 2.0, 28.0, 0.0, -1.0, 0.0).is_well_formed(1900));
        assert!(!fields(2023.0, 2.0, 28.0, 0.0, 0.0, f64::NAN).is_well_formed(1900));
        assert!(!fields(f64::NAN, 2.0, 28.0, 0.0, 0.0, 0.0).is_well_formed(1900));
    }

    #[test]
    fn test_seconds_and_sentinels() {
        let lut = DateLut::utc();
        let sentinels = DateTimeSentinels::new(&lut);
        assert_eq!(sentinels.min, -2208988800);
        assert_eq!(sentinels.max, 10413791999);

        let value = fields(2023.0, 2.0, 28.0, 17.0, 12.0, 33.0).seconds(&lut, &sentinels);
        assert_eq!(value, 1677604353);
        let value = fields(1800.0, 2.0, 28.0, 17.0, 12.0, 33.0).seconds(&lut, &sentinels);
        assert_eq!(value, sentinels.min);
        let value = fields(2300.0, 1.0, 1.0, 0.0, 0.0, 0.0).seconds(&lut, &sentinels);
        assert_eq!(value, sentinels.max);
        let value = fields(f64::INFINITY, 1.0, 1.0, 0.0, 0.0, 0.0).seconds(&lut, &sentinels);
        assert_eq!(value, sentinels.max);
    }

    #[test]
    fn test_clamp_to_u32() {
        assert_eq!(clamp_to_u32(-2208988800), 0);
        assert_eq!(clamp_to_u32(1677604353), 1677604353);
        assert_eq!(clamp_to_u32(10413791999), u32::MAX);
    }

    #[test]
    fn test_clamp_fraction() {
        assert_eq!(clamp_fraction(779.0, 99_999.0), Some(779.0));
        assert_eq!(clamp_fraction(-5.0, 999.0), Some(0.0));
        assert_eq!(clamp_fraction(12_345.0, 999.0), Some(999.0));
        assert_eq!(clamp_fraction(f64::NAN, 999.0), None);
    }
}
