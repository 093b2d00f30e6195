//! Descriptors of the two day-count output types.

use amudai_datetime::Calendar;
use arrow_array::{
    ArrowPrimitiveType,
    types::{Date32Type, UInt16Type},
};
use num_traits::AsPrimitive;

use crate::bounds::{is_valid_date, is_valid_year_day};
use crate::function::ReturnType;

/// Bounds and output representation of a day-count date type.
///
/// One algorithm serves both `Date` (16-bit, 1970-01-01 to 2149-06-06) and
/// `Date32` (32-bit, 1900-01-01 to 2299-12-31).
pub trait DateFamily: Send + Sync + 'static {
    const MAKE_DATE_NAME: &'static str;
    const YYYYMMDD_NAME: &'static str;

    const MIN_YEAR: i32;
    const MAX_YEAR: i32;
    /// Last representable `(year, month, day)`.
    const MAX_DATE: (i32, i32, i32);

    type Output: ArrowPrimitiveType;

    fn return_type() -> ReturnType;

    /// Converts a day number already known to be in range.
    fn from_day_num(day_num: i32) -> <Self::Output as ArrowPrimitiveType>::Native;

    fn max_day_num(calendar: &dyn Calendar) -> i32 {
        let (year, month, day) = Self::MAX_DATE;
        calendar.make_day_num(year, month, day)
    }

    /// Day number of `(year, month, day)`, or `0` if the fields are out of range
    /// or the date lies past [`DateFamily::MAX_DATE`].
    fn day_num<T>(calendar: &dyn Calendar, max_day_num: i32, year: T, month: T, day: T) -> i32
    where
        T: AsPrimitive<f64> + AsPrimitive<i32>,
    {
        if !is_valid_date(year, month, day, Self::MIN_YEAR, Self::MAX_YEAR) {
            return 0;
        }
        let day_num = calendar.make_day_num(year.as_(), month.as_(), day.as_());
        if day_num <= max_day_num { day_num } else { 0 }
    }

    /// Day number of the `day_of_year`-th day of `year`, with the same
    /// saturation as [`DateFamily::day_num`].
    fn day_num_of_year<T>(calendar: &dyn Calendar, max_day_num: i32, year: T, day_of_year: T) -> i32
    where
        T: AsPrimitive<f64> + AsPrimitive<i32>,
    {
        if !is_valid_year_day(year, day_of_year, Self::MIN_YEAR, Self::MAX_YEAR) {
            return 0;
        }
        let day_of_year: i32 = day_of_year.as_();
        let day_num = calendar.make_day_num(year.as_(), 1, 1) + day_of_year - 1;
        if day_num <= max_day_num { day_num } else { 0 }
    }
}

/// 16-bit day count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Date;

/// 32-bit signed day count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Date32;

impl DateFamily for Date {
    const MAKE_DATE_NAME: &'static str = "makeDate";
    const YYYYMMDD_NAME: &'static str = "YYYYMMDDToDate";

    const MIN_YEAR: i32 = 1970;
    const MAX_YEAR: i32 = 2149;
    const MAX_DATE: (i32, i32, i32) = (Self::MAX_YEAR, 6, 6);

    type Output = UInt16Type;

    fn return_type() -> ReturnType {
        ReturnType::Date
    }

    fn from_day_num(day_num: i32) -> u16 {
        day_num.clamp(0, u16::MAX as i32) as u16
    }
}

impl DateFamily for Date32 {
    const MAKE_DATE_NAME: &'static str = "makeDate32";
    const YYYYMMDD_NAME: &'static str = "YYYYMMDDToDate32";

    const MIN_YEAR: i32 = 1900;
    const MAX_YEAR: i32 = 2299;
    const MAX_DATE: (i32, i32, i32) = (Self::MAX_YEAR, 12, 31);

    type Output = Date32Type;

    fn return_type() -> ReturnType {
        ReturnType::Date32
    }

    fn from_day_num(day_num: i32) -> i32 {
        day_num
    }
}
