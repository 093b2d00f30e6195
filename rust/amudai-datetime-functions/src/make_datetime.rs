//! `makeDateTime(year, month, day, hour, minute, second[, timezone])`.

use std::sync::Arc;

use amudai_common::Result;
use arrow_array::{
    ArrayRef,
    types::{Float32Type, UInt32Type},
};

use crate::args::{ColumnarValue, NumericColumn, optional_timezone, verify_arity, verify_numeric_args};
use crate::bounds::{DateTimeFields, DateTimeSentinels, clamp_to_u32};
use crate::context::FunctionContext;
use crate::function::{DateTimeFunction, ReturnType};
use crate::rows::evaluate_rows;

pub(crate) const FIELD_NAMES: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];

/// The six mandatory field arguments of `makeDateTime` and `makeDateTime64`,
/// converted to `Float32`.
pub(crate) struct DateTimeFieldColumns {
    year: NumericColumn<Float32Type>,
    month: NumericColumn<Float32Type>,
    day: NumericColumn<Float32Type>,
    hour: NumericColumn<Float32Type>,
    minute: NumericColumn<Float32Type>,
    second: NumericColumn<Float32Type>,
}

impl DateTimeFieldColumns {
    /// Converts `args[0..6]`. The caller has already checked the arity.
    pub fn convert(function: &str, args: &[ColumnarValue], num_rows: usize) -> Result<Self> {
        let field = |index: usize| {
            NumericColumn::<Float32Type>::convert(function, FIELD_NAMES[index], &args[index], num_rows)
        };
        Ok(DateTimeFieldColumns {
            year: field(0)?,
            month: field(1)?,
            day: field(2)?,
            hour: field(3)?,
            minute: field(4)?,
            second: field(5)?,
        })
    }

    /// Fields of `row`, or `None` if any of them is null.
    #[inline]
    pub fn get(&self, row: usize) -> Option<DateTimeFields> {
        Some(DateTimeFields {
            year: self.year.get(row)? as f64,
            month: self.month.get(row)? as f64,
            day: self.day.get(row)? as f64,
            hour: self.hour.get(row)? as f64,
            minute: self.minute.get(row)? as f64,
            second: self.second.get(row)? as f64,
        })
    }
}

/// Builds 32-bit datetimes from calendar fields in the given (or default)
/// time zone.
///
/// Malformed rows become the earliest representable datetime and years past
/// the calendar's range the latest; both are then clamped into
/// `[0, 2^32 - 1]` seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeDateTime;

impl MakeDateTime {
    pub const NAME: &'static str = "makeDateTime";
    const TIMEZONE_INDEX: usize = 6;

    fn resolve_timezone(&self, args: &[ColumnarValue]) -> Result<Option<String>> {
        verify_arity(Self::NAME, args, 6..=7)?;
        verify_numeric_args(Self::NAME, args, &FIELD_NAMES)?;
        optional_timezone(Self::NAME, args, Self::TIMEZONE_INDEX)
    }
}

impl DateTimeFunction for MakeDateTime {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn return_type(&self, args: &[ColumnarValue]) -> Result<ReturnType> {
        let timezone = self.resolve_timezone(args)?;
        Ok(ReturnType::DateTime { timezone })
    }

    fn invoke(
        &self,
        args: &[ColumnarValue],
        num_rows: usize,
        context: &FunctionContext,
    ) -> Result<ArrayRef> {
        let timezone = self.resolve_timezone(args)?;
        let fields = DateTimeFieldColumns::convert(Self::NAME, args, num_rows)?;
        let calendar = context.resolve_calendar(timezone.as_deref())?;
        let sentinels = DateTimeSentinels::new(calendar.as_ref());
        log::trace!(
            "{}: {num_rows} rows in time zone '{}'",
            Self::NAME,
            calendar.time_zone()
        );

        let calendar = calendar.as_ref();
        let values = evaluate_rows::<UInt32Type, _>(num_rows, context.config(), |row| {
            let seconds = fields.get(row)?.seconds(calendar, &sentinels);
            Some(clamp_to_u32(seconds))
        });
        Ok(Arc::new(values))
    }
}
