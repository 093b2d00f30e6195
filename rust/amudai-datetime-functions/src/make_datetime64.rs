//! `makeDateTime64(year, month, day, hour, minute, second[, fraction[, precision[, timezone]]])`.

use std::sync::Arc;

use amudai_common::Result;
use arrow_array::{
    ArrayRef,
    types::{Float64Type, Int64Type},
};

use crate::args::{
    ColumnarValue, NumericColumn, optional_precision, optional_timezone, verify_arity,
    verify_numeric, verify_numeric_args,
};
use crate::bounds::{DateTimeSentinels, clamp_fraction};
use crate::context::FunctionContext;
use crate::decimal::{MAX_SENTINEL_FRACTION, decimal_from_components, max_fraction};
use crate::function::{DateTimeFunction, ReturnType};
use crate::make_datetime::{DateTimeFieldColumns, FIELD_NAMES};
use crate::rows::evaluate_rows;

/// Builds fixed-point datetimes from calendar fields and a sub-second fraction
/// expressed in units of `10^-precision` seconds.
///
/// Rows saturated to the earliest datetime get fraction `0`; rows saturated to
/// the latest get the largest fraction of the precision. Otherwise a `NaN`
/// fraction saturates the row to the earliest datetime, and other fractions are
/// clamped into `[0, 10^precision - 1]` and truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeDateTime64;

impl MakeDateTime64 {
    pub const NAME: &'static str = "makeDateTime64";
    const FRACTION_INDEX: usize = 6;
    const PRECISION_INDEX: usize = 7;
    const TIMEZONE_INDEX: usize = 8;

    fn resolve(&self, args: &[ColumnarValue]) -> Result<(u32, Option<String>)> {
        verify_arity(Self::NAME, args, 6..=9)?;
        verify_numeric_args(Self::NAME, args, &FIELD_NAMES)?;
        if let Some(fraction) = args.get(Self::FRACTION_INDEX) {
            verify_numeric(Self::NAME, "fraction", fraction)?;
        }
        let precision = optional_precision(Self::NAME, args, Self::PRECISION_INDEX)?;
        let timezone = optional_timezone(Self::NAME, args, Self::TIMEZONE_INDEX)?;
        Ok((precision, timezone))
    }
}

/// Combines a row's whole seconds with its requested fraction.
fn compose(seconds: i64, fraction: f64, sentinels: &DateTimeSentinels, precision: u32) -> i64 {
    let (seconds, fraction) = if seconds == sentinels.min {
        (seconds, 0)
    } else if seconds == sentinels.max {
        (seconds, MAX_SENTINEL_FRACTION)
    } else {
        match clamp_fraction(fraction, max_fraction(precision) as f64) {
            Some(fraction) => (seconds, fraction as i64),
            None => (sentinels.min, 0),
        }
    };
    decimal_from_components(seconds, fraction, precision)
}

impl DateTimeFunction for MakeDateTime64 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn return_type(&self, args: &[ColumnarValue]) -> Result<ReturnType> {
        let (precision, timezone) = self.resolve(args)?;
        Ok(ReturnType::DateTime64 {
            precision,
            timezone,
        })
    }

    fn invoke(
        &self,
        args: &[ColumnarValue],
        num_rows: usize,
        context: &FunctionContext,
    ) -> Result<ArrayRef> {
        let (precision, timezone) = self.resolve(args)?;
        let fields = DateTimeFieldColumns::convert(Self::NAME, args, num_rows)?;
        let fraction = args
            .get(Self::FRACTION_INDEX)
            .map(|value| NumericColumn::<Float64Type>::convert(Self::NAME, "fraction", value, num_rows))
            .transpose()?;

        let calendar = context.resolve_calendar(timezone.as_deref())?;
        let sentinels = DateTimeSentinels::new(calendar.as_ref());
        log::trace!(
            "{}: {num_rows} rows, precision {precision}, time zone '{}'",
            Self::NAME,
            calendar.time_zone()
        );

        let calendar = calendar.as_ref();
        let values = evaluate_rows::<Int64Type, _>(num_rows, context.config(), |row| {
            let seconds = fields.get(row)?.seconds(calendar, &sentinels);
            let fraction = match &fraction {
                Some(fraction) => fraction.get(row)?,
                None => 0.0,
            };
            Some(compose(seconds, fraction, &sentinels, precision))
        });
        Ok(Arc::new(values))
    }
}
