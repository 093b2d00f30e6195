//! `YYYYMMDDhhmmssToDateTime(YYYYMMDDhhmmss[, timezone])` and
//! `YYYYMMDDhhmmssToDateTime64(YYYYMMDDhhmmss[, precision[, timezone]])`.

use std::sync::Arc;

use amudai_common::Result;
use arrow_array::{
    ArrayRef,
    types::{Float64Type, Int64Type, UInt32Type},
};

use crate::args::{
    ColumnarValue, NumericColumn, optional_precision, optional_timezone, verify_arity,
    verify_numeric_args,
};
use crate::bounds::{DateTimeSentinels, clamp_to_u32};
use crate::context::FunctionContext;
use crate::decimal::{decimal_from_components, scale_multiplier};
use crate::function::{DateTimeFunction, ReturnType};
use crate::packed::{PackedDateTime, round_to_i64};
use crate::rows::evaluate_rows;

const ARGUMENT_NAMES: [&str; 1] = ["YYYYMMDDhhmmss"];

fn convert_packed(
    function: &str,
    args: &[ColumnarValue],
    num_rows: usize,
) -> Result<NumericColumn<Float64Type>> {
    let packed = NumericColumn::<Float64Type>::convert(function, ARGUMENT_NAMES[0], &args[0], num_rows)?;
    packed.verify_finite(function, num_rows)?;
    Ok(packed)
}

/// Builds 32-bit datetimes from decimal-packed `YYYYMMDDhhmmss` numbers.
///
/// The packed value is rounded to the nearest integer and split into fields,
/// which saturate and clamp exactly like [`MakeDateTime`](crate::MakeDateTime)
/// fields. A single infinite or `NaN` value fails the whole call.
#[derive(Debug, Clone, Copy, Default)]
pub struct YyyymmddhhmmssToDateTime;

impl YyyymmddhhmmssToDateTime {
    pub const NAME: &'static str = "YYYYMMDDhhmmssToDateTime";
    const TIMEZONE_INDEX: usize = 1;

    fn resolve_timezone(&self, args: &[ColumnarValue]) -> Result<Option<String>> {
        verify_arity(Self::NAME, args, 1..=2)?;
        verify_numeric_args(Self::NAME, args, &ARGUMENT_NAMES)?;
        optional_timezone(Self::NAME, args, Self::TIMEZONE_INDEX)
    }
}

impl DateTimeFunction for YyyymmddhhmmssToDateTime {
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
        let packed = convert_packed(Self::NAME, args, num_rows)?;
        let calendar = context.resolve_calendar(timezone.as_deref())?;
        let sentinels = DateTimeSentinels::new(calendar.as_ref());
        log::trace!(
            "{}: {num_rows} rows in time zone '{}'",
            Self::NAME,
            calendar.time_zone()
        );

        let calendar = calendar.as_ref();
        let values = evaluate_rows::<UInt32Type, _>(num_rows, context.config(), |row| {
            let fields = PackedDateTime::decompose(round_to_i64(packed.get(row)?)).fields();
            Some(clamp_to_u32(fields.seconds(calendar, &sentinels)))
        });
        Ok(Arc::new(values))
    }
}

/// Builds fixed-point datetimes from decimal-packed `YYYYMMDDhhmmss` numbers.
///
/// The whole seconds come from the rounded packed value; the fraction is the
/// rounding residue (`value - round(value)`, which may be negative) scaled by
/// `10^precision` and rounded. The fraction is kept even when the whole
/// seconds saturate to the earliest or latest datetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct YyyymmddhhmmssToDateTime64;

impl YyyymmddhhmmssToDateTime64 {
    pub const NAME: &'static str = "YYYYMMDDhhmmssToDateTime64";
    const PRECISION_INDEX: usize = 1;
    const TIMEZONE_INDEX: usize = 2;

    fn resolve(&self, args: &[ColumnarValue]) -> Result<(u32, Option<String>)> {
        verify_arity(Self::NAME, args, 1..=3)?;
        verify_numeric_args(Self::NAME, args, &ARGUMENT_NAMES)?;
        let precision = optional_precision(Self::NAME, args, Self::PRECISION_INDEX)?;
        let timezone = optional_timezone(Self::NAME, args, Self::TIMEZONE_INDEX)?;
        Ok((precision, timezone))
    }
}

impl DateTimeFunction for YyyymmddhhmmssToDateTime64 {
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
        let packed = convert_packed(Self::NAME, args, num_rows)?;
        let calendar = context.resolve_calendar(timezone.as_deref())?;
        let sentinels = DateTimeSentinels::new(calendar.as_ref());
        let scale = scale_multiplier(precision) as f64;
        log::trace!(
            "{}: {num_rows} rows, precision {precision}, time zone '{}'",
            Self::NAME,
            calendar.time_zone()
        );

        let calendar = calendar.as_ref();
        let values = evaluate_rows::<Int64Type, _>(num_rows, context.config(), |row| {
            let value = packed.get(row)?;
            let rounded = round_to_i64(value);
            let residue = value - rounded as f64;
            let seconds = PackedDateTime::decompose(rounded)
                .fields()
                .seconds(calendar, &sentinels);
            let fraction = round_to_i64(residue * scale);
            Some(decimal_from_components(seconds, fraction, precision))
        });
        Ok(Arc::new(values))
    }
}
