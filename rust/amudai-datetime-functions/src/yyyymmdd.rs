//! `YYYYMMDDToDate(YYYYMMDD)` and `YYYYMMDDToDate32(YYYYMMDD)`.

use std::marker::PhantomData;
use std::sync::Arc;

use amudai_common::Result;
use arrow_array::{ArrayRef, types::Float64Type};

use crate::args::{ColumnarValue, NumericColumn, verify_arity, verify_numeric_args};
use crate::context::FunctionContext;
use crate::date_family::DateFamily;
use crate::function::{DateTimeFunction, ReturnType};
use crate::packed::{PackedDate, round_to_i64};
use crate::rows::evaluate_rows;

const ARGUMENT_NAMES: [&str; 1] = ["YYYYMMDD"];

/// Builds dates from decimal-packed `YYYYMMDD` numbers.
///
/// The packed value is rounded to the nearest integer and split into fields,
/// which then saturate exactly like [`MakeDate`](crate::MakeDate) fields. A
/// single infinite or `NaN` value fails the whole call.
pub struct YyyymmddToDate<F: DateFamily> {
    _family: PhantomData<F>,
}

impl<F: DateFamily> YyyymmddToDate<F> {
    pub fn new() -> Self {
        YyyymmddToDate {
            _family: PhantomData,
        }
    }

    fn verify_args(&self, args: &[ColumnarValue]) -> Result<()> {
        verify_arity(F::YYYYMMDD_NAME, args, 1..=1)?;
        verify_numeric_args(F::YYYYMMDD_NAME, args, &ARGUMENT_NAMES)
    }
}

impl<F: DateFamily> Default for YyyymmddToDate<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: DateFamily> DateTimeFunction for YyyymmddToDate<F> {
    fn name(&self) -> &'static str {
        F::YYYYMMDD_NAME
    }

    fn return_type(&self, args: &[ColumnarValue]) -> Result<ReturnType> {
        self.verify_args(args)?;
        Ok(F::return_type())
    }

    fn invoke(
        &self,
        args: &[ColumnarValue],
        num_rows: usize,
        context: &FunctionContext,
    ) -> Result<ArrayRef> {
        self.verify_args(args)?;
        let packed =
            NumericColumn::<Float64Type>::convert(F::YYYYMMDD_NAME, ARGUMENT_NAMES[0], &args[0], num_rows)?;
        packed.verify_finite(F::YYYYMMDD_NAME, num_rows)?;

        let calendar = context.resolve_calendar(None)?;
        let max_day_num = F::max_day_num(calendar.as_ref());
        log::trace!("{}: {num_rows} rows", F::YYYYMMDD_NAME);

        let calendar = calendar.as_ref();
        let values = evaluate_rows::<F::Output, _>(num_rows, context.config(), |row| {
            let date = PackedDate::decompose(round_to_i64(packed.get(row)?));
            let day_num = F::day_num(calendar, max_day_num, date.year, date.month, date.day);
            Some(F::from_day_num(day_num))
        });
        Ok(Arc::new(values))
    }
}

#[cfg(test)]
mod tests {
    use amudai_common::error::ErrorKind;
    use arrow_array::{
        Date32Array, Float64Array, Int64Array, UInt16Array, cast::AsArray,
        types::{Date32Type, UInt16Type},
    };

    use super::*;
    use crate::date_family::{Date, Date32};

    #[test]
    fn test_yyyymmdd_to_date() {
        let args = [ColumnarValue::Array(Arc::new(Float64Array::from(vec![
            20230911.0,
            20230911.4,
            20230910.5,
            20231301.0,
            19691231.0,
            21490606.0,
            -20230911.0,
        ])))];
        let result = YyyymmddToDate::<Date>::new()
            .invoke(&args, 7, &FunctionContext::default())
            .unwrap();
        assert_eq!(
            result.as_primitive::<UInt16Type>(),
            &UInt16Array::from(vec![19611, 19611, 19611, 0, 0, 65535, 0])
        );
    }

    #[test]
    fn test_yyyymmdd_to_date32() {
        let args = [ColumnarValue::Array(Arc::new(Int64Array::from(vec![
            Some(19000101),
            Some(22991231),
            Some(23000101),
            None,
        ])))];
        let result = YyyymmddToDate::<Date32>::new()
            .invoke(&args, 4, &FunctionContext::default())
            .unwrap();
        assert_eq!(
            result.as_primitive::<Date32Type>(),
            &Date32Array::from(vec![Some(-25567), Some(120529), Some(0), None])
        );
    }

    #[test]
    fn test_non_finite_fails_call() {
        let function = YyyymmddToDate::<Date32>::new();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let args = [ColumnarValue::Array(Arc::new(Float64Array::from(vec![
                20230911.0, value,
            ])))];
            let err = function
                .invoke(&args, 2, &FunctionContext::default())
                .unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::BadArguments { .. }));
        }
    }

    #[test]
    fn test_arity() {
        let function = YyyymmddToDate::<Date>::new();
        assert!(function.return_type(&[]).is_err());
        let value = ColumnarValue::Scalar(Arc::new(Int64Array::from(vec![20230911])));
        assert_eq!(function.return_type(&[value.clone()]).unwrap(), ReturnType::Date);
        assert!(function.return_type(&[value.clone(), value]).is_err());
        assert_eq!(function.name(), "YYYYMMDDToDate");
    }
}
