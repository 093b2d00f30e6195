//! `makeDate(year, month, day)`, `makeDate(year, dayofyear)` and their
//! `makeDate32` counterparts.

use std::marker::PhantomData;
use std::sync::Arc;

use amudai_common::{Result, error::Error};
use arrow_array::{ArrayRef, types::Float32Type};

use crate::args::{ColumnarValue, NumericColumn, verify_numeric_args};
use crate::context::FunctionContext;
use crate::date_family::DateFamily;
use crate::function::{DateTimeFunction, ReturnType};
use crate::rows::evaluate_rows;

/// Argument layout of a `makeDate` call, chosen by the number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateVariant {
    /// `(year, month, day)`
    YearMonthDay,
    /// `(year, dayofyear)`
    YearDayOfYear,
}

impl DateVariant {
    pub fn from_arg_count(function: &str, count: usize) -> Result<DateVariant> {
        match count {
            3 => Ok(DateVariant::YearMonthDay),
            2 => Ok(DateVariant::YearDayOfYear),
            _ => Err(Error::arity(function, "2 or 3", count)),
        }
    }

    pub fn argument_names(&self) -> &'static [&'static str] {
        match self {
            DateVariant::YearMonthDay => &["year", "month", "day"],
            DateVariant::YearDayOfYear => &["year", "dayofyear"],
        }
    }
}

/// Builds dates from calendar fields.
///
/// Fields are read as `Float32` and truncated. Rows with a field out of range,
/// or a date past the family's last day, produce day `0` (1970-01-01).
pub struct MakeDate<F: DateFamily> {
    _family: PhantomData<F>,
}

impl<F: DateFamily> MakeDate<F> {
    pub fn new() -> Self {
        MakeDate {
            _family: PhantomData,
        }
    }

    fn resolve_variant(&self, args: &[ColumnarValue]) -> Result<DateVariant> {
        let variant = DateVariant::from_arg_count(F::MAKE_DATE_NAME, args.len())?;
        verify_numeric_args(F::MAKE_DATE_NAME, args, variant.argument_names())?;
        Ok(variant)
    }
}

impl<F: DateFamily> Default for MakeDate<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: DateFamily> DateTimeFunction for MakeDate<F> {
    fn name(&self) -> &'static str {
        F::MAKE_DATE_NAME
    }

    fn return_type(&self, args: &[ColumnarValue]) -> Result<ReturnType> {
        self.resolve_variant(args)?;
        Ok(F::return_type())
    }

    fn invoke(
        &self,
        args: &[ColumnarValue],
        num_rows: usize,
        context: &FunctionContext,
    ) -> Result<ArrayRef> {
        let variant = self.resolve_variant(args)?;
        let names = variant.argument_names();
        let field = |index: usize| {
            NumericColumn::<Float32Type>::convert(F::MAKE_DATE_NAME, names[index], &args[index], num_rows)
        };

        let calendar = context.resolve_calendar(None)?;
        let max_day_num = F::max_day_num(calendar.as_ref());
        log::trace!(
            "{}: {variant:?} over {num_rows} rows, last day {max_day_num}",
            F::MAKE_DATE_NAME
        );

        let calendar = calendar.as_ref();
        let values = match variant {
            DateVariant::YearMonthDay => {
                let (year, month, day) = (field(0)?, field(1)?, field(2)?);
                evaluate_rows::<F::Output, _>(num_rows, context.config(), |row| {
                    let (year, month, day) = (year.get(row)?, month.get(row)?, day.get(row)?);
                    Some(F::from_day_num(F::day_num(calendar, max_day_num, year, month, day)))
                })
            }
            DateVariant::YearDayOfYear => {
                let (year, day_of_year) = (field(0)?, field(1)?);
                evaluate_rows::<F::Output, _>(num_rows, context.config(), |row| {
                    let (year, day_of_year) = (year.get(row)?, day_of_year.get(row)?);
                    let day_num = F::day_num_of_year(calendar, max_day_num, year, day_of_year);
                    Some(F::from_day_num(day_num))
                })
            }
        };
        Ok(Arc::new(values))
    }
}
