//! Function arguments: constant detection, numeric conversion and extraction
//! of constant scalar parameters.

use std::ops::RangeInclusive;

use amudai_common::{Result, error::Error};
use arrow_array::{
    Array, ArrayRef, ArrowPrimitiveType, PrimitiveArray,
    cast::AsArray,
    types::{Float64Type, Int64Type},
};
use arrow_schema::DataType;

use crate::decimal::{DEFAULT_PRECISION, MAX_PRECISION};

/// A function argument: either a column with one value per row, or a constant
/// represented by a single-row array.
#[derive(Debug, Clone)]
pub enum ColumnarValue {
    Array(ArrayRef),
    Scalar(ArrayRef),
}

impl ColumnarValue {
    pub fn array(&self) -> &ArrayRef {
        match self {
            ColumnarValue::Array(array) | ColumnarValue::Scalar(array) => array,
        }
    }

    pub fn data_type(&self) -> &DataType {
        self.array().data_type()
    }

    /// Returns `true` for scalars and for single-row arrays.
    pub fn is_constant(&self) -> bool {
        self.array().len() == 1
    }
}

/// A numeric argument converted to the primitive type `T`, readable by row
/// regardless of whether it was supplied as a column or a constant.
pub(crate) struct NumericColumn<T: ArrowPrimitiveType> {
    values: PrimitiveArray<T>,
    constant: bool,
}

impl<T: ArrowPrimitiveType> NumericColumn<T> {
    /// Converts `value` to `T`.
    ///
    /// # Errors
    /// - `IllegalTypeOfArgument` if the argument is not numeric.
    /// - `BadArguments` if a column does not have exactly `num_rows` rows, or a
    ///   scalar does not have exactly one.
    pub fn convert(
        function: &str,
        argument: &str,
        value: &ColumnarValue,
        num_rows: usize,
    ) -> Result<Self> {
        verify_numeric(function, argument, value)?;
        let (array, constant) = match value {
            ColumnarValue::Array(array) => (array, false),
            ColumnarValue::Scalar(array) => (array, true),
        };
        let expected_len = if constant { 1 } else { num_rows };
        if array.len() != expected_len {
            return Err(Error::bad_arguments(
                function,
                format!(
                    "argument '{argument}' has {} rows, expected {expected_len}",
                    array.len()
                ),
            ));
        }

        let converted = arrow_cast::cast(array, &T::DATA_TYPE).map_err(|e| {
            Error::arrow(format!("{function}: converting argument '{argument}'"), e)
        })?;
        Ok(NumericColumn {
            values: converted.as_primitive::<T>().clone(),
            constant,
        })
    }

    #[inline]
    pub fn get(&self, row: usize) -> Option<T::Native> {
        let index = if self.constant { 0 } else { row };
        self.values
            .is_valid(index)
            .then(|| self.values.value(index))
    }
}

impl NumericColumn<Float64Type> {
    /// Fails the whole call if any non-null value among the first `num_rows`
    /// rows is infinite or `NaN`.
    pub fn verify_finite(&self, function: &str, num_rows: usize) -> Result<()> {
        let rows = if self.constant { num_rows.min(1) } else { num_rows };
        let all_finite = (0..rows).all(|row| self.get(row).is_none_or(f64::is_finite));
        if all_finite {
            Ok(())
        } else {
            Err(Error::bad_arguments(function, "argument must be finite"))
        }
    }
}

pub(crate) fn verify_numeric(function: &str, argument: &str, value: &ColumnarValue) -> Result<()> {
    if value.data_type().is_numeric() {
        Ok(())
    } else {
        Err(Error::illegal_type(function, argument, "a number"))
    }
}

/// Checks that each of the leading `names.len()` arguments is numeric.
pub(crate) fn verify_numeric_args(
    function: &str,
    args: &[ColumnarValue],
    names: &[&str],
) -> Result<()> {
    names
        .iter()
        .zip(args)
        .try_for_each(|(name, value)| verify_numeric(function, name, value))
}

pub(crate) fn verify_arity(
    function: &str,
    args: &[ColumnarValue],
    arity: RangeInclusive<usize>,
) -> Result<()> {
    if arity.contains(&args.len()) {
        return Ok(());
    }
    let expected = if arity.start() == arity.end() {
        arity.start().to_string()
    } else {
        format!("{} to {}", arity.start(), arity.end())
    };
    Err(Error::arity(function, expected, args.len()))
}

/// Reads the constant `timezone` argument. An empty name is returned as `None`
/// (the default time zone).
///
/// # Errors
/// `IllegalTypeOfArgument` unless the argument is a non-null constant string.
pub(crate) fn extract_timezone(function: &str, value: &ColumnarValue) -> Result<Option<String>> {
    let illegal = || Error::illegal_type(function, "timezone", "const string");
    if !value.is_constant() || value.array().is_null(0) {
        return Err(illegal());
    }
    let array = value.array();
    let timezone = match array.data_type() {
        DataType::Utf8 => array.as_string::<i32>().value(0),
        DataType::LargeUtf8 => array.as_string::<i64>().value(0),
        DataType::Utf8View => array.as_string_view().value(0),
        _ => return Err(illegal()),
    };
    Ok((!timezone.is_empty()).then(|| timezone.to_string()))
}

/// Reads the constant `precision` argument.
///
/// # Errors
/// - `IllegalTypeOfArgument` unless the argument is a non-null constant number.
/// - `ArgumentOutOfBound` if the value is outside `[0, 9]`.
pub(crate) fn extract_precision(function: &str, value: &ColumnarValue) -> Result<u32> {
    let illegal = || Error::illegal_type(function, "precision", "constant number");
    if !value.data_type().is_numeric() || !value.is_constant() || value.array().is_null(0) {
        return Err(illegal());
    }
    let converted = arrow_cast::cast(value.array(), &DataType::Int64)
        .map_err(|e| Error::arrow(format!("{function}: converting argument 'precision'"), e))?;
    let precision = converted.as_primitive::<Int64Type>();
    if precision.is_null(0) {
        return Err(illegal());
    }
    u32::try_from(precision.value(0))
        .ok()
        .filter(|precision| *precision <= MAX_PRECISION)
        .ok_or_else(|| {
            Error::argument_out_of_bound(
                function,
                "precision",
                format!("must be in range [0, {MAX_PRECISION}]"),
            )
        })
}

/// Reads the optional timezone argument at `index`; `None` when absent or empty.
pub(crate) fn optional_timezone(
    function: &str,
    args: &[ColumnarValue],
    index: usize,
) -> Result<Option<String>> {
    match args.get(index) {
        Some(value) => extract_timezone(function, value),
        None => Ok(None),
    }
}

/// Reads the optional precision argument at `index`, defaulting to
/// [`DEFAULT_PRECISION`].
pub(crate) fn optional_precision(function: &str, args: &[ColumnarValue], index: usize) -> Result<u32> {
    match args.get(index) {
        Some(value) => extract_precision(function, value),
        None => Ok(DEFAULT_PRECISION),
    }
}
