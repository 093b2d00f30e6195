//! The interface shared by every constructor.

use amudai_common::Result;
use arrow_array::ArrayRef;
use arrow_schema::DataType;

use crate::args::ColumnarValue;
use crate::context::FunctionContext;

/// Logical result type of a function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    /// Days since 1970-01-01 as `UInt16`.
    Date,
    /// Days since 1970-01-01 as `Date32`.
    Date32,
    /// Seconds since the epoch as `UInt32`, displayed in `timezone`.
    DateTime { timezone: Option<String> },
    /// Seconds since the epoch scaled by `10^precision`, as `Int64`.
    DateTime64 {
        precision: u32,
        timezone: Option<String>,
    },
}

impl ReturnType {
    /// Physical Arrow type of the result array.
    pub fn data_type(&self) -> DataType {
        match self {
            ReturnType::Date => DataType::UInt16,
            ReturnType::Date32 => DataType::Date32,
            ReturnType::DateTime { .. } => DataType::UInt32,
            ReturnType::DateTime64 { .. } => DataType::Int64,
        }
    }

    pub fn timezone(&self) -> Option<&str> {
        match self {
            ReturnType::Date | ReturnType::Date32 => None,
            ReturnType::DateTime { timezone } | ReturnType::DateTime64 { timezone, .. } => {
                timezone.as_deref()
            }
        }
    }

    pub fn precision(&self) -> Option<u32> {
        match self {
            ReturnType::DateTime64 { precision, .. } => Some(*precision),
            _ => None,
        }
    }
}

/// A vectorized function over Arrow arguments.
///
/// Every call validates its arguments as a whole before evaluating any row;
/// row-level problems never fail a call.
pub trait DateTimeFunction: Send + Sync {
    fn name(&self) -> &'static str;

    /// Result type for the given arguments. Constant arguments (precision,
    /// timezone) are read, so this performs the same argument checks as
    /// [`DateTimeFunction::invoke`].
    fn return_type(&self, args: &[ColumnarValue]) -> Result<ReturnType>;

    /// Evaluates the function over `num_rows` rows.
    ///
    /// Column arguments must have exactly `num_rows` rows; scalars apply to
    /// every row. The result array has `num_rows` rows of type
    /// `self.return_type(args)?.data_type()`.
    fn invoke(
        &self,
        args: &[ColumnarValue],
        num_rows: usize,
        context: &FunctionContext,
    ) -> Result<ArrayRef>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_type() {
        assert_eq!(ReturnType::Date.data_type(), DataType::UInt16);
        assert_eq!(ReturnType::Date32.data_type(), DataType::Date32);

        let datetime = ReturnType::DateTime {
            timezone: Some("Asia/Istanbul".to_string()),
        };
        assert_eq!(datetime.data_type(), DataType::UInt32);
        assert_eq!(datetime.timezone(), Some("Asia/Istanbul"));
        assert_eq!(datetime.precision(), None);

        let datetime64 = ReturnType::DateTime64 {
            precision: 6,
            timezone: None,
        };
        assert_eq!(datetime64.data_type(), DataType::Int64);
        assert_eq!(datetime64.timezone(), None);
        assert_eq!(datetime64.precision(), Some(6));
    }
}
