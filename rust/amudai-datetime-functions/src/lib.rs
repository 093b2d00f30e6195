//! Vectorized construction of calendar values from numeric columns.
//!
//! Each function turns a batch of Arrow arrays holding calendar fields
//! (year, month, day, hour, minute, second, fraction) or decimal-packed
//! timestamps (`YYYYMMDD`, `YYYYMMDDhhmmss`) into one output array of day
//! numbers, seconds since the epoch, or fixed-point sub-second timestamps:
//!
//! | Function | Output |
//! |---|---|
//! | `makeDate`, `YYYYMMDDToDate` | `UInt16` days since 1970-01-01 |
//! | `makeDate32`, `YYYYMMDDToDate32` | `Date32` |
//! | `makeDateTime`, `YYYYMMDDhhmmssToDateTime` | `UInt32` seconds since the epoch |
//! | `makeDateTime64`, `YYYYMMDDhhmmssToDateTime64` | `Int64` seconds scaled by `10^precision` |
//!
//! Malformed fields never fail a call: they saturate to a per-type sentinel.
//! Only malformed constant arguments and non-finite packed values are errors.

pub mod args;
pub mod bounds;
pub mod config;
pub mod context;
pub mod date_family;
pub mod decimal;
pub mod function;
pub mod make_date;
pub mod make_datetime;
pub mod make_datetime64;
pub mod packed;
pub mod yyyymmdd;
pub mod yyyymmddhhmmss;

mod rows;

pub use args::ColumnarValue;
pub use config::FunctionsConfig;
pub use context::FunctionContext;
pub use date_family::{Date, Date32, DateFamily};
pub use function::{DateTimeFunction, ReturnType};
pub use make_date::{DateVariant, MakeDate};
pub use make_datetime::MakeDateTime;
pub use make_datetime64::MakeDateTime64;
pub use yyyymmdd::YyyymmddToDate;
pub use yyyymmddhhmmss::{YyyymmddhhmmssToDateTime, YyyymmddhhmmssToDateTime64};
