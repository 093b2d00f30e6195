//! Decimal-packed calendar values: `YYYYMMDD` and `YYYYMMDDhhmmss`.
//!
//! Decomposition uses truncating integer division, so negative or otherwise
//! malformed packed values produce out-of-range fields rather than errors; the
//! constructors' bounds checks then apply.

use crate::bounds::DateTimeFields;

/// Rounds to the nearest integer, ties away from zero, saturating at the
/// `i64` bounds.
#[inline]
pub fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl PackedDate {
    pub fn decompose(yyyymmdd: i64) -> PackedDate {
        PackedDate {
            year: yyyymmdd / 10_000,
            month: yyyymmdd / 100 % 100,
            day: yyyymmdd % 100,
        }
    }

    pub fn compose(&self) -> i64 {
        self.year * 10_000 + self.month * 100 + self.day
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedDateTime {
    pub date: PackedDate,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl PackedDateTime {
    pub fn decompose(yyyymmddhhmmss: i64) -> PackedDateTime {
        let hhmmss = yyyymmddhhmmss % 1_000_000;
        PackedDateTime {
            date: PackedDate::decompose(yyyymmddhhmmss / 1_000_000),
            hour: hhmmss / 10_000,
            minute: hhmmss / 100 % 100,
            second: hhmmss % 100,
        }
    }

    /// The fields as reals, ready for the datetime bounds checks.
    pub fn fields(&self) -> DateTimeFields {
        DateTimeFields {
            year: self.date.year as f64,
            month: self.date.month as f64,
            day: self.date.day as f64,
            hour: self.hour as f64,
            minute: self.minute as f64,
            second: self.second as f64,
        }
    }

    pub fn compose(&self) -> i64 {
        self.date.compose() * 1_000_000 + self.hour * 10_000 + self.minute * 100 + self.second
    }
}
