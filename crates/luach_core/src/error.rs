//! Error types for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::LinearDay;

/// Errors from Hebrew or Gregorian date validation and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Hebrew month outside 1..=13, or Adar II (13) in a common year.
    InvalidMonth { year: i32, month: u32 },
    /// Hebrew day outside 1..=length of the month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Gregorian month outside 1..=12.
    InvalidGregorianMonth { month: u32 },
    /// Gregorian day outside 1..=length of the month.
    InvalidGregorianDay { year: i32, month: u32, day: u32 },
    /// Malformed `YYYY-MM-DD` string.
    Parse(String),
    /// Linear day outside the years representable by the date types.
    OutOfRange(LinearDay),
    /// Year search for a linear day exhausted its step budget.
    NoConvergence(LinearDay),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid Hebrew month {month} in year {year}")
            }
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day {day} for Hebrew month {month} of year {year}")
            }
            Self::InvalidGregorianMonth { month } => {
                write!(f, "invalid Gregorian month {month}")
            }
            Self::InvalidGregorianDay { year, month, day } => {
                write!(f, "invalid day {day} for {year:04}-{month:02}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::OutOfRange(days) => write!(f, "day {days} is outside the supported range"),
            Self::NoConvergence(days) => {
                write!(f, "no convergence: no Hebrew year found for day {days}")
            }
        }
    }
}

impl Error for CalendarError {}
