//! Hebrew dates and their mapping to the linear day count.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use tracing::{debug, trace};

use crate::LinearDay;
use crate::error::CalendarError;
use crate::leap::months_in_year;
use crate::molad::{elapsed_days, tishrei_day};
use crate::month::{check_month, month_length, month_name, year_order};

/// Internal day number of 1900-01-01 (linear day 0).
pub const EPOCH_OFFSET: i64 = 2_067_024;

/// Mean Hebrew year: 235 mean months per 19 years.
const MEAN_YEAR_DAYS: f64 = 35_975_351.0 / 98_496.0;
/// Hebrew year estimated for linear day 0 (1 Tishrei 5661 is 1900-09-24).
const ESTIMATE_BASE_YEAR: i64 = 5661;
/// Maximum single-year steps when correcting the estimate.
const YEAR_SEARCH_BUDGET: u32 = 64;

/// A date in the Hebrew calendar.
///
/// Months use civil-anchored numbering: Tishrei = 7 .. Adar II = 13,
/// then Nisan = 1 .. Elul = 6. See [`crate::month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HebrewDate {
    /// Unchecked constructor.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Constructor that rejects months and days the year does not have.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    /// Check the month against the year and the day against the month.
    pub fn validate(&self) -> Result<(), CalendarError> {
        check_month(self.year, self.month)?;
        let last = month_length(self.year, self.month)?;
        if self.day == 0 || self.day > last {
            return Err(CalendarError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }

    /// Linear day count (days since 1900-01-01).
    pub fn to_linear(self) -> Result<LinearDay, CalendarError> {
        to_linear(self)
    }

    /// Hebrew date of a linear day count.
    pub fn from_linear(days: LinearDay) -> Result<Self, CalendarError> {
        from_linear(days)
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, year_order(self.month), self.day).cmp(&(
            other.year,
            year_order(other.month),
            other.day,
        ))
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for HebrewDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = month_name(self.year, self.month).unwrap_or("Error");
        write!(f, "{} {} {}", self.day, name, self.year)
    }
}

/// Linear day of 1 Tishrei of `year`.
pub fn new_year(year: i32) -> LinearDay {
    elapsed_days(year) - EPOCH_OFFSET
}

/// Days from 1 Tishrei to the first day of `month`, walking the year
/// from Tishrei. `month` must already be valid for `year`.
fn days_before_month(year: i32, month: u32) -> Result<i64, CalendarError> {
    let mut days = 0;
    if month < 7 {
        for m in 7..=months_in_year(year) {
            days += i64::from(month_length(year, m)?);
        }
        for m in 1..month {
            days += i64::from(month_length(year, m)?);
        }
    } else {
        for m in 7..month {
            days += i64::from(month_length(year, m)?);
        }
    }
    Ok(days)
}

/// Linear day count of a Hebrew date.
pub fn to_linear(date: HebrewDate) -> Result<LinearDay, CalendarError> {
    date.validate()?;
    let start = new_year(date.year);
    Ok(start + days_before_month(date.year, date.month)? + i64::from(date.day) - 1)
}

/// Linear day of 1 Tishrei for any `i64` year.
fn start_of(year: i64) -> LinearDay {
    tishrei_day(year) - EPOCH_OFFSET
}

/// Hebrew year containing linear day `days`.
fn year_of(days: LinearDay) -> Result<i32, CalendarError> {
    let lowest = i64::from(i32::MIN);
    let highest = i64::from(i32::MAX);
    if days < start_of(lowest) || days >= start_of(highest + 1) {
        return Err(CalendarError::OutOfRange(days));
    }
    let estimate = (days as f64 / MEAN_YEAR_DAYS) as i64 + ESTIMATE_BASE_YEAR;
    trace!(days, estimate, "estimated hebrew year");
    walk_to_year(days, estimate.clamp(lowest, highest))
}

/// Step from `year` one year at a time until it contains `days`.
///
/// `days` must lie within the `i32` years; the walk then never leaves them.
fn walk_to_year(days: LinearDay, mut year: i64) -> Result<i32, CalendarError> {
    for _ in 0..YEAR_SEARCH_BUDGET {
        if days < start_of(year) {
            year -= 1;
        } else if days >= start_of(year + 1) {
            year += 1;
        } else {
            return i32::try_from(year).map_err(|_| CalendarError::NoConvergence(days));
        }
        debug!(days, year, "stepping hebrew year search");
    }
    Err(CalendarError::NoConvergence(days))
}

/// Hebrew date of a linear day count.
pub fn from_linear(days: LinearDay) -> Result<HebrewDate, CalendarError> {
    let year = year_of(days)?;
    let mut remaining = days - new_year(year);
    for month in (7..=months_in_year(year)).chain(1..7) {
        let length = i64::from(month_length(year, month)?);
        if remaining < length {
            return Ok(HebrewDate::new(year, month, remaining as u32 + 1));
        }
        remaining -= length;
    }
    Err(CalendarError::NoConvergence(days))
}
