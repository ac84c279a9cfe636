//! Proleptic Gregorian dates and their linear day count.
//!
//! Day 0 is 1900-01-01. No Julian/Gregorian cutover is modelled.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::LinearDay;
use crate::error::CalendarError;

/// Days counted by [`to_linear`]'s raw formula for 1900-01-01.
pub const EPOCH_OFFSET: i64 = 693_961;

const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Mean Gregorian year, for estimating the year of a linear day.
const MEAN_YEAR_DAYS: f64 = 365.2425;

/// A civil calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    /// Unchecked constructor.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Constructor that rejects impossible months and days.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let last = days_in_month(year, month)?;
        if day == 0 || day > last {
            return Err(CalendarError::InvalidGregorianDay { year, month, day });
        }
        Ok(Self::new(year, month, day))
    }

    /// Linear day count (days since 1900-01-01).
    pub fn to_linear(self) -> Result<LinearDay, CalendarError> {
        to_linear(self)
    }

    /// Civil date of a linear day count.
    pub fn from_linear(days: LinearDay) -> Result<Self, CalendarError> {
        from_linear(days)
    }
}

impl Display for GregorianDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(CalendarError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        }
        let year = parts[0]
            .parse::<i32>()
            .map_err(|e| CalendarError::Parse(format!("year {:?}: {e}", parts[0])))?;
        let month = parts[1]
            .parse::<u32>()
            .map_err(|e| CalendarError::Parse(format!("month {:?}: {e}", parts[1])))?;
        let day = parts[2]
            .parse::<u32>()
            .map_err(|e| CalendarError::Parse(format!("day {:?}: {e}", parts[2])))?;
        Self::try_new(year, month, day)
    }
}

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidGregorianMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(MONTH_DAYS[month as usize - 1])
    }
}

/// Leap days before the given month, counting the current year only
/// from March onwards.
fn leap_years_before(year: i64, month: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

fn linear_unchecked(year: i64, month: u32, day: u32) -> LinearDay {
    let before: u32 = MONTH_DAYS[..month as usize - 1].iter().sum();
    year * 365 + i64::from(day) + i64::from(before) + leap_years_before(year, month)
        - EPOCH_OFFSET
}

/// Linear day count of a civil date.
pub fn to_linear(date: GregorianDate) -> Result<LinearDay, CalendarError> {
    let date = GregorianDate::try_new(date.year, date.month, date.day)?;
    Ok(linear_unchecked(i64::from(date.year), date.month, date.day))
}

/// Civil date of a linear day count.
///
/// Days whose year does not fit in `i32` are [`CalendarError::OutOfRange`].
pub fn from_linear(days: LinearDay) -> Result<GregorianDate, CalendarError> {
    let lowest = i64::from(i32::MIN);
    let highest = i64::from(i32::MAX);
    if days < linear_unchecked(lowest, 1, 1) || days > linear_unchecked(highest, 12, 31) {
        return Err(CalendarError::OutOfRange(days));
    }
    let estimate = 1900 + (days as f64 / MEAN_YEAR_DAYS).floor() as i64;
    let mut year = estimate.clamp(lowest, highest);
    while days < linear_unchecked(year, 1, 1) {
        year -= 1;
    }
    while year < highest && days >= linear_unchecked(year + 1, 1, 1) {
        year += 1;
    }
    let year = i32::try_from(year).map_err(|_| CalendarError::OutOfRange(days))?;
    let mut remaining = days - linear_unchecked(i64::from(year), 1, 1);
    let mut month = 1;
    loop {
        let length = if month == 2 && is_leap_year(year) {
            29
        } else {
            MONTH_DAYS[month as usize - 1]
        };
        if month == 12 || remaining < i64::from(length) {
            break;
        }
        remaining -= i64::from(length);
        month += 1;
    }
    Ok(GregorianDate::new(year, month, remaining as u32 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(to_linear(GregorianDate::new(1900, 1, 1)), Ok(0));
    }

    #[test]
    fn known_days() {
        assert_eq!(to_linear(GregorianDate::new(2003, 9, 26)), Ok(37888));
        assert_eq!(to_linear(GregorianDate::new(1970, 1, 1)), Ok(25567));
        assert_eq!(to_linear(GregorianDate::new(2000, 1, 1)), Ok(36524));
        assert_eq!(to_linear(GregorianDate::new(1899, 12, 31)), Ok(-1));
    }

    #[test]
    fn leap_day_counts() {
        let feb28 = to_linear(GregorianDate::new(2000, 2, 28)).unwrap();
        let mar1 = to_linear(GregorianDate::new(2000, 3, 1)).unwrap();
        assert_eq!(mar1 - feb28, 2);
        let feb28 = to_linear(GregorianDate::new(1900, 2, 28)).unwrap();
        let mar1 = to_linear(GregorianDate::new(1900, 3, 1)).unwrap();
        assert_eq!(mar1 - feb28, 1);
    }

    #[test]
    fn invalid_dates_rejected() {
        assert_eq!(
            to_linear(GregorianDate::new(2023, 13, 1)),
            Err(CalendarError::InvalidGregorianMonth { month: 13 })
        );
        assert_eq!(
            to_linear(GregorianDate::new(2023, 2, 29)),
            Err(CalendarError::InvalidGregorianDay {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(GregorianDate::try_new(2024, 4, 0).is_err());
    }

    #[test]
    fn from_linear_inverts() {
        for days in (-800_000..800_000_i64).step_by(37) {
            let date = from_linear(days).unwrap();
            assert_eq!(to_linear(date), Ok(days), "{date}");
        }
    }

    #[test]
    fn from_linear_year_boundaries() {
        assert_eq!(from_linear(0), Ok(GregorianDate::new(1900, 1, 1)));
        assert_eq!(from_linear(-1), Ok(GregorianDate::new(1899, 12, 31)));
        assert_eq!(from_linear(36524), Ok(GregorianDate::new(2000, 1, 1)));
        assert_eq!(from_linear(36523), Ok(GregorianDate::new(1999, 12, 31)));
    }

    #[test]
    fn extreme_years() {
        for date in [
            GregorianDate::new(i32::MIN, 1, 1),
            GregorianDate::new(i32::MAX, 12, 31),
            GregorianDate::new(i32::MAX, 2, 28),
        ] {
            let days = to_linear(date).unwrap();
            assert_eq!(from_linear(days), Ok(date));
        }
    }

    #[test]
    fn days_beyond_year_range_rejected() {
        let last = to_linear(GregorianDate::new(i32::MAX, 12, 31)).unwrap();
        assert_eq!(from_linear(last + 1), Err(CalendarError::OutOfRange(last + 1)));
        assert_eq!(from_linear(i64::MAX), Err(CalendarError::OutOfRange(i64::MAX)));
        assert_eq!(from_linear(i64::MIN), Err(CalendarError::OutOfRange(i64::MIN)));
    }

    #[test]
    fn parse_and_display() {
        let d: GregorianDate = "2003-09-26".parse().unwrap();
        assert_eq!(d, GregorianDate::new(2003, 9, 26));
        assert_eq!(d.to_string(), "2003-09-26");
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "2003/09/26".parse::<GregorianDate>(),
            Err(CalendarError::Parse(_))
        ));
        assert!(matches!(
            "2003-xx-26".parse::<GregorianDate>(),
            Err(CalendarError::Parse(_))
        ));
        assert!(matches!(
            "2003-02-30".parse::<GregorianDate>(),
            Err(CalendarError::InvalidGregorianDay { .. })
        ));
    }
}
