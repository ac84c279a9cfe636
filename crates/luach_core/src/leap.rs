//! Leap years of the 19-year Metonic cycle.
//!
//! Years 3, 6, 8, 11, 14, 17 and 19 of each cycle carry a thirteenth
//! month (Adar II).

/// Length of the Metonic cycle in years.
pub const CYCLE_YEARS: i32 = 19;

/// Whether a Hebrew year is a leap year (13 months).
///
/// `((7 * year + 1) mod 19) < 7`, total over all years.
pub fn is_leap_year(year: i32) -> bool {
    is_leap(i64::from(year))
}

pub(crate) fn is_leap(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

/// Number of months in a Hebrew year: 13 if leap, otherwise 12.
pub fn months_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// 1-based position of the year within its 19-year cycle (1..=19).
pub fn cycle_position(year: i32) -> u32 {
    ((i64::from(year) - 1).rem_euclid(i64::from(CYCLE_YEARS)) + 1) as u32
}
