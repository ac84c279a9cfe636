//! Year length and the variable months Heshvan and Kislev.

use crate::molad::tishrei_day;

/// Year-length class, from the last digit of the day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearLength {
    /// 353 or 383 days: Kislev has 29 days.
    Deficient,
    /// 354 or 384 days.
    Regular,
    /// 355 or 385 days: Heshvan has 30 days.
    Complete,
}

impl YearLength {
    pub fn name(self) -> &'static str {
        match self {
            Self::Deficient => "deficient",
            Self::Regular => "regular",
            Self::Complete => "complete",
        }
    }
}

/// Days from 1 Tishrei of `year` to 1 Tishrei of the next year.
///
/// Always one of 353, 354, 355 (common) or 383, 384, 385 (leap).
pub fn days_in_year(year: i32) -> i64 {
    let year = i64::from(year);
    tishrei_day(year + 1) - tishrei_day(year)
}

/// Whether Heshvan has 30 days in `year`.
pub fn long_heshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// Whether Kislev has 29 days in `year`.
pub fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// Classify a year as deficient, regular or complete.
pub fn year_length(year: i32) -> YearLength {
    match days_in_year(year) % 10 {
        3 => YearLength::Deficient,
        5 => YearLength::Complete,
        _ => YearLength::Regular,
    }
}
