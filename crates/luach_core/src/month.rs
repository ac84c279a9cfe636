//! Hebrew months, their names and lengths.
//!
//! Months are numbered in civil-anchored order: Nisan = 1 .. Elul = 6,
//! Tishrei = 7 .. Adar = 12, and Adar II = 13 in leap years. The year
//! itself runs from Tishrei (7) through Elul (6).

use crate::error::CalendarError;
use crate::leap::{is_leap_year, months_in_year};
use crate::year::{long_heshvan, short_kislev};

/// A Hebrew month. In leap years [`HebrewMonth::Adar`] is Adar I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HebrewMonth {
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
    Tishrei,
    Heshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarII,
}

/// All months in the order a leap year runs (Tishrei first).
pub const ALL_HEBREW_MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Heshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::AdarII,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

/// Month names indexed by month number. Index 0 is the error sentinel.
pub static MONTH_NAMES: [&str; 14] = [
    "Error", "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev",
    "Tevet", "Shevat", "Adar", "Adar II",
];

impl HebrewMonth {
    /// Month number in civil-anchored order (Nisan = 1 .. Adar II = 13).
    pub const fn number(self) -> u32 {
        match self {
            Self::Nisan => 1,
            Self::Iyar => 2,
            Self::Sivan => 3,
            Self::Tammuz => 4,
            Self::Av => 5,
            Self::Elul => 6,
            Self::Tishrei => 7,
            Self::Heshvan => 8,
            Self::Kislev => 9,
            Self::Tevet => 10,
            Self::Shevat => 11,
            Self::Adar => 12,
            Self::AdarII => 13,
        }
    }

    /// Month for a civil-anchored number, `None` outside 1..=13.
    pub fn from_number(month: u32) -> Option<Self> {
        ALL_HEBREW_MONTHS
            .iter()
            .copied()
            .find(|m| m.number() == month)
    }

    /// Name from [`MONTH_NAMES`].
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.number() as usize]
    }
}

/// Position of a month within its year, Tishrei = 0.
///
/// Adar II sorts before Nisan; the result is only meaningful for months
/// valid in the year being ordered.
pub(crate) fn year_order(month: u32) -> u32 {
    if month >= 7 { month - 7 } else { month + 6 }
}

/// Reject months outside 1..=13, and Adar II in a common year.
pub(crate) fn check_month(year: i32, month: u32) -> Result<(), CalendarError> {
    if month == 0 || month > months_in_year(year) {
        return Err(CalendarError::InvalidMonth { year, month });
    }
    Ok(())
}

/// Number of days in `month` of `year`.
pub fn month_length(year: i32, month: u32) -> Result<u32, CalendarError> {
    check_month(year, month)?;
    let days = match month {
        7 => 30,
        8 => {
            if long_heshvan(year) {
                30
            } else {
                29
            }
        }
        9 => {
            if short_kislev(year) {
                29
            } else {
                30
            }
        }
        10 => 29,
        11 => 30,
        12 => {
            if is_leap_year(year) {
                30
            } else {
                29
            }
        }
        13 => 29,
        1 => 30,
        2 => 29,
        3 => 30,
        4 => 29,
        5 => 30,
        _ => 29,
    };
    Ok(days)
}

/// Display name of `month` in `year`: month 12 reads "Adar I" in leap years.
pub fn month_name(year: i32, month: u32) -> Result<&'static str, CalendarError> {
    check_month(year, month)?;
    if month == 12 && is_leap_year(year) {
        Ok("Adar I")
    } else {
        Ok(MONTH_NAMES[month as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year::days_in_year;

    #[test]
    fn numbers_round_trip() {
        for m in ALL_HEBREW_MONTHS {
            assert_eq!(HebrewMonth::from_number(m.number()), Some(m));
        }
        assert_eq!(HebrewMonth::from_number(0), None);
        assert_eq!(HebrewMonth::from_number(14), None);
    }

    #[test]
    fn names_match_table() {
        assert_eq!(HebrewMonth::Tishrei.name(), "Tishrei");
        assert_eq!(HebrewMonth::AdarII.name(), "Adar II");
        assert_eq!(MONTH_NAMES[0], "Error");
    }

    #[test]
    fn adar_name_depends_on_year() {
        assert_eq!(month_name(5763, 12), Ok("Adar I"));
        assert_eq!(month_name(5764, 12), Ok("Adar"));
        assert!(month_name(5764, 13).is_err());
    }

    #[test]
    fn fixed_lengths() {
        assert_eq!(month_length(5764, 7), Ok(30));
        assert_eq!(month_length(5764, 10), Ok(29));
        assert_eq!(month_length(5764, 1), Ok(30));
        assert_eq!(month_length(5764, 6), Ok(29));
    }

    #[test]
    fn adar_lengths() {
        assert_eq!(month_length(5763, 12), Ok(30));
        assert_eq!(month_length(5763, 13), Ok(29));
        assert_eq!(month_length(5764, 12), Ok(29));
    }

    #[test]
    fn adar_ii_rejected_in_common_year() {
        assert_eq!(
            month_length(5764, 13),
            Err(CalendarError::InvalidMonth {
                year: 5764,
                month: 13
            })
        );
    }

    #[test]
    fn out_of_range_months_rejected() {
        assert!(month_length(5763, 0).is_err());
        assert!(month_length(5763, 14).is_err());
    }

    #[test]
    fn months_sum_to_year_length() {
        for year in 5600..5900 {
            let total: i64 = (1..=months_in_year(year))
                .map(|m| i64::from(month_length(year, m).unwrap()))
                .sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }

    #[test]
    fn year_order_runs_from_tishrei() {
        assert_eq!(year_order(7), 0);
        assert_eq!(year_order(13), 6);
        assert_eq!(year_order(1), 7);
        assert_eq!(year_order(6), 12);
    }
}
