//! Molad (mean new moon) of Tishrei and elapsed-day reckoning.
//!
//! The mean lunar month is 29 days 12 hours 793 parts, with 1080 parts
//! to the hour. Months are counted from the calendar epoch; the molad of
//! the epoch falls 5 hours 204 parts into day 1.
//!
//! All arithmetic uses Euclidean division so every function is total over
//! `i32` years. For years ≥ 1 it matches truncating integer division.

use crate::leap::CYCLE_YEARS;
use crate::postponement;

/// Parts (halakim) per hour.
pub const PARTS_PER_HOUR: i64 = 1080;
/// Parts per day.
pub const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;
/// Months in a 19-year cycle (12 × 12 + 7 × 13).
pub const MONTHS_PER_CYCLE: i64 = 235;
/// Parts by which the mean month exceeds 29 days 12 hours.
pub const MONTH_EXCESS_PARTS: i64 = 793;

const EPOCH_HOURS: i64 = 5;
const EPOCH_PARTS: i64 = 204;

/// Molad of Tishrei: a day of the calendar's internal count plus the
/// time into that day, in parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Molad {
    pub day: i64,
    /// Time of day in parts, `0..PARTS_PER_DAY`.
    pub parts: i64,
}

impl Molad {
    /// Hours component of the time of day (0..24).
    pub fn hours(self) -> i64 {
        self.parts / PARTS_PER_HOUR
    }

    /// Remaining parts after whole hours (0..1080).
    pub fn hour_parts(self) -> i64 {
        self.parts % PARTS_PER_HOUR
    }

    /// Day of week of the molad day, 0 = Sunday.
    pub fn weekday_index(self) -> i64 {
        self.day.rem_euclid(7)
    }
}

/// Months elapsed from the epoch to the molad of Tishrei of `year`.
///
/// 235 months per full cycle, then 12 per year plus the leap months
/// already passed in the current cycle.
pub fn elapsed_months(year: i32) -> i64 {
    months_before(i64::from(year))
}

pub(crate) fn months_before(year: i64) -> i64 {
    let y = year - 1;
    let cycles = y.div_euclid(i64::from(CYCLE_YEARS));
    let position = y.rem_euclid(i64::from(CYCLE_YEARS));
    cycles * MONTHS_PER_CYCLE + position * 12 + (position * 7 + 1) / 19
}

/// Molad of Tishrei for `year`, before any postponement.
///
/// Months are split at 1080 so the products stay small: the 793-part excess
/// of `m mod 1080` months is carried in parts, the rest directly in hours.
pub fn molad_of_tishrei(year: i32) -> Molad {
    molad_at(i64::from(year))
}

pub(crate) fn molad_at(year: i64) -> Molad {
    let months = months_before(year);
    let parts_elapsed =
        months.rem_euclid(PARTS_PER_HOUR) * MONTH_EXCESS_PARTS + EPOCH_PARTS;
    let hours_elapsed = EPOCH_HOURS
        + months * 12
        + months.div_euclid(PARTS_PER_HOUR) * MONTH_EXCESS_PARTS
        + parts_elapsed / PARTS_PER_HOUR;
    let parts = hours_elapsed.rem_euclid(24) * PARTS_PER_HOUR + parts_elapsed % PARTS_PER_HOUR;
    let day = 1 + months * 29 + hours_elapsed.div_euclid(24);
    Molad { day, parts }
}

/// Day of 1 Tishrei of `year` in the calendar's internal count, after
/// the postponement rules.
pub fn elapsed_days(year: i32) -> i64 {
    tishrei_day(i64::from(year))
}

/// [`elapsed_days`] over `i64` years, so `year + 1` is defined for every `i32` year.
pub(crate) fn tishrei_day(year: i64) -> i64 {
    postponement::resolve_at(year, molad_at(year)).day
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_months_known_values() {
        assert_eq!(elapsed_months(5763), 71266);
        assert_eq!(elapsed_months(5764), 71279);
    }

    #[test]
    fn elapsed_months_epoch() {
        assert_eq!(elapsed_months(1), 0);
        assert_eq!(elapsed_months(20), MONTHS_PER_CYCLE);
    }

    #[test]
    fn elapsed_days_known_values() {
        assert_eq!(elapsed_days(5763), 2_104_528);
        assert_eq!(elapsed_days(5764), 2_104_913);
    }

    #[test]
    fn epoch_molad() {
        // Molad BaHaRaD: Monday, 5 hours 204 parts.
        let m = molad_of_tishrei(1);
        assert_eq!(m.day, 1);
        assert_eq!(m.weekday_index(), 1);
        assert_eq!(m.hours(), 5);
        assert_eq!(m.hour_parts(), 204);
    }

    #[test]
    fn molad_parts_in_range() {
        for year in 1..8000 {
            let m = molad_of_tishrei(year);
            assert!((0..PARTS_PER_DAY).contains(&m.parts), "year {year}");
        }
    }

    #[test]
    fn elapsed_days_strictly_increasing() {
        let mut prev = elapsed_days(1);
        for year in 2..8000 {
            let d = elapsed_days(year);
            assert!(d > prev, "year {year}");
            prev = d;
        }
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert!(elapsed_days(i32::MIN) < elapsed_days(i32::MIN + 1));
        assert!(elapsed_days(i32::MAX) < tishrei_day(i64::from(i32::MAX) + 1));
        let m = molad_of_tishrei(i32::MIN);
        assert!((0..PARTS_PER_DAY).contains(&m.parts));
    }
}
