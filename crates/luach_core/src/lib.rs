//! Hebrew calendar arithmetic and Gregorian/Hebrew date conversion.
//!
//! This crate provides:
//! - Metonic-cycle leap years and month counts
//! - Molad of Tishrei and the Rosh Hashanah postponement rules
//! - Year lengths, Heshvan/Kislev variability and month lengths
//! - Hebrew date ↔ linear day count (days since 1900-01-01)
//! - Gregorian date ↔ linear day count
//! - Weekday and month name tables, Hanukkah candle counts
//!
//! Everything is pure integer arithmetic on `Copy` values.
//!
//! ```
//! use luach_core::{GregorianDate, HebrewDate};
//!
//! let days = GregorianDate::new(2003, 9, 27).to_linear().unwrap();
//! assert_eq!(HebrewDate::from_linear(days).unwrap(), HebrewDate::new(5764, 7, 1));
//! ```

pub mod error;
pub mod gregorian;
pub mod hanukkah;
pub mod hebrew;
pub mod leap;
pub mod molad;
pub mod month;
pub mod postponement;
pub mod weekday;
pub mod year;

/// Days since 1900-01-01 (day 0); negative before the epoch.
pub type LinearDay = i64;

pub use error::CalendarError;
pub use gregorian::GregorianDate;
pub use hanukkah::candles;
pub use hebrew::{HebrewDate, new_year};
pub use leap::{cycle_position, is_leap_year, months_in_year};
pub use molad::{Molad, elapsed_days, elapsed_months, molad_of_tishrei};
pub use month::{ALL_HEBREW_MONTHS, HebrewMonth, MONTH_NAMES, month_length, month_name};
pub use postponement::{Dehiyyah, Postponement};
pub use weekday::{ALL_WEEKDAYS, WEEKDAY_NAMES, Weekday, weekday};
pub use year::{YearLength, days_in_year, long_heshvan, short_kislev, year_length};

/// Hebrew date of a civil date.
pub fn hebrew_from_gregorian(date: GregorianDate) -> Result<HebrewDate, CalendarError> {
    hebrew::from_linear(gregorian::to_linear(date)?)
}

/// Civil date of a Hebrew date.
pub fn gregorian_from_hebrew(date: HebrewDate) -> Result<GregorianDate, CalendarError> {
    gregorian::from_linear(hebrew::to_linear(date)?)
}
