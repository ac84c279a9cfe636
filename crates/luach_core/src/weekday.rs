//! Day of week of a linear day count, with the Hebrew weekday names.

use crate::LinearDay;

/// Day of the week. Index 0 is Sunday (Yom Rishon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Rishon,
    Sheni,
    Shlishi,
    Revii,
    Chamishi,
    Shishi,
    Shabbat,
}

/// All weekdays, Sunday first.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Rishon,
    Weekday::Sheni,
    Weekday::Shlishi,
    Weekday::Revii,
    Weekday::Chamishi,
    Weekday::Shishi,
    Weekday::Shabbat,
];

/// Weekday names, Sunday first.
pub static WEEKDAY_NAMES: [&str; 7] = [
    "Rishon", "Sheni", "Shlishi", "Revi'i", "Chamishi", "Shishi", "Shabbat",
];

impl Weekday {
    /// 0-based index (Rishon = 0 .. Shabbat = 6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Rishon => 0,
            Self::Sheni => 1,
            Self::Shlishi => 2,
            Self::Revii => 3,
            Self::Chamishi => 4,
            Self::Shishi => 5,
            Self::Shabbat => 6,
        }
    }

    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.index() as usize]
    }
}

/// Weekday of a linear day. 1900-01-01 (day 0) was a Monday.
pub fn weekday(days: LinearDay) -> Weekday {
    ALL_WEEKDAYS[((days.rem_euclid(7) + 1) % 7) as usize]
}
