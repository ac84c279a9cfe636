//! Hanukkah candle count.
//!
//! Hanukkah begins on 25 Kislev and lasts eight days, running into Tevet.

use crate::LinearDay;
use crate::error::CalendarError;
use crate::hebrew::{HebrewDate, from_linear, to_linear};

const KISLEV: u32 = 9;
const FIRST_DAY: u32 = 25;
const DAYS: i64 = 8;

/// Linear day of 25 Kislev of `year`.
pub fn first_day(year: i32) -> Result<LinearDay, CalendarError> {
    to_linear(HebrewDate::new(year, KISLEV, FIRST_DAY))
}

/// Number of candles lit on linear day `days`: 1..=8 during Hanukkah,
/// otherwise 0.
pub fn candles(days: LinearDay) -> Result<u32, CalendarError> {
    let date = from_linear(days)?;
    let offset = days - first_day(date.year)?;
    if (0..DAYS).contains(&offset) {
        Ok(offset as u32 + 1)
    } else {
        Ok(0)
    }
}
