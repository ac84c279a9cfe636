//! Rosh Hashanah postponement rules (dehiyyot).
//!
//! Given the molad of Tishrei, decide on which day the year begins:
//!
//! 1. Molad zaken: molad at or after noon.
//! 2. GaTaRaD: molad on Tuesday at or after 9h 204p, in a common year.
//! 3. BeTUTaKPaT: molad on Monday at or after 15h 589p, following a leap year.
//! 4. Lo ADU Rosh: the new year never begins on Sunday, Wednesday or Friday.
//!
//! Rules 1–3 are tested against the molad day and at most one of them
//! applies (one day). Rule 4 is then tested against the resulting day.

use tracing::trace;

use crate::leap::is_leap;
use crate::molad::Molad;

/// Noon, in parts from the start of the day.
pub const MOLAD_ZAKEN_PARTS: i64 = 19440;
/// 9 hours 204 parts.
pub const GATARAD_PARTS: i64 = 9924;
/// 15 hours 589 parts.
pub const BETUTAKPAT_PARTS: i64 = 16789;

/// Which of the molad-time rules delayed the new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dehiyyah {
    MoladZaken,
    Gatarad,
    Betutakpat,
}

impl Dehiyyah {
    pub fn name(self) -> &'static str {
        match self {
            Self::MoladZaken => "molad zaken",
            Self::Gatarad => "GaTaRaD",
            Self::Betutakpat => "BeTUTaKPaT",
        }
    }
}

/// Outcome of applying the dehiyyot to a molad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Postponement {
    /// Day of the molad.
    pub molad_day: i64,
    /// Day of 1 Tishrei after postponement.
    pub day: i64,
    /// Molad-time rule that fired, if any.
    pub rule: Option<Dehiyyah>,
    /// Whether the weekday rule (Lo ADU Rosh) added a day.
    pub lo_adu: bool,
}

impl Postponement {
    /// Total days added to the molad day (0, 1 or 2).
    pub fn delay(&self) -> i64 {
        self.day - self.molad_day
    }
}

fn molad_rule(year: i64, molad: Molad) -> Option<Dehiyyah> {
    let weekday = molad.day.rem_euclid(7);
    if molad.parts >= MOLAD_ZAKEN_PARTS {
        Some(Dehiyyah::MoladZaken)
    } else if weekday == 2 && molad.parts >= GATARAD_PARTS && !is_leap(year) {
        Some(Dehiyyah::Gatarad)
    } else if weekday == 1 && molad.parts >= BETUTAKPAT_PARTS && is_leap(year - 1) {
        Some(Dehiyyah::Betutakpat)
    } else {
        None
    }
}

/// Sunday, Wednesday or Friday (0 = Sunday).
fn is_adu(day: i64) -> bool {
    matches!(day.rem_euclid(7), 0 | 3 | 5)
}

/// Apply the four postponement rules to the molad of Tishrei of `year`.
pub fn resolve(year: i32, molad: Molad) -> Postponement {
    resolve_at(i64::from(year), molad)
}

pub(crate) fn resolve_at(year: i64, molad: Molad) -> Postponement {
    let rule = molad_rule(year, molad);
    let mut day = molad.day;
    if rule.is_some() {
        day += 1;
    }
    let lo_adu = is_adu(day);
    if lo_adu {
        day += 1;
    }

    if day != molad.day {
        trace!(year, molad_day = molad.day, day, ?rule, lo_adu, "rosh hashanah postponed");
    }

    Postponement {
        molad_day: molad.day,
        day,
        rule,
        lo_adu,
    }
}
