use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Canonical form of a calendar day, stored as `YYYYMMDD`.
///
/// Two dates denote the same calendar day iff their keys are equal, and the
/// derived ordering is date order. A key can only be obtained from a valid
/// `NaiveDate` or by parsing a valid 8-digit date string, so every key maps
/// back to a real calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(u32);

impl DayKey {
    /// Keys only exist for years 0..=9999; anything else cannot round-trip
    /// through the 8-digit form.
    pub fn from_date(date: NaiveDate) -> Self {
        debug_assert!(
            (0..10_000).contains(&date.year()),
            "day key years are limited to 0..=9999, got {}",
            date.year()
        );
        DayKey(date.year() as u32 * 10_000 + date.month() * 100 + date.day())
    }

    pub fn year(&self) -> i32 {
        (self.0 / 10_000) as i32
    }

    pub fn month(&self) -> u32 {
        self.0 / 100 % 100
    }

    pub fn day(&self) -> u32 {
        self.0 % 100
    }

    pub fn date(&self) -> NaiveDate {
        // valid by construction
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day()).unwrap()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey::from_date(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for DayKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::new(
                ErrorKind::DateParse,
                &format!("expected 8-digit day key, got '{}'", s),
            ));
        }

        // all-digit check above makes these infallible
        let year: i32 = s[..4].parse().unwrap();
        let month: u32 = s[4..6].parse().unwrap();
        let day: u32 = s[6..8].parse().unwrap();

        NaiveDate::from_ymd_opt(year, month, day)
            .map(DayKey::from_date)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::DateParse,
                    &format!("'{}' is not a calendar day", s),
                )
            })
    }
}
