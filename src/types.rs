use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_YEAR,
};
use crate::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A Gregorian year in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// A Gregorian month in the range `1..=MAX_MONTH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day of month, validated against its year and month on construction.
///
/// Serialized as a bare integer; deserializing alone only checks the value is
/// non-zero, full validation happens in [`crate::GregorianDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it exists in the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NonZeroU8::new(value).map(Self).ok_or(ParseError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

/// An hour on the 12-hour clock, `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(NonZeroU8);

impl Hour {
    /// # Errors
    /// Returns `ParseError::InvalidHour` if the value is 0 or > `MAX_HOUR`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidHour(value))?;
        if value > MAX_HOUR {
            return Err(ParseError::InvalidHour(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Hour {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.get()
    }
}

/// A minute within the hour, `0..=59`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Minute(u8);

impl Minute {
    /// # Errors
    /// Returns `ParseError::InvalidMinute` if the value is > `MAX_MINUTE`.
    pub const fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_MINUTE {
            return Err(ParseError::InvalidMinute(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Minute {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Minute> for u8 {
    fn from(minute: Minute) -> Self {
        minute.get()
    }
}

/// Half of the day on a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridian {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

impl Meridian {
    pub const fn from_is_pm(is_pm: bool) -> Self {
        if is_pm { Self::Pm } else { Self::Am }
    }
}

impl FromStr for Meridian {
    type Err = ParseError;

    /// Accepts `AM`/`PM` in any letter case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("AM") {
            Ok(Self::Am)
        } else if trimmed.eq_ignore_ascii_case("PM") {
            Ok(Self::Pm)
        } else {
            Err(ParseError::InvalidMeridian(trimmed.to_owned()))
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// 1-based ordinal of a date within its year.
pub const fn day_of_year(year: u16, month: u8, day: u8) -> u16 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let mut ordinal = day as u16;
    let mut m = 1;
    while m < month {
        ordinal += days_in_month(year, m) as u16;
        m += 1;
    }
    ordinal
}

/// Day of week for a Gregorian date, 0 = Sunday (Sakamoto's method).
pub const fn weekday_from_sunday(year: u16, month: u8, day: u8) -> u8 {
    const MONTH_OFFSETS: [u16; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let y = if month < 3 { year - 1 } else { year };
    let sum = y + y / 4 - y / 100 + y / 400 + MONTH_OFFSETS[(month - 1) as usize] + day as u16;
    (sum % 7) as u8
}
