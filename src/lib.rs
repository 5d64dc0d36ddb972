//! Gregorian to Bengali calendar (Bongabdo) conversion.
//!
//! Dates are converted with the fixed month-length table counted from
//! Pohela Boishakh (April 14), and rendered with Bengali digits, month names
//! and weekday names.
//!
//! ```
//! use bangla_date::{GregorianDate, convert_to_bangla_calendar};
//!
//! let date: GregorianDate = "2025-04-15".parse().unwrap();
//! assert_eq!(convert_to_bangla_calendar(date).unwrap(), "২ই বৈশাখ, ১৪৩২ বঙ্গাব্দ");
//! ```

mod clock;
mod consts;
mod convert;
mod format;
mod numeral;
mod prelude;
mod types;

pub use clock::{Clock, DHAKA, FixedClock, SystemClock};
pub use consts::*;
pub use convert::{BengaliDate, BengaliMonth, ConversionError, convert_date};
pub use format::{GregorianTime, LocalMoment, convert_time, format_date, format_full};
pub use numeral::{BengaliNumeral, add_ordinal_suffix, convert_number};
pub use types::{Day, Hour, Meridian, Minute, Month, Year};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;
use types::{day_of_year, weekday_from_sunday};

/// A validated day in the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid hour: {} (must be 1-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Invalid meridian: {_0:?} (must be AM or PM)")]
    InvalidMeridian(String),
    #[display(fmt = "Invalid Bengali month index: {_0} (must be 0-11)")]
    InvalidBengaliMonth(u8),
    #[display(fmt = "Invalid Bengali year: {_0} (must be at least 1)")]
    InvalidBengaliYear(u16),
    #[display(fmt = "Invalid Bengali day {day} for month index {month}")]
    InvalidBengaliDay { month: u8, day: u8 },
    #[display(fmt = "Empty input")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl GregorianDate {
    /// Creates a date, checking each component and that the day exists in that month.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// 1-based position of the day within its year.
    pub const fn ordinal(&self) -> u16 {
        day_of_year(self.year(), self.month(), self.day())
    }

    /// Weekday number with 0 for Sunday through 6 for Saturday.
    pub const fn weekday_from_sunday(&self) -> u8 {
        weekday_from_sunday(self.year(), self.month(), self.day())
    }

    /// Bengali name of the weekday.
    pub const fn weekday_name(&self) -> &'static str {
        BANGLA_WEEKDAYS[self.weekday_from_sunday() as usize]
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        Self::new(
            Self::parse_u16(year)?,
            Self::parse_u8(month)?,
            Self::parse_u8(day)?,
        )
    }
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Full Bengali date and time for the current moment in Asia/Dhaka.
///
/// # Errors
/// Returns `ConversionError` when today falls outside the month table
/// (the last days before Pohela Boishakh) or the clock is out of range.
pub fn get_bangla_date() -> Result<String, ConversionError> {
    get_bangla_date_with(&SystemClock)
}

/// Like [`get_bangla_date`], reading the time from `clock`.
///
/// ```
/// use bangla_date::{DHAKA, FixedClock, get_bangla_date_with};
/// use chrono::TimeZone;
///
/// let clock = FixedClock::new(DHAKA.with_ymd_and_hms(2025, 4, 14, 21, 5, 0).unwrap());
/// assert_eq!(
///     get_bangla_date_with(&clock).unwrap(),
///     "অপরাহ্ণ ০৯:০৫, সোমবার, ১ই বৈশাখ, ১৪৩২ বঙ্গাব্দ"
/// );
/// ```
///
/// # Errors
/// See [`get_bangla_date`].
pub fn get_bangla_date_with<C: Clock + ?Sized>(clock: &C) -> Result<String, ConversionError> {
    let now = clock.now();
    tracing::debug!(%now, "formatting current Bengali date");
    let moment = LocalMoment::try_from(now)?;
    format_full(&moment)
}

/// Converts a Gregorian date to `"{day}ই {month}, {year} বঙ্গাব্দ"`.
///
/// # Errors
/// Returns `ConversionError` if the date cannot be placed in a Bengali month.
pub fn convert_to_bangla_calendar(date: GregorianDate) -> Result<String, ConversionError> {
    convert_date(date).map(|bangla| format_date(&bangla))
}

/// Renders a 12-hour clock time as `"{meridian} {hh}:{mm}"` in Bengali.
///
/// # Errors
/// Returns `ParseError::InvalidHour` or `ParseError::InvalidMinute` for out-of-range values.
pub fn convert_to_bangla_time(
    hour: u8,
    minute: u8,
    meridian: Meridian,
) -> Result<String, ParseError> {
    Ok(convert_time(Hour::new(hour)?, Minute::new(minute)?, meridian))
}

/// Replaces ASCII digits in the rendered `value` with Bengali digits.
pub fn convert_to_bangla_number<T: fmt::Display>(value: T) -> String {
    convert_number(value).into()
}
