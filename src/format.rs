//! Bengali text rendering for times, dates and full timestamps.

use std::fmt;
use std::str::FromStr;

use crate::consts::{BANGLA_AM, BANGLA_PM, TIME_SEPARATOR};
use crate::convert::{BengaliDate, ConversionError, convert_date};
use crate::numeral::convert_number;
use crate::types::{Hour, Meridian, Minute};
use crate::{GregorianDate, ParseError};

/// A time of day on the 12-hour clock, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianTime {
    hour: Hour,
    minute: Minute,
    meridian: Meridian,
}

impl GregorianTime {
    /// # Errors
    /// Returns `ParseError::InvalidHour` or `ParseError::InvalidMinute` for out-of-range values.
    pub fn new(hour: u8, minute: u8, meridian: Meridian) -> Result<Self, ParseError> {
        Ok(Self {
            hour: Hour::new(hour)?,
            minute: Minute::new(minute)?,
            meridian,
        })
    }

    pub const fn hour(&self) -> Hour {
        self.hour
    }

    pub const fn minute(&self) -> Minute {
        self.minute
    }

    pub const fn meridian(&self) -> Meridian {
        self.meridian
    }

    /// Same as [`convert_time`] on this time's components.
    pub fn to_bangla(&self) -> String {
        convert_time(self.hour, self.minute, self.meridian)
    }
}

impl fmt::Display for GregorianTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{TIME_SEPARATOR}{:02} {}",
            self.hour.get(),
            self.minute.get(),
            self.meridian
        )
    }
}

impl FromStr for GregorianTime {
    type Err = ParseError;

    /// Parses `h:mm AM` or `hh:mm pm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let invalid =
            || ParseError::InvalidFormat(format!("expected hh:mm AM/PM, found {trimmed}"));
        let (clock, meridian) = trimmed.rsplit_once(char::is_whitespace).ok_or_else(invalid)?;
        let (hour, minute) = clock.trim().split_once(TIME_SEPARATOR).ok_or_else(invalid)?;

        let hour = hour
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(hour.to_owned()))?;
        let minute = minute
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(minute.to_owned()))?;

        Self::new(hour, minute, meridian.parse()?)
    }
}

impl serde::Serialize for GregorianTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for GregorianTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A local date and time, as read from a wall clock in Dhaka.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalMoment {
    date: GregorianDate,
    time: GregorianTime,
}

impl LocalMoment {
    pub const fn new(date: GregorianDate, time: GregorianTime) -> Self {
        Self { date, time }
    }

    pub const fn date(&self) -> GregorianDate {
        self.date
    }

    pub const fn time(&self) -> GregorianTime {
        self.time
    }

    /// Bengali weekday name for the Gregorian date.
    pub const fn weekday(&self) -> &'static str {
        self.date.weekday_name()
    }
}

/// Renders `"{পূর্বাহ্ণ|অপরাহ্ণ} {hh}:{mm}"` with two-digit Bengali numerals.
///
/// ```
/// use bangla_date::{Hour, Meridian, Minute, convert_time};
///
/// let text = convert_time(Hour::new(9)?, Minute::new(5)?, Meridian::Am);
/// assert_eq!(text, "পূর্বাহ্ণ ০৯:০৫");
/// # Ok::<(), bangla_date::ParseError>(())
/// ```
pub fn convert_time(hour: Hour, minute: Minute, meridian: Meridian) -> String {
    let marker = match meridian {
        Meridian::Am => BANGLA_AM,
        Meridian::Pm => BANGLA_PM,
    };
    let clock = convert_number(format!(
        "{:02}{TIME_SEPARATOR}{:02}",
        hour.get(),
        minute.get()
    ));
    format!("{marker} {clock}")
}

/// `"{day}ই {month}, {year} বঙ্গাব্দ"`
pub fn format_date(date: &BengaliDate) -> String {
    date.to_string()
}

/// Renders `"{time}, {weekday}, {day}ই {month}, {year} বঙ্গাব্দ"`.
///
/// # Errors
/// Propagates the `ConversionError` from [`convert_date`].
pub fn format_full(moment: &LocalMoment) -> Result<String, ConversionError> {
    let bangla = convert_date(moment.date)?;
    Ok(format!(
        "{}, {}, {}",
        moment.time.to_bangla(),
        moment.weekday(),
        format_date(&bangla)
    ))
}
