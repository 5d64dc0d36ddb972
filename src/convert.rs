use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ANCHOR_DAY, ANCHOR_MONTH, BANGLA_ERA, BANGLA_MONTH_LENGTHS, BANGLA_MONTHS, ERA_OFFSET,
    ERA_OFFSET_BEFORE_ANCHOR,
};
use crate::numeral::{add_ordinal_suffix, convert_number};
use crate::types::{day_of_year, days_in_year};
use crate::{GregorianDate, ParseError};

/// Number of days covered by [`BANGLA_MONTH_LENGTHS`].
const MONTH_TABLE_DAYS: i64 = {
    let mut total = 0;
    let mut i = 0;
    while i < BANGLA_MONTH_LENGTHS.len() {
        total += BANGLA_MONTH_LENGTHS[i] as i64;
        i += 1;
    }
    total
};

/// Error type for Gregorian to Bengali conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The Gregorian input was malformed or out of range.
    #[error(transparent)]
    InvalidDate(#[from] ParseError),

    /// The date lies past the last day of the month table.
    #[error(
        "{date} is {days_elapsed} days after Pohela Boishakh, past the {}-day month table",
        MONTH_TABLE_DAYS
    )]
    Overflow { date: GregorianDate, days_elapsed: i64 },

    /// The date precedes Bengali year 1.
    #[error("{date} is before the first year of the Bengali era")]
    BeforeEpoch { date: GregorianDate },

    /// The clock produced an instant this crate cannot represent.
    #[error("Clock reading out of range: {0}")]
    ClockOutOfRange(String),
}

/// Zero-based Bengali month, 0 is Boishakh and 11 is Choitro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BengaliMonth(u8);

impl BengaliMonth {
    /// # Errors
    /// Returns `ParseError::InvalidBengaliMonth` for indices past 11.
    pub fn new(index: u8) -> Result<Self, ParseError> {
        if usize::from(index) >= BANGLA_MONTHS.len() {
            return Err(ParseError::InvalidBengaliMonth(index));
        }
        Ok(Self(index))
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        BANGLA_MONTHS[self.0 as usize]
    }

    /// Days in this month according to the fixed table.
    pub const fn length(self) -> u8 {
        BANGLA_MONTH_LENGTHS[self.0 as usize]
    }
}

impl TryFrom<u8> for BengaliMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BengaliMonth> for u8 {
    fn from(month: BengaliMonth) -> Self {
        month.index()
    }
}

impl fmt::Display for BengaliMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day in the Bengali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "BengaliDateParts")]
pub struct BengaliDate {
    year: u16,
    month: BengaliMonth,
    day: u8,
}

/// Unchecked serde shape of [`BengaliDate`].
#[derive(Deserialize)]
struct BengaliDateParts {
    year: u16,
    month: BengaliMonth,
    day: u8,
}

impl TryFrom<BengaliDateParts> for BengaliDate {
    type Error = ParseError;

    fn try_from(parts: BengaliDateParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month, parts.day)
    }
}

impl BengaliDate {
    /// Creates a Bengali date, checking the day against the fixed month table.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidBengaliYear` for year 0 and
    /// `ParseError::InvalidBengaliDay` for a day outside `1..=month.length()`.
    pub fn new(year: u16, month: BengaliMonth, day: u8) -> Result<Self, ParseError> {
        if year == 0 {
            return Err(ParseError::InvalidBengaliYear(year));
        }
        if !(1..=month.length()).contains(&day) {
            return Err(ParseError::InvalidBengaliDay {
                month: month.index(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> BengaliMonth {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for BengaliDate {
    /// `"{day}ই {month}, {year} বঙ্গাব্দ"` in Bengali digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            add_ordinal_suffix(&convert_number(self.day)),
            self.month,
            convert_number(self.year),
            BANGLA_ERA
        )
    }
}

/// Converts a Gregorian date to the Bengali calendar.
///
/// Days are counted from the most recent April 14. Dates before April 14
/// belong to the Bengali year that began in the previous Gregorian year.
///
/// ```
/// use bangla_date::{GregorianDate, convert_date};
///
/// let date = convert_date(GregorianDate::new(2025, 4, 14)?)?;
/// assert_eq!((date.year(), date.month().index(), date.day()), (1432, 0, 1));
/// # Ok::<(), bangla_date::ConversionError>(())
/// ```
///
/// # Errors
/// - `ConversionError::Overflow` for the final days before the next April 14,
///   which the 363-day month table does not reach.
/// - `ConversionError::BeforeEpoch` for dates before Bengali year 1.
pub fn convert_date(date: GregorianDate) -> Result<BengaliDate, ConversionError> {
    let year = date.year();
    let before_anchor = (date.month(), date.day()) < (ANCHOR_MONTH, ANCHOR_DAY);
    let offset = if before_anchor {
        ERA_OFFSET_BEFORE_ANCHOR
    } else {
        ERA_OFFSET
    };

    let bangla_year = year
        .checked_sub(offset)
        .filter(|&y| y > 0)
        .ok_or(ConversionError::BeforeEpoch { date })?;

    let days_elapsed = days_since_anchor(date, before_anchor);
    let (month, day) = locate_in_month_table(days_elapsed)
        .ok_or(ConversionError::Overflow { date, days_elapsed })?;

    tracing::trace!(
        %date,
        bangla_year,
        days_elapsed,
        month = month.index(),
        day,
        "converted date"
    );
    Ok(BengaliDate {
        year: bangla_year,
        month,
        day,
    })
}

/// Whole days from the governing April 14 up to `date`.
fn days_since_anchor(date: GregorianDate, before_anchor: bool) -> i64 {
    let year = date.year();
    let ordinal = i64::from(date.ordinal());
    if before_anchor {
        let previous = year - 1;
        let anchor = day_of_year(previous, ANCHOR_MONTH, ANCHOR_DAY);
        i64::from(days_in_year(previous) - anchor) + ordinal
    } else {
        ordinal - i64::from(day_of_year(year, ANCHOR_MONTH, ANCHOR_DAY))
    }
}

/// Walks the month table; `None` once the table is exhausted.
fn locate_in_month_table(days_elapsed: i64) -> Option<(BengaliMonth, u8)> {
    let mut remaining = days_elapsed;
    for (index, &length) in BANGLA_MONTH_LENGTHS.iter().enumerate() {
        let length = i64::from(length);
        if remaining < length {
            let month = u8::try_from(index).ok().and_then(|i| BengaliMonth::new(i).ok())?;
            let day = u8::try_from(remaining + 1).ok()?;
            return Some((month, day));
        }
        remaining -= length;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::days_in_month;

    fn date_of(s: &str) -> GregorianDate {
        s.parse().unwrap()
    }

    fn bangla(s: &str) -> BengaliDate {
        convert_date(date_of(s)).unwrap()
    }

    fn triple(date: BengaliDate) -> (u16, u8, u8) {
        (date.year(), date.month().index(), date.day())
    }

    #[test]
    fn test_month_table_days() {
        assert_eq!(MONTH_TABLE_DAYS, 363);
    }

    #[test]
    fn test_anchor_is_first_of_boishakh() {
        let date = bangla("2025-04-14");
        assert_eq!(triple(date), (1432, 0, 1));
        assert_eq!(date.month().name(), "বৈশাখ");
        assert_eq!(convert_number(date.year()).as_str(), "১৪৩২");
    }

    #[test]
    fn test_day_after_anchor() {
        let date = bangla("2025-04-15");
        assert_eq!(triple(date), (1432, 0, 2));
        assert_eq!(date.month().name(), "বৈশাখ");
    }

    #[test]
    fn test_month_boundaries() {
        struct TestCase {
            gregorian: &'static str,
            expected: (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                gregorian: "2025-05-14",
                expected: (1432, 0, 31),
                description: "last day of Boishakh",
            },
            TestCase {
                gregorian: "2025-05-15",
                expected: (1432, 1, 1),
                description: "first day of Joishtho",
            },
            TestCase {
                gregorian: "2025-12-31",
                expected: (1432, 8, 18),
                description: "Gregorian year end inside Poush",
            },
            TestCase {
                gregorian: "2025-01-01",
                expected: (1431, 8, 19),
                description: "Gregorian year start wraps into previous Bengali year",
            },
            TestCase {
                gregorian: "2025-04-11",
                expected: (1431, 11, 30),
                description: "last day the month table reaches",
            },
            TestCase {
                gregorian: "2024-04-14",
                expected: (1431, 0, 1),
                description: "anchor in a leap year",
            },
        ];

        for case in &cases {
            assert_eq!(
                triple(bangla(case.gregorian)),
                case.expected,
                "{} ({})",
                case.gregorian,
                case.description
            );
        }
    }

    #[test]
    fn test_day_before_anchor_overflows() {
        let date: GregorianDate = "2025-04-13".parse().unwrap();
        assert_eq!(
            convert_date(date),
            Err(ConversionError::Overflow {
                date,
                days_elapsed: 364
            })
        );
    }

    #[test]
    fn test_leap_year_tail_overflows() {
        // 2024-04-14 minus one day, counted from 2023-04-14 across February 29.
        let date: GregorianDate = "2024-04-13".parse().unwrap();
        assert!(matches!(
            convert_date(date),
            Err(ConversionError::Overflow {
                days_elapsed: 365,
                ..
            })
        ));
    }

    #[test]
    fn test_before_epoch() {
        let date = GregorianDate::new(593, 6, 1).unwrap();
        assert_eq!(
            convert_date(date),
            Err(ConversionError::BeforeEpoch { date })
        );
        let date = GregorianDate::new(594, 1, 1).unwrap();
        assert!(matches!(
            convert_date(date),
            Err(ConversionError::BeforeEpoch { .. })
        ));
        assert!(matches!(
            convert_date(GregorianDate::new(1, 1, 1).unwrap()),
            Err(ConversionError::BeforeEpoch { .. })
        ));
        assert_eq!(triple(bangla("0594-04-14")), (1, 0, 1));
        assert_eq!(triple(bangla("0595-01-01")).0, 1);
    }

    #[test]
    fn test_every_convertible_day_is_in_range() {
        let cases = [
            (2024, "leap year"),
            (2025, "non-leap year after a leap year"),
            (1900, "century year, not leap"),
            (1901, "year after a non-leap century"),
            (2000, "century year divisible by 400"),
            (2001, "year after a leap century"),
            (2100, "century year, not leap"),
        ];

        for (year, description) in cases {
            let mut converted = 0;
            let mut overflowed = 0;
            for month in 1..=12u8 {
                for day in 1..=days_in_month(year, month) {
                    let date = GregorianDate::new(year, month, day).unwrap();
                    match convert_date(date) {
                        Ok(bangla) => {
                            assert!(bangla.month().index() <= 11, "{date}");
                            let month_days = 1..=bangla.month().length();
                            assert!(month_days.contains(&bangla.day()), "{date}");
                            converted += 1;
                        }
                        Err(err) => {
                            assert!(
                                matches!(err, ConversionError::Overflow { .. }),
                                "{date}: {err}"
                            );
                            overflowed += 1;
                        }
                    }
                }
            }
            // Every date maps to 0..days_in_year(year) days past its anchor,
            // so exactly the 363 table days convert.
            assert_eq!(converted, 363, "{year} ({description})");
            assert_eq!(
                overflowed,
                days_in_year(year) - 363,
                "{year} ({description})"
            );
        }
    }

    #[test]
    fn test_bengali_date_new() {
        let poush = BengaliMonth::new(8).unwrap();
        let date = BengaliDate::new(1432, poush, 29).unwrap();
        assert_eq!(triple(date), (1432, 8, 29));
        assert!(matches!(
            BengaliDate::new(0, poush, 1),
            Err(ParseError::InvalidBengaliYear(0))
        ));
        assert!(matches!(
            BengaliDate::new(1432, poush, 0),
            Err(ParseError::InvalidBengaliDay { month: 8, day: 0 })
        ));
        assert!(matches!(
            BengaliDate::new(1432, poush, 30),
            Err(ParseError::InvalidBengaliDay { month: 8, day: 30 })
        ));
        assert_eq!(
            convert_date(date_of("2025-12-31")).unwrap(),
            BengaliDate::new(1432, poush, 18).unwrap()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(bangla("2025-04-14").to_string(), "১ই বৈশাখ, ১৪৩২ বঙ্গাব্দ");
        assert_eq!(bangla("2025-05-01").to_string(), "১৮ই বৈশাখ, ১৪৩২ বঙ্গাব্দ");
    }

    #[test]
    fn test_bengali_month() {
        assert!(BengaliMonth::new(11).is_ok());
        assert!(matches!(
            BengaliMonth::new(12),
            Err(ParseError::InvalidBengaliMonth(12))
        ));
        assert_eq!(BengaliMonth::new(11).unwrap().name(), "চৈত্র");
        assert_eq!(BengaliMonth::new(8).unwrap().length(), 29);
    }

    #[test]
    fn test_serde() {
        let date = bangla("2025-04-15");
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":1432,"month":0,"day":2}"#);
        let parsed: BengaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
        assert!(
            serde_json::from_str::<BengaliDate>(r#"{"year":1432,"month":12,"day":2}"#).is_err()
        );

        for (json, description) in [
            (r#"{"year":0,"month":8,"day":5}"#, "year zero"),
            (r#"{"year":1432,"month":8,"day":0}"#, "day zero"),
            (r#"{"year":1432,"month":8,"day":30}"#, "past the 29 days of Poush"),
            (r#"{"year":1432,"month":8,"day":200}"#, "far past month end"),
        ] {
            assert!(
                serde_json::from_str::<BengaliDate>(json).is_err(),
                "{json} should be rejected ({description})"
            );
        }
        let last_of_poush: BengaliDate =
            serde_json::from_str(r#"{"year":1432,"month":8,"day":29}"#).unwrap();
        assert_eq!(triple(last_of_poush), (1432, 8, 29));
    }

    #[test]
    fn test_overflow_message() {
        let date: GregorianDate = "2025-04-12".parse().unwrap();
        let err = convert_date(date).unwrap_err();
        assert_eq!(
            err.to_string(),
            "2025-04-12 is 363 days after Pohela Boishakh, past the 363-day month table"
        );
    }
}
